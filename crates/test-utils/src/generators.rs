//! Test data generators for IBM words and weather-like fields.
//!
//! All generators are deterministic for a given seed.

use crate::encode::encode_ibm_field;

/// Creates `count` arbitrary 32-bit words.
///
/// Every bit pattern is legal decoder input, so this covers zeros,
/// unnormalized mantissas and overflowing exponents alike.
pub fn create_random_words(count: usize, seed: u32) -> Vec<u32> {
    (0..count as u32)
        .map(|i| simple_hash(i, i.rotate_left(16), seed))
        .collect()
}

/// Creates `count` normalized IBM words that decode inside the binary32 normal range.
///
/// Exponents are drawn from 0x22..=0x5F and the leading hex digit is non-zero.
pub fn create_normalized_words(count: usize, seed: u32) -> Vec<u32> {
    (0..count as u32)
        .map(|i| {
            let hash = simple_hash(i, 0x5EED, seed);
            let sign = hash & 0x8000_0000;
            let exponent = 0x22 + (hash >> 24 & 0x7F) % (0x5F - 0x22 + 1);
            let mantissa = (hash & 0x00FF_FFFF) | 0x0010_0000;
            sign | exponent << 24 | mantissa
        })
        .collect()
}

/// Creates a test grid with temperature-like values in Kelvin.
///
/// The values range from approximately 250K (-23C) to 310K (37C),
/// creating a gradient pattern similar to real weather data.
pub fn create_temperature_grid(width: usize, height: usize) -> Vec<f32> {
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            let x_factor = col as f32 / width.max(1) as f32;
            let y_factor = row as f32 / height.max(1) as f32;
            let temp = 250.0 + (x_factor * 30.0) + (y_factor * 30.0);
            data.push(temp);
        }
    }
    data
}

/// Creates a temperature field stored as IBM words, as a legacy archive would hold it.
pub fn create_ibm_temperature_field(width: usize, height: usize) -> Vec<u32> {
    encode_ibm_field(&create_temperature_grid(width, height))
}

fn simple_hash(x: u32, y: u32, seed: u32) -> u32 {
    let mut h = seed;
    h = h.wrapping_mul(31).wrapping_add(x);
    h = h.wrapping_mul(31).wrapping_add(y);
    h ^= h >> 16;
    h = h.wrapping_mul(0x85ebca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2ae35);
    h ^= h >> 16;
    h
}
