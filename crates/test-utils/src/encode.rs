//! Reference IEEE to IBM short encoder.
//!
//! The decoder crate only converts IBM to IEEE; this inverse exists so tests
//! can build IBM words from known values and check the round trip.

/// Encode a value as a normalized IBM short word.
///
/// The fraction is truncated to 24 bits. Magnitudes below the IBM range
/// become signed zero. Returns `None` for NaN, infinities and magnitudes of
/// 16^63 or more.
///
/// # Example
///
/// ```
/// use test_utils::encode_ibm;
///
/// assert_eq!(encode_ibm(1.0), Some(0x4110_0000));
/// assert_eq!(encode_ibm(-118.625), Some(0xC276_A000));
/// ```
pub fn encode_ibm(value: f64) -> Option<u32> {
    if !value.is_finite() {
        return None;
    }

    let sign = if value.is_sign_negative() { 0x8000_0000 } else { 0 };
    if value == 0.0 {
        return Some(sign);
    }

    // Scale into [1/16, 1); multiplying by powers of 16 is exact
    let mut fraction = value.abs();
    let mut exponent = 64i32;
    while fraction >= 1.0 {
        fraction /= 16.0;
        exponent += 1;
    }
    while fraction < 0.0625 {
        fraction *= 16.0;
        exponent -= 1;
    }

    if exponent > 127 {
        return None;
    }
    if exponent < 0 {
        return Some(sign);
    }

    let mantissa = (fraction * 16_777_216.0) as u32;
    Some(sign | (exponent as u32) << 24 | mantissa)
}

/// Encode a slice of values, panicking on anything out of IBM range.
pub fn encode_ibm_field(values: &[f32]) -> Vec<u32> {
    values
        .iter()
        .map(|&v| {
            encode_ibm(v as f64).unwrap_or_else(|| panic!("value {} is not IBM encodable", v))
        })
        .collect()
}
