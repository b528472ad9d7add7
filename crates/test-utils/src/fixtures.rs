//! Reference IBM to IEEE conversion vectors.
//!
//! Values were worked out by hand from the IBM short layout:
//! `(-1)^s * (mantissa / 2^24) * 16^(exponent - 64)`.

/// IBM words paired with their exact decoded values.
pub const REFERENCE_VECTORS: &[(u32, f64)] = &[
    (0x0000_0000, 0.0),
    (0x4110_0000, 1.0),
    (0xC110_0000, -1.0),
    (0x4120_0000, 2.0),
    (0x4080_0000, 0.5),
    (0x4010_0000, 0.0625),
    (0x4264_0000, 100.0),
    (0xC270_0000, -112.0),
    (0xC276_A000, -118.625),
    (0x4311_1000, 273.0),
    (0x4611_1111, 1_118_481.0),
    (0x3F10_0000, 0.003_906_25),
    (0x60FF_FFFF, f32::MAX as f64),
    (0x2140_0000, f32::MIN_POSITIVE as f64),
];

/// Words whose leading mantissa hex digit is zero, with exact decoded values.
pub const UNNORMALIZED_VECTORS: &[(u32, f64)] = &[
    // 0x01/256 * 16^2
    (0x4201_0000, 1.0),
    // 0x0F/256 * 16^2
    (0xC20F_0000, -15.0),
    // 0x000001/2^24 * 16^6
    (0x4600_0001, 1.0),
    // 0x0FFFFF * 2^108: exponent 0x61 overflows unless renormalized
    (0x610F_FFFF, 3.402_820_424_023_848e38),
];

/// Words that overflow binary32.
pub const OVERFLOW_WORDS: &[u32] = &[0x6110_0000, 0x7FFF_FFFF, 0xFFFF_FFFF, 0x7F10_0000, 0xE1FF_FFFF];
