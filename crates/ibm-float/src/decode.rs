//! Single-word IBM to IEEE conversion.
//!
//! A normalized IBM short fraction has at most 24 significant bits, which is
//! exactly the precision of binary32, so every value in the binary32 normal
//! range converts without rounding. Only results in the subnormal range lose
//! low bits, and those are truncated.

use crate::error::{DecodeError, DecodeResult};
use crate::word::{IbmFloat32, Ieee32Float, IEEE_MANTISSA_MASK, SIGN_MASK};

/// Highest biased exponent of a finite binary32 value.
const IEEE_MAX_EXPONENT: i32 = 254;

/// Bit 23: the hidden bit position of a binary32 significand.
const HIDDEN_BIT: u32 = 0x0080_0000;

/// Decode one IBM word to binary64.
///
/// The result is the exact binary32 value widened to binary64. Words whose
/// magnitude exceeds the binary32 range yield [`DecodeError::Overflow`].
pub fn decode_one(word: u32) -> DecodeResult<f64> {
    decode_bits(word).map(Ieee32Float::to_f64)
}

/// Decode one IBM word to an IEEE binary32 bit pattern.
pub fn decode_bits(word: u32) -> DecodeResult<Ieee32Float> {
    let ibm = IbmFloat32::from_bits(word);
    let sign = word & SIGN_MASK;

    if ibm.is_zero() {
        return Ok(Ieee32Float::from_bits(sign));
    }

    let (significand, shifts) = renormalize(ibm.mantissa());

    // 16^(e-64) is 2^(4e-256). The fraction 0.1xxx... carries one more factor
    // of 2^-1 once the leading bit becomes the hidden bit, and each shift
    // costs one more.
    let exponent = ((ibm.exponent() as i32) << 2) - 256 + 127 - 1 - shifts as i32;

    if exponent > IEEE_MAX_EXPONENT {
        return Err(DecodeError::Overflow { word, exponent });
    }

    if exponent <= 0 {
        // Below the normal range: the value is significand * 2^(exponent - 1)
        // in units of the smallest subnormal.
        let shift = (1 - exponent) as u32;
        let fraction = significand.checked_shr(shift).unwrap_or(0);
        return Ok(Ieee32Float::from_bits(sign | fraction));
    }

    Ok(Ieee32Float::from_bits(
        sign | (exponent as u32) << 23 | (significand & IEEE_MANTISSA_MASK),
    ))
}

/// Decode one IBM word by direct evaluation, without renormalizing.
///
/// Computes `(1 - 2*sign) * (mantissa / 2^24) * 16^(exponent - 64)` in binary64.
/// Every IBM short value is representable in binary64, so this never fails,
/// but the result may lie outside the binary32 range.
pub fn decode_simple(word: u32) -> f64 {
    let ibm = IbmFloat32::from_bits(word);
    let magnitude = ibm.mantissa() as f64 / (1u32 << 24) as f64
        * 16f64.powi(ibm.exponent() as i32 - 64);

    if ibm.sign() == 1 {
        -magnitude
    } else {
        magnitude
    }
}

/// Shift a non-zero 24-bit mantissa left until bit 23 is set.
///
/// Returns the shifted significand and the number of shifts: 0 to 3 for
/// normalized words, up to 23 when leading hex digits are zero.
fn renormalize(mantissa: u32) -> (u32, u32) {
    debug_assert!(mantissa != 0 && mantissa <= 0x00FF_FFFF);

    let mut significand = mantissa;
    let mut shifts = 0;
    while significand & HIDDEN_BIT == 0 {
        significand <<= 1;
        shifts += 1;
    }
    (significand, shifts)
}
