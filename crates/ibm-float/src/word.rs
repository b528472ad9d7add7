//! Value types for the two floating point layouts.
//!
//! ```text
//!                IBM short            IEEE binary32
//!  Sign          bit 31               bit 31
//!  Exponent      bits 24-30 (7)       bits 23-30 (8)
//!  Mantissa      bits 0-23  (24)      bits 0-22  (23, hidden leading 1)
//! ```
//!
//! IBM words are base 16 with an exponent bias of 64 and a fraction in `[0, 1)`.
//! The leading hex digit of the fraction is not guaranteed to be non-zero.

pub(crate) const SIGN_MASK: u32 = 0x8000_0000;
pub(crate) const IBM_EXPONENT_MASK: u32 = 0x7F;
pub(crate) const IBM_MANTISSA_MASK: u32 = 0x00FF_FFFF;
const IBM_LEADING_DIGIT_MASK: u32 = 0x00F0_0000;

pub(crate) const IEEE_MANTISSA_MASK: u32 = 0x007F_FFFF;
const IEEE_EXPONENT_MASK: u32 = 0x7F80_0000;

/// A raw 32-bit IBM hexadecimal floating point word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IbmFloat32(u32);

impl IbmFloat32 {
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Build a word from four bytes in archive (big-endian) order.
    pub const fn from_be_bytes(bytes: [u8; 4]) -> Self {
        Self(u32::from_be_bytes(bytes))
    }

    pub const fn to_bits(self) -> u32 {
        self.0
    }

    /// Sign bit, 0 or 1.
    pub const fn sign(self) -> u32 {
        self.0 >> 31 & 0x01
    }

    /// Base-16 exponent field, biased by 64.
    pub const fn exponent(self) -> u32 {
        self.0 >> 24 & IBM_EXPONENT_MASK
    }

    /// 24-bit fraction field; the value of the fraction is `mantissa / 2^24`.
    pub const fn mantissa(self) -> u32 {
        self.0 & IBM_MANTISSA_MASK
    }

    /// True when the mantissa is zero, which IBM treats as zero whatever the exponent.
    pub const fn is_zero(self) -> bool {
        self.mantissa() == 0
    }

    /// True when the leading hex digit of the mantissa is non-zero.
    pub const fn is_normalized(self) -> bool {
        self.0 & IBM_LEADING_DIGIT_MASK != 0
    }
}

impl From<u32> for IbmFloat32 {
    fn from(bits: u32) -> Self {
        Self(bits)
    }
}

/// A decoded IEEE-754 binary32 bit pattern.
///
/// Values produced by the decoder are always finite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Ieee32Float(u32);

impl Ieee32Float {
    pub(crate) const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn to_bits(self) -> u32 {
        self.0
    }

    pub fn to_f32(self) -> f32 {
        f32::from_bits(self.0)
    }

    /// Widened to binary64, which is exact.
    pub fn to_f64(self) -> f64 {
        f64::from(self.to_f32())
    }

    pub const fn is_subnormal(self) -> bool {
        self.0 & IEEE_EXPONENT_MASK == 0 && self.0 & IEEE_MANTISSA_MASK != 0
    }

    pub const fn is_sign_negative(self) -> bool {
        self.0 & SIGN_MASK != 0
    }
}

impl From<Ieee32Float> for f32 {
    fn from(value: Ieee32Float) -> f32 {
        value.to_f32()
    }
}

impl From<Ieee32Float> for f64 {
    fn from(value: Ieee32Float) -> f64 {
        value.to_f64()
    }
}
