//! IEEE-754 layout constants and the `IeeeFloat` trait.

use num_traits::Float;

/// Floating-point trait for the decomposition primitives and special functions.
///
/// Implemented for `f64` and `f32`. Carries the binary interchange layout so the
/// bit-level algorithms can be written once for both widths.
pub trait IeeeFloat: Float + core::fmt::Debug + 'static {
    /// Number of explicit fraction bits (52 for binary64, 23 for binary32).
    const MANT_BITS: u32;
    /// Number of biased exponent bits.
    const EXP_BITS: u32;
    /// Exponent bias.
    const EXP_BIAS: i64;
    /// Smallest positive normal number.
    const MIN_NORMAL: Self;

    /// Raw bit pattern, zero-extended to 64 bits.
    fn to_raw(self) -> u64;

    /// Inverse of [`to_raw`](IeeeFloat::to_raw); only the low
    /// `1 + EXP_BITS + MANT_BITS` bits are used.
    fn from_raw(bits: u64) -> Self;

    /// Infallible conversion from f64.
    ///
    /// For f64 this is the identity; for f32 it rounds via `as f32`, saturating
    /// to ±∞ when the value is out of range.
    fn from_f64(x: f64) -> Self;

    /// Lossless widening to f64.
    fn as_f64(self) -> f64;

    /// Sign bit mask.
    #[inline]
    fn sign_mask() -> u64 {
        1 << (Self::EXP_BITS + Self::MANT_BITS)
    }

    /// Biased exponent mask, unshifted (low `EXP_BITS` bits set).
    #[inline]
    fn exp_mask() -> u64 {
        (1 << Self::EXP_BITS) - 1
    }

    /// Fraction field mask.
    #[inline]
    fn frac_mask() -> u64 {
        (1 << Self::MANT_BITS) - 1
    }

    /// Biased exponent field of `self`.
    #[inline]
    fn biased_exp(self) -> i64 {
        ((self.to_raw() >> Self::MANT_BITS) & Self::exp_mask()) as i64
    }

    /// Exact power of two `2^e` for `e` in the normal exponent range.
    #[inline]
    fn exp2i(e: i64) -> Self {
        Self::from_raw(((e + Self::EXP_BIAS) as u64) << Self::MANT_BITS)
    }
}

impl IeeeFloat for f64 {
    const MANT_BITS: u32 = 52;
    const EXP_BITS: u32 = 11;
    const EXP_BIAS: i64 = 1023;
    const MIN_NORMAL: f64 = 2.2250738585072014e-308;

    #[inline]
    fn to_raw(self) -> u64 {
        self.to_bits()
    }
    #[inline]
    fn from_raw(bits: u64) -> f64 {
        f64::from_bits(bits)
    }
    #[inline]
    fn from_f64(x: f64) -> f64 {
        x
    }
    #[inline]
    fn as_f64(self) -> f64 {
        self
    }
}

impl IeeeFloat for f32 {
    const MANT_BITS: u32 = 23;
    const EXP_BITS: u32 = 8;
    const EXP_BIAS: i64 = 127;
    const MIN_NORMAL: f32 = 1.1754944e-38;

    #[inline]
    fn to_raw(self) -> u64 {
        u64::from(self.to_bits())
    }
    #[inline]
    fn from_raw(bits: u64) -> f32 {
        f32::from_bits(bits as u32)
    }
    #[inline]
    fn from_f64(x: f64) -> f32 {
        x as f32
    }
    #[inline]
    fn as_f64(self) -> f64 {
        f64::from(self)
    }
}
