//! Fraction/exponent splitting and integral/fractional splitting.
//!
//! All routines work directly on the bit pattern, parameterised by the layout
//! constants of [`IeeeFloat`], so binary32 and binary64 share one code path.

use crate::machine::IeeeFloat;
use crate::types::{Frexp, Modf, ILOGB_INF, ILOGB_NAN, ILOGB_ZERO};

/// Scale a subnormal `x` into the normal range.
///
/// Returns `(y, e)` with `x == y * 2^e`; normal inputs come back unchanged with
/// `e == 0`. Callers filter out zero, which has no normal representative.
#[inline]
fn normalize<T: IeeeFloat>(x: T) -> (T, i64) {
    let mant = T::MANT_BITS as i64;
    if x.abs() < T::MIN_NORMAL {
        (x * T::exp2i(mant), -mant)
    } else {
        (x, 0)
    }
}

/// Biased exponent field cleared, everything else kept.
#[inline]
fn clear_exponent<T: IeeeFloat>(bits: u64) -> u64 {
    bits & !(T::exp_mask() << T::MANT_BITS)
}

/// Split `x` into `frac * 2^exp` with `0.5 <= |frac| < 1`.
///
/// ±0, ±∞ and NaN come back unchanged with `exp == 0`.
pub(crate) fn frexp<T: IeeeFloat>(x: T) -> Frexp<T> {
    if x == T::zero() || !x.is_finite() {
        return Frexp { frac: x, exp: 0 };
    }
    let (y, e) = normalize(x);
    let exp = e + y.biased_exp() - T::EXP_BIAS + 1;
    let bits = clear_exponent::<T>(y.to_raw()) | (((T::EXP_BIAS - 1) as u64) << T::MANT_BITS);
    Frexp {
        frac: T::from_raw(bits),
        exp,
    }
}

/// Compute `frac * 2^exp` with a single rounding.
///
/// Saturates to ±∞ on overflow and to ±0 on underflow. ±0, ±∞ and NaN pass
/// through regardless of `exp`.
pub(crate) fn ldexp<T: IeeeFloat>(frac: T, exp: i64) -> T {
    if frac == T::zero() || !frac.is_finite() {
        return frac;
    }
    let mant = T::MANT_BITS as i64;
    let (y, e) = normalize(frac);
    let exp = exp
        .saturating_add(e)
        .saturating_add(y.biased_exp() - T::EXP_BIAS);

    // Below half the smallest subnormal: rounds to zero in every mode we honour.
    if exp < -(T::EXP_BIAS + mant) {
        return T::zero().copysign(frac);
    }
    if exp > T::EXP_BIAS {
        return if frac < T::zero() {
            T::neg_infinity()
        } else {
            T::infinity()
        };
    }

    // Subnormal results are built one binade up and scaled down with a single
    // rounding multiply.
    let (exp, scale) = if exp < 1 - T::EXP_BIAS {
        (exp + mant + 1, T::exp2i(-(mant + 1)))
    } else {
        (exp, T::one())
    };
    let bits = clear_exponent::<T>(y.to_raw()) | (((exp + T::EXP_BIAS) as u64) << T::MANT_BITS);
    scale * T::from_raw(bits)
}

/// Unbiased exponent of a finite nonzero `x`.
#[inline]
fn exponent_of<T: IeeeFloat>(x: T) -> i64 {
    let (y, e) = normalize(x);
    y.biased_exp() - T::EXP_BIAS + e
}

/// Binary exponent of `x` as an integer.
///
/// Returns [`ILOGB_ZERO`] for ±0, [`ILOGB_INF`] for ±∞ and [`ILOGB_NAN`] for NaN.
pub(crate) fn ilogb<T: IeeeFloat>(x: T) -> i64 {
    if x == T::zero() {
        ILOGB_ZERO
    } else if x.is_nan() {
        ILOGB_NAN
    } else if x.is_infinite() {
        ILOGB_INF
    } else {
        exponent_of(x)
    }
}

/// Binary exponent of `x` as a float: -∞ for ±0, +∞ for ±∞, NaN for NaN.
pub(crate) fn logb<T: IeeeFloat>(x: T) -> T {
    if x == T::zero() {
        T::neg_infinity()
    } else if x.is_infinite() {
        T::infinity()
    } else if x.is_nan() {
        x
    } else {
        T::from_f64(exponent_of(x) as f64)
    }
}

/// Split `x` into a part truncated toward zero and the remainder, both with
/// the sign of `x`.
pub(crate) fn modf<T: IeeeFloat>(x: T) -> Modf<T> {
    let zero = T::zero();
    if x.is_nan() {
        return Modf { integer: x, frac: x };
    }
    if x.is_infinite() {
        return Modf {
            integer: x,
            frac: zero.copysign(x),
        };
    }
    if x < T::one() {
        if x < zero {
            let m = modf(-x);
            return Modf {
                integer: -m.integer,
                frac: -m.frac,
            };
        }
        if x == zero {
            // keeps -0 as (-0, -0)
            return Modf { integer: x, frac: x };
        }
        return Modf {
            integer: zero,
            frac: x,
        };
    }

    let e = x.biased_exp() - T::EXP_BIAS;
    let mut bits = x.to_raw();
    if e < T::MANT_BITS as i64 {
        bits &= !((1_u64 << (T::MANT_BITS as i64 - e)) - 1);
    }
    let integer = T::from_raw(bits);
    Modf {
        integer,
        frac: x - integer,
    }
}
