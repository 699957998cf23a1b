//! Result types returned by the multi-valued operations, and the error type of
//! the [`checked`](crate::checked) interface.

use core::fmt;

use crate::machine::IeeeFloat;

/// `ilogb` result for a zero argument.
pub const ILOGB_ZERO: i64 = i64::MIN;
/// `ilogb` result for an infinite argument.
///
/// Equal to [`ILOGB_NAN`], so `ilogb` alone cannot tell ±∞ from NaN; test the
/// argument with `is_nan` when the distinction matters.
pub const ILOGB_INF: i64 = i64::MAX;
/// `ilogb` result for a NaN argument. Equal to [`ILOGB_INF`].
pub const ILOGB_NAN: i64 = i64::MAX;

/// Normalized fraction and binary exponent, returned by [`frexp`](crate::frexp).
///
/// `x == frac * 2^exp` with `0.5 <= |frac| < 1`, or `frac == x` and `exp == 0`
/// when `x` is zero, infinite or NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frexp<T: IeeeFloat> {
    /// Normalized fraction.
    pub frac: T,
    /// Power-of-two exponent.
    pub exp: i64,
}

/// Integral and fractional parts, returned by [`modf`](crate::modf).
///
/// Both parts carry the sign of the input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Modf<T: IeeeFloat> {
    /// Input truncated toward zero.
    pub integer: T,
    /// `x - integer`.
    pub frac: T,
}

/// `ln|Γ(x)|` and the sign of `Γ(x)`, returned by [`lgamma`](crate::lgamma).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lgamma<T: IeeeFloat> {
    /// Natural logarithm of |Γ(x)|.
    pub value: T,
    /// -1 where Γ(x) < 0, +1 otherwise (including poles).
    pub sign: i32,
}

/// Sine and cosine of one argument, returned by [`sincos`](crate::sincos).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SinCos<T: IeeeFloat> {
    /// sin(x).
    pub sin: T,
    /// cos(x).
    pub cos: T,
}

/// Error type for the `try_` functions in [`checked`](crate::checked).
///
/// The unchecked functions never fail; they encode these conditions as NaN or
/// a signed infinity/zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// Argument outside the mathematical domain (including NaN input).
    Domain,
    /// Argument sits on a pole or singular boundary of the function.
    Pole,
    /// Finite argument whose result is too large to represent.
    Overflow,
    /// Nonzero result too small to represent.
    Underflow,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Domain => write!(f, "domain error: argument outside the function's domain"),
            Error::Pole => write!(f, "pole error: function is singular at this argument"),
            Error::Overflow => {
                write!(f, "overflow: result magnitude exceeds representable range")
            }
            Error::Underflow => write!(f, "underflow: nonzero result flushed to zero"),
        }
    }
}

impl core::error::Error for Error {}
