//! `Result`-returning variants of the operations with domain edges.
//!
//! Each `try_` function computes the same value as its unchecked counterpart
//! in the crate root, but reports NaN-producing arguments, poles and
//! range exhaustion as an [`Error`] instead of encoding them in the result.

use crate::machine::IeeeFloat;
use crate::types::{Error, Lgamma};

/// True for 0, -1, -2, ... and for -∞; callers rule out -∞ first.
#[inline]
fn is_nonpositive_integer<T: IeeeFloat>(x: T) -> bool {
    x <= T::zero() && x == x.floor()
}

/// Shared check for the second-kind Bessel functions.
fn second_kind<T: IeeeFloat>(x: T, f: impl FnOnce(T) -> T) -> Result<T, Error> {
    if x.is_nan() || x < T::zero() {
        return Err(Error::Domain);
    }
    if x == T::zero() {
        return Err(Error::Pole);
    }
    let r = f(x);
    if r.is_infinite() {
        return Err(Error::Overflow);
    }
    Ok(r)
}

/// [`ldexp`](crate::ldexp) that reports saturation.
///
/// # Errors
///
/// - [`Error::Overflow`] if finite `frac` scales past the largest finite value.
/// - [`Error::Underflow`] if nonzero `frac` scales below the smallest subnormal.
///
/// # Example
///
/// ```
/// use ieee_special::checked::try_ldexp;
/// use ieee_special::Error;
///
/// assert_eq!(try_ldexp(0.5_f64, 3), Ok(4.0));
/// assert_eq!(try_ldexp(1.0_f64, 5000), Err(Error::Overflow));
/// assert_eq!(try_ldexp(1.0_f64, -5000), Err(Error::Underflow));
/// ```
pub fn try_ldexp<T: IeeeFloat>(frac: T, exp: i64) -> Result<T, Error> {
    let r = crate::ldexp(frac, exp);
    if frac.is_finite() && r.is_infinite() {
        return Err(Error::Overflow);
    }
    if frac != T::zero() && r == T::zero() {
        return Err(Error::Underflow);
    }
    Ok(r)
}

/// [`gamma`](crate::gamma) that reports poles and range exhaustion.
///
/// # Errors
///
/// - [`Error::Domain`] for NaN and -∞.
/// - [`Error::Pole`] at 0, -1, -2, ...
/// - [`Error::Overflow`] if a finite argument gives an infinite result.
/// - [`Error::Underflow`] if the result flushes to zero.
pub fn try_gamma<T: IeeeFloat>(x: T) -> Result<T, Error> {
    if x.is_nan() || x == T::neg_infinity() {
        return Err(Error::Domain);
    }
    if is_nonpositive_integer(x) {
        return Err(Error::Pole);
    }
    let r = crate::gamma(x);
    if x.is_finite() && r.is_infinite() {
        return Err(Error::Overflow);
    }
    if r == T::zero() {
        return Err(Error::Underflow);
    }
    Ok(r)
}

/// [`lgamma`](crate::lgamma) that reports poles.
///
/// # Errors
///
/// - [`Error::Domain`] for NaN and -∞.
/// - [`Error::Pole`] at 0, -1, -2, ...
pub fn try_lgamma<T: IeeeFloat>(x: T) -> Result<Lgamma<T>, Error> {
    if x.is_nan() || x == T::neg_infinity() {
        return Err(Error::Domain);
    }
    if is_nonpositive_integer(x) {
        return Err(Error::Pole);
    }
    Ok(crate::lgamma(x))
}

/// [`erf_inv`](crate::erf_inv) restricted to the open interval (-1, 1).
///
/// # Errors
///
/// - [`Error::Pole`] at ±1.
/// - [`Error::Domain`] outside [-1, 1] and for NaN.
pub fn try_erf_inv<T: IeeeFloat>(x: T) -> Result<T, Error> {
    if x.is_nan() || x.abs() > T::one() {
        return Err(Error::Domain);
    }
    if x.abs() == T::one() {
        return Err(Error::Pole);
    }
    Ok(crate::erf_inv(x))
}

/// [`erfc_inv`](crate::erfc_inv) restricted to the open interval (0, 2).
///
/// # Errors
///
/// - [`Error::Pole`] at 0 and 2.
/// - [`Error::Domain`] outside [0, 2] and for NaN.
pub fn try_erfc_inv<T: IeeeFloat>(x: T) -> Result<T, Error> {
    let two = T::from_f64(2.0);
    if x.is_nan() || x < T::zero() || x > two {
        return Err(Error::Domain);
    }
    if x == T::zero() || x == two {
        return Err(Error::Pole);
    }
    Ok(crate::erfc_inv(x))
}

/// [`y0`](crate::y0) restricted to x > 0.
///
/// # Errors
///
/// - [`Error::Domain`] for x < 0 and NaN.
/// - [`Error::Pole`] at ±0.
/// - [`Error::Overflow`] if the result is infinite.
pub fn try_y0<T: IeeeFloat>(x: T) -> Result<T, Error> {
    second_kind(x, crate::y0)
}

/// [`y1`](crate::y1) restricted to x > 0.
///
/// # Errors
///
/// As for [`try_y0`]. Overflow happens for x below about 1e-308.
pub fn try_y1<T: IeeeFloat>(x: T) -> Result<T, Error> {
    second_kind(x, crate::y1)
}

/// [`yn`](crate::yn) restricted to x > 0.
///
/// # Errors
///
/// As for [`try_y0`]. For large `n` the recurrence overflows well away from
/// the origin.
///
/// # Example
///
/// ```
/// use ieee_special::checked::try_yn;
/// use ieee_special::Error;
///
/// assert!(try_yn(2, 1.0_f64).is_ok());
/// assert_eq!(try_yn(300, 1.0_f64), Err(Error::Overflow));
/// assert_eq!(try_yn(2, 0.0_f64), Err(Error::Pole));
/// ```
pub fn try_yn<T: IeeeFloat>(n: i64, x: T) -> Result<T, Error> {
    second_kind(x, |x| crate::yn(n, x))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ldexp_reports_saturation() {
        assert_eq!(try_ldexp(0.75_f64, 2), Ok(3.0));
        assert_eq!(try_ldexp(1.0_f64, 1024), Err(Error::Overflow));
        assert_eq!(try_ldexp(-1.0_f64, -1080), Err(Error::Underflow));
        assert_eq!(try_ldexp(1.0_f32, 200), Err(Error::Overflow));
        assert_eq!(try_ldexp(f64::INFINITY, 10), Ok(f64::INFINITY));
        assert_eq!(try_ldexp(0.0_f64, -5000), Ok(0.0));
        assert!(try_ldexp(f64::NAN, 1).unwrap().is_nan());
    }

    #[test]
    fn gamma_errors() {
        assert_eq!(try_gamma(0.0_f64), Err(Error::Pole));
        assert_eq!(try_gamma(-0.0_f64), Err(Error::Pole));
        assert_eq!(try_gamma(-3.0_f64), Err(Error::Pole));
        assert_eq!(try_gamma(f64::NAN), Err(Error::Domain));
        assert_eq!(try_gamma(f64::NEG_INFINITY), Err(Error::Domain));
        assert_eq!(try_gamma(180.0_f64), Err(Error::Overflow));
        assert_eq!(try_gamma(40.0_f32), Err(Error::Overflow));
        assert_eq!(try_gamma(-200.5_f64), Err(Error::Underflow));
        assert_eq!(try_gamma(f64::INFINITY), Ok(f64::INFINITY));
        assert_eq!(try_gamma(4.0_f64), Ok(6.0));
    }

    #[test]
    fn lgamma_errors() {
        assert_eq!(try_lgamma(-2.0_f64), Err(Error::Pole));
        assert_eq!(try_lgamma(0.0_f64), Err(Error::Pole));
        assert_eq!(try_lgamma(f64::NAN), Err(Error::Domain));
        assert_eq!(try_lgamma(f64::NEG_INFINITY), Err(Error::Domain));
        assert_eq!(try_lgamma(f32::NEG_INFINITY), Err(Error::Domain));
        assert_eq!(try_lgamma(f64::INFINITY).map(|r| r.value), Ok(f64::INFINITY));
        let r = try_lgamma(-0.5_f64).unwrap();
        assert_eq!(r.sign, -1);
        assert!((r.value - 1.2655121234846454).abs() < 1e-15);
    }

    #[test]
    fn inverse_error_function_edges() {
        assert_eq!(try_erf_inv(1.0_f64), Err(Error::Pole));
        assert_eq!(try_erf_inv(-1.0_f64), Err(Error::Pole));
        assert_eq!(try_erf_inv(1.5_f64), Err(Error::Domain));
        assert_eq!(try_erf_inv(f64::NAN), Err(Error::Domain));
        assert_eq!(try_erf_inv(0.0_f64), Ok(0.0));

        assert_eq!(try_erfc_inv(0.0_f64), Err(Error::Pole));
        assert_eq!(try_erfc_inv(2.0_f64), Err(Error::Pole));
        assert_eq!(try_erfc_inv(-0.5_f64), Err(Error::Domain));
        assert_eq!(try_erfc_inv(2.5_f32), Err(Error::Domain));
        assert_eq!(try_erfc_inv(1.0_f64), Ok(0.0));
    }

    #[test]
    fn second_kind_bessel_errors() {
        assert_eq!(try_y0(-1.0_f64), Err(Error::Domain));
        assert_eq!(try_y0(0.0_f64), Err(Error::Pole));
        assert_eq!(try_y1(-0.0_f64), Err(Error::Pole));
        assert_eq!(try_y1(f64::NAN), Err(Error::Domain));
        assert_eq!(try_y1(5e-324_f64), Err(Error::Overflow));
        assert_eq!(try_yn(5, 0.0_f32), Err(Error::Pole));
        assert_eq!(try_yn(300, 1.0_f64), Err(Error::Overflow));
        assert_eq!(try_y0(f64::INFINITY), Ok(0.0));
        assert!((try_y0(1.0_f64).unwrap() - 0.08825696421567696).abs() < 1e-15);
    }

    #[test]
    fn error_display() {
        assert!(Error::Pole.to_string().contains("pole"));
        assert!(Error::Domain.to_string().contains("domain"));
    }
}
