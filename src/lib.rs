//! Pure Rust IEEE-754 decomposition primitives and special functions.
//!
//! This crate provides bit-level access to binary32/binary64 values
//! ([`float32_bits`], [`float64_from_bits`], ...), fraction/exponent
//! decomposition ([`frexp`], [`ldexp`], [`ilogb`], [`logb`], [`modf`]),
//! rounding ([`round`], [`round_to_even`]), a combined [`sincos`], and the
//! special functions: the error function family ([`erf`], [`erfc`],
//! [`erf_inv`], [`erfc_inv`]), [`gamma`] and [`lgamma`], and the cylindrical
//! Bessel functions [`j0`], [`j1`], [`jn`], [`y0`], [`y1`], [`yn`].
//!
//! Every function is generic over [`IeeeFloat`], which is implemented for
//! `f32` and `f64`.
//!
//! # Special values
//!
//! The functions in this module never fail. Domain errors produce NaN, poles
//! produce a signed infinity, overflow saturates to ±∞ and underflow to ±0.
//! The [`checked`] module offers `Result`-returning variants that report these
//! conditions as an [`Error`].
//!
//! # Example
//!
//! ```
//! use ieee_special::{erf, frexp, gamma, j0, lgamma};
//!
//! let r = frexp(8.0_f64);
//! assert_eq!((r.frac, r.exp), (0.5, 4));
//!
//! assert!((gamma(5.0_f64) - 24.0).abs() < 1e-12);
//! assert!((erf(1.0_f64) - 0.8427007929497149).abs() < 1e-15);
//! assert_eq!(lgamma(-0.5_f64).sign, -1);
//! assert!((j0(0.0_f32) - 1.0).abs() < 1e-7);
//! ```
//!
//! # `no_std`
//!
//! Disable the default `std` feature to build without the standard library;
//! elementary functions then come from `libm` through `num-traits`.

#![cfg_attr(not(feature = "std"), no_std)]

mod algo;
pub mod bits;
pub mod checked;
pub mod consts;
pub mod machine;
pub mod types;
mod utils;

pub use bits::{float32_bits, float32_from_bits, float64_bits, float64_from_bits};
pub use machine::IeeeFloat;
pub use types::{Error, Frexp, Lgamma, Modf, SinCos, ILOGB_INF, ILOGB_NAN, ILOGB_ZERO};

/// Run a double-precision kernel on `x` and round the result to `T`.
#[inline]
fn via_f64<T: IeeeFloat>(x: T, f: impl FnOnce(f64) -> f64) -> T {
    T::from_f64(f(x.as_f64()))
}

// ── Decomposition ──

/// Split `x` into a normalized fraction and a power of two.
///
/// Returns `frac` and `exp` with `x == frac * 2^exp` and
/// `0.5 <= |frac| < 1`. Subnormal inputs are handled exactly. For ±0, ±∞ and
/// NaN the input comes back as `frac` with `exp == 0`.
///
/// # Example
///
/// ```
/// use ieee_special::frexp;
///
/// let r = frexp(-3.0_f64);
/// assert_eq!(r.frac, -0.75);
/// assert_eq!(r.exp, 2);
/// ```
pub fn frexp<T: IeeeFloat>(x: T) -> Frexp<T> {
    algo::decompose::frexp(x)
}

/// Compute `frac * 2^exp`, the inverse of [`frexp`].
///
/// The result is rounded once. It saturates to ±∞ on overflow and to ±0
/// (keeping the sign of `frac`) on underflow. ±0, ±∞ and NaN are returned
/// unchanged for any `exp`.
pub fn ldexp<T: IeeeFloat>(frac: T, exp: i64) -> T {
    algo::decompose::ldexp(frac, exp)
}

/// Binary exponent of `x` as an integer: `floor(log2(|x|))`.
///
/// Subnormals report their true exponent. Returns [`ILOGB_ZERO`] for ±0,
/// [`ILOGB_INF`] for ±∞ and [`ILOGB_NAN`] for NaN. The last two are the same
/// value, so check `x.is_nan()` to separate them.
pub fn ilogb<T: IeeeFloat>(x: T) -> i64 {
    algo::decompose::ilogb(x)
}

/// Binary exponent of `x` as a float.
///
/// Returns -∞ for ±0, +∞ for ±∞ and NaN for NaN.
pub fn logb<T: IeeeFloat>(x: T) -> T {
    algo::decompose::logb(x)
}

/// Split `x` into its integral part (truncated toward zero) and fractional
/// part, both carrying the sign of `x`.
///
/// ±∞ gives `(±∞, ±0)` and NaN gives `(NaN, NaN)`.
pub fn modf<T: IeeeFloat>(x: T) -> Modf<T> {
    algo::decompose::modf(x)
}

// ── Rounding ──

/// Round to the nearest integer, ties away from zero.
pub fn round<T: IeeeFloat>(x: T) -> T {
    algo::round::round(x)
}

/// Round to the nearest integer, ties to even.
pub fn round_to_even<T: IeeeFloat>(x: T) -> T {
    algo::round::round_to_even(x)
}

// ── Circular functions ──

/// Sine and cosine of `x`, sharing one argument reduction.
///
/// `sincos(±0)` is `(±0, 1)`; ±∞ and NaN give NaN for both.
pub fn sincos<T: IeeeFloat>(x: T) -> SinCos<T> {
    let (s, c) = algo::trig::sincos(x.as_f64());
    SinCos {
        sin: T::from_f64(s),
        cos: T::from_f64(c),
    }
}

// ── Error function family ──

/// Error function, erf(x) = 2/√π ∫₀ˣ e^(-t²) dt.
///
/// Odd, with erf(±∞) = ±1.
pub fn erf<T: IeeeFloat>(x: T) -> T {
    via_f64(x, algo::erf::erf)
}

/// Complementary error function, erfc(x) = 1 - erf(x).
///
/// Computed directly, so it keeps full relative precision for large positive
/// `x` where `1 - erf(x)` would cancel. erfc(+∞) = 0 and erfc(-∞) = 2.
pub fn erfc<T: IeeeFloat>(x: T) -> T {
    via_f64(x, algo::erf::erfc)
}

/// Inverse error function.
///
/// `erf_inv(±1)` is ±∞; arguments outside [-1, 1] and NaN give NaN.
///
/// # Example
///
/// ```
/// use ieee_special::{erf, erf_inv};
///
/// let x = 0.3_f64;
/// assert!((erf_inv(erf(x)) - x).abs() < 1e-15);
/// ```
pub fn erf_inv<T: IeeeFloat>(x: T) -> T {
    via_f64(x, algo::erfinv::erf_inv)
}

/// Inverse complementary error function.
///
/// `erfc_inv(0)` is +∞ and `erfc_inv(2)` is -∞; arguments outside [0, 2] and
/// NaN give NaN. Small arguments keep full relative precision.
pub fn erfc_inv<T: IeeeFloat>(x: T) -> T {
    via_f64(x, algo::erfinv::erfc_inv)
}

// ── Gamma function family ──

/// Gamma function Γ(x).
///
/// At the poles x = 0, -1, -2, ... the result is a signed infinity:
/// `gamma(±0)` is ±∞ and at a negative integer the sign is that of the limit
/// from the right. Overflows to +∞ for x > 171.62; -∞ and NaN give NaN.
pub fn gamma<T: IeeeFloat>(x: T) -> T {
    via_f64(x, algo::gamma::gamma)
}

/// Natural logarithm of |Γ(x)| together with the sign of Γ(x).
///
/// Stays finite where Γ(x) itself overflows. Poles and ±∞ give `(+∞, 1)`.
///
/// # Example
///
/// ```
/// use ieee_special::lgamma;
///
/// let r = lgamma(1000.0_f64);
/// assert!((r.value - 5905.220423209181).abs() < 1e-9);
/// assert_eq!(r.sign, 1);
/// ```
pub fn lgamma<T: IeeeFloat>(x: T) -> Lgamma<T> {
    let (value, sign) = algo::lgamma::lgamma(x.as_f64());
    Lgamma {
        value: T::from_f64(value),
        sign,
    }
}

// ── Bessel functions ──

/// Bessel function of the first kind of order zero, J₀(x).
pub fn j0<T: IeeeFloat>(x: T) -> T {
    via_f64(x, algo::j0::j0)
}

/// Bessel function of the first kind of order one, J₁(x).
pub fn j1<T: IeeeFloat>(x: T) -> T {
    via_f64(x, algo::j1::j1)
}

/// Bessel function of the first kind of integer order n, Jₙ(x).
///
/// Negative orders use J₋ₙ(x) = (-1)ⁿ Jₙ(x). The cost is bounded for any
/// order: beyond |n| = 4096 a uniform asymptotic expansion replaces the
/// recurrences, and orders past 2^53 are rounded to the nearest f64 for it.
pub fn jn<T: IeeeFloat>(n: i64, x: T) -> T {
    via_f64(x, |x| algo::jn::jn(n, x))
}

/// Bessel function of the second kind of order zero, Y₀(x).
///
/// -∞ at ±0, NaN for x < 0, 0 at +∞.
pub fn y0<T: IeeeFloat>(x: T) -> T {
    via_f64(x, algo::j0::y0)
}

/// Bessel function of the second kind of order one, Y₁(x).
///
/// -∞ at ±0, NaN for x < 0, 0 at +∞.
pub fn y1<T: IeeeFloat>(x: T) -> T {
    via_f64(x, algo::j1::y1)
}

/// Bessel function of the second kind of integer order n, Yₙ(x).
///
/// Negative orders use Y₋ₙ(x) = (-1)ⁿ Yₙ(x), so `yn(n, ±0)` is +∞ for
/// negative odd n and -∞ otherwise. NaN for x < 0. Large orders are handled
/// as in [`jn`].
pub fn yn<T: IeeeFloat>(n: i64, x: T) -> T {
    via_f64(x, |x| algo::jn::yn(n, x))
}
