//! Shared constants used by more than one kernel.
//!
//! Module-specific coefficient tables remain in their respective files.

#![allow(clippy::excessive_precision)]

/// Euler–Mascheroni constant γ.
pub(crate) const EULER: f64 = 0.57721566490153286060651209008240243104215933593992;

/// √(2π), the Stirling prefactor.
pub(crate) const SQRT_2PI: f64 = 2.50662827463100050242e+00;

/// 1/√π, the amplitude of the Bessel asymptotic envelope.
pub(crate) const INV_SQRT_PI: f64 = 5.64189583547756279280e-01;

/// 2/π, the coefficient of the logarithmic term in Y₀ and Y₁.
pub(crate) const TWO_OVER_PI: f64 = 6.36619772367581382433e-01;

/// 2^-27
pub(crate) const TWO_M27: f64 = 1.0 / (1_u64 << 27) as f64;

/// 2^129; past this the Bessel envelope corrections P, Q round to 1 and 0.
pub(crate) const TWO_129: f64 = 6.80564733841876926927e+38;

/// 2^302; past this the leading Hankel asymptotic term is exact to working precision.
pub(crate) const TWO_302: f64 = 8.148143905337944345e+90;
