//! Mathematical constants and floating-point limits.
//!
//! Digits are taken from the OEIS entries noted beside each constant.

#![allow(clippy::excessive_precision)]
#![allow(clippy::approx_constant)]

/// e (A001113)
pub const E: f64 = 2.71828182845904523536028747135266249775724709369995957496696763;
/// π (A000796)
pub const PI: f64 = 3.14159265358979323846264338327950288419716939937510582097494459;
/// φ, the golden ratio (A001622)
pub const PHI: f64 = 1.61803398874989484820458683436563811772030917980576286213544862;
/// √2 (A002193)
pub const SQRT_2: f64 = 1.41421356237309504880168872420969807856967187537694807317667974;
/// √e (A019774)
pub const SQRT_E: f64 = 1.64872127070012814684865078781416357165377610071014801157507931;
/// √π (A002161)
pub const SQRT_PI: f64 = 1.77245385090551602729816748334114518279754945612238712821380779;
/// √φ (A139339)
pub const SQRT_PHI: f64 = 1.27201964951406896425242246173749149171560804184009624861664038;
/// ln 2 (A002162)
pub const LOG_E_2: f64 = 0.693147180559945309417232121458176568075500134360255254120680009;
/// log₂ e
pub const LOG_2_E: f64 = 1.0 / LOG_E_2;
/// ln 10 (A002392)
pub const LOG_E_10: f64 = 2.30258509299404568401799145468436420760110148862877297603332790;
/// log₁₀ e
pub const LOG_10_E: f64 = 1.0 / LOG_E_10;

/// Largest finite binary32 value, (2 − 2⁻²³)·2¹²⁷.
pub const MAX_FLOAT32: f32 = 1.7014118e38 * (1.0 + (1.0 - 1.1920929e-7));
/// Smallest positive binary32 value, 2⁻¹²⁶·2⁻²³.
pub const SMALLEST_NONZERO_FLOAT32: f32 = 1.1754944e-38 * 1.1920929e-7;
/// Largest finite binary64 value, (2 − 2⁻⁵²)·2¹⁰²³.
pub const MAX_FLOAT64: f64 =
    8.98846567431158e307 * (1.0 + (1.0 - 2.220446049250313e-16));
/// Smallest positive binary64 value, 2⁻¹⁰²²·2⁻⁵².
pub const SMALLEST_NONZERO_FLOAT64: f64 = 2.2250738585072014e-308 * 2.220446049250313e-16;
