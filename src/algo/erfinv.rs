//! Inverse error functions.
//!
//! Starting values from Wichura's AS241 rational approximations (as used for
//! the normal quantile), refined by two Halley steps against `erf` or `erfc`.

#![allow(clippy::excessive_precision)]

use core::f64::consts::{FRAC_2_SQRT_PI, LN_2};

use num_traits::Float;

use super::erf::{erf, erfc};
use crate::utils::horner;

// |y| <= 0.85, in r = 0.180625 - y²/4
const A: [f64; 8] = [
    1.1975323115670912564578e0,
    4.7072688112383978012285e1,
    6.9706266534389598238465e2,
    4.8548868893843886794648e3,
    1.6235862515167575384252e4,
    2.3782041382114385731252e4,
    1.1819493347062294404278e4,
    8.8709406962545514830200e2,
];
const B: [f64; 8] = [
    1.0000000000000000000e0,
    4.2313330701600911252e1,
    6.8718700749205790830e2,
    5.3941960214247511077e3,
    2.1213794301586595867e4,
    3.9307895800092710610e4,
    2.8729085735721942674e4,
    5.2264952788528545610e3,
];

// r = sqrt(ln 2 - ln c) <= 5, shifted by 1.6
const C: [f64; 8] = [
    1.42343711074968357734e0,
    4.63033784615654529590e0,
    5.76949722146069140550e0,
    3.64784832476320460504e0,
    1.27045825245236838258e0,
    2.41780725177450611770e-1,
    2.27238449892691845833e-2,
    7.74545014278341407640e-4,
];
const D: [f64; 8] = [
    1.4142135623730950488016887e0,
    2.9036514445419946173133295e0,
    2.3707661626024532365971225e0,
    9.7547832001787427186894837e-1,
    2.0945065210512749128288442e-1,
    2.1494160384252876777097297e-2,
    7.7441459065157709165577218e-4,
    1.4859850019840355905497876e-9,
];

// r > 5, shifted by 5
const E: [f64; 8] = [
    6.65790464350110377720e0,
    5.46378491116411436990e0,
    1.78482653991729133580e0,
    2.96560571828504891230e-1,
    2.65321895265761230930e-2,
    1.24266094738807843860e-3,
    2.71155556874348757815e-5,
    2.01033439929228813265e-7,
];
const F: [f64; 8] = [
    1.414213562373095048801689e0,
    8.482908416595164588112026e-1,
    1.936480946950659106176712e-1,
    2.103693768272068968719679e-2,
    1.112800997078859844711555e-3,
    2.611088405080593625138020e-5,
    2.010321207683943062279931e-7,
    2.891024605872965461538222e-15,
];

const HALLEY_STEPS: usize = 2;

/// First guess for erf⁻¹(y), |y| <= 0.85.
fn central(y: f64) -> f64 {
    let r = 0.180625 - 0.25 * y * y;
    y * horner(&A, r) / horner(&B, r)
}

/// First guess for erfc⁻¹(c), 0 < c small.
fn tail(c: f64) -> f64 {
    let r = Float::sqrt(LN_2 - Float::ln(c));
    if r <= 5.0 {
        let r = r - 1.6;
        horner(&C, r) / horner(&D, r)
    } else {
        let r = r - 5.0;
        horner(&E, r) / horner(&F, r)
    }
}

/// d/dx erf(x)
#[inline]
fn slope(x: f64) -> f64 {
    FRAC_2_SQRT_PI * Float::exp(-x * x)
}

fn refine_erf(mut x: f64, y: f64) -> f64 {
    for _ in 0..HALLEY_STEPS {
        let u = (erf(x) - y) / slope(x);
        x -= u / (1.0 + x * u);
    }
    x
}

fn refine_erfc(mut x: f64, c: f64) -> f64 {
    for _ in 0..HALLEY_STEPS {
        let d = slope(x);
        // derivative underflowed; the starting value is as good as it gets
        if d < f64::MIN_POSITIVE {
            break;
        }
        let u = -(erfc(x) - c) / d;
        x -= u / (1.0 + x * u);
    }
    x
}

pub(crate) fn erf_inv(y: f64) -> f64 {
    if y.is_nan() {
        return y;
    }
    if y == 1.0 {
        return f64::INFINITY;
    }
    if y == -1.0 {
        return f64::NEG_INFINITY;
    }
    if !(-1.0..=1.0).contains(&y) {
        return f64::NAN;
    }
    if y == 0.0 {
        return y;
    }

    let a = Float::abs(y);
    let x = if a <= 0.85 {
        refine_erf(central(a), a)
    } else {
        let c = 1.0 - a;
        refine_erfc(tail(c), c)
    };
    if y < 0.0 {
        -x
    } else {
        x
    }
}

pub(crate) fn erfc_inv(c: f64) -> f64 {
    if c.is_nan() {
        return c;
    }
    if c == 0.0 {
        return f64::INFINITY;
    }
    if c == 2.0 {
        return f64::NEG_INFINITY;
    }
    if !(0.0..=2.0).contains(&c) {
        return f64::NAN;
    }
    if c > 1.0 {
        return -erfc_inv(2.0 - c);
    }
    if c >= 0.15 {
        let y = 1.0 - c;
        if y == 0.0 {
            return 0.0;
        }
        return refine_erfc(central(y), c);
    }
    refine_erfc(tail(c), c)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rel(a: f64, b: f64) -> f64 {
        ((a - b) / b).abs()
    }

    #[test]
    fn erf_inv_reference_values() {
        assert!(rel(erf_inv(0.5), 0.4769362762044699) < 1e-15);
        assert!(rel(erf_inv(-0.5), -0.4769362762044699) < 1e-15);
        assert!(rel(erf_inv(0.999), 2.3267537655135246) < 1e-15);
        assert_eq!(erf_inv(0.0), 0.0);
        let z = erf_inv(-0.0);
        assert!(z == 0.0 && z.is_sign_negative());
    }

    #[test]
    fn erf_inv_boundaries() {
        assert_eq!(erf_inv(1.0), f64::INFINITY);
        assert_eq!(erf_inv(-1.0), f64::NEG_INFINITY);
        assert!(erf_inv(1.0000001).is_nan());
        assert!(erf_inv(-2.0).is_nan());
        assert!(erf_inv(f64::INFINITY).is_nan());
        assert!(erf_inv(f64::NAN).is_nan());
    }

    #[test]
    fn erfc_inv_reference_values() {
        assert!(rel(erfc_inv(0.5), 0.4769362762044699) < 1e-15);
        assert!(rel(erfc_inv(1.5), -0.4769362762044699) < 1e-15);
        assert!(rel(erfc_inv(5e-324), 27.21329321081294) < 1e-14);
        assert_eq!(erfc_inv(1.0), 0.0);
    }

    #[test]
    fn erfc_inv_boundaries() {
        assert_eq!(erfc_inv(0.0), f64::INFINITY);
        assert_eq!(erfc_inv(2.0), f64::NEG_INFINITY);
        assert!(erfc_inv(-0.1).is_nan());
        assert!(erfc_inv(2.5).is_nan());
        assert!(erfc_inv(f64::NAN).is_nan());
    }

    #[test]
    fn erf_inv_inverts_erf() {
        for i in -200..=200 {
            let x = i as f64 * 0.01;
            assert!((erf_inv(erf(x)) - x).abs() < 1e-14, "x = {x}");
        }
    }

    #[test]
    fn erfc_inv_inverts_erfc() {
        for &x in &[0.1, 0.7, 1.3, 2.9, 5.0, 10.0, 20.0] {
            let back = erfc_inv(erfc(x));
            assert!(rel(back, x) < 1e-14, "x = {x}, got {back}");
        }
    }
}
