//! Gamma function.
//!
//! Cephes `gamma`: recurrence shifts onto [2, 3] and a rational approximation
//! there; Stirling's series above 33 with the power split in two so that
//! Γ(x) near the overflow limit does not overflow in the intermediate.
//! Negative arguments go through the reflection formula.

#![allow(clippy::excessive_precision)]

use core::f64::consts::PI;

use num_traits::Float;

use crate::algo::constants::{EULER, SQRT_2PI};
use crate::utils::{horner, sinpi};

// Γ(x+2) = P(x)/Q(x) on [0, 1]
const P: [f64; 7] = [
    9.99999999999999996796e-01,
    4.94214826801497100753e-01,
    2.07448227648435975150e-01,
    4.76367800457137231464e-02,
    1.04213797561761569935e-02,
    1.19135147006586384913e-03,
    1.60119522476751861407e-04,
];
const Q: [f64; 8] = [
    1.00000000000000000320e+00,
    7.14304917030273074085e-02,
    -2.34591795718243348568e-01,
    3.58236398605498653373e-02,
    1.18139785222060435552e-02,
    -4.45641913851797240494e-03,
    5.39605580493303397842e-04,
    -2.31581873324120129819e-05,
];

/// Stirling correction series in 1/x.
const STIR: [f64; 5] = [
    8.33333333333482257126e-02,
    3.47222221605458667310e-03,
    -2.68132617805781232825e-03,
    -2.29549961613378126380e-04,
    7.87311395793093628397e-04,
];

/// Γ(x) overflows f64 for every x above this.
const MAX_STIRLING: f64 = 200.0;
/// Above this x^(x-0.5) overflows on its own and is taken in two halves.
const STIRLING_SPLIT: f64 = 143.01608;
/// Stirling takes over past this magnitude.
const LARGE: f64 = 33.0;
/// Recurrence stops within this distance of zero.
const SMALL: f64 = 1e-9;

/// Stirling's formula for x > 33, returned as two factors whose product is
/// Γ(x). Keeping them apart lets the reflection formula divide in stages.
fn stirling(x: f64) -> (f64, f64) {
    if x > MAX_STIRLING {
        return (f64::INFINITY, 1.0);
    }
    let w = 1.0 / x;
    let w = 1.0 + w * horner(&STIR, w);
    let mut y1 = Float::exp(x);
    let mut y2 = 1.0;
    if x > STIRLING_SPLIT {
        let v = Float::powf(x, 0.5 * x - 0.25);
        y2 = v / y1;
        y1 = v;
    } else {
        y1 = Float::powf(x, x - 0.5) / y1;
    }
    (y1, SQRT_2PI * w * y2)
}

/// Γ(x) for x within `SMALL` of zero, after the recurrence has accumulated `z`.
#[inline]
fn near_zero(x: f64, z: f64) -> f64 {
    if x == 0.0 {
        return f64::INFINITY;
    }
    z / ((1.0 + EULER * x) * x)
}

pub(crate) fn gamma(x: f64) -> f64 {
    if x.is_nan() || x == f64::NEG_INFINITY {
        return f64::NAN;
    }
    if x == f64::INFINITY {
        return x;
    }
    if x == 0.0 {
        return Float::copysign(f64::INFINITY, x);
    }
    if x < 0.0 && x == Float::floor(x) {
        // sign of the limit from the right
        return if x % 2.0 == 0.0 {
            f64::INFINITY
        } else {
            f64::NEG_INFINITY
        };
    }

    let q = Float::abs(x);
    if q > LARGE {
        if x >= 0.0 {
            let (a, b) = stirling(x);
            return a * b;
        }
        // Γ(x) = -π / (q·sin(πq)·Γ(q)) with q = -x
        let mut p = Float::floor(q);
        let sign = if p % 2.0 == 0.0 { -1.0 } else { 1.0 };
        let mut z = q - p;
        if z > 0.5 {
            p += 1.0;
            z = q - p;
        }
        let z = q * sinpi(z);
        if z == 0.0 {
            return sign * f64::INFINITY;
        }
        let (a, b) = stirling(q);
        let az = Float::abs(z);
        let d = az * a * b;
        let g = if d.is_infinite() {
            PI / az / a / b
        } else {
            PI / d
        };
        return sign * g;
    }

    let mut x = x;
    let mut z = 1.0;
    while x >= 3.0 {
        x -= 1.0;
        z *= x;
    }
    while x < 0.0 {
        if x > -SMALL {
            return near_zero(x, z);
        }
        z /= x;
        x += 1.0;
    }
    while x < 2.0 {
        if x < SMALL {
            return near_zero(x, z);
        }
        z /= x;
        x += 1.0;
    }
    if x == 2.0 {
        return z;
    }
    let x = x - 2.0;
    z * horner(&P, x) / horner(&Q, x)
}
