//! Bessel functions of order zero, J₀ and Y₀.
//!
//! fdlibm `e_j0.c`. On [0, 2) a rational approximation (plus the logarithmic
//! term for Y₀); for x >= 2 the Hankel form
//!
//! ```text
//! J₀(x) = √(2/(πx)) · (P₀(x)·cos(x - π/4) - Q₀(x)·sin(x - π/4))
//! Y₀(x) = √(2/(πx)) · (P₀(x)·sin(x - π/4) + Q₀(x)·cos(x - π/4))
//! ```
//!
//! with P₀, Q₀ rational in 1/x² on four intervals.

#![allow(clippy::excessive_precision)]

use num_traits::Float;

use super::trig::sincos;
use crate::algo::constants::{INV_SQRT_PI, TWO_129, TWO_M27, TWO_OVER_PI};
use crate::utils::horner;

const TWO_M13: f64 = 1.0 / (1_u64 << 13) as f64;

// J₀ on [0, 2): 1 - x²/4 + x⁴·R(x²)/S(x²)
const R0: [f64; 4] = [
    1.56249999999999947958e-02,
    -1.89979294238854721751e-04,
    1.82954049532700665670e-06,
    -4.61832688532103189199e-09,
];
const S0: [f64; 4] = [
    1.56191029464890010492e-02,
    1.16926784663337450260e-04,
    5.13546550207318111446e-07,
    1.16614003333790000205e-09,
];

// Y₀ on [0, 2): U(x²)/V(x²) + (2/π)·J₀(x)·ln x
const U0: [f64; 7] = [
    -7.38042951086872317523e-02,
    1.76666452509181115538e-01,
    -1.38185671945596898896e-02,
    3.47453432093683650238e-04,
    -3.81407053724364161125e-06,
    1.95590137035022920206e-08,
    -3.98205194132103398453e-11,
];
const V0: [f64; 4] = [
    1.27304834834123699328e-02,
    7.60068627350353253702e-05,
    2.59150851840457805467e-07,
    4.41110311332675467403e-10,
];

// P₀ - 1 = R/S in z = 1/x², one row per interval (see `interval`)
#[rustfmt::skip]
const P_R: [[f64; 6]; 4] = [
    [0.0, -7.03124999999900357484e-02, -8.08167041275349795626e+00,
     -2.57063105679704847262e+02, -2.48521641009428822144e+03, -5.25304380490729545272e+03],
    [-1.14125464691894502584e-11, -7.03124940873599280078e-02, -4.15961064470587782438e+00,
     -6.76747652265167261021e+01, -3.31231299649172967747e+02, -3.46433388365604912451e+02],
    [-2.54704601771951915620e-09, -7.03119616381481654654e-02, -2.40903221549529611423e+00,
     -2.19659774734883086467e+01, -5.80791704701737572236e+01, -3.14479470594888503854e+01],
    [-8.87534333032526411254e-08, -7.03030995483624743247e-02, -1.45073846780952986357e+00,
     -7.63569613823527770791e+00, -1.11931668860356747786e+01, -3.23364579351335335033e+00],
];
#[rustfmt::skip]
const P_S: [[f64; 5]; 4] = [
    [1.16534364619668181717e+02, 3.83374475364121826715e+03, 4.05978572648472545552e+04,
     1.16752972564375915681e+05, 4.76277284146730962675e+04],
    [6.07539382692300335975e+01, 1.05125230595704579173e+03, 5.97897094333855784498e+03,
     9.62544514357774460223e+03, 2.40605815922939109441e+03],
    [3.58560338055209726349e+01, 3.61513983050303863820e+02, 1.19360783792111533330e+03,
     1.12799679856907414432e+03, 1.73580930813335754692e+02],
    [2.22202997532088808441e+01, 1.36206794218215208048e+02, 2.70470278658083486789e+02,
     1.53875394208320329881e+02, 1.46576176948256193810e+01],
];

// (Q₀·x + 1/8) = R/S in z = 1/x²
#[rustfmt::skip]
const Q_R: [[f64; 6]; 4] = [
    [0.0, 7.32421874999935051953e-02, 1.17682064682252693899e+01,
     5.57673380256401856059e+02, 8.85919720756468632317e+03, 3.70146267776887834771e+04],
    [1.84085963594515531381e-11, 7.32421766612684765896e-02, 5.83563508962056953777e+00,
     1.35111577286449829671e+02, 1.02724376596164097464e+03, 1.98997785864605384631e+03],
    [4.37741014089738620906e-09, 7.32411180042911447163e-02, 3.34423137516170720929e+00,
     4.26218440745412650017e+01, 1.70808091340565596283e+02, 1.66733948696651168575e+02],
    [1.50444444886983272379e-07, 7.32234265963079278272e-02, 1.99819174093815998816e+00,
     1.44956029347885735348e+01, 3.16662317504781540833e+01, 1.62527075710929267416e+01],
];
#[rustfmt::skip]
const Q_S: [[f64; 6]; 4] = [
    [1.63776026895689824414e+02, 8.09834494656449805916e+03, 1.42538291419120476348e+05,
     8.03309257119514397345e+05, 8.40501579819060512818e+05, -3.43899293537866615225e+05],
    [8.27766102236537761883e+01, 2.07781416421392987104e+03, 1.88472887785718085070e+04,
     5.67511122894947329769e+04, 3.59767538425114471465e+04, -5.35434275601944773371e+03],
    [4.87588729724587182091e+01, 7.09689221056606015736e+02, 3.70414822620111362994e+03,
     6.46042516752568917582e+03, 2.51633368920368957333e+03, -1.49247451836156386662e+02],
    [3.03655848355219184498e+01, 2.69348118608049844624e+02, 8.44783757595320139444e+02,
     8.82935845112488550512e+02, 2.12666388511798828631e+02, -5.31095493882666946917e+00],
];

/// Row of the envelope tables for `x >= 2`: [8, ∞), [4.5454, 8),
/// [2.8571, 4.5454), [2, 2.8571). Boundaries are on the high word only.
pub(super) fn interval(x: f64) -> usize {
    let hi = (x.to_bits() >> 32) as u32 & 0x7fff_ffff;
    if hi >= 0x4020_0000 {
        0
    } else if hi >= 0x4012_2e8b {
        1
    } else if hi >= 0x4006_db6d {
        2
    } else {
        3
    }
}

/// `r(z) / (1 + z·s(z))`
#[inline]
pub(super) fn ratio(r: &[f64], s: &[f64], z: f64) -> f64 {
    horner(r, z) / (1.0 + z * horner(s, z))
}

fn pzero(x: f64) -> f64 {
    let i = interval(x);
    1.0 + ratio(&P_R[i], &P_S[i], 1.0 / (x * x))
}

fn qzero(x: f64) -> f64 {
    let i = interval(x);
    (-0.125 + ratio(&Q_R[i], &Q_S[i], 1.0 / (x * x))) / x
}

/// `(sin x - cos x, sin x + cos x)` for x >= 2.
///
/// Whichever of the two would cancel is rebuilt from
/// `(sin x - cos x)(sin x + cos x) = -cos 2x`.
fn phase(x: f64) -> (f64, f64) {
    let (s, c) = sincos(x);
    let mut ss = s - c;
    let mut cc = s + c;
    // x + x must stay finite
    if x < f64::MAX / 2.0 {
        let z = -sincos(x + x).1;
        if s * c < 0.0 {
            cc = z / ss;
        } else {
            ss = z / cc;
        }
    }
    (ss, cc)
}

pub(crate) fn j0(x: f64) -> f64 {
    if x.is_nan() {
        return x;
    }
    if x.is_infinite() {
        return 0.0;
    }
    let x = Float::abs(x);
    if x >= 2.0 {
        let (ss, cc) = phase(x);
        let z = if x > TWO_129 {
            cc
        } else {
            pzero(x) * cc - qzero(x) * ss
        };
        return INV_SQRT_PI * z / Float::sqrt(x);
    }
    if x < TWO_M13 {
        if x < TWO_M27 {
            return 1.0;
        }
        return 1.0 - 0.25 * x * x;
    }
    let z = x * x;
    let r = z * horner(&R0, z);
    let s = 1.0 + z * horner(&S0, z);
    if x < 1.0 {
        1.0 + z * (-0.25 + r / s)
    } else {
        let u = 0.5 * x;
        (1.0 + u) * (1.0 - u) + z * (r / s)
    }
}

pub(crate) fn y0(x: f64) -> f64 {
    if x.is_nan() || x < 0.0 {
        return f64::NAN;
    }
    if x.is_infinite() {
        return 0.0;
    }
    if x == 0.0 {
        return f64::NEG_INFINITY;
    }
    if x >= 2.0 {
        let (ss, cc) = phase(x);
        let z = if x > TWO_129 {
            ss
        } else {
            pzero(x) * ss + qzero(x) * cc
        };
        return INV_SQRT_PI * z / Float::sqrt(x);
    }
    if x <= TWO_M27 {
        return U0[0] + TWO_OVER_PI * Float::ln(x);
    }
    let z = x * x;
    let u = horner(&U0, z);
    let v = 1.0 + z * horner(&V0, z);
    u / v + TWO_OVER_PI * (j0(x) * Float::ln(x))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol * b.abs().max(1.0)
    }

    #[test]
    fn j0_reference_values() {
        let cases: [(f64, f64); 8] = [
            (1e-5, 0.999999999975),
            (0.5, 0.9384698072408129),
            (1.0, 0.7651976865579666),
            (2.0, 0.22389077914123567),
            (2.5, -0.048383776468198),
            (5.0, -0.1775967713143383),
            (10.0, -0.24593576445134835),
            (100.0, 0.019985850304223122),
        ];
        for (x, want) in cases {
            assert!(close(j0(x), want, 1e-15), "j0({x}) = {}, want {want}", j0(x));
            assert_eq!(j0(-x), j0(x));
        }
    }

    #[test]
    fn y0_reference_values() {
        let cases: [(f64, f64); 7] = [
            (1e-5, -7.40316028370197),
            (0.5, -0.44451873350670656),
            (1.0, 0.08825696421567696),
            (2.0, 0.5103756726497451),
            (5.0, -0.30851762524903376),
            (10.0, 0.055671167283599395),
            (100.0, -0.07724431336508315),
        ];
        for (x, want) in cases {
            assert!(close(y0(x), want, 1e-15), "y0({x}) = {}, want {want}", y0(x));
        }
    }

    #[test]
    fn order_zero_specials() {
        assert_eq!(j0(0.0), 1.0);
        assert_eq!(j0(f64::INFINITY), 0.0);
        assert_eq!(j0(f64::NEG_INFINITY), 0.0);
        assert!(j0(f64::NAN).is_nan());
        assert_eq!(y0(0.0), f64::NEG_INFINITY);
        assert_eq!(y0(-0.0), f64::NEG_INFINITY);
        assert!(y0(-1.0).is_nan());
        assert!(y0(f64::NAN).is_nan());
        assert_eq!(y0(f64::INFINITY), 0.0);
    }

    #[test]
    fn huge_arguments_stay_finite() {
        for x in [1e20, 1e40, 1e300, f64::MAX] {
            assert!(j0(x).abs() < 1e-9);
            assert!(y0(x).abs() < 1e-9);
        }
    }

    #[test]
    fn interval_boundaries() {
        assert_eq!(interval(2.0), 3);
        assert_eq!(interval(3.0), 2);
        assert_eq!(interval(5.0), 1);
        assert_eq!(interval(8.0), 0);
        assert_eq!(interval(1e10), 0);
    }
}
