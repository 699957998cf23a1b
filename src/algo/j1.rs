//! Bessel functions of order one, J₁ and Y₁.
//!
//! fdlibm `e_j1.c`, laid out like the order-zero kernels: a rational form on
//! [0, 2) and the Hankel envelope P₁, Q₁ for x >= 2.

#![allow(clippy::excessive_precision)]

use num_traits::Float;

use super::j0::{interval, ratio};
use super::trig::sincos;
use crate::algo::constants::{INV_SQRT_PI, TWO_129, TWO_M27, TWO_OVER_PI};
use crate::utils::horner;

const TWO_M54: f64 = 1.0 / (1_u64 << 54) as f64;

// J₁ on [0, 2): x/2 + x·R(x²)/S(x²), R carrying the leading z
const R1: [f64; 4] = [
    -6.25000000000000000000e-02,
    1.40705666955189706048e-03,
    -1.59955631084035597520e-05,
    4.96727999609584448412e-08,
];
const S1: [f64; 5] = [
    1.91537599538363460805e-02,
    1.85946785588630915560e-04,
    1.17718464042623683263e-06,
    5.04636257076217042715e-09,
    1.23542274426137913908e-11,
];

// Y₁ on [0, 2): x·U(x²)/V(x²) + (2/π)·(J₁(x)·ln x - 1/x)
const U1: [f64; 5] = [
    -1.96057090646238940668e-01,
    5.04438716639811282616e-02,
    -1.91256895875763547298e-03,
    2.35252600561610495928e-05,
    -9.19099158039878874504e-08,
];
const V1: [f64; 5] = [
    1.99167318236649903973e-02,
    2.02552581025135171496e-04,
    1.35608801097516229404e-06,
    6.22741452364621501295e-09,
    1.66559246207992079114e-11,
];

// P₁ - 1 = R/S in z = 1/x²
#[rustfmt::skip]
const P_R: [[f64; 6]; 4] = [
    [0.0, 1.17187499999988647970e-01, 1.32394806593073575129e+01,
     4.12051854307378562225e+02, 3.87474538913960532227e+03, 7.91447954031891731574e+03],
    [1.31990519556243522749e-11, 1.17187493190614097638e-01, 6.80275127868432871736e+00,
     1.08308182990189109773e+02, 5.17636139533199752805e+02, 5.28715201363337541807e+02],
    [3.02503916137373618024e-09, 1.17186865567253592491e-01, 3.93297750033315640650e+00,
     3.51194035591636932736e+01, 9.10550110750781271918e+01, 4.85590685197364919645e+01],
    [1.07710830106873743082e-07, 1.17176219462683348094e-01, 2.36851496667608785174e+00,
     1.22426109148261232917e+01, 1.76939711271687727390e+01, 5.07352312588818499250e+00],
];
#[rustfmt::skip]
const P_S: [[f64; 5]; 4] = [
    [1.14207370375678408436e+02, 3.65093083420853463394e+03, 3.69562060269033463555e+04,
     9.76027935934950801311e+04, 3.08042720627888811578e+04],
    [5.92805987221131331921e+01, 9.91401418733614377743e+02, 5.35326695291487976647e+03,
     7.84469031749551231769e+03, 1.50404688810361062679e+03],
    [3.47913095001251519989e+01, 3.36762458747825746741e+02, 1.04687139975775130551e+03,
     8.90811346398256432622e+02, 1.03787932439639277504e+02],
    [2.14364859363821409488e+01, 1.25290227168402751090e+02, 2.32276469057162813669e+02,
     1.17679373287147100768e+02, 8.36463893371618283368e+00],
];

// (Q₁·x - 3/8) = R/S in z = 1/x²
#[rustfmt::skip]
const Q_R: [[f64; 6]; 4] = [
    [0.0, -1.02539062499992714161e-01, -1.62717534544589987888e+01,
     -7.59601722513950107896e+02, -1.18498066702429587167e+04, -4.84385124285750353010e+04],
    [-2.08979931141764104297e-11, -1.02539050241375426231e-01, -8.05644828123936029840e+00,
     -1.83669607474888380239e+02, -1.37319376065508163265e+03, -2.61244440453215656817e+03],
    [-5.07831226461766561369e-09, -1.02537829820837089745e-01, -4.61011581139473403113e+00,
     -5.78472216562783643212e+01, -2.28244540737631695038e+02, -2.19210128478909325622e+02],
    [-1.78381727510958865572e-07, -1.02517042607985553460e-01, -2.75220568278187460720e+00,
     -1.96636162643703720221e+01, -4.23253133372830490089e+01, -2.13719211703704061733e+01],
];
#[rustfmt::skip]
const Q_S: [[f64; 6]; 4] = [
    [1.61395369700722909556e+02, 7.82538599923348465381e+03, 1.33875336287249578163e+05,
     7.19657723683240939863e+05, 6.66601232617776375264e+05, -2.94490264303834643215e+05],
    [8.12765501384335777857e+01, 1.99179873460485964642e+03, 1.74684851924908907677e+04,
     4.98514270910352279316e+04, 2.79480751638918118260e+04, -4.71918354795128470869e+03],
    [4.76651550323729509273e+01, 6.73865112676699709482e+02, 3.38015286679526343505e+03,
     5.54772909720722782367e+03, 1.90311919338810798763e+03, -1.35201191444307340817e+02],
    [2.95333629060523854548e+01, 2.52981549982190529136e+02, 7.57502834868645436472e+02,
     7.39393205320467245656e+02, 1.55949003336666123687e+02, -4.95949898822628210127e+00],
];

fn pone(x: f64) -> f64 {
    let i = interval(x);
    1.0 + ratio(&P_R[i], &P_S[i], 1.0 / (x * x))
}

fn qone(x: f64) -> f64 {
    let i = interval(x);
    (0.375 + ratio(&Q_R[i], &Q_S[i], 1.0 / (x * x))) / x
}

/// `(-(sin x + cos x), sin x - cos x)` for x >= 2, with the cancelling one
/// rebuilt from their product `cos 2x`.
fn phase(x: f64) -> (f64, f64) {
    let (s, c) = sincos(x);
    let mut ss = -s - c;
    let mut cc = s - c;
    if x < f64::MAX / 2.0 {
        let z = sincos(x + x).1;
        if s * c > 0.0 {
            cc = z / ss;
        } else {
            ss = z / cc;
        }
    }
    (ss, cc)
}

pub(crate) fn j1(x: f64) -> f64 {
    if x.is_nan() {
        return x;
    }
    if x.is_infinite() {
        return 0.0;
    }
    if x == 0.0 {
        return x;
    }
    let neg = x < 0.0;
    let ax = Float::abs(x);
    let r = if ax >= 2.0 {
        let (ss, cc) = phase(ax);
        let z = if ax > TWO_129 {
            cc
        } else {
            pone(ax) * cc - qone(ax) * ss
        };
        INV_SQRT_PI * z / Float::sqrt(ax)
    } else if ax < TWO_M27 {
        0.5 * ax
    } else {
        let z = ax * ax;
        let r = z * horner(&R1, z) * ax;
        let s = 1.0 + z * horner(&S1, z);
        0.5 * ax + r / s
    };
    if neg {
        -r
    } else {
        r
    }
}

pub(crate) fn y1(x: f64) -> f64 {
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
            pone(x) * ss + qone(x) * cc
        };
        return INV_SQRT_PI * z / Float::sqrt(x);
    }
    if x <= TWO_M54 {
        return -TWO_OVER_PI / x;
    }
    let z = x * x;
    let u = horner(&U1, z);
    let v = 1.0 + z * horner(&V1, z);
    x * (u / v) + TWO_OVER_PI * (j1(x) * Float::ln(x) - 1.0 / x)
}
