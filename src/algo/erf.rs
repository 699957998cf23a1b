//! Error function and complementary error function.
//!
//! Piecewise rational approximations on [0, 0.84375), [0.84375, 1.25),
//! [1.25, 1/0.35) and [1/0.35, 28), with coefficients from fdlibm `s_erf.c`.

#![allow(clippy::excessive_precision)]

use num_traits::Float;

use crate::utils::horner;

/// erf(1) rounded to single precision.
const ERX: f64 = 8.45062911510467529297e-01;
/// 2/√π - 1
const EFX: f64 = 1.28379167095512586316e-01;
const EFX8: f64 = 1.02703333676410069053e+00;

/// Below this, x + EFX*x would underflow in the product; scale by 8 first.
const TINY_SCALE: f64 = 2.848094538889218e-306;

const TWO_M28: f64 = 1.0 / (1_u64 << 28) as f64;
const TWO_M56: f64 = 1.0 / (1_u64 << 56) as f64;

// |x| < 0.84375
const PP: [f64; 5] = [
    1.28379167095512558561e-01,
    -3.25042107247001499370e-01,
    -2.84817495755985104766e-02,
    -5.77027029648944159157e-03,
    -2.37630166566501626084e-05,
];
const QQ: [f64; 5] = [
    3.97917223959155352819e-01,
    6.50222499887672944485e-02,
    5.08130628187576562776e-03,
    1.32494738004321644526e-04,
    -3.96022827877536812320e-06,
];

// 0.84375 <= |x| < 1.25
const PA: [f64; 7] = [
    -2.36211856075265944077e-03,
    4.14856118683748331666e-01,
    -3.72207876035701323847e-01,
    3.18346619901161753674e-01,
    -1.10894694282396677476e-01,
    3.54783043256182359371e-02,
    -2.16637559486879084300e-03,
];
const QA: [f64; 6] = [
    1.06420880400844228286e-01,
    5.40397917702171048937e-01,
    7.18286544141962662868e-02,
    1.26171219808761642112e-01,
    1.36370839120290507362e-02,
    1.19844998467991074170e-02,
];

// 1.25 <= |x| < 1/0.35
const RA: [f64; 8] = [
    -9.86494403484714822705e-03,
    -6.93858572707181764372e-01,
    -1.05586262253232909814e+01,
    -6.23753324503260060396e+01,
    -1.62396669462573470355e+02,
    -1.84605092906711035994e+02,
    -8.12874355063065934246e+01,
    -9.81432934416914548592e+00,
];
const SA: [f64; 8] = [
    1.96512716674392571292e+01,
    1.37657754143519042600e+02,
    4.34565877475229228821e+02,
    6.45387271733267880336e+02,
    4.29008140027567833386e+02,
    1.08635005541779435134e+02,
    6.57024977031928170135e+00,
    -6.04244152148580987438e-02,
];

// 1/0.35 <= |x| < 28
const RB: [f64; 7] = [
    -9.86494292470009928597e-03,
    -7.99283237680523006574e-01,
    -1.77579549177547519889e+01,
    -1.60636384855821916062e+02,
    -6.37566443368389627722e+02,
    -1.02509513161107724954e+03,
    -4.83519191608651397019e+02,
];
const SB: [f64; 7] = [
    3.03380607434824582924e+01,
    3.25792512996573918826e+02,
    1.53672958608443695994e+03,
    3.19985821950859553908e+03,
    2.55305040643316442583e+03,
    4.74528541206955367215e+02,
    -2.24409524465858183362e+01,
];

/// `1 + z*(c[0] + z*(c[1] + ...))`
#[inline]
fn denom(c: &[f64], z: f64) -> f64 {
    1.0 + z * horner(c, z)
}

/// `y` with erf(x) = x + x*y on |x| < 0.84375.
#[inline]
fn small_y(x: f64) -> f64 {
    let z = x * x;
    horner(&PP, z) / denom(&QQ, z)
}

/// (erf(x) - ERX) on [0.84375, 1.25).
#[inline]
fn near_one(x: f64) -> f64 {
    let s = x - 1.0;
    horner(&PA, s) / denom(&QA, s)
}

/// x·erfc(x) for 1.25 <= x < 28.
///
/// `exp(-x²)` is evaluated as `exp(-z²)·exp((z-x)(z+x))` with `z` being `x`
/// truncated to its upper 32 bits, so the leading square is exact.
fn tail(x: f64) -> f64 {
    let s = 1.0 / (x * x);
    let (r, q) = if x < 1.0 / 0.35 {
        (horner(&RA, s), denom(&SA, s))
    } else {
        (horner(&RB, s), denom(&SB, s))
    };
    let z = f64::from_bits(x.to_bits() & 0xffff_ffff_0000_0000);
    Float::exp(-z * z - 0.5625) * Float::exp((z - x) * (z + x) + r / q)
}

pub(crate) fn erf(x: f64) -> f64 {
    if x.is_nan() {
        return x;
    }
    if x.is_infinite() {
        return Float::signum(x);
    }
    let neg = x.is_sign_negative();
    let x = Float::abs(x);

    let r = if x < 0.84375 {
        if x < TWO_M28 {
            if x < TINY_SCALE {
                0.125 * (8.0 * x + EFX8 * x)
            } else {
                x + EFX * x
            }
        } else {
            x + x * small_y(x)
        }
    } else if x < 1.25 {
        ERX + near_one(x)
    } else if x >= 6.0 {
        1.0
    } else {
        1.0 - tail(x) / x
    };
    if neg {
        -r
    } else {
        r
    }
}

pub(crate) fn erfc(x: f64) -> f64 {
    if x.is_nan() {
        return x;
    }
    if x.is_infinite() {
        return if x > 0.0 { 0.0 } else { 2.0 };
    }
    let ax = Float::abs(x);
    if ax < 0.84375 {
        if ax < TWO_M56 {
            return 1.0 - x;
        }
        let y = small_y(ax);
        if x < 0.25 {
            return 1.0 - (x + x * y);
        }
        // 1 - erf(x) rearranged to keep the 0.5 exact
        return 0.5 - (x * y + (x - 0.5));
    }
    let neg = x < 0.0;
    let x = ax;
    if x < 1.25 {
        let p = near_one(x);
        return if neg { 1.0 + ERX + p } else { 1.0 - ERX - p };
    }
    if x < 28.0 {
        if neg && x > 6.0 {
            return 2.0;
        }
        let r = tail(x) / x;
        return if neg { 2.0 - r } else { r };
    }
    if neg {
        2.0
    } else {
        0.0
    }
}
