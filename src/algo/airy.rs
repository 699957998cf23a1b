//! Airy functions Ai, Bi and their derivatives for real argument.
//!
//! Only what the large-order Bessel expansion needs. On (-10, 10) the Airy
//! equation y'' = w·y is stepped by Taylor series from the nearest integer
//! node; outside it the Poincaré asymptotic series take over. For w >= 10 the
//! results come back with the e^∓ξ factor split off so that Ai and Bi of
//! arguments far beyond the f64 range can still be combined.

#![allow(clippy::excessive_precision)]

use num_traits::Float;

use super::trig::sincos;
use crate::algo::constants::INV_SQRT_PI;

/// Ai, Ai', Bi, Bi' with Ai = `ai`·e^-`scale` and Bi = `bi`·e^`scale`.
#[derive(Clone, Copy, Debug)]
pub(super) struct Airy {
    pub ai: f64,
    pub aip: f64,
    pub bi: f64,
    pub bip: f64,
    pub scale: f64,
}

/// Edge of the Taylor region.
pub(super) const W_ASYMPTOTIC: f64 = 10.0;

/// Ai, Ai', Bi, Bi' at w = -10, -9, ..., 10.
#[rustfmt::skip]
const NODES: [[f64; 4]; 21] = [
    [4.02412384864431906894e-2, 9.96265044132790055905e-1, -3.14679829643838633162e-1, 1.19414113399909238278e-1],
    [-2.21337215473414036742e-2, -9.75663980926331594713e-1, 3.24947323455244917919e-1, -5.74005138436692543927e-2],
    [-5.27050503563862026221e-2, 9.35560938198306551026e-1, -3.3125158075113785997e-1, -1.5945049781298138935e-1],
    [1.8428083525050563728e-1, -7.71008168410126547731e-1, 2.93762071854414020124e-1, 4.98244590058113488746e-1],
    [-3.29145173629823105231e-1, 3.4593548728134289493e-1, -1.46698376670557037875e-1, -8.12898785105067000425e-1],
    [3.50761009024114319788e-1, 3.27192818554443136795e-1, -1.3836913490160057685e-1, 7.78411773001899246094e-1],
    [-7.02655329492895150991e-2, -7.90628575368581380296e-1, 3.92234705706999289554e-1, -1.1667056743834089368e-1],
    [-3.78814293677658074347e-1, 3.14583769216598813651e-1, -1.98289626374926543221e-1, -6.75611222685258537668e-1],
    [2.27407428201685575992e-1, 6.18259020741691041406e-1, -4.12302587956398488083e-1, 2.78795166921169522685e-1],
    [5.355608832923521188e-1, -1.0160567116645209395e-2, 1.03997389496944611889e-1, 5.92375626422792350817e-1],
    [3.5502805388781723926e-1, -2.58819403792806798405e-1, 6.14926627446000735151e-1, 4.48288357353826357915e-1],
    [1.35292416312881415524e-1, -1.59147441296793212788e-1, 1.20742359495287125944e0, 9.32435933392775632959e-1],
    [3.49241304232743791353e-2, -5.3090384433653631704e-2, 3.29809499997821471028e0, 4.10068204993288988938e0],
    [6.59113935746071914426e-3, -1.19129767059513184738e-2, 1.40373289637302320317e+1, 2.29222149663821701851e+1],
    [9.51563851204801873621e-4, -1.95864095020417890014e-3, 8.38470714084681399226e+1, 1.61926683504613401843e+2],
    [1.0834442813607441735e-4, -2.47413890868462476e-4, 6.57792044171171182441e+2, 1.43581908021798251867e+3],
    [9.94769436025288957024e-6, -2.47652003970349547542e-5, 6.53644610480986345376e+3, 1.57256026219304768394e+4],
    [7.49212886399716708077e-7, -2.00815089473879199117e-6, 8.03277907094302470054e+4, 2.09552670873971319506e+5],
    [4.69220761609923162565e-8, -1.34143929790678657429e-7, 1.19958600412445993088e+6, 3.35434231274453887651e+6],
    [2.47116843087248984329e-9, -7.48064138965894641276e-9, 2.14728688914353490934e+7, 6.38074897809082138545e+7],
    [1.10475325528986859336e-10, -3.52063367673892363662e-10, 4.55641153548225141e+8, 1.42923613448286577612e+9],
];

const TAYLOR_TERMS: usize = 40;
const SERIES_TERMS: usize = 30;

/// Value and derivative at `c + h` of the solution of y'' = (c + h)·y with
/// y(c) = `y0`, y'(c) = `y1`.
fn taylor(y0: f64, y1: f64, c: f64, h: f64) -> (f64, f64) {
    // a[k+2] = (c·a[k] + a[k-1]) / ((k+2)(k+1))
    let (mut a_prev, mut a_cur, mut a_next) = (0.0, y0, y1);
    let mut value = y0 + h * y1;
    let mut deriv = y1;
    let mut p = h;
    for k in 0..TAYLOR_TERMS {
        let kf = k as f64;
        let a = (c * a_cur + a_prev) / ((kf + 2.0) * (kf + 1.0));
        deriv += (kf + 2.0) * a * p;
        p *= h;
        value += a * p;
        a_prev = a_cur;
        a_cur = a_next;
        a_next = a;
    }
    (value, deriv)
}

/// Coefficients uₖ, vₖ of the Airy asymptotic series, advanced from k-1 to k.
fn next_uv(u: f64, k: usize) -> (f64, f64) {
    let kf = k as f64;
    let u = u * (6.0 * kf - 5.0) * (6.0 * kf - 3.0) * (6.0 * kf - 1.0)
        / ((2.0 * kf - 1.0) * 216.0 * kf);
    (u, -(6.0 * kf + 1.0) / (6.0 * kf - 1.0) * u)
}

/// Airy functions at `w`, where `xi` = (2/3)|w|^(3/2).
///
/// For w <= -10 this evaluates the phase itself; callers that already hold
/// cos and sin of ξ - π/4 should use [`oscillatory`].
pub(super) fn airy(w: f64, xi: f64) -> Airy {
    if w >= W_ASYMPTOTIC {
        return growing(w, xi);
    }
    if w <= -W_ASYMPTOTIC {
        let (s, c) = sincos(xi - core::f64::consts::FRAC_PI_4);
        return oscillatory(-w, xi, c, s);
    }
    let node = Float::round(w);
    let [ai, aip, bi, bip] = NODES[(node + W_ASYMPTOTIC) as usize];
    let h = w - node;
    let (ai, aip) = taylor(ai, aip, node, h);
    let (bi, bip) = taylor(bi, bip, node, h);
    Airy {
        ai,
        aip,
        bi,
        bip,
        scale: 0.0,
    }
}

fn growing(w: f64, xi: f64) -> Airy {
    let (mut sa, mut sda, mut sb, mut sdb) = (1.0, 1.0, 1.0, 1.0);
    let (mut u, mut p, mut sign) = (1.0, 1.0, 1.0);
    for k in 1..SERIES_TERMS {
        let (uk, vk) = next_uv(u, k);
        u = uk;
        p /= xi;
        sign = -sign;
        let (tu, tv) = (uk * p, vk * p);
        sb += tu;
        sdb += tv;
        sa += sign * tu;
        sda += sign * tv;
        if Float::abs(tu) < 1e-17 * sb && Float::abs(tv) < 1e-17 {
            break;
        }
    }
    let q = Float::sqrt(Float::sqrt(w));
    Airy {
        ai: 0.5 * INV_SQRT_PI * sa / q,
        aip: -0.5 * INV_SQRT_PI * q * sda,
        bi: INV_SQRT_PI * sb / q,
        bip: INV_SQRT_PI * q * sdb,
        scale: xi,
    }
}

/// Airy functions at -`x` for x >= 10, given `c` = cos(ξ - π/4) and
/// `s` = sin(ξ - π/4).
pub(super) fn oscillatory(x: f64, xi: f64, c: f64, s: f64) -> Airy {
    // even and odd parts of Σ uₖ ξ^-k with signs (-1)^⌊k/2⌋
    let (mut pe, mut po, mut de, mut d_o) = (1.0, 0.0, 1.0, 0.0);
    let (mut u, mut p) = (1.0, 1.0);
    for k in 1..SERIES_TERMS {
        let (uk, vk) = next_uv(u, k);
        u = uk;
        p /= xi;
        let sign = if (k / 2) % 2 == 0 { 1.0 } else { -1.0 };
        let (tu, tv) = (sign * uk * p, sign * vk * p);
        if k % 2 == 0 {
            pe += tu;
            de += tv;
        } else {
            po += tu;
            d_o += tv;
        }
        if Float::abs(tu) < 1e-18 {
            break;
        }
    }
    let q = Float::sqrt(Float::sqrt(x));
    Airy {
        ai: INV_SQRT_PI * (c * pe + s * po) / q,
        aip: INV_SQRT_PI * q * (s * de - c * d_o),
        bi: INV_SQRT_PI * (c * po - s * pe) / q,
        bip: INV_SQRT_PI * q * (c * de + s * d_o),
        scale: 0.0,
    }
}
