//! Jₙ(x) and Yₙ(x) for large n by the uniform asymptotic expansion.
//!
//! With z = x/n and ζ(z) defined by (2/3)(-ζ)^(3/2) = √(z²-1) - arcsec z
//! (and its continuation for z < 1),
//!
//! ```text
//! Jₙ(nz) ~ φ/n^(1/3) · (Ai(n^(2/3)ζ)·(1 + A₁/n²) + Ai'(n^(2/3)ζ)·(B₀ + B₁/n²)/n^(4/3))
//! Yₙ(nz) ~ -φ/n^(1/3) · (Bi(n^(2/3)ζ)·(1 + A₁/n²) + Bi'(n^(2/3)ζ)·(B₀ + B₁/n²)/n^(4/3))
//! ```
//!
//! where φ = (4ζ/(1-z²))^(1/4). The omitted terms are O(n⁻⁴) relative, so
//! the expansion is used only for orders where that is below f64 precision.
//! Its cost does not depend on n.

#![allow(clippy::excessive_precision)]

use num_traits::Float;

use super::airy::{airy, oscillatory, Airy, W_ASYMPTOTIC};
use super::trig::sincos;
use crate::utils::horner;

const CBRT_2: f64 = 1.25992104989487316477e0;
const FRAC_1_SQRT_2: f64 = core::f64::consts::FRAC_1_SQRT_2;

// Debye polynomial coefficients uₖ, vₖ
const U1: f64 = 6.94444444444444444444e-2;
const U2: f64 = 3.71334876543209876543e-2;
const U3: f64 = 3.79930591278006401463e-2;
const V1: f64 = -9.72222222222222222222e-2;
const V2: f64 = -4.38850308641975308642e-2;

/// Below this |ζ| the closed forms of A₁, B₀, B₁ cancel; use the series.
const ZETA_SERIES: f64 = 0.25;

// A₁, B₀, B₁ as polynomials in ζ on |ζ| <= 0.25
const A1_SERIES: [f64; 11] = [
    -4.44444444444443920238e-3,
    -1.46370746350559576417e-3,
    7.06417272413648149062e-4,
    6.72887607004380888606e-4,
    1.54002768337634261959e-4,
    -5.76630885630860899355e-5,
    -4.98865992954352004975e-5,
    -1.04270479169043808884e-5,
    3.87761571297536016176e-6,
    3.10837201624502317842e-6,
    5.94343885759332736524e-7,
];
const B0_SERIES: [f64; 11] = [
    1.79988721413553298723e-2,
    8.88888888888784280072e-3,
    1.62568716268478564006e-3,
    -3.64284864884540618370e-4,
    -3.02060449225270317129e-4,
    -5.84436026782309656251e-5,
    1.67698863286930737350e-5,
    1.30175096028219771597e-5,
    2.44633588022071120424e-6,
    -7.90512710894878015217e-7,
    -5.72317410589945007100e-7,
];
const B1_SERIES: [f64; 11] = [
    -1.49282953213428878923e-3,
    -1.39406307977498023937e-3,
    -3.82095414556536492787e-4,
    1.69092147263404017350e-4,
    1.70985349764537464703e-4,
    4.10561427290314898857e-5,
    -1.70662781912164403698e-5,
    -1.55079946178277819163e-5,
    -3.42128843956322969110e-6,
    1.41822520926714772824e-6,
    1.15894723222333684464e-6,
];

/// Geometry of the turning point for one (n, x).
struct Turning {
    /// +1 below the turning point (x < n), -1 at or above it.
    side: f64,
    /// ξ/n: artanh s - s below, t - arctan t above.
    g: f64,
    /// φ as above.
    phi: f64,
    /// s = √(1-z²) below, t = √(z²-1) above.
    root: f64,
}

/// Σ r^k/(2k+3) for |r| < 1/4.
fn odd_tail(r: f64) -> f64 {
    let mut acc = 0.0;
    let mut p = 1.0;
    let mut k = 0.0;
    loop {
        let term = p / (2.0 * k + 3.0);
        acc += term;
        if Float::abs(term) < 1e-17 * acc {
            return acc;
        }
        p *= r;
        k += 1.0;
    }
}

fn turning(n: f64, x: f64) -> Turning {
    if x < n {
        let d = (n - x) / n;
        let s2 = d * (2.0 - d);
        let s = Float::sqrt(s2);
        let (g, phi) = if s < 0.5 {
            // artanh s - s = s³·Σ s^2k/(2k+3)
            let acc = odd_tail(s2);
            (s * s2 * acc, CBRT_2 * Float::powf(3.0 * acc, 1.0 / 6.0))
        } else {
            let z = x / n;
            let ln_z = if z > 1e-300 {
                Float::ln(z)
            } else {
                Float::ln(x) - Float::ln(n)
            };
            let g = Float::ln_1p(s) - ln_z - s;
            (g, CBRT_2 * Float::powf(3.0 * g, 1.0 / 6.0) / Float::sqrt(s))
        };
        Turning {
            side: 1.0,
            g,
            phi,
            root: s,
        }
    } else {
        let d = (x - n) / n;
        let t = Float::sqrt(d) * Float::sqrt(2.0 + d);
        let (g, phi) = if t < 0.5 {
            // t - arctan t = t³·Σ (-t²)^k/(2k+3)
            let acc = odd_tail(-t * t);
            (t * t * t * acc, CBRT_2 * Float::powf(3.0 * acc, 1.0 / 6.0))
        } else {
            let g = t - Float::atan(t);
            (g, CBRT_2 * Float::powf(3.0 * g, 1.0 / 6.0) / Float::sqrt(t))
        };
        Turning {
            side: -1.0,
            g,
            phi,
            root: t,
        }
    }
}

/// A₁, B₀, B₁ of the expansion.
fn coefficients(tp: &Turning) -> (f64, f64, f64) {
    let big = 1.5 * tp.g;
    let zeta = tp.side * Float::powf(big, 2.0 / 3.0);
    if Float::abs(zeta) < ZETA_SERIES {
        return (
            horner(&A1_SERIES, zeta),
            horner(&B0_SERIES, zeta),
            horner(&B1_SERIES, zeta),
        );
    }
    // q = 1/(1-z²) in both regions; the square may overflow to give q = -0
    let q = tp.side / (tp.root * tp.root);
    let r = 1.0 / (big * tp.root);
    let z2 = Float::powf(big, 4.0 / 3.0);
    let z3 = tp.side * big * big;
    let z5 = tp.side * Float::powf(big, 10.0 / 3.0);
    let u1 = (3.0 - 5.0 * q) / 24.0;
    let u2 = (81.0 * q - 462.0 * q * q + 385.0 * q * q * q) / 1152.0;
    let p3 = (30375.0 * q - 369603.0 * q * q + 765765.0 * q * q * q - 425425.0 * q * q * q * q)
        / 414720.0;
    let a1 = u2 + 1.5 * V1 * r * u1 + 2.25 * V2 / z3;
    let b0 = -r * zeta * u1 - 1.5 * U1 / z2;
    let b1 = -(r * zeta * p3 + 1.5 * U1 * u2 / z2 + 2.25 * U2 * r * u1 / z2 + 3.375 * U3 / z5);
    (a1, b0, b1)
}

/// cos and sin of ξ - π/4 for x > n√2, where ξ = √(x²-n²) - n·arctan t.
///
/// ξ - π/4 = (x - nπ/2 - π/4) - θ with θ = n²/(x + nt) - n·arctan(1/t), so the
/// large part is reduced exactly through sincos(x) and only the small θ is
/// formed in floating point.
fn phase(n: f64, x: f64, t: f64) -> (f64, f64) {
    let theta = n * (n / (x + n * t)) - n * Float::atan(1.0 / t);
    let (sx, cx) = sincos(x);
    // x - nπ/2
    let (cb, sb) = match (n as u64) & 3 {
        0 => (cx, sx),
        1 => (sx, -cx),
        2 => (-cx, -sx),
        _ => (-sx, cx),
    };
    // minus π/4
    let (cg, sg) = ((cb + sb) * FRAC_1_SQRT_2, (sb - cb) * FRAC_1_SQRT_2);
    let (st, ct) = sincos(theta);
    (cg * ct + sg * st, sg * ct - cg * st)
}

/// m·e^e without overflowing in the intermediate exponential.
fn scaled(m: f64, e: f64) -> f64 {
    if m == 0.0 {
        return 0.0;
    }
    if Float::abs(e) < 700.0 {
        return m * Float::exp(e);
    }
    let v = Float::exp(e + Float::ln(Float::abs(m)));
    if m < 0.0 {
        -v
    } else {
        v
    }
}

/// (Jₙ(x), Yₙ(x)) for x > 0 and large n.
pub(super) fn jy_uniform(n: f64, x: f64) -> (f64, f64) {
    let tp = turning(n, x);
    let (a1, b0, b1) = coefficients(&tp);
    let xi = n * tp.g;
    let w = tp.side * Float::powf(1.5 * xi, 2.0 / 3.0);

    let Airy {
        ai,
        aip,
        bi,
        bip,
        scale,
    } = if w <= -W_ASYMPTOTIC && tp.root > 1.0 {
        let (c, s) = phase(n, x, tp.root);
        oscillatory(-w, xi, c, s)
    } else {
        airy(w, xi)
    };

    let n2 = n * n;
    let n13 = Float::cbrt(n);
    let n43 = n13 * n13 * n13 * n13;
    let lead = 1.0 + a1 / n2;
    let slope = (b0 + b1 / n2) / n43;
    let amp = tp.phi / n13;
    let j = amp * (ai * lead + aip * slope);
    let y = -amp * (bi * lead + bip * slope);
    (scaled(j, -scale), scaled(y, scale))
}
