//! Simultaneous sine and cosine.
//!
//! Octant reduction with a three-part π/4 (Cody–Waite) followed by the Cephes
//! minimax polynomials on [-π/4, π/4].

#![allow(clippy::excessive_precision)]

use num_traits::Float;

use crate::utils::horner;

// π/4 split so that y*PI4A and y*PI4B are exact for the octant counts we accept.
const PI4A: f64 = 7.85398125648498535156e-1;
const PI4B: f64 = 3.77489470793079817668e-8;
const PI4C: f64 = 2.69515142907905952645e-15;

const FOUR_OVER_PI: f64 = 1.27323954473516268615e0;

/// Above this the three-part reduction loses bits; hand off to the libm
/// routine, which does a full Payne–Hanek reduction.
const REDUCE_THRESHOLD: f64 = (1_u64 << 29) as f64;

/// sin(z) = z + z³·S(z²)
const SIN: [f64; 6] = [
    -1.66666666666666307295e-1,
    8.33333333332211858878e-3,
    -1.98412698295895385996e-4,
    2.75573136213857245213e-6,
    -2.50507477628578072866e-8,
    1.58962301576546568060e-10,
];

/// cos(z) = 1 - z²/2 + z⁴·C(z²)
const COS: [f64; 6] = [
    4.16666666666665929218e-2,
    -1.38888888888730564116e-3,
    2.48015872888517045348e-5,
    -2.75573141792967388112e-7,
    2.08757008419747316778e-9,
    -1.13585365213876817300e-11,
];

pub(crate) fn sincos(x: f64) -> (f64, f64) {
    if x == 0.0 {
        return (x, 1.0);
    }
    if !x.is_finite() {
        return (f64::NAN, f64::NAN);
    }

    let mut sin_neg = x < 0.0;
    let mut cos_neg = false;
    let x = Float::abs(x);
    if x >= REDUCE_THRESHOLD {
        let (s, c) = Float::sin_cos(x);
        return (if sin_neg { -s } else { s }, c);
    }

    let mut j = (x * FOUR_OVER_PI) as u64;
    let mut y = j as f64;
    // odd octants are measured from the next multiple of π/4
    if j & 1 == 1 {
        j += 1;
        y += 1.0;
    }
    j &= 7;
    let z = ((x - y * PI4A) - y * PI4B) - y * PI4C;

    if j > 3 {
        j -= 4;
        sin_neg = !sin_neg;
        cos_neg = !cos_neg;
    }
    if j > 1 {
        cos_neg = !cos_neg;
    }

    let zz = z * z;
    let mut c = 1.0 - 0.5 * zz + zz * zz * horner(&COS, zz);
    let mut s = z + z * zz * horner(&SIN, zz);
    if j == 1 || j == 2 {
        core::mem::swap(&mut s, &mut c);
    }
    if cos_neg {
        c = -c;
    }
    if sin_neg {
        s = -s;
    }
    (s, c)
}
