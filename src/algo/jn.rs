//! Bessel functions of integer order, Jₙ and Yₙ.
//!
//! Jₙ recurs forward from J₀, J₁ when n <= x, where the recurrence is stable.
//! Otherwise a continued fraction gives Jₙ/Jₙ₋₁ and the recurrence runs
//! backward to be normalised against J₀ or J₁. Yₙ recurs forward. Both
//! recurrences take O(n) steps, so past [`UNIFORM_ORDER`] the uniform
//! asymptotic expansion in `uniform.rs` takes over. Orders above 2^53 are
//! rounded to the nearest f64 there.

use num_traits::Float;

use super::j0::{j0, y0};
use super::j1::{j1, y1};
use super::lgamma::lgamma;
use super::trig::sincos;
use super::uniform::jy_uniform;
use crate::algo::constants::{INV_SQRT_PI, TWO_302};

const TWO_M29: f64 = 1.0 / (1_u64 << 29) as f64;

/// Largest order served by the recurrences.
const UNIFORM_ORDER: u64 = 4096;

/// ln of the largest finite f64; the backward recurrence rescales beyond it.
const LOG_MAX: f64 = 7.09782712893383973096e+02;

/// Below this, the leading term of Jₙ is under half the smallest subnormal.
const LOG_UNDERFLOW: f64 = -746.0;

/// Leading Hankel term √(2/(πx))·cos(x - (2n+1)π/4), written with the
/// quadrant of n folded into the sin/cos signs.
fn jn_asymptotic(n: u64, x: f64) -> f64 {
    let (s, c) = sincos(x);
    let t = match n & 3 {
        0 => c + s,
        1 => -c + s,
        2 => -c - s,
        _ => c - s,
    };
    INV_SQRT_PI * t / Float::sqrt(x)
}

/// As [`jn_asymptotic`] with sin(x - (2n+1)π/4).
fn yn_asymptotic(n: u64, x: f64) -> f64 {
    let (s, c) = sincos(x);
    let t = match n & 3 {
        0 => s - c,
        1 => -s - c,
        2 => -s + c,
        _ => s + c,
    };
    INV_SQRT_PI * t / Float::sqrt(x)
}

/// Jₙ(x) for n > x > 2^-29 by Miller's backward recurrence.
fn jn_backward(n: u64, x: f64) -> f64 {
    let nf = n as f64;

    // Number of continued-fraction terms needed for Jₙ/Jₙ₋₁.
    let w = 2.0 * nf / x;
    let h = 2.0 / x;
    let mut q0 = w;
    let mut z = w + h;
    let mut q1 = w * z - 1.0;
    let mut k = 1_u64;
    while q1 < 1e9 {
        k += 1;
        z += h;
        let q2 = z * q1 - q0;
        q0 = q1;
        q1 = q2;
    }

    let mut t = 0.0;
    for i in (n..=n + k).rev() {
        t = 1.0 / (2.0 * i as f64 / x - t);
    }

    let mut a = t;
    let mut b = 1.0;
    // Jₙ₋₁/Jₙ can exceed the overflow threshold for large n
    let rescale = nf * Float::ln(Float::abs(w)) >= LOG_MAX;
    for i in (1..n).rev() {
        let next = b * (2.0 * i as f64) / x - a;
        a = b;
        b = next;
        if rescale && b > 1e100 {
            a /= b;
            t /= b;
            b = 1.0;
        }
    }

    // Normalise against whichever of J₀, J₁ is larger.
    let z0 = j0(x);
    let z1 = j1(x);
    if Float::abs(z0) >= Float::abs(z1) {
        t * z0 / b
    } else {
        t * z1 / a
    }
}

pub(crate) fn jn(n: i64, x: f64) -> f64 {
    if x.is_nan() {
        return x;
    }
    if x.is_infinite() {
        return 0.0;
    }
    if n == 0 {
        return j0(x);
    }
    if x == 0.0 {
        return 0.0;
    }
    // J₋ₙ(x) = (-1)ⁿ Jₙ(x) = Jₙ(-x)
    let (n, x) = if n < 0 {
        (n.unsigned_abs(), -x)
    } else {
        (n as u64, x)
    };
    if n == 1 {
        return j1(x);
    }
    let neg = x < 0.0 && n & 1 == 1;
    let x = Float::abs(x);
    let nf = n as f64;

    let b = if nf <= x {
        if x >= TWO_302 {
            jn_asymptotic(n, x)
        } else if n > UNIFORM_ORDER {
            jy_uniform(nf, x).0
        } else {
            let mut a = j0(x);
            let mut b = j1(x);
            for i in 1..n {
                let next = b * (2.0 * i as f64 / x) - a;
                a = b;
                b = next;
            }
            b
        }
    } else if n > 33 && nf * Float::ln(0.5 * x) - lgamma(nf + 1.0).0 < LOG_UNDERFLOW {
        // |Jₙ(x)| <= (x/2)ⁿ/n!
        0.0
    } else if x < TWO_M29 {
        if n > 33 {
            0.0
        } else {
            // (x/2)ⁿ/n!
            let half = 0.5 * x;
            let (num, den) = (2..=n).fold((half, 1.0), |(num, den), i| (num * half, den * i as f64));
            num / den
        }
    } else if n > UNIFORM_ORDER {
        jy_uniform(nf, x).0
    } else {
        jn_backward(n, x)
    };
    if neg {
        -b
    } else {
        b
    }
}

pub(crate) fn yn(n: i64, x: f64) -> f64 {
    if x.is_nan() || x < 0.0 {
        return f64::NAN;
    }
    if x.is_infinite() {
        return 0.0;
    }
    if n == 0 {
        return y0(x);
    }
    // Y₋ₙ(x) = (-1)ⁿ Yₙ(x)
    let neg = n < 0 && n & 1 == 1;
    if x == 0.0 {
        return if neg {
            f64::INFINITY
        } else {
            f64::NEG_INFINITY
        };
    }
    let n = n.unsigned_abs();

    let b = if n == 1 {
        y1(x)
    } else if x >= TWO_302 {
        yn_asymptotic(n, x)
    } else if n > UNIFORM_ORDER {
        jy_uniform(n as f64, x).1
    } else {
        let mut a = y0(x);
        let mut b = y1(x);
        let mut i = 1;
        // once b reaches -∞ it stays there
        while i < n && b != f64::NEG_INFINITY {
            let next = (2.0 * i as f64 / x) * b - a;
            a = b;
            b = next;
            i += 1;
        }
        b
    };
    if neg {
        -b
    } else {
        b
    }
}
