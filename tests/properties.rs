//! Integration tests for the public API.
//!
//! Identities that must hold across whole argument ranges, plus the
//! special-value conventions for ±0, ±∞ and NaN.

use ieee_special::*;

fn assert_close(actual: &[f64], expected: &[f64], tol: f64) {
    assert_eq!(actual.len(), expected.len(), "Length mismatch");
    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        let diff = (a - e).abs();
        assert!(
            diff < tol || diff < tol * e.abs(),
            "Mismatch at index {}: actual={}, expected={}, diff={}",
            i,
            a,
            e,
            diff
        );
    }
}

/// Evenly spaced points on [lo, hi).
fn grid(lo: f64, hi: f64, n: usize) -> impl Iterator<Item = f64> {
    let step = (hi - lo) / n as f64;
    (0..n).map(move |i| lo + step * i as f64)
}

// ============================================================================
// Bit Codec Tests
// ============================================================================

#[test]
fn test_bits_roundtrip_f64() {
    let patterns = [
        0_u64,
        0x8000_0000_0000_0000,
        0x0000_0000_0000_0001,
        0x000f_ffff_ffff_ffff,
        0x3ff0_0000_0000_0000,
        0x7fef_ffff_ffff_ffff,
        0x7ff0_0000_0000_0000,
        0xfff0_0000_0000_0000,
        0x7ff8_0000_0000_0000,
        0x7ff8_dead_beef_0001,
        0xfff8_0000_0000_0042,
    ];
    for b in patterns {
        assert_eq!(float64_bits(float64_from_bits(b)), b, "pattern {b:#018x}");
    }
    for b in (0..=u64::MAX).step_by(0x0001_0003_0007_000b) {
        assert_eq!(float64_bits(float64_from_bits(b)), b);
    }
}

#[test]
fn test_bits_roundtrip_f32() {
    for b in (0..=u32::MAX).step_by(65_537) {
        assert_eq!(float32_bits(float32_from_bits(b)), b);
    }
    for b in [0x7fc0_0001_u32, 0xffc1_2345, 0x0000_0001, 0x8000_0000, 0x7f80_0000] {
        assert_eq!(float32_bits(float32_from_bits(b)), b);
    }
}

// ============================================================================
// Decomposition Tests
// ============================================================================

#[test]
fn test_frexp_ldexp_roundtrip() {
    let mut values = vec![
        1.0,
        -1.0,
        0.1,
        123456.789,
        f64::MAX,
        -f64::MAX,
        f64::MIN_POSITIVE,
        5e-324,
        -2.5e-320,
        1e-310,
    ];
    values.extend(grid(-1e6, 1e6, 997).filter(|&x| x != 0.0));
    for x in values {
        let r = frexp(x);
        assert!(r.frac.abs() >= 0.5 && r.frac.abs() < 1.0, "frexp({x}) = {r:?}");
        assert_eq!(ldexp(r.frac, r.exp), x);
    }
}

#[test]
fn test_frexp_ldexp_roundtrip_f32() {
    for x in [1.0_f32, -3.75, 1e-40, f32::MAX, f32::MIN_POSITIVE, 0.3] {
        let r = frexp(x);
        assert_eq!(ldexp(r.frac, r.exp), x);
    }
}

#[test]
fn test_ilogb_matches_frexp() {
    for x in [1.0_f64, 3.0, 0.3, 1e300, 1e-310, 5e-324] {
        assert_eq!(ilogb(x), frexp(x).exp - 1, "x = {x}");
        assert_eq!(logb(x), (frexp(x).exp - 1) as f64);
    }
    assert_eq!(ilogb(0.0_f64), ILOGB_ZERO);
    assert_eq!(ilogb(f32::INFINITY), ILOGB_INF);
    assert_eq!(ilogb(f64::NAN), ILOGB_NAN);
}

#[test]
fn test_signed_zero_conventions() {
    let m = modf(-0.0_f64);
    assert!(m.integer == 0.0 && m.integer.is_sign_negative());
    assert!(m.frac == 0.0 && m.frac.is_sign_negative());

    for n in [-5000_i64, -1, 0, 1, 5000, i64::MIN, i64::MAX] {
        let p = ldexp(0.0_f64, n);
        assert!(p == 0.0 && p.is_sign_positive(), "ldexp(0, {n})");
        let q = ldexp(-0.0_f64, n);
        assert!(q == 0.0 && q.is_sign_negative(), "ldexp(-0, {n})");
    }
}

#[test]
fn test_modf_parts_sum_to_input() {
    for x in grid(-50.0, 50.0, 1001) {
        let m = modf(x);
        assert_eq!(m.integer + m.frac, x);
        assert!(m.frac.abs() < 1.0);
        assert_eq!(m.integer, x.trunc());
    }
}

// ============================================================================
// Rounding Tests
// ============================================================================

#[test]
fn test_rounding_ties() {
    assert_eq!(round(2.5_f64), 3.0);
    assert_eq!(round(-2.5_f64), -3.0);
    assert_eq!(round_to_even(2.5_f64), 2.0);
    assert_eq!(round_to_even(3.5_f64), 4.0);
    assert_eq!(round(2.5_f32), 3.0);
    assert_eq!(round_to_even(2.5_f32), 2.0);
}

#[test]
fn test_rounding_matches_std() {
    for x in grid(-20.0, 20.0, 1601) {
        assert_eq!(round(x), x.round(), "round({x})");
    }
}

// ============================================================================
// Sine/Cosine Tests
// ============================================================================

#[test]
fn test_sincos_matches_separate_calls() {
    for x in grid(-100.0, 100.0, 2003) {
        let sc = sincos(x);
        assert!((sc.sin - x.sin()).abs() < 4e-16, "sin({x})");
        assert!((sc.cos - x.cos()).abs() < 4e-16, "cos({x})");
    }
}

#[test]
fn test_sincos_f32() {
    let sc = sincos(1.0_f32);
    assert!((sc.sin - 0.84147096).abs() < 1e-7);
    assert!((sc.cos - 0.5403023).abs() < 1e-7);
}

// ============================================================================
// Error Function Tests
// ============================================================================

#[test]
fn test_erf_basic() {
    let x = [0.0, 0.5, 1.0, 2.0];
    let data: Vec<f64> = x.iter().map(|&x| erf(x)).collect();

    // Expected values from standard mathematical tables
    let expected = [0.0, 0.5204998778, 0.8427007929, 0.9953222650];
    assert_close(&data, &expected, 1e-9);
}

#[test]
fn test_erf_odd() {
    assert_eq!(erf(0.0_f64), 0.0);
    for x in grid(-8.0, 8.0, 1601) {
        assert_eq!(erf(-x), -erf(x), "x = {x}");
    }
    assert!((erf(6.0_f64) - 1.0).abs() < 1e-12);
}

#[test]
fn test_erfc_complement() {
    for x in grid(-6.0, 6.0, 1201) {
        assert!((erf(x) + erfc(x) - 1.0).abs() < 1e-15, "x = {x}");
    }
}

#[test]
fn test_erfc_basic() {
    let x = [0.0, 1.0, 2.0];
    let data: Vec<f64> = x.iter().map(|&x| erfc(x)).collect();
    let expected = [1.0, 0.1572992070, 0.0046777350];
    assert_close(&data, &expected, 1e-9);
}

#[test]
fn test_erf_inv_identity() {
    for y in grid(-0.999, 0.999, 1999) {
        assert!((erf(erf_inv(y)) - y).abs() < 1e-15, "y = {y}");
    }
    for x in grid(-2.0, 2.0, 801) {
        assert!((erf_inv(erf(x)) - x).abs() < 1e-9, "x = {x}");
    }
    assert_eq!(erf_inv(1.0_f64), f64::INFINITY);
    assert!(erf_inv(1.5_f64).is_nan());
}

#[test]
fn test_erfc_inv_identity() {
    for c in [1e-300_f64, 1e-100, 1e-20, 1e-5, 0.1, 0.5, 1.0, 1.5, 1.9, 1.99999] {
        let x = erfc_inv(c);
        assert!(((erfc(x) - c) / c).abs() < 1e-13, "c = {c}");
    }
    assert_eq!(erfc_inv(0.0_f64), f64::INFINITY);
    assert_eq!(erfc_inv(2.0_f64), f64::NEG_INFINITY);
}

#[test]
fn test_erf_f32() {
    let x = [0.0f32, 0.5, 1.0, 2.0];
    let expected = [0.0f32, 0.5205, 0.8427, 0.9953];
    for (x, e) in x.iter().zip(expected.iter()) {
        let a = erf(*x);
        assert!((a - e).abs() < 1e-3, "F32 erf mismatch: {} vs {}", a, e);
    }
}

// ============================================================================
// Gamma Function Tests
// ============================================================================

#[test]
fn test_gamma_integers() {
    // Gamma(n) = (n-1)! for positive integers
    let x = [1.0, 2.0, 3.0, 4.0, 5.0];
    let data: Vec<f64> = x.iter().map(|&x| gamma(x)).collect();
    let expected = [1.0, 1.0, 2.0, 6.0, 24.0];
    assert_close(&data, &expected, 1e-12);
}

#[test]
fn test_gamma_half() {
    let sqrt_pi = std::f64::consts::PI.sqrt();
    assert!((gamma(0.5_f64) - sqrt_pi).abs() < 1e-15);
}

#[test]
fn test_gamma_recurrence() {
    let points = grid(-30.0, 30.0, 2999)
        .chain([33.5, 40.25, 99.3, 150.7, 170.2, -34.5, -40.25, -100.3, -150.6])
        .filter(|x| x.fract() != 0.0);
    for x in points {
        let lhs = gamma(x + 1.0);
        let rhs = x * gamma(x);
        assert!(((lhs - rhs) / rhs).abs() < 1e-13, "x = {x}: {lhs} vs {rhs}");
    }
}

#[test]
fn test_gamma_poles() {
    assert_eq!(gamma(0.0_f64), f64::INFINITY);
    for n in 1..20 {
        let g = gamma(-(n as f64));
        assert!(g.is_infinite(), "gamma(-{n}) = {g}");
    }
}

#[test]
fn test_lgamma_matches_gamma() {
    for x in grid(-20.0, 60.0, 1601).filter(|x| x.fract() != 0.0) {
        let g = gamma(x);
        let r = lgamma(x);
        let sign = if g < 0.0 { -1 } else { 1 };
        assert_eq!(r.sign, sign, "x = {x}");
        assert!((r.value - g.abs().ln()).abs() < 1e-12 * r.value.abs().max(1.0), "x = {x}");
    }
}

#[test]
fn test_lgamma_large() {
    let data: Vec<f64> = [100.0, 150.0, 170.0, 1e5].iter().map(|&x| lgamma(x).value).collect();
    assert!(data.iter().all(|&v| v.is_finite()));
    assert!(data.windows(2).all(|w| w[0] < w[1]));
    assert!(lgamma(1e300_f64).value.is_finite());
    assert_eq!(lgamma(1e306_f64).value, f64::INFINITY);
}

#[test]
fn test_gamma_f32() {
    let x = [1.0f32, 2.0, 3.0, 4.0];
    let expected = [1.0f32, 1.0, 2.0, 6.0];
    for (x, e) in x.iter().zip(expected.iter()) {
        let a = gamma(*x);
        assert!((a - e).abs() < 1e-5, "F32 gamma mismatch: {} vs {}", a, e);
    }
    assert_eq!(gamma(36.0_f32), f32::INFINITY);
}

// ============================================================================
// Bessel Function Tests
// ============================================================================

#[test]
fn test_bessel_recurrence_first_kind() {
    for x in [0.5_f64, 1.7, 3.7, 12.0, 40.0, -2.3] {
        for n in 1..25 {
            let a = 2.0 * n as f64 / x * jn(n, x);
            let b = jn(n - 1, x);
            let scale = a.abs().max(b.abs());
            assert!(
                (jn(n + 1, x) - (a - b)).abs() <= 1e-13 * scale,
                "n = {n}, x = {x}"
            );
        }
    }
}

#[test]
fn test_bessel_recurrence_second_kind() {
    for x in [0.5_f64, 1.7, 3.7, 12.0, 40.0] {
        for n in 1..25 {
            let lhs: f64 = yn(n + 1, x);
            if lhs.is_infinite() {
                continue;
            }
            let a = 2.0 * n as f64 / x * yn(n, x);
            let b = yn(n - 1, x);
            assert!((lhs - (a - b)).abs() <= 1e-13 * a.abs().max(b.abs()));
        }
    }
}

#[test]
fn test_bessel_orders_agree() {
    for x in grid(0.1, 30.0, 300) {
        assert_eq!(jn(0, x), j0(x));
        assert_eq!(jn(1, x), j1(x));
        assert_eq!(yn(0, x), y0(x));
        assert_eq!(yn(1, x), y1(x));
    }
}

#[test]
fn test_bessel_special_points() {
    assert_eq!(j0(0.0_f64), 1.0);
    assert_eq!(j1(0.0_f64), 0.0);
    assert_eq!(y0(0.0_f64), f64::NEG_INFINITY);
    assert!(y0(-1.0_f64).is_nan());
    assert!(y1(-1.0_f64).is_nan());
    assert!(yn(3, -1.0_f64).is_nan());
    let kernels: [fn(f64) -> f64; 4] = [j0, j1, y0, y1];
    for f in kernels {
        assert_eq!(f(f64::INFINITY), 0.0);
    }
    assert_eq!(jn(7, f64::INFINITY), 0.0);
    assert_eq!(yn(7, f64::INFINITY), 0.0);
}

#[test]
fn test_bessel_reference_values() {
    let x = [1.0, 2.5, 10.0];
    let j: Vec<f64> = x.iter().map(|&x| j0(x)).collect();
    assert_close(&j, &[0.7651976865579666, -0.048383776468198, -0.24593576445134835], 1e-15);
    let y: Vec<f64> = x.iter().map(|&x| y1(x)).collect();
    assert_close(&y, &[-0.7812128213002887, 0.14591813796678577, 0.24901542420695388], 1e-15);
}

#[test]
fn test_bessel_huge_orders_are_prompt() {
    let start = std::time::Instant::now();
    let j: f64 = jn(1 << 36, 1e20);
    let y: f64 = yn(1 << 36, 1e20);
    let k: f64 = jn(1 << 34, ((1_u64 << 34) - 1) as f64);
    assert!(start.elapsed().as_secs_f64() < 1.0);
    assert!((j + 7.9073895066111141855e-11).abs() < 1e-22);
    assert!((y + 1.0654428316407100831e-11).abs() < 1e-22);
    assert!((k - 1.7329183458829372317e-4).abs() < 1e-16);
    for n in [i64::MIN + 1, -(1 << 50), 1 << 50, i64::MAX] {
        for x in [0.5_f64, 1e3, 1e15, 1e19, 1e40] {
            assert!(jn(n, x).is_finite(), "jn({n}, {x})");
            assert!(!yn(n, x).is_nan(), "yn({n}, {x})");
        }
    }
}

#[test]
fn test_bessel_f32() {
    assert!((j0(1.0_f32) - 0.7651977).abs() < 1e-6);
    assert!((jn(2, 1.0_f32) - 0.11490349).abs() < 1e-6);
    assert_eq!(y0(0.0_f32), f32::NEG_INFINITY);
}

// ============================================================================
// NaN Propagation
// ============================================================================

#[test]
fn test_nan_propagation() {
    let nan = f64::NAN;
    let unary: [(&str, fn(f64) -> f64); 10] = [
        ("erf", erf),
        ("erfc", erfc),
        ("erf_inv", erf_inv),
        ("erfc_inv", erfc_inv),
        ("gamma", gamma),
        ("j0", j0),
        ("j1", j1),
        ("y0", y0),
        ("y1", y1),
        ("logb", logb),
    ];
    for (name, f) in unary {
        assert!(f(nan).is_nan(), "{name}(NaN) should be NaN");
    }
    assert!(lgamma(nan).value.is_nan());
    assert!(jn(5, nan).is_nan());
    assert!(yn(5, nan).is_nan());
    assert!(jn(0, nan).is_nan());
    let sc = sincos(nan);
    assert!(sc.sin.is_nan() && sc.cos.is_nan());
    assert!(erf(f32::NAN).is_nan());
    assert!(gamma(f32::NAN).is_nan());
}

// ============================================================================
// Constants
// ============================================================================

#[test]
fn test_constants_against_std() {
    use std::f64::consts as c;
    assert_eq!(consts::E, c::E);
    assert_eq!(consts::PI, c::PI);
    assert_eq!(consts::SQRT_2, c::SQRT_2);
    assert_eq!(consts::LOG_E_2, c::LN_2);
    assert_eq!(consts::LOG_E_10, c::LN_10);
    assert_eq!(consts::MAX_FLOAT64, f64::MAX);
    assert_eq!(consts::MAX_FLOAT32, f32::MAX);
    assert_eq!(consts::SMALLEST_NONZERO_FLOAT64, 5e-324);
    assert_eq!(consts::SMALLEST_NONZERO_FLOAT32, f32::from_bits(1));
}
