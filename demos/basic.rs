use ieee_special::checked::{try_gamma, try_yn};
use ieee_special::*;

fn main() {
    // -- Bit access --
    println!("=== Bit patterns ===");
    let x = 1.5_f64;
    println!("float64_bits({x}) = {:#018x}", float64_bits(x));
    println!("float32_bits({x}) = {:#010x}", float32_bits(x as f32));
    println!("float64_from_bits(0x7ff0..) = {}", float64_from_bits(0x7ff0_0000_0000_0000));

    // -- Decomposition --
    println!("\n=== Decomposition ===");
    let r = frexp(-3.0_f64);
    println!("frexp(-3) = ({}, {})", r.frac, r.exp);
    println!("ldexp(0.75, 10) = {}", ldexp(0.75_f64, 10));
    println!("ilogb(1e-310) = {}", ilogb(1e-310_f64));
    println!("logb(0) = {}", logb(0.0_f64));
    let m = modf(-2.25_f64);
    println!("modf(-2.25) = ({}, {})", m.integer, m.frac);

    // -- Rounding --
    println!("\n=== Rounding ===");
    for v in [0.5_f64, 1.5, 2.5, -2.5] {
        println!("round({v}) = {}, round_to_even({v}) = {}", round(v), round_to_even(v));
    }

    // -- Special functions --
    println!("\n=== Special functions (f64) ===");
    let sc = sincos(1.0_f64);
    println!("sincos(1) = ({}, {})", sc.sin, sc.cos);
    println!("erf(0.5) = {}", erf(0.5_f64));
    println!("erfc(5) = {}", erfc(5.0_f64));
    println!("erf_inv(0.5) = {}", erf_inv(0.5_f64));
    println!("erfc_inv(1e-10) = {}", erfc_inv(1e-10_f64));
    println!("gamma(0.5) = {}", gamma(0.5_f64));
    let lg = lgamma(-2.5_f64);
    println!("lgamma(-2.5) = ({}, {})", lg.value, lg.sign);
    println!("j0(2.4048) = {}", j0(2.4048_f64));
    println!("j1(1) = {}", j1(1.0_f64));
    println!("jn(5, 3) = {}", jn(5, 3.0_f64));
    println!("jn(2^36, 1e20) = {}", jn(1 << 36, 1e20_f64));
    println!("y0(1) = {}", y0(1.0_f64));
    println!("y1(1) = {}", y1(1.0_f64));
    println!("yn(-3, 2) = {}", yn(-3, 2.0_f64));

    // -- Single precision --
    println!("\n=== Single precision ===");
    println!("gamma(4.5f32) = {}", gamma(4.5_f32));
    println!("erf(1f32) = {}", erf(1.0_f32));
    println!("j0(1f32) = {}", j0(1.0_f32));

    // -- Special values --
    println!("\n=== Special values ===");
    println!("gamma(-0) = {}", gamma(-0.0_f64));
    println!("gamma(-3) = {}", gamma(-3.0_f64));
    println!("y0(0) = {}", y0(0.0_f64));
    println!("erf_inv(2) = {}", erf_inv(2.0_f64));

    // -- Checked variants --
    println!("\n=== Checked variants ===");
    match try_gamma(-3.0_f64) {
        Ok(v) => println!("try_gamma(-3) = {v}"),
        Err(e) => println!("try_gamma(-3): {e}"),
    }
    match try_yn(300, 1.0_f64) {
        Ok(v) => println!("try_yn(300, 1) = {v}"),
        Err(e) => println!("try_yn(300, 1): {e}"),
    }

    // -- Constants --
    println!("\n=== Constants ===");
    println!("PI = {}", consts::PI);
    println!("SQRT_PHI = {}", consts::SQRT_PHI);
    println!("MAX_FLOAT32 = {}", consts::MAX_FLOAT32);
    println!("SMALLEST_NONZERO_FLOAT64 = {:e}", consts::SMALLEST_NONZERO_FLOAT64);
}
