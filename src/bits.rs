//! Bit-pattern access for binary32 and binary64.
//!
//! Thin wrappers over the language's defined reinterpretation (`to_bits` /
//! `from_bits`). NaN payloads, signed zeros and subnormals round-trip unchanged.

/// IEEE-754 binary32 representation of `x`, sign bit in bit 31.
///
/// `float32_bits(float32_from_bits(b)) == b` for every `b`.
#[inline]
pub fn float32_bits(x: f32) -> u32 {
    x.to_bits()
}

/// The binary32 value whose representation is `b`.
#[inline]
pub fn float32_from_bits(b: u32) -> f32 {
    f32::from_bits(b)
}

/// IEEE-754 binary64 representation of `x`, sign bit in bit 63.
///
/// `float64_bits(float64_from_bits(b)) == b` for every `b`.
#[inline]
pub fn float64_bits(x: f64) -> u64 {
    x.to_bits()
}

/// The binary64 value whose representation is `b`.
#[inline]
pub fn float64_from_bits(b: u64) -> f64 {
    f64::from_bits(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_patterns_f64() {
        assert_eq!(float64_bits(1.0), 0x3ff0_0000_0000_0000);
        assert_eq!(float64_bits(-2.0), 0xc000_0000_0000_0000);
        assert_eq!(float64_bits(0.0), 0);
        assert_eq!(float64_bits(-0.0), 0x8000_0000_0000_0000);
        assert_eq!(float64_bits(f64::INFINITY), 0x7ff0_0000_0000_0000);
        assert_eq!(float64_bits(5e-324), 1);
    }

    #[test]
    fn known_patterns_f32() {
        assert_eq!(float32_bits(1.0), 0x3f80_0000);
        assert_eq!(float32_bits(-0.0), 0x8000_0000);
        assert_eq!(float32_bits(f32::NEG_INFINITY), 0xff80_0000);
        assert_eq!(float32_from_bits(0x4049_0fdb), core::f32::consts::PI);
    }

    #[test]
    fn nan_payloads_survive() {
        for b in [0x7ff0_0000_0000_0001_u64, 0x7ff8_dead_beef_0001, 0xfff4_0000_0000_0000] {
            assert_eq!(float64_bits(float64_from_bits(b)), b);
        }
        for b in [0x7f80_0001_u32, 0x7fc1_2345, 0xffbf_ffff] {
            assert_eq!(float32_bits(float32_from_bits(b)), b);
        }
    }

    #[test]
    fn signed_zero_and_subnormal_survive() {
        let neg_zero = float64_from_bits(float64_bits(-0.0));
        assert!(neg_zero == 0.0 && neg_zero.is_sign_negative());
        let sub = f64::MIN_POSITIVE / 3.0;
        assert_eq!(float64_from_bits(float64_bits(sub)), sub);
        let sub32 = f32::MIN_POSITIVE / 5.0;
        assert_eq!(float32_from_bits(float32_bits(sub32)), sub32);
    }
}
