//! Rounding to the nearest integer by direct manipulation of the fraction bits.

use crate::machine::IeeeFloat;

/// Round half away from zero.
///
/// ±0, ±∞, NaN and values that are already integral are returned unchanged.
pub(crate) fn round<T: IeeeFloat>(x: T) -> T {
    let bias = T::EXP_BIAS;
    let mut bits = x.to_raw();
    let e = x.biased_exp();
    if e < bias {
        // |x| < 1: keep the sign, become ±1 when |x| >= 0.5
        bits &= T::sign_mask();
        if e == bias - 1 {
            bits |= (bias as u64) << T::MANT_BITS;
        }
    } else if e < bias + T::MANT_BITS as i64 {
        // The carry out of the fraction lands in the exponent field, which is
        // exactly the step to the next binade.
        let half = 1_u64 << (T::MANT_BITS - 1);
        let e = (e - bias) as u32;
        bits += half >> e;
        bits &= !(T::frac_mask() >> e);
    }
    T::from_raw(bits)
}

/// Round half to even.
///
/// ±0, ±∞, NaN and values that are already integral are returned unchanged.
pub(crate) fn round_to_even<T: IeeeFloat>(x: T) -> T {
    let bias = T::EXP_BIAS;
    let mant = T::MANT_BITS;
    let mut bits = x.to_raw();
    let e = x.biased_exp();
    if e >= bias + mant as i64 {
        return x;
    }
    if e >= bias {
        let half_minus_ulp = (1_u64 << (mant - 1)) - 1;
        let e = (e - bias) as u32;
        // low integer bit decides the tie
        bits += (half_minus_ulp + ((bits >> (mant - e)) & 1)) >> e;
        bits &= !(T::frac_mask() >> e);
    } else if e == bias - 1 && bits & T::frac_mask() != 0 {
        // 0.5 < |x| < 1
        bits = (bits & T::sign_mask()) | ((bias as u64) << mant);
    } else {
        // |x| <= 0.5
        bits &= T::sign_mask();
    }
    T::from_raw(bits)
}
