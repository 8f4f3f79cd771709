//! Extended-precision floats and the shared rounding step that packs them
//! into binary64 fields.

use crate::float;

/// A `mant * 2^(exp - EXPONENT_BIAS)` value while an estimator is working;
/// after [`round`], `exp` is the biased binary64 exponent field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtendedFloat {
    pub mant: u64,
    pub exp: i32,
}

/// Packs a rounded extended float into binary64 bits.
///
/// For a subnormal that carried into the hidden bit, the hidden bit and the
/// exponent field's low bit coincide, so the plain `or` is still exact.
pub fn extended_to_bits(fp: ExtendedFloat, negative: bool) -> u64 {
    let mut word = fp.mant;
    word |= (fp.exp as u64) << float::MANTISSA_BITS;
    if negative {
        word |= float::SIGN_BIT;
    }
    word
}

/// Shifts the mantissa into the 52-bit field with `cb` deciding the rounding
/// direction, then resolves hidden-bit carry, subnormal collapse, and
/// overflow to infinity.
pub fn round<Cb: Fn(&mut ExtendedFloat, i32)>(fp: &mut ExtendedFloat, cb: Cb) {
    let mantissa_shift = 64 - float::MANTISSA_BITS - 1;

    if -fp.exp >= mantissa_shift {
        // subnormal result; one extra shift position stands in for the
        // hidden bit the format no longer stores
        let shift = -fp.exp + 1;
        cb(fp, shift.min(64));
        // rounding may have carried into the hidden bit, which makes the
        // value the smallest normal
        fp.exp = i32::from(fp.mant >= float::HIDDEN_BIT);
        return;
    }

    cb(fp, mantissa_shift);

    if fp.mant & float::CARRY_BIT == float::CARRY_BIT {
        fp.mant >>= 1;
        fp.exp += 1;
    }
    if fp.exp >= float::INFINITE_POWER {
        fp.mant = 0;
        fp.exp = float::INFINITE_POWER;
        return;
    }
    fp.mant &= !float::HIDDEN_BIT;
}

/// Round-to-nearest with `cb(is_odd, is_halfway, is_above)` resolving the
/// tie direction from whatever extra knowledge the caller has.
pub fn round_nearest_tie_even<Cb: Fn(bool, bool, bool) -> bool>(
    fp: &mut ExtendedFloat,
    shift: i32,
    cb: Cb,
) {
    let mask = lower_n_mask(shift);
    let halfway = lower_n_halfway(shift);

    let truncated_bits = fp.mant & mask;
    let is_above = truncated_bits > halfway;
    let is_halfway = truncated_bits == halfway;

    shift_right(fp, shift);

    let is_odd = fp.mant & 1 == 1;
    if cb(is_odd, is_halfway, is_above) {
        fp.mant += 1;
    }
}

/// truncate toward zero
pub fn round_down(fp: &mut ExtendedFloat, shift: i32) {
    shift_right(fp, shift);
}

fn shift_right(fp: &mut ExtendedFloat, shift: i32) {
    fp.mant = if shift == 64 { 0 } else { fp.mant >> shift };
    fp.exp += shift;
}

fn lower_n_mask(n: i32) -> u64 {
    if n == 64 {
        u64::MAX
    } else {
        (1_u64 << n) - 1
    }
}

fn lower_n_halfway(n: i32) -> u64 {
    if n == 0 {
        0
    } else {
        1_u64 << (n - 1)
    }
}
