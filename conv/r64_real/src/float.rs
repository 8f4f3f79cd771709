//! Binary64 format constants and bit-level decoding.

pub const MANTISSA_BITS: i32 = 52;
pub const SIGN_BIT: u64 = 1 << 63;
pub const HIDDEN_BIT: u64 = 1 << 52;
pub const CARRY_BIT: u64 = 2 << 52;
pub const FRACTION_MASK: u64 = HIDDEN_BIT - 1;
pub const EXPONENT_FIELD_MASK: u64 = 0x7FF << 52;

/// exponent field value reserved for infinities and NaNs
pub const INFINITE_POWER: i32 = 0x7FF;

/// binary exponent of the smallest normal value, minus one
pub const MINIMUM_EXPONENT: i32 = -1023;

/// Bias between an extended-float exponent and the value's binary exponent:
/// `value = mant * 2^(exp - EXPONENT_BIAS)`.
pub const EXPONENT_BIAS: i32 = 1075;

/// binary exponent shared by every subnormal
pub const DENORMAL_EXPONENT: i32 = 1 - EXPONENT_BIAS;

/// Decimal exponents below this underflow even the smallest subnormal once
/// a 19-digit significand is applied; above [`LARGEST_POWER_OF_TEN`] any
/// non-zero significand overflows.
pub const SMALLEST_POWER_OF_TEN: i64 = -342;
pub const LARGEST_POWER_OF_TEN: i64 = 308;

/// Longest decimal digit run that can still influence rounding (767 for the
/// worst-case subnormal halfway literal), plus room for a guard digit.
pub const MAX_DIGITS: usize = 769;

/// significand of a finite double, hidden bit restored for normal values
pub fn mantissa(value: f64) -> u64 {
    let bits = value.to_bits();
    let fraction = bits & FRACTION_MASK;
    if bits & EXPONENT_FIELD_MASK == 0 {
        fraction
    } else {
        fraction | HIDDEN_BIT
    }
}

/// binary exponent of a finite double, scaled so that
/// `value = mantissa * 2^exponent` for the magnitude
pub fn exponent(value: f64) -> i32 {
    let bits = value.to_bits();
    let field = ((bits & EXPONENT_FIELD_MASK) >> MANTISSA_BITS) as i32;
    if field == 0 {
        DENORMAL_EXPONENT
    } else {
        field - EXPONENT_BIAS
    }
}
