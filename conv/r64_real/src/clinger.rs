//! Clinger-style fast path: when both the significand and the power of ten
//! are exactly representable as doubles, one multiply or divide is already
//! correctly rounded.

use r64_literal::NumberLiteral;

use crate::number::Approximation;

/// Every power of ten up to `10^22` is an exact double.
#[rustfmt::skip]
const POWERS_OF_TEN: [f64; 23] = [
    1e0,  1e1,  1e2,  1e3,  1e4,  1e5,  1e6,  1e7,  1e8,  1e9,  1e10,
    1e11, 1e12, 1e13, 1e14, 1e15, 1e16, 1e17, 1e18, 1e19, 1e20, 1e21, 1e22,
];

const MAX_EXPONENT: i64 = 22;

/// Published exactness bound for double precision; beyond 17 significant
/// digits the significand cast alone may round.
const MAX_SIGNIFICANT_DIGITS: usize = 17;

/// significands above `2^53` are not exactly representable as doubles
const MAX_SIGNIFICAND: u64 = 2 << 52;

pub fn try_fast_path(approx: &Approximation, literal: &NumberLiteral) -> Option<f64> {
    if approx.significand_truncated || approx.exponent_truncated {
        return None;
    }
    let e = approx.effective_exponent();
    if !(-MAX_EXPONENT..=MAX_EXPONENT).contains(&e) {
        return None;
    }
    if literal.significant_digits() > MAX_SIGNIFICANT_DIGITS || approx.significand > MAX_SIGNIFICAND
    {
        return None;
    }

    let mut value = approx.significand as f64;
    if e < 0 {
        value /= POWERS_OF_TEN[(-e) as usize];
    } else {
        value *= POWERS_OF_TEN[e as usize];
    }
    if approx.negative {
        value = -value;
    }
    Some(value)
}
