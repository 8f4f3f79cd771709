//! Decimal numeral to binary64 conversion, correctly rounded.
//!
//! Three tiers run in order, first success wins:
//!
//! 1. a Clinger-style fast path converting short literals with one exact
//!    multiply or divide,
//! 2. a Lemire-style estimator scaling the 19-digit significand by a
//!    128-bit power of five, re-run with `significand + 1` to detect the
//!    boundary cases truncation could have hidden,
//! 3. an exact big-integer comparison against the halfway point for
//!    whatever remains.
//!
//! The fixed-width integer entry points share the literal parser and
//! nothing else.

mod clinger;
mod float;
mod lemire;
mod number;
mod rounding;
mod slow;
mod table;

pub use crate::number::Approximation;

use r64_errors::ConversionError;

use crate::rounding::{extended_to_bits, ExtendedFloat};

/// Converts a decimal numeral to the nearest binary64 value.
pub fn to_real64(bytes: &[u8]) -> Result<f64, ConversionError> {
    let literal = r64_literal::parse(bytes)?;
    let approx = Approximation::from_literal(&literal, bytes);

    // an exact zero significand needs no estimator, only the sign
    if approx.significand == 0 && !approx.significand_truncated {
        return Ok(assemble(ExtendedFloat { mant: 0, exp: 0 }, approx.negative));
    }

    // a 20-digit exponent run is unrepresentable either way; its sign
    // alone decides between zero and infinity
    if approx.exponent_truncated {
        let fp = if approx.exponent < 0 {
            ExtendedFloat { mant: 0, exp: 0 }
        } else {
            ExtendedFloat {
                mant: 0,
                exp: float::INFINITE_POWER,
            }
        };
        return Ok(assemble(fp, approx.negative));
    }

    if let Some(value) = clinger::try_fast_path(&approx, &literal) {
        return Ok(value);
    }

    let q = approx.effective_exponent();
    let w = approx.significand;
    let mut fp = lemire::compute_float(q, w);
    if approx.significand_truncated && fp.exp >= 0 && fp != lemire::compute_float(q, w + 1) {
        // the truncated digits sit close enough to a rounding boundary
        // that the estimate cannot be trusted
        fp = lemire::compute_error(q, w);
    }
    if fp.exp < 0 {
        fp.exp -= lemire::INVALID_FP;
        let integral = literal.integral_digits().of(bytes);
        let fractional = literal.fractional_digits().of(bytes);
        fp = slow::digit_comp(&approx, fp, integral, fractional);
    }
    Ok(assemble(fp, approx.negative))
}

/// Converts an integer numeral (optional sign, digits only) to an `i64`.
pub fn to_integer64(bytes: &[u8]) -> Result<i64, ConversionError> {
    // one past `i64::MAX`, the only magnitude valid solely when negative
    const POSITIVE_MIN_I64: u64 = 9_223_372_036_854_775_808;

    let (negative, magnitude) = integer_magnitude(bytes)?;
    if negative {
        if magnitude > POSITIVE_MIN_I64 {
            return Err(ConversionError::ConversionFailed);
        }
        Ok((magnitude as i64).wrapping_neg())
    } else if magnitude >= POSITIVE_MIN_I64 {
        Err(ConversionError::ConversionFailed)
    } else {
        Ok(magnitude as i64)
    }
}

/// Converts an unsigned integer numeral to a `u64`.
pub fn to_natural64(bytes: &[u8]) -> Result<u64, ConversionError> {
    let (negative, magnitude) = integer_magnitude(bytes)?;
    if negative {
        return Err(ConversionError::ConversionFailed);
    }
    Ok(magnitude)
}

/// Shared scan for the integer entry points: a numeral with a radix point,
/// fractional digits, or an exponent part does not name an integer.
fn integer_magnitude(bytes: &[u8]) -> Result<(bool, u64), ConversionError> {
    let literal = r64_literal::parse(bytes)?;
    if !literal.significand.radix_point.is_empty() || literal.exponent.is_some() {
        return Err(ConversionError::ConversionFailed);
    }

    let mut magnitude: u64 = 0;
    for &b in literal.integral_digits().of(bytes) {
        magnitude = magnitude
            .checked_mul(10)
            .and_then(|m| m.checked_add(u64::from(b - b'0')))
            .ok_or(ConversionError::ConversionFailed)?;
    }
    Ok((literal.is_negative(bytes), magnitude))
}

fn assemble(fp: ExtendedFloat, negative: bool) -> f64 {
    f64::from_bits(extended_to_bits(fp, negative))
}
