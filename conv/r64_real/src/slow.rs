//! Exact fallback: rebuilds the full decimal value as a big integer and
//! compares it against the halfway point between the two candidate doubles,
//! so rounding never rests on a truncated 19-digit view.

use std::cmp::Ordering;

use r64_bigint::BigInt;

use crate::float;
use crate::number::Approximation;
use crate::rounding::{
    extended_to_bits, round, round_down, round_nearest_tie_even, ExtendedFloat,
};

/// Resolves a conversion the estimators could not prove, starting from
/// their errored upper-bound estimate `fp`.
///
/// `integral` and `fractional` are the numeral's digit runs, the integral
/// one with leading zeroes already stripped.
pub fn digit_comp(
    approx: &Approximation,
    fp: ExtendedFloat,
    integral: &[u8],
    fractional: &[u8],
) -> ExtendedFloat {
    let sci_exp = scientific_exponent(approx);
    let (mantissa, count) = accumulate_digits(integral, fractional, float::MAX_DIGITS);
    let exponent = sci_exp + 1 - count as i32;
    if exponent >= 0 {
        positive_digit_comp(&mantissa, exponent)
    } else {
        negative_digit_comp(mantissa, fp, exponent)
    }
}

/// With a non-negative decimal exponent the value is an integer; scale it
/// up and round its top 64 bits into place.
fn positive_digit_comp(mantissa: &BigInt, exponent: i32) -> ExtendedFloat {
    let scaled = mantissa * &BigInt::power_of_ten(exponent as u32);
    let (mant, truncated) = scaled.hi64();
    let exp = scaled.bit_length() as i32 - 64 + float::EXPONENT_BIAS;
    let mut fp = ExtendedFloat { mant, exp };
    round(&mut fp, |f, s| {
        round_nearest_tie_even(f, s, |is_odd, is_halfway, is_above| {
            is_above || (is_halfway && truncated) || (is_odd && is_halfway)
        });
    });
    fp
}

/// With a negative decimal exponent, compare the digits `m1 * 10^e1`
/// against the halfway point `m2 * 2^e2` by clearing both denominators:
/// `m1 ? m2 * 5^-e1 * 2^(e2 - e1)`, moving the power of two to whichever
/// side keeps it positive. Only integer compare/multiply/shift are used.
fn negative_digit_comp(mantissa: BigInt, mut fp: ExtendedFloat, exponent: i32) -> ExtendedFloat {
    debug_assert!(fp.mant & (1 << 63) != 0);
    debug_assert!(exponent < 0);

    let mut real_digits = mantissa;
    let real_exp = exponent;

    // `b`, the estimate rounded toward zero
    let mut b = fp;
    round(&mut b, round_down);
    let b = f64::from_bits(extended_to_bits(b, false));

    // the halfway point `b + h`, one extra bit of precision down
    let theor_exp = float::exponent(b) - 1;
    let mut theor_digits = BigInt::from((float::mantissa(b) << 1) + 1);

    let binary_exp = theor_exp - real_exp;
    theor_digits = &theor_digits * &BigInt::power_of_five((-real_exp) as u32);
    if binary_exp > 0 {
        theor_digits = theor_digits.shift_left(i64::from(binary_exp));
    } else if binary_exp < 0 {
        real_digits = real_digits.shift_left(i64::from(-binary_exp));
    }

    let ord = real_digits.magnitude_cmp(&theor_digits);
    round(&mut fp, |f, s| {
        round_nearest_tie_even(f, s, |is_odd, _, _| match ord {
            Ordering::Greater => true,
            Ordering::Less => false,
            Ordering::Equal => is_odd,
        });
    });
    fp
}

/// Accumulates every significant digit into a big integer, nine digits per
/// limb-sized block. Past `max_digits` the exact tail no longer matters;
/// one non-zero trailing digit is folded in to push the value off any
/// halfway point.
fn accumulate_digits(integral: &[u8], fractional: &[u8], max_digits: usize) -> (BigInt, usize) {
    const STEP: usize = 9;
    const STEP_BLOCK: u32 = 1_000_000_000;

    let fractional = if integral.is_empty() {
        // align with the significand extraction, which skipped these
        let nonzero = fractional
            .iter()
            .position(|&b| b != b'0')
            .unwrap_or(fractional.len());
        &fractional[nonzero..]
    } else {
        fractional
    };

    let mut result = BigInt::zero();
    let mut count = 0;
    let mut counter = 0;
    let mut value: u32 = 0;

    let mut digits = integral.iter().chain(fractional.iter());
    while count < max_digits {
        match digits.next() {
            Some(&b) => {
                value = value * 10 + u32::from(b - b'0');
                counter += 1;
                count += 1;
                if counter == STEP {
                    result.mul_small(STEP_BLOCK);
                    result.add_small(value);
                    counter = 0;
                    value = 0;
                }
            }
            None => break,
        }
    }
    if counter != 0 {
        result.mul_small(10_u32.pow(counter as u32));
        result.add_small(value);
    }

    if count == max_digits && digits.any(|&b| b != b'0') {
        // adding a tenth digit position, not a unit, so an exact halfway
        // value cannot be fabricated
        result.mul_small(10);
        result.add_small(1);
        count += 1;
    }
    (result, count)
}

/// decimal exponent of the numeral in scientific notation, by power
/// reduction of the 19-digit significand
fn scientific_exponent(approx: &Approximation) -> i32 {
    let mut significand = approx.significand;
    let mut exponent = approx.effective_exponent();
    while significand >= 10000 {
        significand /= 10000;
        exponent += 4;
    }
    while significand >= 100 {
        significand /= 100;
        exponent += 2;
    }
    while significand >= 10 {
        significand /= 10;
        exponent += 1;
    }
    exponent as i32
}
