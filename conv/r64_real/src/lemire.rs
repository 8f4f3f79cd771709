//! Scaled-integer estimator: multiplies the 64-bit significand by a 128-bit
//! truncated power of five and reads the rounded binary64 fields straight
//! off the product. Produces an exact answer for almost every input; the
//! rare ambiguous products are handed back as an errored estimate for the
//! exact fallback to resolve.

use crate::float;
use crate::rounding::ExtendedFloat;
use crate::table::{LARGEST_POWER_OF_FIVE, POWER_OF_FIVE_128, SMALLEST_POWER_OF_FIVE};

/// Offset added to an errored estimate's exponent. Valid biased exponents
/// are non-negative, so any result carrying this offset reads as negative
/// and routes the conversion into the exact fallback.
pub const INVALID_FP: i32 = -0x8000;

/// Computes the binary64 fields of `w * 10^q`, rounded to nearest even.
///
/// Returns biased-exponent zero/infinity directly for decimal exponents no
/// significand can pull back into range.
pub fn compute_float(q: i64, mut w: u64) -> ExtendedFloat {
    let fp_zero = ExtendedFloat { mant: 0, exp: 0 };
    let fp_inf = ExtendedFloat {
        mant: 0,
        exp: float::INFINITE_POWER,
    };

    if w == 0 || q < float::SMALLEST_POWER_OF_TEN {
        return fp_zero;
    } else if q > float::LARGEST_POWER_OF_TEN {
        return fp_inf;
    }

    // normalize the significand to a full 64-bit word
    let lz = w.leading_zeros() as i32;
    w <<= lz;

    // The product needs 52 explicit mantissa bits, the hidden bit, a
    // rounding bit, and one slack bit for a product with a leading zero.
    let precision = float::MANTISSA_BITS + 3;
    let (lo, hi) = compute_product_approx(q, w, precision);
    if lo == 0xFFFF_FFFF_FFFF_FFFF {
        // The truncated table entry leaves the rounding direction unproven
        // unless 5^|q| fits the 128-bit entry exactly.
        let inside_safe_exponent = (-27..=55).contains(&q);
        if !inside_safe_exponent {
            return compute_error_scaled(q, hi, lz);
        }
    }

    let upperbit = (hi >> 63) as i32;
    let mut mantissa = hi >> (upperbit + 64 - precision);
    let mut power2 = power(q as i32) + upperbit - lz - float::MINIMUM_EXPONENT;
    if power2 <= 0 {
        // subnormal, or underflow to zero
        if -power2 + 1 >= 64 {
            return fp_zero;
        }
        mantissa >>= -power2 + 1;
        mantissa += mantissa & 1;
        mantissa >>= 1;
        power2 = i32::from(mantissa >= float::HIDDEN_BIT);
        return ExtendedFloat {
            mant: mantissa,
            exp: power2,
        };
    }

    // Exactly-halfway products must round down to even: detectable only
    // when the product is provably exact (`lo <= 1` inside the exact-power
    // window) and the shifted-back mantissa reproduces `hi`.
    if lo <= 1
        && (-4..=23).contains(&q)
        && mantissa & 3 == 1
        && (mantissa << (upperbit + 64 - precision)) == hi
    {
        mantissa &= !1_u64;
    }

    mantissa += mantissa & 1;
    mantissa >>= 1;
    if mantissa >= float::CARRY_BIT {
        mantissa = float::HIDDEN_BIT;
        power2 += 1;
    }
    mantissa &= !float::HIDDEN_BIT;
    if power2 >= float::INFINITE_POWER {
        return fp_inf;
    }
    ExtendedFloat {
        mant: mantissa,
        exp: power2,
    }
}

/// Normalized upper bound on `w * 10^q` with the [`INVALID_FP`] marker,
/// used to seed the exact fallback's rounded-down candidate.
pub fn compute_error(q: i64, mut w: u64) -> ExtendedFloat {
    let lz = w.leading_zeros() as i32;
    w <<= lz;
    let hi = compute_product_approx(q, w, float::MANTISSA_BITS + 3).1;
    compute_error_scaled(q, hi, lz)
}

fn compute_error_scaled(q: i64, mut w: u64, lz: i32) -> ExtendedFloat {
    let hilz = (w >> 63) as i32 ^ 1;
    w <<= hilz;
    ExtendedFloat {
        mant: w,
        exp: power(q as i32) + float::EXPONENT_BIAS - hilz - lz - 62 + INVALID_FP,
    }
}

/// binary exponent contributed by `10^q`, `floor(log2(5^q)) + 63 + q`
fn power(q: i32) -> i32 {
    (q.wrapping_mul(152_170 + 65_536) >> 16) + 63
}

fn full_multiplication(a: u64, b: u64) -> (u64, u64) {
    let r = u128::from(a) * u128::from(b);
    (r as u64, (r >> 64) as u64)
}

/// `(lo, hi)` of `w` times the 128-bit significand of `5^q`, refined by a
/// second multiplication only when the first leaves the needed `precision`
/// bits ambiguous.
fn compute_product_approx(q: i64, w: u64, precision: i32) -> (u64, u64) {
    debug_assert!((SMALLEST_POWER_OF_FIVE..=LARGEST_POWER_OF_FIVE).contains(&q));
    debug_assert!(precision <= 64);
    let mask = 0xFFFF_FFFF_FFFF_FFFF_u64 >> precision;

    let index = (q - SMALLEST_POWER_OF_FIVE) as usize;
    let (hi5, lo5) = POWER_OF_FIVE_128[index];
    let (mut first_lo, mut first_hi) = full_multiplication(w, hi5);
    if first_hi & mask == mask {
        let (_, second_hi) = full_multiplication(w, lo5);
        first_lo = first_lo.wrapping_add(second_hi);
        if second_hi > first_lo {
            first_hi += 1;
        }
    }
    (first_lo, first_hi)
}
