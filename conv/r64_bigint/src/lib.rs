//! Arbitrary-precision signed integers in sign-magnitude form.
//!
//! The magnitude is a little-endian-by-index vector of 32-bit limbs; the
//! sign is one of -1, 0, +1. Zero has exactly one canonical representation:
//! a single zero limb with sign 0. For every non-zero value the
//! most-significant limb is non-zero. Every operation in this crate
//! preserves that canonical form.
//!
//! Binary operations take borrowed operands and return a fresh value; the
//! only in-place mutators are [`BigInt::mul_small`] and
//! [`BigInt::add_small`], the accumulate steps of the digit-string and
//! power-table hot loops.

use std::cmp::Ordering;
use std::ops::{Add, Mul, Neg, Sub};

use r64_errors::ConversionError;

mod magnitude;

use magnitude::{
    add_magnitudes, cmp_magnitudes, div_rem_long, div_rem_small, mul_magnitudes, shl_magnitude,
    shr_magnitude, sub_magnitudes,
};
pub use magnitude::{Limb, LIMB_BITS};

// Largest power blocks whose product step stays within one 32-bit limb:
// 10^9 and 5^13.
const TEN_STEP: u32 = 9;
const TEN_BLOCK: Limb = 1_000_000_000;
const FIVE_STEP: u32 = 13;
const FIVE_BLOCK: Limb = 1_220_703_125;

const SMALL_POW10: [Limb; 9] = [
    1,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
];

const SMALL_POW5: [Limb; 13] = [
    1,
    5,
    25,
    125,
    625,
    3_125,
    15_625,
    78_125,
    390_625,
    1_953_125,
    9_765_625,
    48_828_125,
    244_140_625,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BigInt {
    limbs: Vec<Limb>,
    sign: i8,
}

impl BigInt {
    #[must_use]
    pub fn zero() -> Self {
        BigInt {
            limbs: vec![0],
            sign: 0,
        }
    }

    #[must_use]
    pub fn from_u64(value: u64) -> Self {
        let mut out = BigInt {
            limbs: vec![value as Limb, (value >> LIMB_BITS) as Limb],
            sign: (value != 0) as i8,
        };
        out.canonicalize();
        out
    }

    #[must_use]
    pub fn from_i64(value: i64) -> Self {
        let mut out = Self::from_u64(value.unsigned_abs());
        if value < 0 {
            out.sign = -1;
        }
        out
    }

    /// Accumulates an ASCII decimal digit string, most significant digit
    /// first. Fails with `ConversionFailed` on any non-digit byte.
    pub fn from_decimal_digits(bytes: &[u8]) -> Result<Self, ConversionError> {
        let mut value = BigInt::zero();
        for &b in bytes {
            if !(b'0'..=b'9').contains(&b) {
                return Err(ConversionError::ConversionFailed);
            }
            value.mul_small(10);
            value.add_small(Limb::from(b - b'0'));
        }
        Ok(value)
    }

    #[must_use]
    pub fn power_of_two(exponent: u32) -> Self {
        BigInt::from(1u8).shift_left(i64::from(exponent))
    }

    #[must_use]
    pub fn power_of_five(exponent: u32) -> Self {
        let mut value = BigInt::from(1u8);
        let mut left = exponent;
        while left >= FIVE_STEP {
            value.mul_small(FIVE_BLOCK);
            left -= FIVE_STEP;
        }
        if left != 0 {
            value.mul_small(SMALL_POW5[left as usize]);
        }
        value
    }

    #[must_use]
    pub fn power_of_ten(exponent: u32) -> Self {
        let mut value = BigInt::from(1u8);
        let mut left = exponent;
        while left >= TEN_STEP {
            value.mul_small(TEN_BLOCK);
            left -= TEN_STEP;
        }
        if left != 0 {
            value.mul_small(SMALL_POW10[left as usize]);
        }
        value
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.sign == 0
    }

    /// -1, 0 or +1
    #[must_use]
    pub fn sign(&self) -> i8 {
        self.sign
    }

    /// the magnitude limbs, least significant first
    #[must_use]
    pub fn limbs(&self) -> &[Limb] {
        &self.limbs
    }

    /// 0 for zero; otherwise the index of the highest set magnitude bit,
    /// plus one
    #[must_use]
    pub fn bit_length(&self) -> u64 {
        if self.is_zero() {
            return 0;
        }
        let top = self.limbs[self.limbs.len() - 1];
        self.limbs.len() as u64 * LIMB_BITS as u64 - u64::from(top.leading_zeros())
    }

    /// Compares magnitudes, ignoring signs. A shorter limb count always
    /// means a smaller magnitude, since no value carries leading zero limbs.
    #[must_use]
    pub fn magnitude_cmp(&self, other: &BigInt) -> Ordering {
        cmp_magnitudes(&self.limbs, &other.limbs)
    }

    /// The top 64 magnitude bits, shifted so the most significant set bit
    /// lands at bit 63, and whether any lower set bits were cut off.
    #[must_use]
    pub fn hi64(&self) -> (u64, bool) {
        if self.is_zero() {
            return (0, false);
        }
        let n = self.limbs.len();
        let limb = |i: usize| if i < n { u128::from(self.limbs[i]) } else { 0 };

        // a 96-bit window over the top three limbs, normalized so the top
        // set bit moves to bit 95
        let window = (limb(n - 1) << 64) | (limb(n.wrapping_sub(2)) << 32) | limb(n.wrapping_sub(3));
        let normalized = window << self.limbs[n - 1].leading_zeros();
        let value = (normalized >> 32) as u64;

        let mut truncated = normalized as u32 != 0;
        if n > 3 {
            truncated |= self.limbs[..n - 3].iter().any(|&l| l != 0);
        }
        (value, truncated)
    }

    /// Multiplies the magnitude by a small factor in place; the sign is
    /// unchanged (zero stays zero).
    pub fn mul_small(&mut self, factor: Limb) {
        if self.is_zero() {
            return;
        }
        if factor == 0 {
            *self = BigInt::zero();
            return;
        }
        let mut carry: u64 = 0;
        for limb in &mut self.limbs {
            let t = u64::from(*limb) * u64::from(factor) + carry;
            *limb = t as Limb;
            carry = t >> LIMB_BITS;
        }
        if carry != 0 {
            self.limbs.push(carry as Limb);
        }
    }

    /// Adds a small term to the magnitude in place. The value must not be
    /// negative.
    pub fn add_small(&mut self, term: Limb) {
        debug_assert!(self.sign >= 0);
        if term == 0 {
            return;
        }
        let mut carry = u64::from(term);
        for limb in &mut self.limbs {
            if carry == 0 {
                break;
            }
            let t = u64::from(*limb) + carry;
            *limb = t as Limb;
            carry = t >> LIMB_BITS;
        }
        if carry != 0 {
            self.limbs.push(carry as Limb);
        }
        self.sign = 1;
    }

    /// Division with remainder: `self = quotient * divisor + remainder`
    /// with `0 <= |remainder| < |divisor|` and the remainder taking the
    /// dividend's sign. Fails with `DivisionByZero` on a zero divisor.
    pub fn div_rem(&self, divisor: &BigInt) -> Result<(BigInt, BigInt), ConversionError> {
        if divisor.is_zero() {
            return Err(ConversionError::DivisionByZero);
        }
        if self.is_zero() {
            return Ok((BigInt::zero(), BigInt::zero()));
        }

        let (q_mag, r_mag) = match cmp_magnitudes(&self.limbs, &divisor.limbs) {
            Ordering::Less => (vec![0], self.limbs.clone()),
            Ordering::Equal => (vec![1], vec![0]),
            Ordering::Greater => {
                if divisor.limbs.len() == 1 {
                    div_rem_small(&self.limbs, divisor.limbs[0])
                } else {
                    div_rem_long(&self.limbs, &divisor.limbs)
                }
            }
        };

        let mut quotient = BigInt {
            limbs: q_mag,
            sign: self.sign * divisor.sign,
        };
        quotient.canonicalize();
        let mut remainder = BigInt {
            limbs: r_mag,
            sign: self.sign,
        };
        remainder.canonicalize();
        Ok((quotient, remainder))
    }

    /// Shifts the magnitude left by `count` bits; a negative count shifts
    /// right instead.
    #[must_use]
    pub fn shift_left(&self, count: i64) -> BigInt {
        if count < 0 {
            return self.shr(count.unsigned_abs());
        }
        self.shl(count as u64)
    }

    /// Shifts the magnitude right by `count` bits; a negative count shifts
    /// left instead. Shifting every set bit out yields zero.
    #[must_use]
    pub fn shift_right(&self, count: i64) -> BigInt {
        if count < 0 {
            return self.shl(count.unsigned_abs());
        }
        self.shr(count as u64)
    }

    fn shl(&self, count: u64) -> BigInt {
        if self.is_zero() || count == 0 {
            return self.clone();
        }
        let mut out = BigInt {
            limbs: shl_magnitude(&self.limbs, count),
            sign: self.sign,
        };
        out.canonicalize();
        out
    }

    fn shr(&self, count: u64) -> BigInt {
        if self.is_zero() || count == 0 {
            return self.clone();
        }
        if count >= self.bit_length() {
            return BigInt::zero();
        }
        let mut out = BigInt {
            limbs: shr_magnitude(&self.limbs, count),
            sign: self.sign,
        };
        out.canonicalize();
        out
    }

    /// Restores the canonical form: no leading zero limbs, and the single
    /// zero limb with sign 0 for a zero magnitude.
    fn canonicalize(&mut self) {
        while self.limbs.len() > 1 && self.limbs.last() == Some(&0) {
            self.limbs.pop();
        }
        if self.limbs == [0] {
            self.sign = 0;
        } else if self.sign == 0 {
            self.sign = 1;
        }
    }
}

macro_rules! from_fixed_width {
    (@natural $($t: ty),*) => {$(
        impl From<$t> for BigInt {
            fn from(value: $t) -> Self {
                BigInt::from_u64(u64::from(value))
            }
        }
    )*};
    (@integer $($t: ty),*) => {$(
        impl From<$t> for BigInt {
            fn from(value: $t) -> Self {
                BigInt::from_i64(i64::from(value))
            }
        }
    )*};
}

from_fixed_width!(@natural u8, u16, u32);
from_fixed_width!(@integer i8, i16, i32);

impl From<u64> for BigInt {
    fn from(value: u64) -> Self {
        BigInt::from_u64(value)
    }
}

impl From<i64> for BigInt {
    fn from(value: i64) -> Self {
        BigInt::from_i64(value)
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(mut self) -> BigInt {
        self.sign = -self.sign;
        self
    }
}

impl Add for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: &BigInt) -> BigInt {
        if self.is_zero() {
            return rhs.clone();
        }
        if rhs.is_zero() {
            return self.clone();
        }

        if self.sign == rhs.sign {
            return BigInt {
                limbs: add_magnitudes(&self.limbs, &rhs.limbs),
                sign: self.sign,
            };
        }

        // opposite signs: the larger magnitude wins
        match cmp_magnitudes(&self.limbs, &rhs.limbs) {
            Ordering::Equal => BigInt::zero(),
            Ordering::Greater => {
                let mut out = BigInt {
                    limbs: sub_magnitudes(&self.limbs, &rhs.limbs),
                    sign: self.sign,
                };
                out.canonicalize();
                out
            }
            Ordering::Less => {
                let mut out = BigInt {
                    limbs: sub_magnitudes(&rhs.limbs, &self.limbs),
                    sign: rhs.sign,
                };
                out.canonicalize();
                out
            }
        }
    }
}

impl Sub for &BigInt {
    type Output = BigInt;

    fn sub(self, rhs: &BigInt) -> BigInt {
        // negate-and-add
        let negated = BigInt {
            limbs: rhs.limbs.clone(),
            sign: -rhs.sign,
        };
        self + &negated
    }
}

impl Mul for &BigInt {
    type Output = BigInt;

    fn mul(self, rhs: &BigInt) -> BigInt {
        if self.is_zero() || rhs.is_zero() {
            return BigInt::zero();
        }
        let mut out = BigInt {
            limbs: mul_magnitudes(&self.limbs, &rhs.limbs),
            sign: self.sign * rhs.sign,
        };
        out.canonicalize();
        out
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.sign.cmp(&other.sign) {
            Ordering::Equal => {
                let by_magnitude = cmp_magnitudes(&self.limbs, &other.limbs);
                if self.sign < 0 {
                    by_magnitude.reverse()
                } else {
                    by_magnitude
                }
            }
            unequal => unequal,
        }
    }
}
