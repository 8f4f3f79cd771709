use std::cmp::Ordering;

use r64_bigint::BigInt;
use r64_errors::ConversionError;

fn big(s: &str) -> BigInt {
    if let Some(rest) = s.strip_prefix('-') {
        -BigInt::from_decimal_digits(rest.as_bytes()).unwrap()
    } else {
        BigInt::from_decimal_digits(s.as_bytes()).unwrap()
    }
}

macro_rules! div_identity {
    ($name: ident, $a: expr, $b: expr) => {
        #[test]
        fn $name() {
            let a = big($a);
            let b = big($b);
            let (q, r) = a.div_rem(&b).unwrap();
            assert_eq!(&(&q * &b) + &r, a, "a = q*b + r");
            assert_eq!(r.magnitude_cmp(&b), Ordering::Less, "|r| < |b|");
            if !r.is_zero() {
                assert_eq!(r.sign(), a.sign(), "remainder takes the dividend's sign");
            }
        }
    };
}

div_identity!(div_pos_pos, "340282366920938463463374607431768211455", "18446744073709551616");
div_identity!(div_pos_neg, "1000000000000000000000000000000001", "-99999999999999999");
div_identity!(div_neg_pos, "-1000000000000000000000000000000001", "99999999999999999");
div_identity!(div_neg_neg, "-123456789012345678901234567890", "-987654321098765");
div_identity!(div_small_by_large, "12345", "123456789012345678901234567890");
div_identity!(div_equal_magnitudes, "-123456789012345678901234567890", "123456789012345678901234567890");
div_identity!(div_single_limb_divisor, "98765432109876543210987654321", "1000003");

#[test]
fn divide_by_zero() {
    let a = big("42");
    assert_eq!(a.div_rem(&BigInt::zero()), Err(ConversionError::DivisionByZero));
}

#[test]
fn zero_dividend() {
    let b = big("-7");
    assert_eq!(
        BigInt::zero().div_rem(&b).unwrap(),
        (BigInt::zero(), BigInt::zero())
    );
}

#[test]
fn magnitude_ordering_ignores_sign() {
    let small = big("-99999999999999999999");
    let large = big("100000000000000000000");
    assert_eq!(small.magnitude_cmp(&large), Ordering::Less);
    assert_eq!(large.magnitude_cmp(&small), Ordering::Greater);
}

#[test]
fn fewer_limbs_means_smaller_magnitude() {
    // one limb versus two: 2^32 - 1 < 2^32
    let one = BigInt::from(u32::MAX);
    let two = BigInt::from(1u64 << 32);
    assert_eq!(one.magnitude_cmp(&two), Ordering::Less);
    assert!(one < two);
}

#[test]
fn signed_ordering() {
    assert!(big("-5") < big("-3"));
    assert!(big("-3") < BigInt::zero());
    assert!(BigInt::zero() < big("3"));
    assert!(big("3") < big("5"));
    assert!(big("-100000000000000000000") < big("5"));
}

#[test]
fn zero_is_canonical() {
    let a = big("123456789012345678901234567890");
    let diff = &a - &a;
    assert!(diff.is_zero());
    assert_eq!(diff.sign(), 0);
    assert_eq!(diff.limbs(), &[0]);
    assert_eq!(diff, BigInt::zero());
    assert_eq!(-BigInt::zero(), BigInt::zero());
}

#[test]
fn add_opposite_signs() {
    assert_eq!(&big("100") + &big("-30"), big("70"));
    assert_eq!(&big("30") + &big("-100"), big("-70"));
    assert_eq!(
        &big("18446744073709551616") + &big("-1"),
        big("18446744073709551615")
    );
}

#[test]
fn sub_is_negate_and_add() {
    assert_eq!(&big("100") - &big("-30"), big("130"));
    assert_eq!(&big("-100") - &big("-30"), big("-70"));
}

#[test]
fn mul_signs_and_carries() {
    assert_eq!(&big("-3") * &big("5"), big("-15"));
    assert_eq!(&big("-3") * &big("-5"), big("15"));
    assert_eq!(
        &big("18446744073709551615") * &big("18446744073709551615"),
        big("340282366920938463426481119284349108225")
    );
    assert_eq!(&big("12345") * &BigInt::zero(), BigInt::zero());
}

#[test]
fn shift_round_trip() {
    let a = big("123456789012345678901234567890");
    assert_eq!(a.shift_left(77).shift_right(77), a);
    assert_eq!(a.shift_left(-77), a.shift_right(77));
    assert_eq!(a.shift_right(-13), a.shift_left(13));
}

#[test]
fn shift_out_every_bit() {
    let a = big("255");
    assert_eq!(a.shift_right(8), BigInt::zero());
    assert_eq!(a.shift_right(1000), BigInt::zero());
}

#[test]
fn bit_length() {
    assert_eq!(BigInt::zero().bit_length(), 0);
    assert_eq!(BigInt::from(1u8).bit_length(), 1);
    assert_eq!(BigInt::from(255u8).bit_length(), 8);
    assert_eq!(BigInt::from(1u64 << 32).bit_length(), 33);
    assert_eq!(BigInt::power_of_two(100).bit_length(), 101);
}

#[test]
fn hi64_normalizes_to_top_bit() {
    let (hi, truncated) = BigInt::from(1u8).hi64();
    assert_eq!(hi, 1 << 63);
    assert!(!truncated);

    let (hi, truncated) = BigInt::from(u64::MAX).hi64();
    assert_eq!(hi, u64::MAX);
    assert!(!truncated);

    let (hi, truncated) = big("18446744073709551617").hi64(); // 2^64 + 1
    assert_eq!(hi, 1 << 63);
    assert!(truncated);
}

#[test]
fn powers() {
    assert_eq!(BigInt::power_of_two(0), big("1"));
    assert_eq!(BigInt::power_of_two(64), big("18446744073709551616"));
    assert_eq!(BigInt::power_of_five(0), big("1"));
    assert_eq!(BigInt::power_of_five(27), big("7450580596923828125"));
    assert_eq!(BigInt::power_of_ten(0), big("1"));
    assert_eq!(BigInt::power_of_ten(20), big("100000000000000000000"));
    assert_eq!(
        &BigInt::power_of_five(40) * &BigInt::power_of_two(40),
        BigInt::power_of_ten(40)
    );
}

#[test]
fn decimal_digits() {
    assert_eq!(BigInt::from_decimal_digits(b"0000"), Ok(BigInt::zero()));
    assert_eq!(
        BigInt::from_decimal_digits(b"18446744073709551616"),
        Ok(BigInt::power_of_two(64))
    );
    assert_eq!(
        BigInt::from_decimal_digits(b"12a4"),
        Err(ConversionError::ConversionFailed)
    );
}

#[test]
fn fixed_width_conversions() {
    assert_eq!(BigInt::from(-1i8), big("-1"));
    assert_eq!(BigInt::from(i64::MIN), big("-9223372036854775808"));
    assert_eq!(BigInt::from(u64::MAX), big("18446744073709551615"));
    assert_eq!(BigInt::from(0u32), BigInt::zero());
}
