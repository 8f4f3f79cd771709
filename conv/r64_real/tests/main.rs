use similar::{ChangeTag, TextDiff};
use std::fs;

use r64_errors::ConversionError;
use r64_real::{to_integer64, to_natural64, to_real64};

/// `str::parse::<f64>` is a correctly-rounded conversion, so it serves as
/// the reference oracle for every literal it can parse.
macro_rules! oracle {
    ($name: ident, $literal: expr) => {
        #[test]
        fn $name() {
            let expected: f64 = $literal.parse().unwrap();
            let got = to_real64($literal.as_bytes()).unwrap();
            assert_eq!(
                got.to_bits(),
                expected.to_bits(),
                "{}: got {:e}, expected {:e}",
                $literal,
                got,
                expected
            );
        }
    };
}

macro_rules! reject {
    ($name: ident, $literal: expr) => {
        #[test]
        fn $name() {
            assert_eq!(to_real64($literal), Err(ConversionError::Syntax));
        }
    };
}

oracle!(zero, "0");
oracle!(negative_zero, "-0");
oracle!(one, "1");
oracle!(exponent_pulls_into_range, "36e-1");
oracle!(bare_fraction, ".5");
oracle!(bare_integral, "5.");
oracle!(pi, "3.141592653589793");
oracle!(tenth, "0.1");
oracle!(largest_exact_power, "1e22");
oracle!(beyond_exact_powers, "1e23");
oracle!(smallest_exact_power, "1e-22");
oracle!(twice_fifty_three, "9007199254740992");
oracle!(halfway_above_fifty_three_bits, "9007199254740993");
oracle!(max_finite, "1.7976931348623157e308");
oracle!(above_max_finite, "1.7976931348623159e308");
oracle!(min_normal, "2.2250738585072014e-308");
oracle!(slightly_below_min_normal, "2.2250738585072011e-308");
oracle!(min_subnormal, "5e-324");
oracle!(min_subnormal_long_form, "4.9406564584124654e-324");
oracle!(deep_underflow, "1e-400");
oracle!(negative_deep_underflow, "-1e-400");
oracle!(overflow, "1e400");
oracle!(negative_overflow, "-1e400");
oracle!(truncated_significand, "1234567890123456789012345");
oracle!(thirty_digit_integral, "123456789012345678901234567890");
oracle!(long_one_plus_epsilon, "1.0000000000000000000000000000000000000000000000001");
oracle!(subnormal_exponent, "1e-309");
oracle!(redundant_zeroes, "-012.3400e+07");
oracle!(leading_fractional_zeroes, "0.00000000000000000000000000000000000001");
oracle!(
    subnormal_halfway_tail,
    "2.470328229206232720882843964341106861825299013071623822127928412503377536351043e-324"
);

reject!(reject_empty, b"");
reject!(reject_letters, b"abc");
reject!(reject_bare_point, b".");
reject!(reject_empty_exponent, b"1e");

#[test]
fn caret_exponent_marker() {
    let got = to_real64(b"12^3").unwrap();
    assert_eq!(got.to_bits(), 12e3_f64.to_bits());
}

#[test]
fn signed_zero_variants() {
    assert_eq!(to_real64(b"-0.0e5").unwrap().to_bits(), (-0.0_f64).to_bits());
    assert_eq!(to_real64(b"0.000").unwrap().to_bits(), 0.0_f64.to_bits());
}

#[test]
fn shortest_display_round_trips() {
    // deterministic xorshift walk over the bit space
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
    let mut checked = 0;
    while checked < 200 {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let value = f64::from_bits(state);
        if !value.is_finite() {
            continue;
        }
        let text = format!("{}", value);
        let got = to_real64(text.as_bytes()).unwrap();
        assert_eq!(got.to_bits(), value.to_bits(), "{}", text);
        checked += 1;
    }
}

#[test]
fn integer_bounds() {
    assert_eq!(to_integer64(b"9223372036854775807"), Ok(i64::MAX));
    assert_eq!(to_integer64(b"-9223372036854775808"), Ok(i64::MIN));
    assert_eq!(
        to_integer64(b"9223372036854775808"),
        Err(ConversionError::ConversionFailed)
    );
    assert_eq!(
        to_integer64(b"-9223372036854775809"),
        Err(ConversionError::ConversionFailed)
    );
    assert_eq!(to_integer64(b"-0"), Ok(0));
}

#[test]
fn natural_bounds() {
    assert_eq!(to_natural64(b"18446744073709551615"), Ok(u64::MAX));
    assert_eq!(
        to_natural64(b"18446744073709551616"),
        Err(ConversionError::ConversionFailed)
    );
    assert_eq!(to_natural64(b"+7"), Ok(7));
    assert_eq!(to_natural64(b"-5"), Err(ConversionError::ConversionFailed));
}

#[test]
fn integers_reject_real_forms() {
    assert_eq!(to_integer64(b"1.5"), Err(ConversionError::ConversionFailed));
    assert_eq!(to_integer64(b"5."), Err(ConversionError::ConversionFailed));
    assert_eq!(to_integer64(b"10e1"), Err(ConversionError::ConversionFailed));
    assert_eq!(to_integer64(b"abc"), Err(ConversionError::Syntax));
    assert_eq!(to_natural64(b"1e2"), Err(ConversionError::ConversionFailed));
}

const FIXTURE_LITERALS: &[&str] = &[
    "0",
    "-0",
    "1",
    "-1",
    "36e-1",
    "0.5",
    ".5",
    "5.",
    "3.141592653589793",
    "2.718281828459045",
    "0.1",
    "0.2",
    "0.3",
    "1017.89",
    "0.000001",
    "1e22",
    "1e23",
    "1e-22",
    "9007199254740992",
    "9007199254740993",
    "1.7976931348623157e308",
    "1.7976931348623159e308",
    "8.98846567431158e307",
    "2.2250738585072014e-308",
    "2.2250738585072011e-308",
    "5e-324",
    "4.9406564584124654e-324",
    "1e-400",
    "-1e-400",
    "1e400",
    "-1e400",
    "1e309",
    "1e-309",
    "1234567890123456789012345",
    "123456789012345678901234567890",
    "1.0000000000000000000000000000000000000000000000001",
    "-012.3400e+07",
    "12^3",
];

#[test]
fn conversions() {
    let fixture = "tests/conversions.fixture";

    let mut t = String::new();
    for literal in FIXTURE_LITERALS {
        let value = to_real64(literal.as_bytes()).unwrap();
        t.push_str(&format!("{} => 0x{:016x}\n", literal, value.to_bits()));
    }

    if let Ok(fixture_src) = fs::read_to_string(fixture) {
        let mut failed = false;
        let diff = TextDiff::from_lines(&fixture_src, &t);
        for change in diff.iter_all_changes() {
            let sign = match change.tag() {
                ChangeTag::Delete => {
                    failed = true;
                    "-"
                }
                ChangeTag::Insert => {
                    failed = true;
                    "+"
                }
                ChangeTag::Equal => " ",
            };
            print!("{}{}", sign, change);
        }

        if failed {
            panic!("FAIL");
        }
    } else {
        fs::write(fixture, t).unwrap();
    }
}
