use r64_literal::parse;

macro_rules! reject {
    ($f: ident, $src: literal) => {
        #[test]
        fn $f() {
            assert!(parse($src).is_err(), "{:?} should not parse", $src);
        }
    };
}

reject!(empty, b"");
reject!(bare_radix_point, b".");
reject!(sign_only, b"-");
reject!(sign_and_point, b"+.");
reject!(missing_exponent_digits, b"1e");
reject!(missing_exponent_digits_after_sign, b"1e-");
reject!(alphabetic, b"abc");
reject!(trailing_garbage, b"12.5x");
reject!(double_radix_point, b"1.2.3");
reject!(inner_sign, b"1-2");

#[test]
fn integral_only() {
    let lit = parse(b"1204").unwrap();
    assert_eq!(lit.significand.integral.span.length, 4);
    assert_eq!(lit.significand.integral.zeroes.length, 0);
    assert!(lit.significand.radix_point.is_empty());
    assert!(lit.significand.fractional.span.is_empty());
    assert!(lit.exponent.is_none());
    assert_eq!(lit.significant_digits(), 4);
}

#[test]
fn leading_zeroes_recorded() {
    let lit = parse(b"00071").unwrap();
    assert_eq!(lit.significand.integral.span.length, 5);
    assert_eq!(lit.significand.integral.zeroes.length, 3);
    assert_eq!(lit.significant_digits(), 2);

    let bytes = b"00071";
    assert_eq!(lit.integral_digits().of(bytes), b"71");
}

#[test]
fn all_zero_integral() {
    let lit = parse(b"000").unwrap();
    assert_eq!(lit.significand.integral.zeroes.length, 3);
    assert_eq!(lit.significant_digits(), 0);
}

#[test]
fn trailing_zeroes_recorded() {
    let bytes = b"0.340900";
    let lit = parse(bytes).unwrap();
    assert_eq!(lit.significand.fractional.span.of(bytes), b"340900");
    assert_eq!(lit.significand.fractional.zeroes.length, 2);
    assert_eq!(lit.significant_digits(), 4);
}

#[test]
fn one_sided_radix_point() {
    let bytes = b".5";
    let lit = parse(bytes).unwrap();
    assert!(lit.significand.integral.span.is_empty());
    assert_eq!(lit.significand.fractional.span.of(bytes), b"5");

    let bytes = b"5.";
    let lit = parse(bytes).unwrap();
    assert_eq!(lit.significand.integral.span.of(bytes), b"5");
    assert!(lit.significand.fractional.span.is_empty());
}

#[test]
fn signs() {
    let bytes = b"-12";
    let lit = parse(bytes).unwrap();
    assert!(lit.is_negative(bytes));

    let bytes = b"+12";
    let lit = parse(bytes).unwrap();
    assert!(!lit.is_negative(bytes));
    assert_eq!(lit.significand.sign.length, 1);
}

#[test]
fn exponent_markers() {
    for bytes in [&b"2e5"[..], b"2E5", b"2^5"] {
        let lit = parse(bytes).unwrap();
        let exp = lit.exponent.expect("exponent part");
        assert_eq!(exp.integral.span.of(bytes), b"5");
        assert!(exp.sign.is_empty());
    }
}

#[test]
fn exponent_sign_and_zeroes() {
    let bytes = b"36e-010";
    let lit = parse(bytes).unwrap();
    let exp = lit.exponent.unwrap();
    assert_eq!(exp.sign.of(bytes), b"-");
    assert_eq!(exp.integral.span.of(bytes), b"010");
    assert_eq!(exp.integral.zeroes.length, 1);
}

#[test]
fn full_form() {
    let bytes = b"-012.3400e+07";
    let lit = parse(bytes).unwrap();
    assert!(lit.is_negative(bytes));
    assert_eq!(lit.integral_digits().of(bytes), b"12");
    assert_eq!(lit.fractional_digits().of(bytes), b"3400");
    assert_eq!(lit.significant_digits(), 2 + 2);
    let exp = lit.exponent.unwrap();
    assert_eq!(exp.sign.of(bytes), b"+");
    assert_eq!(exp.integral.span.of(bytes), b"07");
}
