//! Reduction of a parsed numeral to a compact fixed-width approximation.

use r64_literal::NumberLiteral;

/// Decimal digits consumed into the 64-bit significand before truncation.
/// 19 is the largest count that cannot overflow a `u64` (`10^19 < 2^64`).
const SIGNIFICAND_DIGIT_BUDGET: usize = 19;
const EXPONENT_DIGIT_BUDGET: usize = 19;

/// A numeral reduced to `significand * 10^(exponent + shift)`, with flags
/// recording where the 19-digit budgets cut the source digits off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Approximation {
    /// up to 19 significant decimal digits, most significant first
    pub significand: u64,
    pub significand_truncated: bool,
    /// the parsed `e±dd` part, zero when absent
    pub exponent: i64,
    pub exponent_truncated: bool,
    /// scale correction: negative count of fractional digits consumed, or a
    /// positive count of integral digits left unapplied
    pub shift: i64,
    pub negative: bool,
}

impl Approximation {
    pub fn from_literal(literal: &NumberLiteral, bytes: &[u8]) -> Approximation {
        let integral = literal.integral_digits().of(bytes);
        let fractional = literal.fractional_digits().of(bytes);

        let mut significand: u64 = 0;
        let mut consumed = 0;
        let mut shift: i64 = 0;
        let mut truncated = false;

        for &b in integral {
            if consumed == SIGNIFICAND_DIGIT_BUDGET {
                truncated = true;
                break;
            }
            significand = significand * 10 + u64::from(b - b'0');
            consumed += 1;
        }

        if truncated {
            // unconsumed integral digits are unapplied powers of ten
            shift = (integral.len() - consumed) as i64;
        } else {
            let mut index = 0;
            if consumed == 0 {
                // leading fractional zeroes carry scale but are not
                // significant, so they must not eat into the budget
                while index < fractional.len() && fractional[index] == b'0' {
                    index += 1;
                    shift -= 1;
                }
            }
            while index < fractional.len() {
                if consumed == SIGNIFICAND_DIGIT_BUDGET {
                    truncated = true;
                    break;
                }
                significand = significand * 10 + u64::from(fractional[index] - b'0');
                consumed += 1;
                index += 1;
                shift -= 1;
            }
        }

        let mut exponent: i64 = 0;
        let mut exponent_truncated = false;
        if let Some(part) = &literal.exponent {
            let digits = &bytes[part.integral.zeroes.end()..part.integral.span.end()];
            let mut consumed = 0;
            for &b in digits {
                if consumed == EXPONENT_DIGIT_BUDGET {
                    exponent_truncated = true;
                    break;
                }
                exponent = exponent
                    .saturating_mul(10)
                    .saturating_add(i64::from(b - b'0'));
                consumed += 1;
            }
            if part.sign.of(bytes) == b"-" {
                exponent = -exponent;
            }
        }

        Approximation {
            significand,
            significand_truncated: truncated,
            exponent,
            exponent_truncated,
            shift,
            negative: literal.is_negative(bytes),
        }
    }

    /// the decimal exponent the significand is actually scaled by
    pub fn effective_exponent(&self) -> i64 {
        self.exponent.saturating_add(self.shift)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(s: &str) -> Approximation {
        let literal = r64_literal::parse(s.as_bytes()).unwrap();
        Approximation::from_literal(&literal, s.as_bytes())
    }

    #[test]
    fn plain_integral() {
        let a = extract("1200");
        assert_eq!(a.significand, 1200);
        assert_eq!(a.shift, 0);
        assert!(!a.significand_truncated);
    }

    #[test]
    fn fractional_shift() {
        let a = extract("3.14159");
        assert_eq!(a.significand, 314159);
        assert_eq!(a.shift, -5);
        assert_eq!(a.effective_exponent(), -5);
    }

    #[test]
    fn leading_fractional_zeroes_do_not_consume_budget() {
        let s = format!("0.{}1", "0".repeat(25));
        let a = extract(&s);
        assert_eq!(a.significand, 1);
        assert!(!a.significand_truncated);
        assert_eq!(a.shift, -26);
    }

    #[test]
    fn integral_overflowing_the_budget() {
        let a = extract("1234567890123456789012345");
        assert_eq!(a.significand, 1234567890123456789);
        assert!(a.significand_truncated);
        assert_eq!(a.shift, 6);
        assert_eq!(a.effective_exponent(), 6);
    }

    #[test]
    fn fractional_overflowing_the_budget() {
        let a = extract("1.0000000000000000000001");
        assert!(a.significand_truncated);
        assert_eq!(a.significand, 1_000_000_000_000_000_000);
        assert_eq!(a.shift, -18);
    }

    #[test]
    fn exponent_sign_and_zeroes() {
        let a = extract("5e-007");
        assert_eq!(a.exponent, -7);
        assert!(!a.exponent_truncated);
        assert_eq!(a.effective_exponent(), -7);
    }

    #[test]
    fn exponent_overflowing_the_budget() {
        let a = extract(&format!("1e{}", "9".repeat(25)));
        assert!(a.exponent_truncated);
        assert!(a.exponent > 0);
    }

    #[test]
    fn negative_sign() {
        assert!(extract("-12").negative);
        assert!(!extract("+12").negative);
    }
}
