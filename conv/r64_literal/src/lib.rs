//! Structural parser for decimal numerals.
//!
//! A numeral such as `-012.3400e+07` is segmented into byte spans: sign,
//! integral digits (with their leading-zero prefix), radix point, fractional
//! digits (with their trailing-zero suffix), and an exponent part. No
//! arithmetic happens here; the spans drive all downstream digit
//! accumulation, so the parser records exactly where the significant digits
//! live.

use r64_errors::ConversionError;
use r64_utils::Span;

/// A digit run together with its zero-run sub-span.
///
/// For integral and exponent digits `zeroes` is the leading-zero prefix
/// (possibly covering the whole run); for fractional digits it is the
/// trailing-zero suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Digits {
    pub span: Span,
    pub zeroes: Span,
}

impl Digits {
    /// count of digits outside the zero run
    #[must_use]
    pub fn significant(&self) -> usize {
        self.span.length - self.zeroes.length
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Significand {
    /// optional `+`/`-`, length 0 or 1
    pub sign: Span,
    pub integral: Digits,
    /// optional `.`, length 0 or 1
    pub radix_point: Span,
    pub fractional: Digits,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exponent {
    /// the `e`, `E` or `^` byte
    pub marker: Span,
    /// optional `+`/`-`, length 0 or 1
    pub sign: Span,
    pub integral: Digits,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberLiteral {
    pub significand: Significand,
    pub exponent: Option<Exponent>,
}

impl NumberLiteral {
    /// whether the significand carries a `-` sign
    #[must_use]
    pub fn is_negative(&self, bytes: &[u8]) -> bool {
        self.significand.sign.of(bytes) == b"-"
    }

    /// total count of significant digits: integral digits minus leading
    /// zeroes, plus fractional digits minus trailing zeroes
    #[must_use]
    pub fn significant_digits(&self) -> usize {
        self.significand.integral.significant() + self.significand.fractional.significant()
    }

    /// integral digits with the leading-zero prefix stripped
    #[must_use]
    pub fn integral_digits(&self) -> Span {
        let d = &self.significand.integral;
        Span::new(d.zeroes.end(), d.span.end() - d.zeroes.end())
    }

    /// the full fractional digit run, trailing zeroes included
    #[must_use]
    pub fn fractional_digits(&self) -> Span {
        self.significand.fractional.span
    }
}

fn is_digit(b: u8) -> bool {
    (b'0'..=b'9').contains(&b)
}

fn scan_sign(bytes: &[u8], pos: &mut usize) -> Span {
    match bytes.get(*pos) {
        Some(b'+') | Some(b'-') => {
            *pos += 1;
            Span::new(*pos - 1, 1)
        }
        _ => Span::empty(*pos),
    }
}

fn scan_digits(bytes: &[u8], pos: &mut usize) -> Span {
    let start = *pos;
    while let Some(&b) = bytes.get(*pos) {
        if !is_digit(b) {
            break;
        }
        *pos += 1;
    }
    Span::new(start, *pos - start)
}

fn leading_zeroes(bytes: &[u8], run: Span) -> Span {
    let mut length = 0;
    while length < run.length && bytes[run.start + length] == b'0' {
        length += 1;
    }
    Span::new(run.start, length)
}

fn trailing_zeroes(bytes: &[u8], run: Span) -> Span {
    let mut length = 0;
    while length < run.length && bytes[run.end() - 1 - length] == b'0' {
        length += 1;
    }
    Span::new(run.end() - length, length)
}

/// Segments `bytes` into a [`NumberLiteral`].
///
/// Fails with [`ConversionError::Syntax`] when the numeral is empty, when a
/// mandatory digit run is missing (a bare `.`, or an exponent marker with no
/// digits), or when bytes remain after all recognized fields.
pub fn parse(bytes: &[u8]) -> Result<NumberLiteral, ConversionError> {
    let mut pos = 0;

    let sign = scan_sign(bytes, &mut pos);

    let integral_run = scan_digits(bytes, &mut pos);
    let integral = Digits {
        span: integral_run,
        zeroes: leading_zeroes(bytes, integral_run),
    };

    let radix_point = match bytes.get(pos) {
        Some(b'.') => {
            pos += 1;
            Span::new(pos - 1, 1)
        }
        _ => Span::empty(pos),
    };

    let fractional_run = if radix_point.is_empty() {
        Span::empty(pos)
    } else {
        scan_digits(bytes, &mut pos)
    };
    let fractional = Digits {
        span: fractional_run,
        zeroes: trailing_zeroes(bytes, fractional_run),
    };

    // digits are required on at least one side of the radix point
    if integral.span.is_empty() && fractional.span.is_empty() {
        return Err(ConversionError::Syntax);
    }

    let exponent = match bytes.get(pos) {
        Some(b'e') | Some(b'E') | Some(b'^') => {
            let marker = Span::new(pos, 1);
            pos += 1;
            let exponent_sign = scan_sign(bytes, &mut pos);
            let run = scan_digits(bytes, &mut pos);
            if run.is_empty() {
                return Err(ConversionError::Syntax);
            }
            Some(Exponent {
                marker,
                sign: exponent_sign,
                integral: Digits {
                    span: run,
                    zeroes: leading_zeroes(bytes, run),
                },
            })
        }
        _ => None,
    };

    if pos != bytes.len() {
        return Err(ConversionError::Syntax);
    }

    Ok(NumberLiteral {
        significand: Significand {
            sign,
            integral,
            radix_point,
            fractional,
        },
        exponent,
    })
}
