use std::fmt::Display;

/// Terminal failures surfaced by the conversion entry points and the
/// big-integer primitives.
///
/// Tier selection inside the real-number pipeline is not represented here;
/// a tier that cannot produce a result is an expected, recoverable outcome
/// that the orchestrator consumes to pick the next tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionError {
    Syntax,
    ConversionFailed,
    DivisionByZero,
}

impl Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::Syntax => write!(f, "not a well-formed decimal numeral"),
            ConversionError::ConversionFailed => {
                write!(f, "value cannot be represented in the requested type")
            }
            ConversionError::DivisionByZero => write!(f, "division by zero"),
        }
    }
}
