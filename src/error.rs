use std::error::Error;
use std::fmt;

/// Errors surfaced by fallible [`BigInt`](crate::BigInt) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BigIntError {
    /// The divisor of a division or remainder operation was zero.
    DivisionByZero,
    /// A decimal string contained anything other than an optional leading
    /// `-` followed by at least one ascii digit.
    ParseError,
}

impl fmt::Display for BigIntError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BigIntError::DivisionByZero => f.write_str("division by zero"),
            BigIntError::ParseError => f.write_str("malformed decimal string"),
        }
    }
}

impl Error for BigIntError {}
