//! Error types for base numbers and warranty codes.
//!
//! `WarrantyError` is a caller contract violation (wrong-shaped base number,
//! range past the last base number). `Rejection` is the reason a
//! user-supplied warranty code is not accepted.

use thiserror::Error;

/// Precondition failure when computing a check digit or minting codes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WarrantyError {
    /// Base number is not exactly 5 characters long.
    #[error("base number must be {expected} digits (got {actual} characters)")]
    InvalidInputLength { expected: usize, actual: usize },

    /// Base number has the right length but contains a non-digit character.
    #[error("base number must be digits only ({found:?} at position {position})")]
    NonDigit { position: usize, found: char },

    /// Numeric index does not fit in 5 digits.
    #[error("base number {0} is out of range (0..=99999)")]
    OutOfRange(u32),

    /// A consecutive range would run past 99999.
    #[error("range of {count} codes starting at {start} runs past 99999")]
    RangeOverflow { start: String, count: u32 },
}

/// Why a candidate warranty code was rejected.
///
/// Variants are reported in check order: length, then digits, then checksum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("warranty code must be 6 digits (got {actual} characters)")]
    WrongLength { actual: usize },

    #[error("warranty code must be digits only ({found:?} at position {position})")]
    NonDigit { position: usize, found: char },

    #[error("check digit mismatch (expected {expected}, found {found})")]
    CheckDigitMismatch { expected: u8, found: u8 },

    /// Input line in a code list was not valid UTF-8.
    #[error("line is not valid UTF-8")]
    InvalidUtf8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_message_mentions_five_digits() {
        let err = WarrantyError::InvalidInputLength {
            expected: 5,
            actual: 4,
        };
        assert_eq!(
            err.to_string(),
            "base number must be 5 digits (got 4 characters)"
        );
    }

    #[test]
    fn mismatch_message() {
        let r = Rejection::CheckDigitMismatch {
            expected: 3,
            found: 0,
        };
        assert_eq!(r.to_string(), "check digit mismatch (expected 3, found 0)");
    }
}
