//! Typed base numbers, check digits and warranty codes.
//!
//! Values are fixed-width digit strings, not magnitudes: `00042` and `42`
//! are different inputs and only the former is a base number.

use crate::checksum::{check_digit_of, inspect_warranty_code, parse_base_digits, BASE_LEN};
use crate::error::{Rejection, WarrantyError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Largest base number, as an index.
pub const MAX_BASE_INDEX: u32 = 99_999;

/// Five ASCII digits; leading zeros are significant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BaseNumber([u8; BASE_LEN]);

impl BaseNumber {
    /// Parses exactly five ASCII digits.
    pub fn parse(s: &str) -> Result<Self, WarrantyError> {
        parse_base_digits(s).map(Self)
    }

    /// Zero-padded base number for `0..=99999`.
    pub fn from_index(index: u32) -> Result<Self, WarrantyError> {
        if index > MAX_BASE_INDEX {
            return Err(WarrantyError::OutOfRange(index));
        }
        let mut digits = [0u8; BASE_LEN];
        let mut rest = index;
        for slot in digits.iter_mut().rev() {
            *slot = (rest % 10) as u8;
            rest /= 10;
        }
        Ok(Self(digits))
    }

    pub(crate) fn from_digits(digits: [u8; BASE_LEN]) -> Self {
        Self(digits)
    }

    /// Numeric value of the digits (`00042` -> 42).
    pub fn index(&self) -> u32 {
        self.0.iter().fold(0, |acc, &d| acc * 10 + u32::from(d))
    }

    pub fn digits(&self) -> &[u8; BASE_LEN] {
        &self.0
    }

    pub fn check_digit(&self) -> CheckDigit {
        CheckDigit(check_digit_of(&self.0))
    }

    /// The following base number, or `None` after `99999`.
    pub fn successor(&self) -> Option<Self> {
        Self::from_index(self.index() + 1).ok()
    }
}

impl fmt::Display for BaseNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in self.0 {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}

impl FromStr for BaseNumber {
    type Err = WarrantyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for BaseNumber {
    type Error = WarrantyError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<BaseNumber> for String {
    fn from(b: BaseNumber) -> Self {
        b.to_string()
    }
}

/// A single check digit in `0..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct CheckDigit(u8);

impl CheckDigit {
    pub(crate) fn new_unchecked(value: u8) -> Self {
        debug_assert!(value <= 9);
        Self(value)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for CheckDigit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Base number followed by its check digit. Always internally consistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WarrantyCode {
    base: BaseNumber,
    check: CheckDigit,
}

impl WarrantyCode {
    pub fn generate(base: BaseNumber) -> Self {
        Self {
            check: base.check_digit(),
            base,
        }
    }

    /// Parses and verifies a 6-digit code. See [`inspect_warranty_code`].
    pub fn parse(s: &str) -> Result<Self, Rejection> {
        inspect_warranty_code(s)
    }

    pub(crate) fn from_parts(base: BaseNumber, check: CheckDigit) -> Self {
        Self { base, check }
    }

    pub fn base_number(&self) -> BaseNumber {
        self.base
    }

    pub fn check_digit(&self) -> CheckDigit {
        self.check
    }
}

impl fmt::Display for WarrantyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.base, self.check)
    }
}

impl FromStr for WarrantyCode {
    type Err = Rejection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for WarrantyCode {
    type Error = Rejection;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<WarrantyCode> for String {
    fn from(c: WarrantyCode) -> Self {
        c.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_index_pads_with_zeros() {
        let b = BaseNumber::from_index(42).unwrap();
        assert_eq!(b.to_string(), "00042");
        assert_eq!(b.index(), 42);
        assert_eq!(b.digits(), &[0, 0, 0, 4, 2]);
        assert_eq!(b, "00042".parse().unwrap());
    }

    #[test]
    fn from_index_rejects_six_digits() {
        assert_eq!(
            BaseNumber::from_index(100_000).unwrap_err(),
            WarrantyError::OutOfRange(100_000)
        );
    }

    #[test]
    fn successor_stops_after_last_base_number() {
        let b: BaseNumber = "00009".parse().unwrap();
        assert_eq!(b.successor().unwrap().to_string(), "00010");
        let last: BaseNumber = "99999".parse().unwrap();
        assert!(last.successor().is_none());
    }

    #[test]
    fn ordering_follows_numeric_value() {
        let a: BaseNumber = "09999".parse().unwrap();
        let b: BaseNumber = "10000".parse().unwrap();
        assert!(a < b);
    }

    #[test]
    fn generate_matches_string_api() {
        let code = WarrantyCode::generate("10000".parse().unwrap());
        assert_eq!(code.to_string(), "100003");
        assert_eq!(code.base_number().to_string(), "10000");
        assert_eq!(code.check_digit().value(), 3);
    }

    #[test]
    fn parse_rejects_wrong_check_digit() {
        assert!(matches!(
            "100000".parse::<WarrantyCode>(),
            Err(Rejection::CheckDigitMismatch { .. })
        ));
    }

    #[test]
    fn serde_uses_digit_strings() {
        let code = WarrantyCode::generate("00000".parse().unwrap());
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "\"000001\"");
        let back: WarrantyCode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, code);

        assert!(serde_json::from_str::<WarrantyCode>("\"000000\"").is_err());
        assert!(serde_json::from_str::<BaseNumber>("\"1234\"").is_err());
        assert_eq!(
            serde_json::to_string(&code.check_digit()).unwrap(),
            "1"
        );
    }
}
