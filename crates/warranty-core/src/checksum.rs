//! Weighted mod-11 check digit over a 5-digit base number.
//!
//! `check = (11 - (d1*8 + d2*7 + d3*6 + d4*5 + d5*4) mod 11) mod 10`
//!
//! Example: `10000` has check digit 3, giving warranty code `100003`.
//!
//! The `&str` functions here are the stable surface used by form validation
//! and minting tools. Typed wrappers live in [`crate::code`].

use crate::code::{BaseNumber, CheckDigit, WarrantyCode};
use crate::error::{Rejection, WarrantyError};

/// Number of digits in a base number.
pub const BASE_LEN: usize = 5;

/// Number of digits in a full warranty code (base number + check digit).
pub const CODE_LEN: usize = BASE_LEN + 1;

const WEIGHTS: [u32; BASE_LEN] = [8, 7, 6, 5, 4];

/// Check digit for already-parsed digit values (each 0..=9).
pub(crate) fn check_digit_of(digits: &[u8; BASE_LEN]) -> u8 {
    let weighted_sum: u32 = digits
        .iter()
        .zip(WEIGHTS.iter())
        .map(|(&d, &w)| u32::from(d) * w)
        .sum();
    ((11 - weighted_sum % 11) % 10) as u8
}

/// Splits a base number string into digit values.
///
/// Length is counted in characters. Positions in errors are 1-based.
pub(crate) fn parse_base_digits(base_number: &str) -> Result<[u8; BASE_LEN], WarrantyError> {
    let actual = base_number.chars().count();
    if actual != BASE_LEN {
        return Err(WarrantyError::InvalidInputLength {
            expected: BASE_LEN,
            actual,
        });
    }

    let mut digits = [0u8; BASE_LEN];
    for (i, c) in base_number.chars().enumerate() {
        // char::to_digit(10) only accepts ASCII '0'..='9'.
        digits[i] = c.to_digit(10).ok_or(WarrantyError::NonDigit {
            position: i + 1,
            found: c,
        })? as u8;
    }
    Ok(digits)
}

/// Computes the check digit (0..=9) of a 5-digit base number.
///
/// Fails with [`WarrantyError::InvalidInputLength`] unless the input is
/// exactly 5 characters, and with [`WarrantyError::NonDigit`] if any of them
/// is not an ASCII digit.
pub fn calculate_check_digit(base_number: &str) -> Result<u8, WarrantyError> {
    let digits = parse_base_digits(base_number)?;
    let check = check_digit_of(&digits);
    tracing::trace!(base_number, check, "computed check digit");
    Ok(check)
}

/// Returns `true` iff `code` is 6 ASCII digits whose last digit is the check
/// digit of the first five. Never fails; any malformed input is `false`.
pub fn validate_warranty_code(code: &str) -> bool {
    inspect_warranty_code(code).is_ok()
}

/// Appends the check digit to a 5-digit base number.
///
/// Errors from [`calculate_check_digit`] propagate to the caller.
pub fn generate_warranty_code(base_number: &str) -> Result<String, WarrantyError> {
    let check = calculate_check_digit(base_number)?;
    Ok(format!("{base_number}{check}"))
}

/// Like [`validate_warranty_code`], but says why a code was rejected.
///
/// Checks run in order: length, digits only, check digit.
pub fn inspect_warranty_code(code: &str) -> Result<WarrantyCode, Rejection> {
    let actual = code.chars().count();
    if actual != CODE_LEN {
        tracing::debug!(actual, "rejected warranty code: wrong length");
        return Err(Rejection::WrongLength { actual });
    }

    let mut digits = [0u8; CODE_LEN];
    for (i, c) in code.chars().enumerate() {
        match c.to_digit(10) {
            Some(d) => digits[i] = d as u8,
            None => {
                tracing::debug!(position = i + 1, "rejected warranty code: non-digit");
                return Err(Rejection::NonDigit {
                    position: i + 1,
                    found: c,
                });
            }
        }
    }

    let mut base = [0u8; BASE_LEN];
    base.copy_from_slice(&digits[..BASE_LEN]);
    let expected = check_digit_of(&base);
    let found = digits[BASE_LEN];
    if expected != found {
        tracing::debug!(expected, found, "rejected warranty code: check digit mismatch");
        return Err(Rejection::CheckDigitMismatch { expected, found });
    }

    Ok(WarrantyCode::from_parts(
        BaseNumber::from_digits(base),
        CheckDigit::new_unchecked(expected),
    ))
}
