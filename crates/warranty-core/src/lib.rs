//! Warranty code check digits.
//!
//! A warranty code is a 5-digit base number followed by a weighted mod-11
//! check digit. The `&str` functions in [`checksum`] are re-exported at the
//! crate root; [`code`] has typed equivalents.

pub mod batch;
pub mod checksum;
pub mod code;
pub mod config;
pub mod error;
pub mod logging;

pub use checksum::{
    calculate_check_digit, generate_warranty_code, inspect_warranty_code, validate_warranty_code,
};
pub use code::{BaseNumber, CheckDigit, WarrantyCode};
pub use error::{Rejection, WarrantyError};
