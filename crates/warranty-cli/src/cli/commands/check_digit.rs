//! `warranty check-digit <base>` – print the check digit of a base number.

use anyhow::{Context, Result};
use serde_json::json;
use warranty_core::calculate_check_digit;
use warranty_core::config::OutputFormat;

pub fn run_check_digit(base: &str, format: OutputFormat) -> Result<()> {
    let check = calculate_check_digit(base).with_context(|| format!("base number {base:?}"))?;
    match format {
        OutputFormat::Text => println!("{check}"),
        OutputFormat::Json => println!(
            "{}",
            json!({ "base_number": base, "check_digit": check })
        ),
    }
    Ok(())
}
