//! `warranty validate <code>` – check one warranty code.

use anyhow::Result;
use serde_json::json;
use warranty_core::config::OutputFormat;
use warranty_core::inspect_warranty_code;

/// Prints the verdict; returns whether the code is valid.
pub fn run_validate(code: &str, format: OutputFormat) -> Result<bool> {
    let result = inspect_warranty_code(code);
    match format {
        OutputFormat::Text => match &result {
            Ok(_) => println!("valid"),
            Err(reason) => println!("invalid: {reason}"),
        },
        OutputFormat::Json => {
            let reason = result.as_ref().err().map(|r| r.to_string());
            println!(
                "{}",
                json!({ "code": code, "valid": result.is_ok(), "reason": reason })
            );
        }
    }
    Ok(result.is_ok())
}
