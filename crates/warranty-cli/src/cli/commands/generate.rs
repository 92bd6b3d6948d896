//! `warranty generate <base>` – print the 6-digit warranty code.

use anyhow::{Context, Result};
use serde_json::json;
use warranty_core::config::OutputFormat;
use warranty_core::generate_warranty_code;

pub fn run_generate(base: &str, format: OutputFormat) -> Result<()> {
    let code = generate_warranty_code(base).with_context(|| format!("base number {base:?}"))?;
    tracing::info!(base, code = %code, "generated warranty code");
    match format {
        OutputFormat::Text => println!("{code}"),
        OutputFormat::Json => println!(
            "{}",
            json!({ "base_number": base, "warranty_code": code })
        ),
    }
    Ok(())
}
