//! `warranty range <start> <count>` – mint consecutive codes.

use anyhow::{bail, Context, Result};
use warranty_core::batch::generate_range;
use warranty_core::config::{OutputFormat, WarrantyConfig};
use warranty_core::BaseNumber;

/// Refuse ranges larger than `max_range_count`; `count == max` is allowed.
pub fn check_range_bound(count: u32, cfg: &WarrantyConfig) -> Result<()> {
    if count > cfg.max_range_count {
        bail!(
            "refusing to mint {} codes; max_range_count is {}",
            count,
            cfg.max_range_count
        );
    }
    Ok(())
}

pub fn run_range(
    start: &str,
    count: u32,
    cfg: &WarrantyConfig,
    format: OutputFormat,
) -> Result<()> {
    check_range_bound(count, cfg)?;
    let start = BaseNumber::parse(start).with_context(|| format!("start {start:?}"))?;
    let codes = generate_range(start, count)?;
    tracing::info!(start = %start, count, "minted warranty code range");

    match format {
        OutputFormat::Text => {
            for code in &codes {
                println!("{code}");
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&codes)?),
    }
    Ok(())
}
