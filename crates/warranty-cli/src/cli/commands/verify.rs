//! `warranty verify <path|->` – audit a list of codes.

use anyhow::{Context, Result};
use serde_json::json;
use std::fs::File;
use std::io::{self, BufReader};
use warranty_core::batch::{verify_lines, VerifyReport};
use warranty_core::config::OutputFormat;

/// Audit `path`, or stdin when it is `-`.
pub fn read_report(path: &str) -> Result<VerifyReport> {
    if path == "-" {
        return verify_lines(io::stdin().lock()).context("read stdin");
    }
    let f = File::open(path).with_context(|| format!("open {path}"))?;
    verify_lines(BufReader::new(f)).with_context(|| format!("read {path}"))
}

/// Prints the report; returns whether every line is valid.
pub fn run_verify(path: &str, format: OutputFormat) -> Result<bool> {
    let report = read_report(path)?;

    match format {
        OutputFormat::Text => {
            for o in &report.outcomes {
                match &o.result {
                    Ok(_) => println!("{:<6} {:<10} ok", o.line, o.input),
                    Err(reason) => println!("{:<6} {:<10} {}", o.line, o.input, reason),
                }
            }
            println!(
                "{} valid, {} invalid",
                report.valid_count(),
                report.invalid_count()
            );
        }
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "valid": report.valid_count(),
                "invalid": report.invalid_count(),
                "outcomes": report.outcomes,
            }))?
        ),
    }

    Ok(report.is_all_valid())
}
