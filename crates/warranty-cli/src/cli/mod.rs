//! CLI for minting and auditing warranty codes.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use warranty_core::config::{self, OutputFormat, WarrantyConfig};

use commands::{
    run_check_digit, run_completions, run_generate, run_range, run_validate, run_verify,
};

/// Top-level CLI for the warranty code tool.
#[derive(Debug, Parser)]
#[command(name = "warranty")]
#[command(about = "Mint and check 6-digit parts warranty codes", long_about = None)]
pub struct Cli {
    /// Output format (defaults to the `output` setting in config.toml).
    #[arg(long, global = true, value_enum)]
    pub format: Option<FormatArg>,

    /// Read configuration from this file instead of the XDG config dir.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the check digit of a 5-digit base number.
    CheckDigit {
        /// Base number, e.g. 10000.
        base: String,
    },

    /// Print the full 6-digit warranty code for a base number.
    Generate {
        /// Base number, e.g. 10000.
        base: String,
    },

    /// Check a 6-digit warranty code. Exits with status 1 if it is invalid.
    Validate {
        /// Warranty code, e.g. 100003.
        code: String,
    },

    /// Mint consecutive warranty codes starting at a base number.
    Range {
        /// First base number of the range.
        start: String,
        /// Number of codes to mint.
        count: u32,
    },

    /// Check a list of codes, one per line. Exits with status 1 if any is invalid.
    Verify {
        /// File to read, or `-` for stdin.
        path: String,
    },

    /// Print a shell completion script.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn load_config(explicit: Option<&Path>) -> Result<WarrantyConfig> {
    match explicit {
        Some(path) => config::load_from(path),
        None => config::load_or_init(),
    }
}

impl Cli {
    /// Whether this invocation reads config.toml. `completions` never does;
    /// other commands only need it for `max_range_count` or the default format.
    pub fn needs_config(&self) -> bool {
        match self.command {
            CliCommand::Completions { .. } => false,
            CliCommand::Range { .. } => true,
            _ => self.format.is_none() || self.config.is_some(),
        }
    }
}

/// Status 1 when a check did not pass.
pub fn exit_code(passed: bool) -> ExitCode {
    if passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<ExitCode> {
        let cli = Cli::parse();
        let cfg = if cli.needs_config() {
            let cfg = load_config(cli.config.as_deref())?;
            tracing::debug!("loaded config: {:?}", cfg);
            cfg
        } else {
            WarrantyConfig::default()
        };
        let format = cli.format.map(OutputFormat::from).unwrap_or(cfg.output);

        let passed = match cli.command {
            CliCommand::CheckDigit { base } => {
                run_check_digit(&base, format)?;
                true
            }
            CliCommand::Generate { base } => {
                run_generate(&base, format)?;
                true
            }
            CliCommand::Validate { code } => run_validate(&code, format)?,
            CliCommand::Range { start, count } => {
                run_range(&start, count, &cfg, format)?;
                true
            }
            CliCommand::Verify { path } => run_verify(&path, format)?,
            CliCommand::Completions { shell } => {
                run_completions(shell)?;
                true
            }
        };

        Ok(exit_code(passed))
    }
}

#[cfg(test)]
mod tests;
