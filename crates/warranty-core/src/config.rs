use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// How CLI commands print their results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Global configuration loaded from `~/.config/warranty/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarrantyConfig {
    /// Default output format when `--format` is not given.
    #[serde(default)]
    pub output: OutputFormat,
    /// Largest number of codes a single `range` request may mint.
    #[serde(default = "default_max_range_count")]
    pub max_range_count: u32,
}

fn default_max_range_count() -> u32 {
    10_000
}

impl Default for WarrantyConfig {
    fn default() -> Self {
        Self {
            output: OutputFormat::Text,
            max_range_count: default_max_range_count(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("warranty")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<WarrantyConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = WarrantyConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit file. Missing keys take defaults.
pub fn load_from(path: &Path) -> Result<WarrantyConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: WarrantyConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
