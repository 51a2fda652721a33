//! Site configuration module.
//!
//! Handles loading and validating `config.toml`. The file is optional; every
//! field has a default, so a bare checkout builds with no configuration at
//! all.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! photos_dir = "Photos"     # Manifest input root
//! output = "works.json"     # Manifest artifact path
//!
//! [scan]
//! max_processes = 4         # Max parallel album workers (omit for auto = CPU cores)
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// User config files need only specify the values they want to override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Directory scanned for albums, relative to the working directory.
    pub photos_dir: String,
    /// Path the manifest artifact is written to.
    pub output: String,
    /// Parallel scanning settings.
    pub scan: ScanConfig,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    /// Max parallel album workers. Omit for one per CPU core.
    pub max_processes: Option<usize>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            photos_dir: "Photos".to_string(),
            output: "works.json".to_string(),
            scan: ScanConfig::default(),
        }
    }
}

/// Load `config.toml` from `dir`, falling back to defaults if absent.
pub fn load_config(dir: &Path) -> Result<SiteConfig, ConfigError> {
    let path = dir.join("config.toml");
    if !path.exists() {
        return Ok(SiteConfig::default());
    }
    let content = fs::read_to_string(&path)?;
    let config: SiteConfig = toml::from_str(&content)?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &SiteConfig) -> Result<(), ConfigError> {
    if config.photos_dir.trim().is_empty() {
        return Err(ConfigError::Validation(
            "photos_dir must not be empty".to_string(),
        ));
    }
    if config.output.trim().is_empty() {
        return Err(ConfigError::Validation(
            "output must not be empty".to_string(),
        ));
    }
    if config.scan.max_processes == Some(0) {
        return Err(ConfigError::Validation(
            "scan.max_processes must be at least 1".to_string(),
        ));
    }
    Ok(())
}

/// Worker count for the scan pool.
///
/// Caps at the number of available CPU cores: the user can constrain down,
/// not up.
pub fn effective_threads(scan: &ScanConfig) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    match scan.max_processes {
        Some(n) => n.min(cores),
        None => cores,
    }
}
