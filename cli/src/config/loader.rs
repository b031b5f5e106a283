//! Configuration file loading and parsing
//!
//! This module loads schema-check configuration from RON files, searching the
//! standard locations when no path is given.

use super::Config;
use anyhow::{Context, Result, anyhow};
use std::path::{Path, PathBuf};

/// Standard config file names to search for
const CONFIG_FILENAMES: &[&str] = &["schema-check.ron", ".schema-check/config.ron"];

const CONFIG_PATH_ENV: &str = "SCHEMA_CHECK_CONFIG_PATH";

/// Load configuration from a specific file path
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_ron(&content).with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Load configuration with automatic file discovery
///
/// Searches for config files in the following locations (in order):
/// 1. Path specified in SCHEMA_CHECK_CONFIG_PATH environment variable
/// 2. schema-check.ron in current directory
/// 3. .schema-check/config.ron relative to current directory
///
/// If no config file is found, returns a default configuration.
pub fn load_with_discovery() -> Result<Config> {
    if let Ok(env_path) = std::env::var(CONFIG_PATH_ENV) {
        let path = PathBuf::from(env_path);
        if path.exists() {
            tracing::info!("Loading config from {}: {}", CONFIG_PATH_ENV, path.display());
            return load_from_file(&path);
        } else {
            tracing::warn!(
                "{} specified but file not found: {}",
                CONFIG_PATH_ENV,
                path.display()
            );
        }
    }

    discover_in(Path::new("."))
}

fn discover_in(dir: &Path) -> Result<Config> {
    for filename in CONFIG_FILENAMES {
        let path = dir.join(filename);
        if path.exists() {
            tracing::info!("Loading config from: {}", path.display());
            return load_from_file(&path);
        }
    }

    tracing::info!("No config file found, using defaults");
    Ok(Config::default())
}

/// Parse RON configuration string
fn parse_ron(content: &str) -> Result<Config> {
    let config: Config = ron::from_str(content).context("Failed to parse RON configuration")?;
    config.matcher.validate().map_err(|e| anyhow!(e))?;
    Ok(config)
}
