//! Report configuration loading.

use anyhow::{Context, Result};
use routeviz_chart::ReportConfig;
use std::path::{Path, PathBuf};
use tracing::debug;

const CANDIDATES: [&str; 3] = [".rv-report.toml", "rv-report.toml", ".config/rv-report.toml"];

/// Loads the report configuration.
///
/// An explicit path must exist and parse. Without one, the standard
/// locations are searched and defaults are used when nothing is found.
pub fn load(path: Option<&Path>) -> Result<ReportConfig> {
    let config_path = match path {
        Some(explicit) => Some(explicit.to_path_buf()),
        None => find_config_file(),
    };

    match config_path {
        Some(found) => {
            debug!(path = %found.display(), "Loading report config");
            read_config(&found)
        }
        None => {
            debug!("No config file found, using defaults");
            Ok(ReportConfig::default())
        }
    }
}

/// Finds a configuration file in the standard locations.
fn find_config_file() -> Option<PathBuf> {
    CANDIDATES
        .iter()
        .map(PathBuf::from)
        .find(|candidate| candidate.exists())
}

/// Reads and parses a TOML configuration file.
fn read_config(path: &Path) -> Result<ReportConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;

    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file {}", path.display()))
}
