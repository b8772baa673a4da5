use crate::error::{Error, Result};
use crate::types::*;
use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "submission-check.toml";

/// Raw TOML configuration structure
/// Every table and key is optional; missing values fall back to defaults
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    limits: Option<RawLimits>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawLimits {
    max_archive_bytes: Option<i64>,
    size_basis: Option<String>,
}

/// Parse a checker config from a file path
pub fn parse_config_toml<P: AsRef<Path>>(path: P) -> Result<CheckConfig> {
    let content = fs::read_to_string(path)?;
    parse_config_toml_str(&content)
}

/// Parse a checker config from a string (useful for testing)
pub fn parse_config_toml_str(content: &str) -> Result<CheckConfig> {
    let raw: RawConfig = toml::from_str(content)?;

    let mut limits = Limits::default();
    if let Some(raw_limits) = raw.limits {
        if let Some(max) = raw_limits.max_archive_bytes {
            limits.max_archive_bytes = validate_max_bytes(max)?;
        }
        if let Some(basis) = raw_limits.size_basis {
            limits.size_basis = parse_size_basis(&basis)?;
        }
    }

    Ok(CheckConfig { limits })
}

/// Resolve the effective config.
///
/// An explicit path must exist. Without one, `submission-check.toml` in
/// `dir` is used when present, otherwise defaults.
pub fn load_config(explicit: Option<&Path>, dir: &Path) -> Result<CheckConfig> {
    let path: Option<PathBuf> = match explicit {
        Some(p) => Some(p.to_path_buf()),
        None => {
            let candidate = dir.join(DEFAULT_CONFIG_FILE);
            candidate.is_file().then_some(candidate)
        }
    };

    match path {
        Some(p) => {
            debug!("loading config from {}", p.display());
            parse_config_toml(&p)
        }
        None => {
            debug!("no config file, using defaults");
            Ok(CheckConfig::default())
        }
    }
}

fn validate_max_bytes(value: i64) -> Result<u64> {
    if value <= 0 {
        return Err(Error::ConfigParse(format!(
            "limits.max_archive_bytes must be greater than 0, got {}",
            value
        )));
    }
    Ok(value as u64)
}

fn parse_size_basis(s: &str) -> Result<SizeBasis> {
    match s.trim().to_ascii_lowercase().as_str() {
        "archive" => Ok(SizeBasis::Archive),
        "uncompressed" => Ok(SizeBasis::Uncompressed),
        _ => Err(Error::ConfigParse(format!(
            "Invalid limits.size_basis '{}', expected \"archive\" or \"uncompressed\"",
            s
        ))),
    }
}
