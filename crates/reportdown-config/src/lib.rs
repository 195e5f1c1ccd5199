//! Viewer settings read from `~/.config/reportdown/config.toml`.
//!
//! ```toml
//! reports_path = "~/reports"   # `~` and `$VAR` are expanded
//! accent_color = "#e78a53"     # optional
//! ```
//!
//! `REPORTDOWN_CONFIG` points the viewer at a different file.

use serde::Deserialize;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Accent colour of the dashboard, used for links and top-level headings.
pub const DEFAULT_ACCENT_COLOR: &str = "#e78a53";

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_ENV: &str = "REPORTDOWN_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    Read {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    Parse {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("No reports path provided and no config file found at {config_path}")]
    NoReportsPath { config_path: PathBuf },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    pub reports_path: PathBuf,
    #[serde(default = "default_accent_color")]
    pub accent_color: String,
}

fn default_accent_color() -> String {
    DEFAULT_ACCENT_COLOR.to_string()
}

/// Where the reports path in use came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportsSource {
    Argument,
    ConfigFile(PathBuf),
}

impl Config {
    /// Parses config text and expands the reports path.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        let mut config: Config = toml::from_str(content)?;
        config.reports_path = expand_path(&config.reports_path);
        Ok(config)
    }

    /// Loads a config file; a missing file is `Ok(None)`.
    pub fn load_from_path(config_path: &Path) -> Result<Option<Self>, ConfigError> {
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| ConfigError::Read {
            config_path: config_path.to_path_buf(),
            source,
        })?;

        Self::parse(&content)
            .map(Some)
            .map_err(|source| ConfigError::Parse {
                config_path: config_path.to_path_buf(),
                source,
            })
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(&Self::config_path())
    }

    pub fn config_path() -> PathBuf {
        config_path_from(std::env::var_os(CONFIG_PATH_ENV))
    }
}

fn config_path_from(override_path: Option<OsString>) -> PathBuf {
    match override_path {
        Some(path) if !path.is_empty() => expand_path(Path::new(&path)),
        _ => expand_path(Path::new("~/.config/reportdown/config.toml")),
    }
}

/// Expands `~` and environment variables, leaving the path as is when a
/// variable is undefined.
pub fn expand_path(path: &Path) -> PathBuf {
    let path_str = path.to_string_lossy();
    match shellexpand::full(&path_str) {
        Ok(expanded) => PathBuf::from(expanded.as_ref()),
        Err(_) => path.to_path_buf(),
    }
}

/// Picks the reports path to open: a command-line argument wins over the
/// config file.
pub fn resolve_reports_path(
    argument: Option<&Path>,
    config: Option<&Config>,
    config_path: &Path,
) -> Result<(PathBuf, ReportsSource), ConfigError> {
    match (argument, config) {
        (Some(path), _) => Ok((path.to_path_buf(), ReportsSource::Argument)),
        (None, Some(config)) => Ok((
            config.reports_path.clone(),
            ReportsSource::ConfigFile(config_path.to_path_buf()),
        )),
        (None, None) => Err(ConfigError::NoReportsPath {
            config_path: config_path.to_path_buf(),
        }),
    }
}
