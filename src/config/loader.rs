//! Configuration file loading with precedence handling.

use serde::Deserialize;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use thiserror::Error;

use crate::state::DEFAULT_PAGE_SIZE;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "TXVIEW_CONFIG";

/// Environment variable naming the record file to load.
pub const DATA_ENV_VAR: &str = "TXVIEW_DATA";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file, ...).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A value parsed but is out of range.
    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue {
        field: &'static str,
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/txview/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Rows per page.
    #[serde(default)]
    pub page_size: Option<usize>,

    /// Record file loaded when no path is given on the command line.
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Print the revenue chart under the table.
    #[serde(default)]
    pub show_chart: Option<bool>,

    /// Print the KPI summary above the table.
    #[serde(default)]
    pub show_kpis: Option<bool>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Rows per page.
    pub page_size: NonZeroUsize,
    /// Record file, if any source named one.
    pub data_file: Option<PathBuf>,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Print the revenue chart.
    pub show_chart: bool,
    /// Print the KPI summary.
    pub show_kpis: bool,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            data_file: None,
            log_file_path: default_log_path(),
            show_chart: false,
            show_kpis: false,
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/txview/txview.log` on Linux, or the platform's
/// state directory elsewhere. Falls back to the current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("txview").join("txview.log")
    } else {
        PathBuf::from("txview.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/txview/config.toml` on Unix, appropriate path on other platforms.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("txview").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `TXVIEW_CONFIG` environment variable
/// 3. Default path `~/.config/txview/config.toml`
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` for a `page_size` of zero.
pub fn merge_config(config_file: Option<ConfigFile>) -> Result<ResolvedConfig, ConfigError> {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return Ok(defaults);
    };

    let page_size = match config.page_size {
        Some(size) => NonZeroUsize::new(size).ok_or_else(|| ConfigError::InvalidValue {
            field: "page_size",
            reason: "must be at least 1".to_string(),
        })?,
        None => defaults.page_size,
    };

    Ok(ResolvedConfig {
        page_size,
        data_file: config.data_file.or(defaults.data_file),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        show_chart: config.show_chart.unwrap_or(defaults.show_chart),
        show_kpis: config.show_kpis.unwrap_or(defaults.show_kpis),
    })
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `TXVIEW_DATA`: Override the record file
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(path) = std::env::var(DATA_ENV_VAR) {
        if !path.is_empty() {
            config.data_file = Some(PathBuf::from(path));
        }
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    data_file_override: Option<PathBuf>,
    page_size_override: Option<NonZeroUsize>,
    chart_override: Option<bool>,
    kpis_override: Option<bool>,
) -> ResolvedConfig {
    if let Some(path) = data_file_override {
        config.data_file = Some(path);
    }

    if let Some(size) = page_size_override {
        config.page_size = size;
    }

    if let Some(chart) = chart_override {
        config.show_chart = chart;
    }

    if let Some(kpis) = kpis_override {
        config.show_kpis = kpis;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
