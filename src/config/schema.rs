//! TOML configuration schema types for the DataEyes dashboard.
//!
//! All structs derive `Deserialize` and `Serialize` with defaults via
//! `#[serde(default)]`, so a partial file only overrides what it names.
//!
//! Duration fields use human-readable strings (e.g. `"250ms"`) parsed by the
//! `humantime` crate at the call site.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;
use crate::config::xdg;
use crate::store::DEFAULT_NAMESPACE;

/// Root configuration encompassing all sections.
///
/// ```toml
/// [storage]
/// [chart]
/// [tui]
/// [log]
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Where dashboard state is saved.
    pub storage: StorageConfig,
    /// Chart embed options.
    pub chart: ChartConfig,
    /// Terminal UI settings.
    pub tui: TuiConfig,
    /// Logging settings.
    pub log: LogConfig,
}

// ---------------------------------------------------------------------------
// Storage
// ---------------------------------------------------------------------------

/// Location and key prefix of saved state.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory for state files. Empty means the XDG data directory.
    /// A leading `~` is expanded.
    pub dir: String,
    /// Prefix applied to every storage key.
    pub namespace: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: String::new(),
            namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }
}

impl StorageConfig {
    /// Resolved state directory.
    pub fn resolved_dir(&self) -> PathBuf {
        if self.dir.trim().is_empty() {
            xdg::data_dir()
        } else {
            xdg::expand_tilde(self.dir.trim())
        }
    }
}

// ---------------------------------------------------------------------------
// Chart
// ---------------------------------------------------------------------------

/// Options passed through to the embedded chart.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ChartConfig {
    /// Bar interval (`"D"`, `"W"`, `"60"`, ...).
    pub interval: String,
    /// IANA timezone name or `Etc/UTC`.
    pub timezone: String,
    /// `"dark"` or `"light"`.
    pub theme: String,
    /// UI locale of the chart.
    pub locale: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            interval: "D".to_string(),
            timezone: "Etc/UTC".to_string(),
            theme: "dark".to_string(),
            locale: "zh_CN".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// TUI
// ---------------------------------------------------------------------------

/// Terminal UI configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct TuiConfig {
    /// Render tick rate as a human-readable duration (e.g. `"250ms"`).
    pub tick_rate: String,
    /// Pixels represented by one terminal column when choosing a breakpoint.
    pub px_per_column: u32,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate: "250ms".to_string(),
            px_per_column: 10,
        }
    }
}

impl TuiConfig {
    /// Parses `tick_rate`.
    pub fn tick_rate(&self) -> Result<Duration, ConfigError> {
        humantime::parse_duration(&self.tick_rate).map_err(|e| ConfigError::InvalidValue {
            field: "tui.tick_rate".to_string(),
            message: e.to_string(),
        })
    }
}

// ---------------------------------------------------------------------------
// Log
// ---------------------------------------------------------------------------

/// Logging configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    /// Verbosity used when `DATAEYES_LOG` is unset.
    pub level: LogLevel,
}

/// Log verbosity levels (kebab-case in TOML).
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum LogLevel {
    /// Only errors.
    Error,
    /// Errors and warnings.
    Warn,
    /// Informational messages (default).
    #[default]
    Info,
    /// Debug-level detail.
    Debug,
    /// Full trace output.
    Trace,
}

impl LogLevel {
    /// Directive string understood by `EnvFilter`.
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl Config {
    /// Checks values that parse as TOML but cannot be used.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.tui.tick_rate()?;
        if self.tui.px_per_column == 0 {
            return Err(ConfigError::InvalidValue {
                field: "tui.px_per_column".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
