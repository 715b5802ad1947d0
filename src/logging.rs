//! Logging initialization.
//!
//! Configures the `tracing` subscriber with level filtering via the
//! `DATAEYES_LOG` environment variable, falling back to the level from the
//! config file when the variable is unset or invalid.
//!
//! ```bash
//! # Debug level for one run
//! DATAEYES_LOG=debug dataeyes widget list
//!
//! # Module-specific filtering
//! DATAEYES_LOG=dataeyes_dashboard::store=trace,warn dataeyes dump
//! ```

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LogLevel;

/// Environment variable holding filter directives.
pub const LOG_ENV: &str = "DATAEYES_LOG";

/// Builds the filter from [`LOG_ENV`] or `fallback`.
pub fn filter(fallback: LogLevel) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback.as_str()))
}

/// Initialize the tracing subscriber writing to stderr.
///
/// Does nothing if a global subscriber is already installed.
pub fn init(level: LogLevel) {
    let _ = fmt()
        .with_env_filter(filter(level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Initialize the tracing subscriber appending to `path`.
///
/// Used while the terminal UI owns the screen, where stderr output would
/// corrupt the display.
pub fn init_to_file(level: LogLevel, path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        crate::config::xdg::ensure_dir(parent)?;
    }
    let file: File = OpenOptions::new().create(true).append(true).open(path)?;
    let _ = fmt()
        .with_env_filter(filter(level))
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn env_filter_parses_level_directives() {
        for level in [
            LogLevel::Error,
            LogLevel::Warn,
            LogLevel::Info,
            LogLevel::Debug,
            LogLevel::Trace,
        ] {
            assert!(
                EnvFilter::try_new(level.as_str()).is_ok(),
                "failed to parse directive: {}",
                level.as_str()
            );
        }
    }

    #[test]
    fn env_filter_parses_module_directive() {
        assert!(EnvFilter::try_new("dataeyes_dashboard=debug,warn").is_ok());
    }

    #[test]
    #[serial]
    fn filter_prefers_environment() {
        let original = std::env::var(LOG_ENV).ok();
        std::env::set_var(LOG_ENV, "trace");
        let filter = filter(LogLevel::Error);
        assert_eq!(filter.to_string(), "trace");
        match original {
            Some(v) => std::env::set_var(LOG_ENV, v),
            None => std::env::remove_var(LOG_ENV),
        }
    }

    #[test]
    #[serial]
    fn filter_falls_back_to_config_level() {
        let original = std::env::var(LOG_ENV).ok();
        std::env::remove_var(LOG_ENV);
        assert_eq!(filter(LogLevel::Warn).to_string(), "warn");
        if let Some(v) = original {
            std::env::set_var(LOG_ENV, v);
        }
    }
}
