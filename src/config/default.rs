//! Default configuration template and file creation utilities.
//!
//! Provides a commented TOML template that matches `Config::default()` and
//! functions to write it to the XDG config path.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::error::ConfigError;
use crate::config::xdg;

/// A commented TOML template with all default values.
///
/// Every value here must match `Config::default()` from `schema.rs`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# DataEyes Dashboard Configuration
#
# This file was auto-generated with default values.
# All values shown below are the built-in defaults.
#
# Location: $XDG_CONFIG_HOME/dataeyes-dashboard/config.toml

# ==============================================================================
# Storage
# ==============================================================================

[storage]

# Directory holding the saved tabs, widgets and layouts (one JSON file per key).
# Empty means $XDG_DATA_HOME/dataeyes-dashboard.
# Tilde (~) is expanded to the user's home directory.
# The --data-dir flag overrides this value.
dir = ""

# Prefix applied to every storage key.
# Changing it starts from a fresh dashboard without deleting the old one.
namespace = "dataeyes-dashboard-"

# ==============================================================================
# Chart embed
# ==============================================================================

[chart]

# Bar interval of each chart.
# Examples: "D" (daily), "W" (weekly), "60" (hourly)
interval = "D"

# Timezone the chart axis is drawn in.
timezone = "Etc/UTC"

# Options: "dark", "light"
theme = "dark"

# Chart UI language.
locale = "zh_CN"

# ==============================================================================
# Terminal UI
# ==============================================================================

[tui]

# Redraw interval as a human-readable duration.
# Examples: "250ms", "500ms", "1s"
tick_rate = "250ms"

# Pixels represented by one terminal column.
# The terminal width times this factor selects the breakpoint
# (lg >= 1200, md >= 1000, sm >= 760, xs >= 480, else xxs).
px_per_column = 10

# ==============================================================================
# Logging
# ==============================================================================

[log]

# Verbosity used when DATAEYES_LOG is not set.
# Options: "error", "warn", "info", "debug", "trace"
level = "info"
"#;

/// Creates the default config file if it does not already exist.
///
/// Returns `Ok(true)` if the file was created, `Ok(false)` if it already exists.
pub fn create_default_config_if_missing() -> Result<bool, ConfigError> {
    let path = xdg::config_path();

    if path.exists() {
        return Ok(false);
    }

    write_default_config(&path)?;
    tracing::info!("Created default configuration at {}", path.display());
    Ok(true)
}

/// Creates (or force-overwrites) the default config file.
///
/// - If the file exists and `force` is `false`, returns `ConfigError::AlreadyExists`.
/// - If the file exists and `force` is `true`, backs it up to `.toml.backup` first.
/// - Returns the path where the config was written.
pub fn create_default_config(force: bool) -> Result<PathBuf, ConfigError> {
    let path = xdg::config_path();

    if path.exists() {
        if !force {
            return Err(ConfigError::AlreadyExists { path });
        }
        let backup_path = path.with_extension("toml.backup");
        fs::rename(&path, &backup_path).map_err(|e| ConfigError::WriteError {
            path: backup_path.clone(),
            source: e,
        })?;
        tracing::info!("Backed up existing config to {}", backup_path.display());
    }

    write_default_config(&path)?;
    Ok(path)
}

/// Writes the default template to `path`, creating parent dirs and setting 0600 permissions.
fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let write_error = |e| ConfigError::WriteError {
        path: path.to_path_buf(),
        source: e,
    };

    xdg::ensure_config_dir().map_err(write_error)?;
    fs::write(path, DEFAULT_CONFIG_TEMPLATE).map_err(write_error)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600)).map_err(write_error)?;
    }

    Ok(())
}
