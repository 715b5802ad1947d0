//! Platform-aware path resolution for dataeyes-dashboard.
//!
//! On **Linux**, follows the XDG Base Directory Specification:
//! - Config: `$XDG_CONFIG_HOME/dataeyes-dashboard` or `~/.config/dataeyes-dashboard`
//! - Data: `$XDG_DATA_HOME/dataeyes-dashboard` or `~/.local/share/dataeyes-dashboard`
//!
//! On **macOS**, uses Apple conventions with XDG env var overrides:
//! - Config and data: `~/Library/Application Support/dataeyes-dashboard`

use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "dataeyes-dashboard";

/// Home directory, or the current directory when it cannot be determined.
fn home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| {
        tracing::warn!("could not determine home directory, using current directory");
        PathBuf::from(".")
    })
}

/// Returns the configuration directory for dataeyes-dashboard.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/dataeyes-dashboard` (if env var set, any platform)
/// 2. Platform default:
///    - Linux: `~/.config/dataeyes-dashboard`
///    - macOS: `~/Library/Application Support/dataeyes-dashboard`
pub fn config_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join(APP_NAME);
    }
    platform_config_dir().join(APP_NAME)
}

/// Platform-native config base directory (without XDG override).
fn platform_config_dir() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        dirs::config_dir().unwrap_or_else(|| home_dir().join("Library/Application Support"))
    }
    #[cfg(not(target_os = "macos"))]
    {
        home_dir().join(".config")
    }
}

/// Returns the path to the main configuration file.
///
/// Resolves to `config_dir()/config.toml`.
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Returns the directory holding saved dashboard state.
///
/// Resolution order:
/// 1. `$XDG_DATA_HOME/dataeyes-dashboard` (if env var set, any platform)
/// 2. Platform default:
///    - Linux: `~/.local/share/dataeyes-dashboard`
///    - macOS: `~/Library/Application Support/dataeyes-dashboard`
pub fn data_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
        return PathBuf::from(xdg).join(APP_NAME);
    }
    platform_data_dir().join(APP_NAME)
}

/// Platform-native data base directory (without XDG override).
fn platform_data_dir() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        dirs::data_dir().unwrap_or_else(|| home_dir().join("Library/Application Support"))
    }
    #[cfg(not(target_os = "macos"))]
    {
        home_dir().join(".local/share")
    }
}

/// Expands a leading `~` in a path string to the user's home directory.
///
/// If the path does not start with `~`, it is returned as-is.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        home_dir().join(rest)
    } else if path == "~" {
        home_dir()
    } else {
        PathBuf::from(path)
    }
}

/// Creates a directory and all parent directories with mode 0700.
///
/// Equivalent to `mkdir -p` with restricted permissions.
pub fn ensure_dir(path: &Path) -> std::io::Result<()> {
    fs::create_dir_all(path)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o700))?;
    }
    Ok(())
}

/// Creates the configuration directory if it does not exist, returning its path.
pub fn ensure_config_dir() -> std::io::Result<PathBuf> {
    let dir = config_dir();
    ensure_dir(&dir)?;
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    /// Helper: run a closure with env vars temporarily set, then restore.
    fn with_env<F: FnOnce()>(vars: &[(&str, Option<&str>)], f: F) {
        let originals: Vec<_> = vars
            .iter()
            .map(|(k, _)| (*k, std::env::var(k).ok()))
            .collect();

        for (k, v) in vars {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        f();

        for (k, original) in &originals {
            match original {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }
    }

    #[test]
    #[serial]
    fn test_config_path_with_xdg_override() {
        with_env(&[("XDG_CONFIG_HOME", Some("/custom/config"))], || {
            assert_eq!(
                config_path(),
                PathBuf::from("/custom/config/dataeyes-dashboard/config.toml")
            );
        });
    }

    #[test]
    #[serial]
    fn test_config_path_without_xdg_uses_platform_default() {
        with_env(&[("XDG_CONFIG_HOME", None)], || {
            let expected = platform_config_dir().join("dataeyes-dashboard/config.toml");
            assert_eq!(config_path(), expected);
        });
    }

    #[cfg(not(target_os = "macos"))]
    #[test]
    #[serial]
    fn test_linux_data_default_is_local_share() {
        with_env(&[("XDG_DATA_HOME", None)], || {
            let home = dirs::home_dir().expect("could not determine home directory");
            assert_eq!(data_dir(), home.join(".local/share/dataeyes-dashboard"));
        });
    }

    #[test]
    #[serial]
    fn test_data_dir_with_xdg_override() {
        with_env(&[("XDG_DATA_HOME", Some("/custom/data"))], || {
            assert_eq!(data_dir(), PathBuf::from("/custom/data/dataeyes-dashboard"));
        });
    }

    #[test]
    fn test_expand_tilde_with_home_prefix() {
        let home = dirs::home_dir().expect("could not determine home directory");
        assert_eq!(expand_tilde("~/foo"), home.join("foo"));
    }

    #[test]
    fn test_expand_tilde_bare_tilde() {
        let home = dirs::home_dir().expect("could not determine home directory");
        assert_eq!(expand_tilde("~"), home);
    }

    #[test]
    fn test_expand_tilde_other_paths_unchanged() {
        assert_eq!(expand_tilde("/absolute/path"), PathBuf::from("/absolute/path"));
        assert_eq!(expand_tilde("relative/path"), PathBuf::from("relative/path"));
    }

    #[test]
    fn test_ensure_dir_creates_directory() {
        let tmp = tempfile::tempdir().expect("failed to create temp dir");
        let nested = tmp.path().join("a/b/c");
        ensure_dir(&nested).expect("ensure_dir failed");
        assert!(nested.is_dir());
    }

    #[cfg(unix)]
    #[test]
    fn test_ensure_dir_sets_permissions() {
        use std::os::unix::fs::PermissionsExt;
        let tmp = tempfile::tempdir().expect("failed to create temp dir");
        let dir = tmp.path().join("secure");
        ensure_dir(&dir).expect("ensure_dir failed");
        let mode = fs::metadata(&dir)
            .expect("failed to read metadata")
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o700);
    }

    #[test]
    #[serial]
    fn test_ensure_config_dir_creates_at_xdg_path() {
        let tmp = tempfile::tempdir().expect("failed to create temp dir");
        with_env(
            &[(
                "XDG_CONFIG_HOME",
                Some(tmp.path().to_str().expect("non-utf8 tmpdir")),
            )],
            || {
                let result = ensure_config_dir().expect("ensure_config_dir failed");
                assert_eq!(result, tmp.path().join("dataeyes-dashboard"));
                assert!(result.is_dir());
            },
        );
    }
}
