//! Reads `config.toml` into [`Config`].
//!
//! A missing file at the default location means every setting keeps its
//! default. A missing file at an explicit path is an error. Parse errors
//! carry the 1-based line and column of the offending token.

use std::fs;
use std::io;
use std::path::Path;

use crate::config::error::ConfigError;
use crate::config::schema::Config;
use crate::config::xdg;

/// Entry points for reading the config file.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Reads and parses the file at `path`.
    pub fn load_from_path(path: &Path) -> Result<Config, ConfigError> {
        match fs::read_to_string(path) {
            Ok(content) => Self::parse_toml(&content, path),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            }),
            Err(source) => Err(ConfigError::ReadError {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Reads the file at [`xdg::config_path`], falling back to
    /// `Config::default()` when there is none.
    pub fn load_default() -> Result<Config, ConfigError> {
        let path = xdg::config_path();
        match Self::load_from_path(&path) {
            Err(ConfigError::NotFound { .. }) => {
                tracing::debug!("no config at {}, using defaults", path.display());
                Ok(Config::default())
            }
            loaded => loaded,
        }
    }

    fn parse_toml(content: &str, path: &Path) -> Result<Config, ConfigError> {
        toml::from_str(content).map_err(|e| {
            let (line, column) = e
                .span()
                .map_or((0, 0), |span| line_column(content, span.start));
            ConfigError::ParseError {
                path: path.to_path_buf(),
                line,
                column,
                message: e.message().to_string(),
            }
        })
    }
}

/// 1-based line and column (in characters) of byte `offset` in `text`.
fn line_column(text: &str, offset: usize) -> (usize, usize) {
    let before = text.get(..offset).unwrap_or(text);
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let line = before.matches('\n').count() + 1;
    let column = before[line_start..].chars().count() + 1;
    (line, column)
}
