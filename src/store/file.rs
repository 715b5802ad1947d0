//! File-backed store: one JSON file per key inside a data directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::xdg;
use crate::store::{Store, StoreError};

/// Stores each key as `<dir>/<key>.json`.
///
/// Writes go to a temporary sibling file first and are renamed into place,
/// so a crash mid-write leaves the previous value intact.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `dir`. The directory is created lazily on
    /// the first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store rooted at the default data directory.
    pub fn open_default() -> Self {
        Self::new(xdg::data_dir())
    }

    /// Directory holding the key files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `key`.
    ///
    /// Characters outside `[A-Za-z0-9._-]` are replaced with `_`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{name}.json"))
    }
}

impl Store for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Read { path, source }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key);
        let write_err = |source| StoreError::Write {
            path: path.clone(),
            source,
        };

        xdg::ensure_dir(&self.dir).map_err(write_err)?;

        let mut temp_name = path.file_name().unwrap_or_default().to_os_string();
        temp_name.push(format!(".tmp.{}", std::process::id()));
        let temp_path = path.with_file_name(temp_name);

        fs::write(&temp_path, value).map_err(write_err)?;
        fs::rename(&temp_path, &path).map_err(write_err)?;
        tracing::trace!("stored {} ({} bytes)", path.display(), value.len());
        Ok(())
    }
}
