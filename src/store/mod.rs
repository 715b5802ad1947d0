//! Persistence port for dashboard state.
//!
//! The dashboard core never touches storage directly. It talks to a
//! [`Store`], a synchronous string-keyed get/set sink, through
//! [`Persistence`], which adds the application namespace, JSON encoding
//! and the log-and-fall-back policy: unreadable or malformed state is
//! treated as absent and failed writes are logged, never surfaced.

mod file;
mod memory;
mod persistence;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use persistence::Persistence;

use std::path::PathBuf;
use thiserror::Error;

/// Namespace prefixed to every key written by the dashboard.
pub const DEFAULT_NAMESPACE: &str = "dataeyes-dashboard-";

/// Key of the single-set layout set.
pub const LAYOUTS_KEY: &str = "layouts-v2";

/// Key of the single-set widget list.
pub const ITEMS_KEY: &str = "items";

/// Key of the tab list.
pub const TABS_KEY: &str = "tabs";

/// Key of the active tab id.
pub const ACTIVE_TAB_KEY: &str = "active-tab";

/// Errors raised by store backends.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading a stored value failed.
    #[error("Failed to read stored value: {path}")]
    Read {
        /// File backing the key.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Writing a stored value failed.
    #[error("Failed to write stored value: {path}")]
    Write {
        /// File backing the key.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A value could not be encoded as JSON.
    #[error("Failed to serialize value for key '{key}'")]
    Serialize {
        /// Namespaced key being written.
        key: String,
        /// Underlying encoder error.
        #[source]
        source: serde_json::Error,
    },
}

/// A synchronous string-keyed value store.
pub trait Store {
    /// Returns the value stored under `key`, or `None` if nothing is stored.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: Store + ?Sized> Store for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_write_error_includes_path() {
        let err = StoreError::Write {
            path: PathBuf::from("/data/dataeyes-dashboard-tabs.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("dataeyes-dashboard-tabs.json"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn boxed_store_forwards() {
        let mut store: Box<dyn Store> = Box::new(MemoryStore::new());
        store.set("k", "v").expect("memory set");
        assert_eq!(store.get("k").expect("memory get").as_deref(), Some("v"));
    }
}
