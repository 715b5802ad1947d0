//! Typed, namespaced access to a [`Store`].

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::store::{Store, StoreError, DEFAULT_NAMESPACE};

/// JSON view over a [`Store`] with every key prefixed by a namespace.
#[derive(Debug, Clone)]
pub struct Persistence<S> {
    store: S,
    namespace: String,
}

impl<S: Store> Persistence<S> {
    /// Wraps `store` using [`DEFAULT_NAMESPACE`].
    pub fn new(store: S) -> Self {
        Self::with_namespace(store, DEFAULT_NAMESPACE)
    }

    /// Wraps `store` using a custom key prefix.
    pub fn with_namespace(store: S, namespace: impl Into<String>) -> Self {
        Self {
            store,
            namespace: namespace.into(),
        }
    }

    /// Full key written to the store for `key`.
    pub fn namespaced(&self, key: &str) -> String {
        format!("{}{}", self.namespace, key)
    }

    /// Loads and decodes the value under `key`.
    ///
    /// Missing keys, read failures and values that do not decode as `T`
    /// all yield `None`; the latter two are logged.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let full_key = self.namespaced(key);
        let raw = match self.store.get(&full_key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!("failed to read {}: {}", full_key, e);
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("ignoring malformed {}: {}", full_key, e);
                None
            }
        }
    }

    /// Encodes and stores `value` under `key`.
    ///
    /// Failures are logged and reported as `false`; callers carry on with
    /// their in-memory state.
    pub fn save<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> bool {
        match self.try_save(key, value) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("failed to save {}: {}", self.namespaced(key), e);
                false
            }
        }
    }

    fn try_save<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<(), StoreError> {
        let full_key = self.namespaced(key);
        let json = serde_json::to_string(value).map_err(|source| StoreError::Serialize {
            key: full_key.clone(),
            source,
        })?;
        self.store.set(&full_key, &json)
    }

    /// The wrapped store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the wrapper, returning the store.
    pub fn into_inner(self) -> S {
        self.store
    }
}
