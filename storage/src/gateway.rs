//! Typed, never-panicking access to the key-value store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Widgets never touch the raw store. They call `load`/`save`/`probe` here,
//! which convert store failures and malformed data into typed outcomes:
//!
//! - reads absorb every failure and report absence;
//! - writes encode fully in memory before a single store call, so a rejected
//!   write leaves the previous value untouched;
//! - removal is best effort.

#[cfg(test)]
#[path = "gateway_test.rs"]
mod gateway_test;

use crate::config::StorageConfig;
use crate::error::StorageError;
use crate::records::Record;
use crate::store::KeyValueStore;

/// Gateway over an injected store.
#[derive(Debug, Clone, Default)]
pub struct StorageGateway<S> {
    store: S,
    config: StorageConfig,
}

impl<S: KeyValueStore> StorageGateway<S> {
    pub fn new(store: S) -> Self {
        Self::with_config(store, StorageConfig::default())
    }

    pub fn with_config(store: S, config: StorageConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &StorageConfig {
        &self.config
    }

    /// Whether the store accepts a write and delete.
    ///
    /// The probe key is removed on every path, including when the write
    /// itself failed.
    pub fn probe(&self) -> bool {
        let key = self.config.probe_key();
        let written = self.store.set(&key, &key);
        let removed = self.store.remove(&key);
        match (written, removed) {
            (Ok(()), Ok(())) => true,
            (Err(err), _) | (Ok(()), Err(err)) => {
                log::warn!("storage: probe failed: {err}");
                false
            }
        }
    }

    /// Load the record at `key`, reporting read and decode failures.
    pub fn try_load<T: Record>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let physical = self.config.key(key);
        let raw = self
            .store
            .get(&physical)
            .map_err(|source| StorageError::Unavailable { key: physical.clone(), source })?;
        let Some(raw) = raw else {
            return Ok(None);
        };
        T::decode(&raw)
            .map(Some)
            .map_err(|source| StorageError::MalformedRecord { key: physical, source })
    }

    /// Load the record at `key`. Absent, unreadable, and malformed values all
    /// read as `None`; failures are logged.
    pub fn load<T: Record>(&self, key: &str) -> Option<T> {
        match self.try_load(key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("storage: treating `{}` as absent: {err}", err.key());
                None
            }
        }
    }

    pub fn load_or_default<T: Record + Default>(&self, key: &str) -> T {
        self.load(key).unwrap_or_default()
    }

    /// Encode `value` and write it at `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::QuotaExceededOrUnavailable`] when the value
    /// cannot be encoded or the store rejects the write. The stored value is
    /// unchanged in both cases.
    pub fn save<T: Record>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let physical = self.config.key(key);
        let encoded = value.encode().map_err(|err| {
            log::error!("storage: could not encode `{physical}`: {err}");
            StorageError::QuotaExceededOrUnavailable {
                key: physical.clone(),
                reason: format!("serialization failed: {err}"),
            }
        })?;
        self.store.set(&physical, &encoded).map_err(|err| {
            log::error!("storage: write of `{physical}` rejected: {err}");
            StorageError::QuotaExceededOrUnavailable { key: physical.clone(), reason: err.to_string() }
        })
    }

    /// Best-effort delete; failures are logged only.
    pub fn remove(&self, key: &str) {
        let physical = self.config.key(key);
        if let Err(err) = self.store.remove(&physical) {
            log::warn!("storage: could not remove `{physical}`: {err}");
        }
    }
}
