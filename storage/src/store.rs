//! Raw key-value stores behind the gateway.
//!
//! DESIGN
//! ======
//! The store is a synchronous string-to-string map with single-key atomic
//! writes, the shape of browser `localStorage`. Implementations report
//! failures as [`StoreError`] values instead of throwing; the gateway decides
//! which of those reach callers.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use crate::error::StoreError;

/// Synchronous, origin-scoped string key-value store.
pub trait KeyValueStore {
    /// Read the raw value at `key`; `Ok(None)` when absent.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write `value` at `key`, replacing any previous value. On error the
    /// previous value is left in place.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete `key`. Deleting an absent key succeeds.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

/// In-memory store with failure injection.
///
/// Quota is counted in UTF-16 code units over keys plus values, which is how
/// browsers account `localStorage` usage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, String>>,
    quota: Cell<Option<usize>>,
    disabled: Cell<bool>,
    fail_removes: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that rejects writes pushing usage above `units`.
    pub fn with_quota(units: usize) -> Self {
        let store = Self::default();
        store.quota.set(Some(units));
        store
    }

    pub fn set_quota(&self, units: Option<usize>) {
        self.quota.set(units);
    }

    /// When disabled, every operation fails with [`StoreError::Unavailable`].
    pub fn set_disabled(&self, disabled: bool) {
        self.disabled.set(disabled);
    }

    /// When set, `remove` fails with [`StoreError::Rejected`] and keeps the entry.
    pub fn set_fail_removes(&self, fail: bool) {
        self.fail_removes.set(fail);
    }

    /// Write a raw value, bypassing quota and the disabled switch.
    pub fn insert_raw(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    /// Raw value at `key`, bypassing the disabled switch.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Current usage in UTF-16 code units.
    pub fn usage(&self) -> usize {
        self.entries.borrow().iter().map(|(k, v)| units(k) + units(v)).sum()
    }

    fn check_enabled(&self) -> Result<(), StoreError> {
        if self.disabled.get() {
            return Err(StoreError::Unavailable("memory store disabled".to_owned()));
        }
        Ok(())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.check_enabled()?;
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.check_enabled()?;
        if let Some(quota) = self.quota.get() {
            let replaced = self.entries.borrow().get(key).map_or(0, |old| units(key) + units(old));
            let next = self.usage() - replaced + units(key) + units(value);
            if next > quota {
                return Err(StoreError::QuotaExceeded);
            }
        }
        self.insert_raw(key, value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.check_enabled()?;
        if self.fail_removes.get() {
            return Err(StoreError::Rejected(format!("remove of `{key}` refused")));
        }
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

fn units(s: &str) -> usize {
    s.encode_utf16().count()
}

/// `window.localStorage`, resolved on every call.
#[cfg(feature = "browser")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

#[cfg(feature = "browser")]
impl BrowserStore {
    fn storage() -> Result<web_sys::Storage, StoreError> {
        let window = web_sys::window().ok_or_else(|| StoreError::Unavailable("no window".to_owned()))?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) => Err(StoreError::Unavailable("localStorage not provided".to_owned())),
            Err(err) => Err(map_js_error(&err)),
        }
    }
}

#[cfg(feature = "browser")]
impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Self::storage()?.get_item(key).map_err(|e| map_js_error(&e))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        Self::storage()?.set_item(key, value).map_err(|e| map_js_error(&e))
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        Self::storage()?.remove_item(key).map_err(|e| map_js_error(&e))
    }
}

#[cfg(feature = "browser")]
fn map_js_error(err: &wasm_bindgen::JsValue) -> StoreError {
    use wasm_bindgen::JsCast;

    let Some(exception) = err.dyn_ref::<web_sys::DomException>() else {
        return StoreError::Rejected(format!("{err:?}"));
    };
    match exception.name().as_str() {
        // Firefox reports quota exhaustion under its own name.
        "QuotaExceededError" | "NS_ERROR_DOM_QUOTA_REACHED" => StoreError::QuotaExceeded,
        "SecurityError" => StoreError::Unavailable(exception.message()),
        name => StoreError::Rejected(format!("{name}: {}", exception.message())),
    }
}
