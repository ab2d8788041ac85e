//! Gateway construction for the running app.
//!
//! SYSTEM CONTEXT
//! ==============
//! In the browser build every gateway wraps `window.localStorage`. Native
//! builds (unit tests, `cargo check` without `csr`) get a fresh in-memory
//! store per call, so UI paths run without persisting anything.

use storage::StorageGateway;

use crate::config::app_config;

#[cfg(feature = "csr")]
pub type AppStore = storage::BrowserStore;
#[cfg(not(feature = "csr"))]
pub type AppStore = storage::MemoryStore;

/// Gateway over the app's store, using the configured key namespace.
pub fn gateway() -> StorageGateway<AppStore> {
    StorageGateway::with_config(AppStore::default(), app_config().storage.clone())
}
