//! Typed, validated persistence over a synchronous key-value store.
//!
//! This crate owns every read and write the widgets make against browser
//! `localStorage`. Callers go through [`StorageGateway`], which turns the
//! store's stringly-typed, throw-on-failure interface into typed records:
//! loads never fail (malformed or unreadable data reads as absent) and saves
//! report rejection as a [`StorageError`] value.
//!
//! The raw store is injected through [`KeyValueStore`]. [`MemoryStore`] backs
//! native tests; `BrowserStore` (feature `browser`) wraps `window.localStorage`.

pub mod config;
pub mod error;
pub mod gateway;
pub mod records;
pub mod store;

pub use config::StorageConfig;
pub use error::{RecordError, StorageError, StoreError};
pub use gateway::StorageGateway;
pub use records::{
    Block, CounterValue, EditorDocument, FontSize, Mark, Record, TextRun, ThemePreference, UserProfile, keys,
};
#[cfg(feature = "browser")]
pub use store::BrowserStore;
pub use store::{KeyValueStore, MemoryStore};
