//! Widget and UI state models.
//!
//! DESIGN
//! ======
//! Each widget owns one record and talks to storage only through a
//! [`storage::StorageGateway`] passed in by the caller, so every model is
//! testable against an in-memory store.

pub mod counter;
pub mod editor;
pub mod profile;
pub mod status;
pub mod ui;
