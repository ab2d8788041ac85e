//! Routed pages, one per widget plus the profile dashboard.

pub mod counter;
pub mod dashboard;
pub mod editor;
pub mod profile;
