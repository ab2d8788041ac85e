//! Local UI chrome state (theme, storage availability).
//!
//! DESIGN
//! ======
//! Keeps app-wide presentation concerns out of the widget models so each
//! widget only depends on its own record.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use storage::{KeyValueStore, StorageGateway, ThemePreference};

use crate::util::theme;

pub const STORAGE_UNAVAILABLE_NOTICE: &str = "LocalStorage is disabled! Features may not work properly.";

/// App-wide UI state, provided as context at the root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiState {
    pub theme: ThemePreference,
    pub storage_available: bool,
    pub storage_notice_shown: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self { theme: ThemePreference::Light, storage_available: true, storage_notice_shown: false }
    }
}

impl UiState {
    /// Probe the store and read the theme preference.
    pub fn startup<S: KeyValueStore>(gateway: &StorageGateway<S>, default_theme: ThemePreference) -> Self {
        let storage_available = gateway.probe();
        if !storage_available {
            log::warn!("ui: storage unavailable; widgets will not persist");
        }
        Self { theme: theme::read_preference(gateway, default_theme), storage_available, storage_notice_shown: false }
    }

    /// The unavailable-storage notice, returned at most once.
    pub fn take_storage_notice(&mut self) -> Option<&'static str> {
        if self.storage_available || self.storage_notice_shown {
            return None;
        }
        self.storage_notice_shown = true;
        Some(STORAGE_UNAVAILABLE_NOTICE)
    }
}
