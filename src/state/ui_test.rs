use super::*;
use storage::{MemoryStore, keys};

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_is_light_and_available() {
    let state = UiState::default();
    assert_eq!(state.theme, ThemePreference::Light);
    assert!(state.storage_available);
    assert!(!state.storage_notice_shown);
}

// =============================================================
// Startup
// =============================================================

#[test]
fn startup_reads_stored_theme() {
    let store = MemoryStore::new();
    store.insert_raw(keys::THEME_MODE, "dark");
    let state = UiState::startup(&StorageGateway::new(&store), ThemePreference::Light);
    assert_eq!(state.theme, ThemePreference::Dark);
    assert!(state.storage_available);
}

#[test]
fn startup_uses_configured_default_theme() {
    let state = UiState::startup(&StorageGateway::new(MemoryStore::new()), ThemePreference::Dark);
    assert_eq!(state.theme, ThemePreference::Dark);
}

#[test]
fn startup_probe_leaves_no_residue() {
    let store = MemoryStore::new();
    let _ = UiState::startup(&StorageGateway::new(&store), ThemePreference::Light);
    assert!(store.is_empty());
}

// =============================================================
// Storage notice
// =============================================================

#[test]
fn notice_is_shown_once_when_storage_is_unavailable() {
    let store = MemoryStore::new();
    store.set_disabled(true);
    let mut state = UiState::startup(&StorageGateway::new(&store), ThemePreference::Light);
    assert!(!state.storage_available);
    assert_eq!(state.theme, ThemePreference::Light);
    assert_eq!(state.take_storage_notice(), Some(STORAGE_UNAVAILABLE_NOTICE));
    assert_eq!(state.take_storage_notice(), None);
}

#[test]
fn no_notice_when_storage_is_available() {
    let mut state = UiState::default();
    assert_eq!(state.take_storage_notice(), None);
}
