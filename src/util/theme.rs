//! Light/dark theme initialization and toggle.
//!
//! Reads the stored preference through the gateway and applies a
//! `data-theme` attribute to the `<html>` element. Toggle persists the new
//! preference immediately and updates that attribute.
//!
//! TRADE-OFFS
//! ==========
//! A failed theme write is logged but not surfaced: the toggle still takes
//! effect for the current session.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use storage::{KeyValueStore, StorageGateway, ThemePreference, keys};

/// Stored preference, or `default` when absent or unreadable.
pub fn read_preference<S: KeyValueStore>(gateway: &StorageGateway<S>, default: ThemePreference) -> ThemePreference {
    gateway.load(keys::THEME_MODE).unwrap_or(default)
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(theme: ThemePreference) {
    #[cfg(feature = "csr")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("data-theme", theme.as_str());
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}

/// Flip the theme, apply it, and persist it.
pub fn toggle<S: KeyValueStore>(current: ThemePreference, gateway: &StorageGateway<S>) -> ThemePreference {
    let next = current.toggled();
    apply(next);
    if let Err(e) = gateway.save(keys::THEME_MODE, &next) {
        log::warn!("theme: preference not persisted: {e}");
    }
    next
}
