use super::*;
use storage::MemoryStore;

#[test]
fn read_preference_defaults_when_absent() {
    let gateway = StorageGateway::new(MemoryStore::new());
    assert_eq!(read_preference(&gateway, ThemePreference::Light), ThemePreference::Light);
    assert_eq!(read_preference(&gateway, ThemePreference::Dark), ThemePreference::Dark);
}

#[test]
fn read_preference_ignores_unknown_value() {
    let store = MemoryStore::new();
    store.insert_raw(keys::THEME_MODE, "neon");
    assert_eq!(read_preference(&StorageGateway::new(&store), ThemePreference::Light), ThemePreference::Light);
}

#[test]
fn toggle_flips_and_persists_bare_word() {
    let store = MemoryStore::new();
    let gateway = StorageGateway::new(&store);
    let next = toggle(ThemePreference::Light, &gateway);
    assert_eq!(next, ThemePreference::Dark);
    assert_eq!(store.raw(keys::THEME_MODE).as_deref(), Some("dark"));
    assert_eq!(read_preference(&gateway, ThemePreference::Light), ThemePreference::Dark);
}

#[test]
fn toggle_still_flips_when_store_is_disabled() {
    let store = MemoryStore::new();
    store.set_disabled(true);
    assert_eq!(toggle(ThemePreference::Dark, &StorageGateway::new(&store)), ThemePreference::Light);
}

#[test]
fn apply_is_noop_but_callable() {
    apply(ThemePreference::Light);
    apply(ThemePreference::Dark);
}
