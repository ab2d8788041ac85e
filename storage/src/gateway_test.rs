use super::*;
use crate::error::StoreError;
use crate::records::{CounterValue, EditorDocument, ThemePreference, UserProfile, keys};
use crate::store::MemoryStore;
use std::sync::{Mutex, Once};

/// Process-wide logger collecting every record, so tests can assert on what
/// the gateway reports.
struct CapturedLogs(Mutex<Vec<(log::Level, String)>>);

impl log::Log for CapturedLogs {
    fn enabled(&self, _: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        if let Ok(mut entries) = self.0.lock() {
            entries.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static CAPTURED: CapturedLogs = CapturedLogs(Mutex::new(Vec::new()));

/// Messages logged at `level` that mention `needle`.
fn logged(level: log::Level, needle: &str) -> Vec<String> {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| {
        let _ = log::set_logger(&CAPTURED);
        log::set_max_level(log::LevelFilter::Trace);
    });
    CAPTURED
        .0
        .lock()
        .expect("log buffer")
        .iter()
        .filter(|(l, msg)| *l == level && msg.contains(needle))
        .map(|(_, msg)| msg.clone())
        .collect()
}

fn sample_profile() -> UserProfile {
    UserProfile {
        id: "0b7e7c43-7f3e-4a8e-9a51-3f3c2f8f9d20".to_owned(),
        name: "Ann".to_owned(),
        email: "ann@outlook.com".to_owned(),
        phone: "(555) 123-4567".to_owned(),
        address: "42 Lantern Road, Springfield".to_owned(),
        image: "data:image/png;base64,iVBORw0KGgo=".to_owned(),
    }
}

// =============================================================
// probe
// =============================================================

#[test]
fn probe_succeeds_and_leaves_no_residue() {
    let store = MemoryStore::new();
    let gateway = StorageGateway::new(&store);
    assert!(gateway.probe());
    assert!(store.is_empty());
}

#[test]
fn probe_reports_false_on_quota_and_leaves_no_residue() {
    let store = MemoryStore::with_quota(4);
    let gateway = StorageGateway::new(&store);
    assert!(!gateway.probe());
    assert!(!store.contains_key(&gateway.config().probe_key()));
}

#[test]
fn probe_reports_false_when_store_disabled() {
    let store = MemoryStore::new();
    store.set_disabled(true);
    assert!(!StorageGateway::new(&store).probe());
    assert!(store.is_empty());
}

#[test]
fn probe_reports_false_when_cleanup_fails() {
    let store = MemoryStore::new();
    store.set_fail_removes(true);
    assert!(!StorageGateway::new(&store).probe());
}

#[test]
fn probe_uses_namespaced_key() {
    let store = MemoryStore::new();
    let gateway = StorageGateway::with_config(&store, StorageConfig::with_namespace("deck:"));
    assert!(gateway.probe());
    assert!(store.is_empty());
}

// =============================================================
// load
// =============================================================

#[test]
fn load_absent_key_is_none() {
    let gateway = StorageGateway::new(MemoryStore::new());
    assert_eq!(gateway.load::<UserProfile>(keys::USER_DATA), None);
    assert!(matches!(gateway.try_load::<UserProfile>(keys::USER_DATA), Ok(None)));
}

#[test]
fn profile_round_trips() {
    let gateway = StorageGateway::new(MemoryStore::new());
    let profile = sample_profile();
    gateway.save(keys::USER_DATA, &profile).expect("save");
    assert_eq!(gateway.load::<UserProfile>(keys::USER_DATA), Some(profile));
}

#[test]
fn stripped_required_field_loads_as_absent() {
    let store = MemoryStore::new();
    let gateway = StorageGateway::new(&store);
    gateway.save(keys::USER_DATA, &sample_profile()).expect("save");

    for field in ["id", "name", "email", "phone", "address"] {
        let raw = store.raw(keys::USER_DATA).expect("stored");
        let mut value: serde_json::Value = serde_json::from_str(&raw).expect("json");
        value.as_object_mut().expect("object").remove(field);
        let mutated = StorageGateway::new(MemoryStore::new());
        mutated.store().insert_raw(keys::USER_DATA, &value.to_string());
        assert_eq!(mutated.load::<UserProfile>(keys::USER_DATA), None, "without `{field}`");
    }
}

#[test]
fn corrupt_json_is_malformed_and_absent() {
    let store = MemoryStore::new();
    store.insert_raw(keys::USER_DATA, "{\"id\": \"u1\", \"name\":");
    let gateway = StorageGateway::new(&store);
    assert!(matches!(
        gateway.try_load::<UserProfile>(keys::USER_DATA),
        Err(StorageError::MalformedRecord { .. })
    ));
    assert_eq!(gateway.load::<UserProfile>(keys::USER_DATA), None);
    // The malformed value is not cleaned up by a read.
    assert!(store.contains_key(keys::USER_DATA));
}

#[test]
fn unreadable_store_loads_as_absent() {
    let store = MemoryStore::new();
    store.insert_raw(keys::COUNT, "5");
    store.set_disabled(true);
    let gateway = StorageGateway::new(&store);
    assert!(matches!(
        gateway.try_load::<CounterValue>(keys::COUNT),
        Err(StorageError::Unavailable { source: StoreError::Unavailable(_), .. })
    ));
    assert_eq!(gateway.load_or_default::<CounterValue>(keys::COUNT), CounterValue(0));
}

#[test]
fn zero_block_document_loads_as_default() {
    let store = MemoryStore::new();
    store.insert_raw(keys::EDITOR_CONTENT, "[]");
    let gateway = StorageGateway::new(&store);
    assert_eq!(gateway.load::<EditorDocument>(keys::EDITOR_CONTENT), Some(EditorDocument::default()));
}

#[test]
fn theme_reads_bare_word() {
    let store = MemoryStore::new();
    store.insert_raw(keys::THEME_MODE, "dark");
    let gateway = StorageGateway::new(&store);
    assert_eq!(gateway.load_or_default::<ThemePreference>(keys::THEME_MODE), ThemePreference::Dark);
}

// =============================================================
// save
// =============================================================

#[test]
fn save_writes_under_namespace() {
    let store = MemoryStore::new();
    let gateway = StorageGateway::with_config(&store, StorageConfig::with_namespace("deck:"));
    gateway.save(keys::COUNT, &CounterValue(3)).expect("save");
    assert_eq!(store.raw("deck:count").as_deref(), Some("3"));
    assert_eq!(gateway.load::<CounterValue>(keys::COUNT), Some(CounterValue(3)));
}

#[test]
fn quota_failure_keeps_previous_value() {
    let store = MemoryStore::new();
    let gateway = StorageGateway::new(&store);
    gateway.save(keys::USER_DATA, &sample_profile()).expect("save");
    store.set_quota(Some(store.usage()));

    let mut bigger = sample_profile();
    bigger.address.push_str(", Apartment 7");
    let err = gateway.save(keys::USER_DATA, &bigger).expect_err("over quota");
    assert!(matches!(err, StorageError::QuotaExceededOrUnavailable { .. }));
    assert_eq!(err.key(), keys::USER_DATA);
    assert_eq!(gateway.load::<UserProfile>(keys::USER_DATA), Some(sample_profile()));
}

#[test]
fn disabled_store_save_fails() {
    let store = MemoryStore::new();
    store.set_disabled(true);
    let err = StorageGateway::new(&store).save(keys::COUNT, &CounterValue(1)).expect_err("disabled");
    assert!(matches!(err, StorageError::QuotaExceededOrUnavailable { .. }));
}

#[test]
fn unencodable_record_is_rejected_before_write() {
    let store = MemoryStore::new();
    let gateway = StorageGateway::new(&store);
    gateway.save(keys::USER_DATA, &sample_profile()).expect("save");

    let mut invalid = sample_profile();
    invalid.name = String::new();
    assert!(matches!(
        gateway.save(keys::USER_DATA, &invalid),
        Err(StorageError::QuotaExceededOrUnavailable { .. })
    ));
    assert_eq!(gateway.load::<UserProfile>(keys::USER_DATA), Some(sample_profile()));
}

#[test]
fn unencodable_record_is_logged_as_error() {
    logged(log::Level::Error, "");
    let store = MemoryStore::new();
    let gateway = StorageGateway::with_config(&store, StorageConfig::with_namespace("encode-failure:"));
    let mut invalid = sample_profile();
    invalid.email = "  ".to_owned();

    gateway.save(keys::USER_DATA, &invalid).expect_err("invalid profile");

    let errors = logged(log::Level::Error, "encode-failure:userData");
    assert_eq!(errors.len(), 1, "{errors:?}");
    assert!(store.is_empty());
}

#[test]
fn rejected_write_is_logged_as_error() {
    logged(log::Level::Error, "");
    let store = MemoryStore::new();
    store.set_disabled(true);
    let gateway = StorageGateway::with_config(&store, StorageConfig::with_namespace("write-failure:"));

    gateway.save(keys::COUNT, &CounterValue(1)).expect_err("disabled");

    assert_eq!(logged(log::Level::Error, "write-failure:count").len(), 1);
}

#[test]
fn empty_document_is_normalized_on_save() {
    let store = MemoryStore::new();
    let gateway = StorageGateway::new(&store);
    gateway.save(keys::EDITOR_CONTENT, &EditorDocument::new(Vec::new())).expect("save");
    assert_eq!(
        store.raw(keys::EDITOR_CONTENT).as_deref(),
        Some(r#"[{"type":"paragraph","children":[{"text":""}]}]"#)
    );
}

// =============================================================
// remove
// =============================================================

#[test]
fn remove_twice_is_harmless() {
    let store = MemoryStore::new();
    let gateway = StorageGateway::new(&store);
    gateway.save(keys::COUNT, &CounterValue(2)).expect("save");
    gateway.remove(keys::COUNT);
    gateway.remove(keys::COUNT);
    assert!(store.is_empty());
    assert_eq!(gateway.load::<CounterValue>(keys::COUNT), None);
}

#[test]
fn failed_remove_is_not_surfaced() {
    let store = MemoryStore::new();
    store.insert_raw(keys::COUNT, "2");
    store.set_fail_removes(true);
    StorageGateway::new(&store).remove(keys::COUNT);
    assert!(store.contains_key(keys::COUNT));
}
