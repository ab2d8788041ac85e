//! Storage key layout.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PROBE_KEY: &str = "widget_deck_probe";

/// Namespace and probe key used by a [`crate::StorageGateway`].
///
/// Every logical key (`"count"`, `"userData"`, ...) is stored as
/// `{namespace}{key}`. The default namespace is empty, so stored keys match
/// the logical names exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub namespace: String,
    pub probe_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { namespace: String::new(), probe_key: DEFAULT_PROBE_KEY.to_owned() }
    }
}

impl StorageConfig {
    /// Config with the given key prefix and the default probe key.
    pub fn with_namespace(namespace: impl Into<String>) -> Self {
        Self { namespace: namespace.into(), ..Self::default() }
    }

    /// Physical key for a logical record key.
    pub fn key(&self, name: &str) -> String {
        format!("{}{name}", self.namespace)
    }

    /// Physical key written and removed by [`crate::StorageGateway::probe`].
    pub fn probe_key(&self) -> String {
        self.key(&self.probe_key)
    }
}
