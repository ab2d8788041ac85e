//! Error types for the raw store, record codecs, and the gateway.
//!
//! Three layers, one enum each: [`StoreError`] is what a backing store
//! reports, [`RecordError`] is what a record codec reports, and
//! [`StorageError`] is the only type that crosses the gateway boundary.

/// Failure reported by a [`crate::KeyValueStore`] implementation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The store is disabled or cannot be reached at all.
    #[error("store unavailable: {0}")]
    Unavailable(String),
    /// The write would exceed the store's quota.
    #[error("store quota exceeded")]
    QuotaExceeded,
    /// The store refused the operation for another reason.
    #[error("store rejected operation: {0}")]
    Rejected(String),
}

/// Failure to encode or decode a record.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// The raw value is not JSON of the expected structural shape.
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
    /// A required field is present but empty.
    #[error("required field `{0}` is empty")]
    MissingField(&'static str),
    /// A field holds a value outside its allowed domain.
    #[error("invalid value for `{field}`: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Error surfaced by [`crate::StorageGateway`].
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The store could not be read.
    #[error("storage unavailable while reading `{key}`: {source}")]
    Unavailable {
        key: String,
        #[source]
        source: StoreError,
    },
    /// The write was rejected (quota exhausted, store disabled, or the record
    /// could not be serialized). The previously stored value is untouched.
    #[error("could not save `{key}`: {reason}")]
    QuotaExceededOrUnavailable { key: String, reason: String },
    /// A stored value exists but does not decode into the expected record.
    #[error("malformed record at `{key}`: {source}")]
    MalformedRecord {
        key: String,
        #[source]
        source: RecordError,
    },
}

impl StorageError {
    /// Key the failed operation targeted.
    pub fn key(&self) -> &str {
        match self {
            Self::Unavailable { key, .. }
            | Self::QuotaExceededOrUnavailable { key, .. }
            | Self::MalformedRecord { key, .. } => key,
        }
    }
}
