use serde::{Deserialize, Serialize};

use super::{Record, decode_json, encode_json};
use crate::error::RecordError;

/// Persisted counter value, stored as a bare JSON integer.
///
/// The range is deliberately unbounded below zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CounterValue(pub i64);

impl From<i64> for CounterValue {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl Record for CounterValue {
    fn encode(&self) -> Result<String, RecordError> {
        encode_json(self)
    }

    fn decode(raw: &str) -> Result<Self, RecordError> {
        decode_json(raw)
    }
}
