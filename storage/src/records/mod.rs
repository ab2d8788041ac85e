//! Records persisted through the gateway and their string codecs.
//!
//! Each record owns one top-level key. JSON records validate their shape on
//! both encode and decode, so nothing half-populated is ever written or
//! handed back to a caller.

mod counter;
mod editor;
mod profile;
mod theme;


use serde::Serialize;
use serde::de::DeserializeOwned;

pub use counter::CounterValue;
pub use editor::{Block, EditorDocument, FontSize, Mark, TextRun};
pub use profile::UserProfile;
pub use theme::ThemePreference;

use crate::error::RecordError;

/// Logical keys for each record.
pub mod keys {
    pub const THEME_MODE: &str = "themeMode";
    pub const COUNT: &str = "count";
    pub const USER_DATA: &str = "userData";
    pub const EDITOR_CONTENT: &str = "editorContent";
}

/// A value with a string encoding and shape checks.
pub trait Record: Sized {
    /// Encode into the stored string. Fails if the value breaks the record's
    /// invariants.
    fn encode(&self) -> Result<String, RecordError>;

    /// Decode and validate a stored string.
    fn decode(raw: &str) -> Result<Self, RecordError>;
}

fn encode_json<T: Serialize>(value: &T) -> Result<String, RecordError> {
    Ok(serde_json::to_string(value)?)
}

fn decode_json<T: DeserializeOwned>(raw: &str) -> Result<T, RecordError> {
    Ok(serde_json::from_str(raw)?)
}
