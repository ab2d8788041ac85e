use serde::{Deserialize, Serialize};

use super::{Record, decode_json, encode_json};
use crate::error::RecordError;

/// Saved user profile. Overwritten wholesale on every submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Generated once; never changes after the first write.
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    /// Data URI of the avatar, or empty. Older records lack the field.
    #[serde(default)]
    pub image: String,
}

impl UserProfile {
    /// Check the fields every stored profile must carry.
    pub fn validate(&self) -> Result<(), RecordError> {
        if self.id.trim().is_empty() {
            return Err(RecordError::MissingField("id"));
        }
        if self.name.trim().is_empty() {
            return Err(RecordError::MissingField("name"));
        }
        if self.email.trim().is_empty() {
            return Err(RecordError::MissingField("email"));
        }
        if !self.image.is_empty() && !self.image.starts_with("data:") {
            return Err(RecordError::InvalidValue { field: "image", reason: "expected a data URI".to_owned() });
        }
        Ok(())
    }
}

impl Record for UserProfile {
    fn encode(&self) -> Result<String, RecordError> {
        self.validate()?;
        encode_json(self)
    }

    fn decode(raw: &str) -> Result<Self, RecordError> {
        let profile: Self = decode_json(raw)?;
        profile.validate()?;
        Ok(profile)
    }
}
