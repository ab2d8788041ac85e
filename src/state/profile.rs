//! Profile form draft, validation rules, and submission.
//!
//! DESIGN
//! ======
//! Validation runs before anything reaches the gateway: an invalid draft is
//! never encoded or written. The stored profile's `id` is reused across
//! submissions so it stays stable once first written.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use storage::{KeyValueStore, StorageError, StorageGateway, UserProfile, keys};

use super::status::SaveStatus;

static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));
static PHONE_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\+?\d{1,3}[- ]?)?\(?\d{3}\)?[- ]?\d{3}[- ]?\d{4}$").expect("valid phone pattern")
});

/// Limits applied to a profile draft.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileRules {
    pub name_min: usize,
    pub name_max: usize,
    pub address_min: usize,
    pub address_max: usize,
    /// Lowercase domains an email address may use.
    pub email_domains: Vec<String>,
}

impl Default for ProfileRules {
    fn default() -> Self {
        Self {
            name_min: 3,
            name_max: 50,
            address_min: 10,
            address_max: 200,
            email_domains: ["gmail.com", "yahoo.com", "outlook.com"].map(str::to_owned).to_vec(),
        }
    }
}

/// Form fields, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProfileField {
    Name,
    Email,
    Phone,
    Address,
}

/// Per-field validation messages.
#[derive(Clone, Debug, Default, PartialEq, Eq, thiserror::Error)]
#[error("profile has {} invalid field(s)", .errors.len())]
pub struct ValidationErrors {
    errors: BTreeMap<ProfileField, String>,
}

impl ValidationErrors {
    pub fn get(&self, field: ProfileField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = ProfileField> + '_ {
        self.errors.keys().copied()
    }

    fn insert(&mut self, field: ProfileField, message: impl Into<String>) {
        self.errors.entry(field).or_insert_with(|| message.into());
    }

    fn replace(&mut self, field: ProfileField, message: Option<String>) {
        match message {
            Some(message) => self.errors.insert(field, message),
            None => self.errors.remove(&field),
        };
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("only image data URIs can be used as a profile picture")]
pub struct ImageError;

/// Editable profile fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl ProfileForm {
    pub fn field(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Name => &self.name,
            ProfileField::Email => &self.email,
            ProfileField::Phone => &self.phone,
            ProfileField::Address => &self.address,
        }
    }

    pub fn set_field(&mut self, field: ProfileField, value: String) {
        match field {
            ProfileField::Name => self.name = value,
            ProfileField::Email => self.email = value,
            ProfileField::Phone => self.phone = value,
            ProfileField::Address => self.address = value,
        }
    }

    /// Check every field, collecting one message per failing field.
    pub fn validate(&self, rules: &ProfileRules) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let name_len = self.name.trim().chars().count();
        if name_len == 0 {
            errors.insert(ProfileField::Name, "Name is required");
        } else if name_len < rules.name_min {
            errors.insert(ProfileField::Name, format!("Minimum {} characters", rules.name_min));
        } else if name_len > rules.name_max {
            errors.insert(ProfileField::Name, format!("Maximum {} characters", rules.name_max));
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.insert(ProfileField::Email, "Email is required");
        } else if !EMAIL_SHAPE.is_match(email) {
            errors.insert(ProfileField::Email, "Invalid email format");
        } else if !domain_allowed(email, &rules.email_domains) {
            errors.insert(ProfileField::Email, format!("We only accept {}", rules.email_domains.join(", ")));
        }

        let phone = self.phone.trim();
        if phone.is_empty() {
            errors.insert(ProfileField::Phone, "Phone number is required");
        } else if !PHONE_SHAPE.is_match(phone) {
            errors.insert(ProfileField::Phone, "Invalid phone number format");
        }

        let address_len = self.address.trim().chars().count();
        if address_len == 0 {
            errors.insert(ProfileField::Address, "Address is required");
        } else if address_len < rules.address_min {
            errors.insert(ProfileField::Address, format!("Minimum {} characters", rules.address_min));
        } else if address_len > rules.address_max {
            errors.insert(ProfileField::Address, format!("Maximum {} characters", rules.address_max));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

fn domain_allowed(email: &str, domains: &[String]) -> bool {
    let Some((_, domain)) = email.rsplit_once('@') else {
        return false;
    };
    let domain = domain.to_ascii_lowercase();
    domains.iter().any(|allowed| *allowed == domain)
}

/// Profile widget state: stored profile, draft, pending avatar, last outcome.
#[derive(Clone, Debug, Default)]
pub struct ProfileState {
    pub saved: Option<UserProfile>,
    pub draft: ProfileForm,
    pub image: Option<String>,
    pub errors: ValidationErrors,
    pub status: SaveStatus,
}

impl ProfileState {
    pub fn load<S: KeyValueStore>(gateway: &StorageGateway<S>) -> Self {
        let saved: Option<UserProfile> = gateway.load(keys::USER_DATA);
        let image = saved.as_ref().map(|p| p.image.clone()).filter(|img| !img.is_empty());
        Self { saved, image, ..Self::default() }
    }

    /// Set the pending avatar from a `data:image/...` URI.
    pub fn set_image(&mut self, data_uri: String) -> Result<(), ImageError> {
        if !data_uri.starts_with("data:image/") {
            return Err(ImageError);
        }
        self.image = Some(data_uri);
        Ok(())
    }

    pub fn clear_image(&mut self) {
        self.image = None;
    }

    /// Update one draft field and refresh that field's message, leaving
    /// untouched fields quiet.
    pub fn edit(&mut self, field: ProfileField, value: String, rules: &ProfileRules) {
        self.draft.set_field(field, value);
        let message = self.draft.validate(rules).err().and_then(|errors| errors.get(field).map(str::to_owned));
        self.errors.replace(field, message);
    }

    pub fn is_valid(&self, rules: &ProfileRules) -> bool {
        self.draft.validate(rules).is_ok()
    }

    /// Validate the draft and persist it as the stored profile.
    ///
    /// Values are stored trimmed. On success the draft is cleared while the
    /// saved profile stays available for display, and its image stays
    /// selected for the next submission.
    ///
    /// # Errors
    ///
    /// [`SubmitError::Invalid`] when the draft breaks `rules` (nothing is
    /// written), [`SubmitError::Storage`] when the store rejects the write.
    pub fn submit<S: KeyValueStore>(
        &mut self,
        gateway: &StorageGateway<S>,
        rules: &ProfileRules,
    ) -> Result<UserProfile, SubmitError> {
        if let Err(errors) = self.draft.validate(rules) {
            self.errors = errors.clone();
            return Err(errors.into());
        }
        self.errors = ValidationErrors::default();

        let id = self
            .saved
            .as_ref()
            .map_or_else(|| uuid::Uuid::new_v4().to_string(), |existing| existing.id.clone());
        let profile = UserProfile {
            id,
            name: self.draft.name.trim().to_owned(),
            email: self.draft.email.trim().to_owned(),
            phone: self.draft.phone.trim().to_owned(),
            address: self.draft.address.trim().to_owned(),
            image: self.image.clone().unwrap_or_default(),
        };

        if let Err(err) = gateway.save(keys::USER_DATA, &profile) {
            self.status = SaveStatus::Failed(err.to_string());
            return Err(err.into());
        }

        log::info!("profile: saved {}", profile.id);
        self.draft = ProfileForm::default();
        self.image = Some(profile.image.clone()).filter(|img| !img.is_empty());
        self.saved = Some(profile.clone());
        self.status = SaveStatus::Saved;
        Ok(profile)
    }
}
