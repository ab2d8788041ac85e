//! Application configuration parsed from build-time environment variables.
//!
//! The browser has no process environment, so values are captured with
//! `option_env!` when the crate is compiled and parsed once at startup.

use std::sync::LazyLock;

use storage::{StorageConfig, ThemePreference};

use crate::state::profile::ProfileRules;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Error returned when a configuration value cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid WIDGET_DECK_STORAGE_NAMESPACE '{0}': must not contain whitespace")]
    Namespace(String),
    #[error("unknown WIDGET_DECK_DEFAULT_THEME '{0}' (expected 'light' or 'dark')")]
    Theme(String),
    #[error("invalid WIDGET_DECK_EMAIL_DOMAINS entry '{0}'")]
    EmailDomain(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub storage: StorageConfig,
    pub default_theme: ThemePreference,
    pub profile_rules: ProfileRules,
}

impl AppConfig {
    /// Build typed config from the variables captured at compile time.
    ///
    /// Optional:
    /// - `WIDGET_DECK_STORAGE_NAMESPACE`: key prefix, default empty
    /// - `WIDGET_DECK_DEFAULT_THEME`: `light` (default) or `dark`
    /// - `WIDGET_DECK_EMAIL_DOMAINS`: comma-separated list, default
    ///   `gmail.com,yahoo.com,outlook.com`
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            option_env!("WIDGET_DECK_STORAGE_NAMESPACE"),
            option_env!("WIDGET_DECK_DEFAULT_THEME"),
            option_env!("WIDGET_DECK_EMAIL_DOMAINS"),
        )
    }

    pub fn from_vars(
        namespace: Option<&str>,
        default_theme: Option<&str>,
        email_domains: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let storage = StorageConfig::with_namespace(parse_namespace(namespace)?);
        let default_theme = parse_theme(default_theme)?;
        let mut profile_rules = ProfileRules::default();
        if let Some(domains) = parse_email_domains(email_domains)? {
            profile_rules.email_domains = domains;
        }
        Ok(Self { storage, default_theme, profile_rules })
    }
}

/// Process-wide configuration; invalid values fall back to defaults.
pub fn app_config() -> &'static AppConfig {
    static CONFIG: LazyLock<AppConfig> = LazyLock::new(|| {
        AppConfig::from_build_env().unwrap_or_else(|e| {
            log::warn!("config: {e}; using defaults");
            AppConfig::default()
        })
    });
    &CONFIG
}

fn parse_namespace(raw: Option<&str>) -> Result<String, ConfigError> {
    let namespace = raw.unwrap_or_default();
    if namespace.chars().any(char::is_whitespace) {
        return Err(ConfigError::Namespace(namespace.to_owned()));
    }
    Ok(namespace.to_owned())
}

fn parse_theme(raw: Option<&str>) -> Result<ThemePreference, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(ThemePreference::default()),
        Some(value) => value.parse().map_err(|_| ConfigError::Theme(value.to_owned())),
    }
}

fn parse_email_domains(raw: Option<&str>) -> Result<Option<Vec<String>>, ConfigError> {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    raw.split(',')
        .map(|entry| {
            let domain = entry.trim().to_ascii_lowercase();
            let valid = domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !domain.contains('@')
                && !domain.chars().any(char::is_whitespace);
            if valid { Ok(domain) } else { Err(ConfigError::EmailDomain(entry.trim().to_owned())) }
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}
