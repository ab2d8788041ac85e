use std::fmt;
use std::str::FromStr;

use super::Record;
use crate::error::RecordError;

/// Light or dark color scheme. Stored as the bare word, not JSON.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(RecordError::InvalidValue {
                field: "themeMode",
                reason: format!("unknown theme '{other}' (expected 'light' or 'dark')"),
            }),
        }
    }
}

impl Record for ThemePreference {
    fn encode(&self) -> Result<String, RecordError> {
        Ok(self.as_str().to_owned())
    }

    fn decode(raw: &str) -> Result<Self, RecordError> {
        raw.parse()
    }
}
