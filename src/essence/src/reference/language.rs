//! Display languages

use serde::{Deserialize, Serialize};

use super::ParseError;

/// Language used for display labels. Matching never depends on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Jp,
}

impl Language {
    /// The other language (language toggle)
    pub fn toggled(self) -> Self {
        match self {
            Self::En => Self::Jp,
            Self::Jp => Self::En,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::En => write!(f, "en"),
            Self::Jp => write!(f, "jp"),
        }
    }
}

impl std::str::FromStr for Language {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::En),
            "jp" | "ja" | "japanese" => Ok(Self::Jp),
            _ => Err(ParseError::InvalidLanguage(s.to_string())),
        }
    }
}
