//! Output language selector.
//!
//! Every label table in this crate takes a `Locale` and returns a static
//! string. Rule evaluation never sees a locale; only rendering does.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SajuError;

/// Language used for labels and descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Korean.
    #[default]
    Ko,
    /// English.
    En,
}

/// Both locales, for exhaustive table checks.
pub const ALL_LOCALES: [Locale; 2] = [Locale::Ko, Locale::En];

impl Locale {
    /// ISO 639-1 code.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Ko => "ko",
            Self::En => "en",
        }
    }

    /// Pick the variant of a two-language pair.
    pub const fn pick(self, ko: &'static str, en: &'static str) -> &'static str {
        match self {
            Self::Ko => ko,
            Self::En => en,
        }
    }
}

impl Display for Locale {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = SajuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ko" | "kr" | "korean" => Ok(Self::Ko),
            "en" | "english" => Ok(Self::En),
            _ => Err(SajuError::InvalidLocale(s.to_string())),
        }
    }
}
