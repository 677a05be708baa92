//! Translation catalogs and language selection for UniVista.
//!
//! - [`Language`] / [`Direction`]: the supported languages and their
//!   writing direction (Arabic is right-to-left).
//! - [`catalog`]: static `en` / `ar` tables and placeholder interpolation.
//! - [`LocaleStore`]: the selected language, persisted under the
//!   `language` storage key, with `translate` falling back to the key.
//!
//! The locale store is independent of the session: chrome and views ask it
//! for strings whether or not anyone is signed in.

pub mod catalog;
mod error;
mod store;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use error::LocaleError;
pub use store::LocaleStore;

/// A supported display language.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Ar];

    /// The locale code stored under the `language` key.
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ar => "ar",
        }
    }

    pub fn direction(self) -> Direction {
        match self {
            Self::En => Direction::Ltr,
            Self::Ar => Direction::Rtl,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Self::En),
            "ar" => Ok(Self::Ar),
            other => Err(LocaleError::UnknownLanguage(other.to_string())),
        }
    }
}

/// Text direction for a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    /// The value for an HTML `dir` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}
