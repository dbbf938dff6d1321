//! `Language` — the two display languages, and `Localized` labels.

use crate::errors::Error;

/// Display language for labels and digits.
///
/// `Ne` renders Devanagari digits and Nepali names; `En` renders ASCII
/// digits and romanised names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Language {
    /// Nepali.
    #[default]
    Ne,
    /// English.
    En,
}

impl Language {
    /// Both languages, Nepali first.
    pub const ALL: [Language; 2] = [Language::Ne, Language::En];

    /// Return the language code (`"ne"` or `"en"`).
    pub fn code(&self) -> &'static str {
        match self {
            Language::Ne => "ne",
            Language::En => "en",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ne" => Ok(Language::Ne),
            "en" => Ok(Language::En),
            other => Err(Error::InvalidArgument(format!(
                "unknown language {other:?}, expected \"ne\" or \"en\""
            ))),
        }
    }
}

/// One value per [`Language`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Localized<T> {
    /// Nepali value.
    pub ne: T,
    /// English value.
    pub en: T,
}

impl<T> Localized<T> {
    /// Create a label pair.
    pub const fn new(ne: T, en: T) -> Self {
        Self { ne, en }
    }

    /// Select the value for `lang`.
    pub fn get(&self, lang: Language) -> &T {
        match lang {
            Language::Ne => &self.ne,
            Language::En => &self.en,
        }
    }
}
