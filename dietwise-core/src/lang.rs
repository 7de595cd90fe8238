//! Display languages and per-language text.
//!
//! The engine ships Turkish and English copy. Catalog records carry both
//! translations; a missing translation resolves to the empty string rather
//! than failing.
//!
//! # Examples
//! ```
//! use dietwise_core::{Lang, LocalizedText};
//!
//! let name = LocalizedText::new("Ketojenik Diyet", "Ketogenic Diet");
//! assert_eq!(name.get(Lang::En), "Ketogenic Diet");
//! assert_eq!(Lang::Tr.to_string(), "tr");
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Language used to render reasons, labels, and record text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Lang {
    /// Turkish, the application's primary language.
    #[default]
    Tr,
    /// English.
    En,
}

impl Lang {
    /// Return the language as its lowercase ISO 639-1 code.
    ///
    /// # Examples
    /// ```
    /// use dietwise_core::Lang;
    ///
    /// assert_eq!(Lang::En.as_str(), "en");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tr => "tr",
            Self::En => "en",
        }
    }

    /// Pick between a Turkish and an English literal.
    #[must_use]
    pub const fn pick(self, tr: &'static str, en: &'static str) -> &'static str {
        match self {
            Self::Tr => tr,
            Self::En => en,
        }
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Lang {
    type Err = String;

    /// Parse a language code. Regional variants such as `en-GB` map to their
    /// base language.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        if lower == "tr" || lower.starts_with("tr-") || lower.starts_with("tr_") {
            Ok(Self::Tr)
        } else if lower == "en" || lower.starts_with("en-") || lower.starts_with("en_") {
            Ok(Self::En)
        } else {
            Err(format!("unknown language '{s}'"))
        }
    }
}

/// Text available in every supported language.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LocalizedText {
    /// Turkish text.
    #[cfg_attr(feature = "serde", serde(default))]
    pub tr: String,
    /// English text.
    #[cfg_attr(feature = "serde", serde(default))]
    pub en: String,
}

impl LocalizedText {
    /// Construct text from its Turkish and English variants.
    pub fn new(tr: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            tr: tr.into(),
            en: en.into(),
        }
    }

    /// Return the text for `lang`, or an empty string when it was never
    /// authored.
    #[must_use]
    pub fn get(&self, lang: Lang) -> &str {
        match lang {
            Lang::Tr => &self.tr,
            Lang::En => &self.en,
        }
    }

    /// Report whether the translation for `lang` is blank.
    #[must_use]
    pub fn is_missing(&self, lang: Lang) -> bool {
        self.get(lang).trim().is_empty()
    }
}
