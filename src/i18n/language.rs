//! Language type: a tag validated against the registry.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use anyhow::{bail, Result};
use serde::{Serialize, Serializer};

/// A validated language.
///
/// Only registered, enabled languages can be constructed, so every `Language`
/// has a label table and a registry entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    /// Two-letter language tag (e.g., "pt", "en")
    code: &'static str,
}

impl Language {
    pub const PORTUGUESE: Language = Language { code: "pt" };

    pub const ENGLISH: Language = Language { code: "en" };

    /// Create a Language from a language tag.
    ///
    /// # Returns
    /// * `Ok(Language)` if the tag is registered and enabled
    /// * `Err` if the tag is unknown or the language is disabled
    pub fn from_code(code: &str) -> Result<Language> {
        let registry = LanguageRegistry::get();

        match registry.get_by_code(code) {
            Some(config) if config.enabled => Ok(Language { code: config.code }),
            Some(_) => bail!("Language '{}' is not enabled", code),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// The two-letter tag.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the tag is missing from the registry, which cannot happen for
    /// a `Language` built through `from_code` or the constants.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    /// English name of the language (e.g., "Portuguese").
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Native name of the language (e.g., "Português").
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Whether the page starts in this language.
    pub fn is_default(&self) -> bool {
        self.config().is_default
    }

    /// Every enabled language, in switcher order.
    pub fn all() -> Vec<Language> {
        LanguageRegistry::get()
            .list_enabled()
            .into_iter()
            .map(|config| Language { code: config.code })
            .collect()
    }
}

impl Default for Language {
    fn default() -> Self {
        Language {
            code: LanguageRegistry::get().default_language().code,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code)
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code)
    }
}
