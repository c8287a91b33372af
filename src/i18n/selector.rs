//! Active-language state and label translation.

use crate::i18n::{strings, Language, Localized};
use tracing::{debug, info};

/// Holds the active language and translates label keys against it.
///
/// The selector is owned by the page state and handed to whatever renders;
/// switching language takes effect on the next render with no other
/// bookkeeping. Nothing is persisted, so every new selector starts in the
/// registry's default language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageSelector {
    current: Language,
}

impl LanguageSelector {
    /// A selector in the default language.
    pub fn new() -> Self {
        Self::with_language(Language::default())
    }

    pub fn with_language(language: Language) -> Self {
        Self { current: language }
    }

    /// The active language.
    pub fn language(&self) -> Language {
        self.current
    }

    /// Switch the active language.
    pub fn set_language(&mut self, language: Language) {
        if self.current != language {
            info!("Switching language from {} to {}", self.current, language);
        }
        self.current = language;
    }

    /// Translate a label key in the active language.
    ///
    /// Missing keys are returned verbatim; lookup never fails.
    pub fn translate<'a>(&self, key: &'a str) -> &'a str {
        match strings::lookup(self.current.config().labels, key) {
            Some(text) => text,
            None => {
                debug!("No '{}' label for key '{}', using key", self.current, key);
                key
            }
        }
    }

    /// Resolve a localized value in the active language.
    pub fn localize<'a, T>(&self, value: &'a Localized<T>) -> &'a T {
        value.get(self.current)
    }
}

impl Default for LanguageSelector {
    fn default() -> Self {
        Self::new()
    }
}
