//! Language registry: single source of truth for the page's languages.
//!
//! The registry is an immutable singleton initialized on first access through
//! `OnceLock`. Each entry carries the metadata the language switcher needs and
//! the label table `translate` reads from.

use crate::i18n::strings::{ENGLISH_LABELS, PORTUGUESE_LABELS};
use std::sync::OnceLock;

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// Two-letter language tag (e.g., "pt", "en")
    pub code: &'static str,

    /// English name of the language (e.g., "Portuguese")
    pub name: &'static str,

    /// Native name of the language (e.g., "Português")
    pub native_name: &'static str,

    /// Whether the page starts in this language (exactly one should be true)
    pub is_default: bool,

    /// Whether this language is offered in the switcher
    pub enabled: bool,

    /// Flag image shown on the switcher button
    pub flag_asset: &'static str,

    /// Accessible label of the switcher button, written in the target language
    pub switch_label: &'static str,

    /// Ordered `(key, text)` label pairs
    pub labels: &'static [(&'static str, &'static str)],
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its tag.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get all enabled languages, in switcher order.
    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    /// Get all languages (including disabled ones).
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// Get the language the page starts in.
    ///
    /// # Panics
    /// Panics if zero or several languages are flagged as default. The table is
    /// static, so this only fires on a broken edit of `default_languages`.
    pub fn default_language(&self) -> &LanguageConfig {
        let defaults: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default language found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default languages found in registry"),
        }
    }

    /// Check if a language tag is supported and enabled.
    pub fn is_enabled(&self, code: &str) -> bool {
        self.get_by_code(code)
            .map(|lang| lang.enabled)
            .unwrap_or(false)
    }
}

/// Portuguese (default) and English.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "pt",
            name: "Portuguese",
            native_name: "Português",
            is_default: true,
            enabled: true,
            flag_asset: "assets/Flag_of_Brazil.png",
            switch_label: "Mudar para Português",
            labels: PORTUGUESE_LABELS,
        },
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            is_default: false,
            enabled: true,
            flag_asset: "assets/bandeiraeua.png",
            switch_label: "Switch to English",
            labels: ENGLISH_LABELS,
        },
    ]
}
