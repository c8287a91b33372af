//! Internationalization for the bilingual page.
//!
//! # Architecture
//!
//! - `registry`: single source of truth for supported languages and their metadata
//! - `language`: validated `Language` tag
//! - `strings`: label tables and the keys the renderer reads
//! - `localized`: `Localized<T>` pairs for content that varies by language
//! - `selector`: `LanguageSelector`, the active language plus `translate`
//! - `validator`: consistency checks across label tables
//!
//! # Example
//!
//! ```rust
//! use portfolio_site::i18n::{Language, LanguageSelector};
//!
//! let mut selector = LanguageSelector::new();
//! assert_eq!(selector.translate("contact"), "Contato");
//!
//! selector.set_language(Language::ENGLISH);
//! assert_eq!(selector.translate("contact"), "Contact");
//! assert_eq!(selector.translate("unknownKey"), "unknownKey");
//! ```

mod language;
mod localized;
mod registry;
mod selector;
pub mod strings;
mod validator;

pub use language::Language;
pub use localized::{Localized, LocalizedText};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use selector::LanguageSelector;
pub use strings::keys;
pub use validator::{LabelValidator, ValidationReport};
