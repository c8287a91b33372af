//! Values that resolve differently per language.

use crate::i18n::Language;

/// A pair of values, one per supported language.
///
/// Content tables store whole localized arrays (`Localized<&'static [T]>`) so
/// that the renderer selects them by the active language at render time
/// instead of pre-merging translations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Localized<T> {
    pub pt: T,
    pub en: T,
}

/// Localized literal text.
pub type LocalizedText = Localized<&'static str>;

impl<T> Localized<T> {
    pub const fn new(pt: T, en: T) -> Self {
        Self { pt, en }
    }

    /// Resolve the value for `language`.
    pub fn get(&self, language: Language) -> &T {
        if language == Language::ENGLISH {
            &self.en
        } else {
            &self.pt
        }
    }
}

impl<T: Copy> Localized<T> {
    /// Resolve and copy the value for `language`.
    pub fn resolve(&self, language: Language) -> T {
        *self.get(language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GREETING: LocalizedText = Localized::new("Olá", "Hello");

    #[test]
    fn test_get_by_language() {
        assert_eq!(*GREETING.get(Language::PORTUGUESE), "Olá");
        assert_eq!(*GREETING.get(Language::ENGLISH), "Hello");
    }

    #[test]
    fn test_resolve_copies_slices() {
        const ITEMS: Localized<&[u8]> = Localized::new(&[1, 2], &[3]);
        assert_eq!(ITEMS.resolve(Language::ENGLISH), &[3]);
        assert_eq!(ITEMS.resolve(Language::PORTUGUESE).len(), 2);
    }
}
