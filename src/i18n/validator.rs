//! Label table validation.
//!
//! Compares a candidate language's label table against a reference table:
//! keys must line up and values must be usable, and literal tokens such as
//! numbers, URLs and email addresses should survive translation.

use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

use crate::i18n::Language;

/// Validation report containing errors and warnings about a label table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that make a label unusable
    pub errors: Vec<String>,

    /// Suspicious entries that still render
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// No errors and no warnings.
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }

    fn merge(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for label tables.
pub struct LabelValidator;

static NUMBER_REGEX: OnceLock<Regex> = OnceLock::new();
static URL_REGEX: OnceLock<Regex> = OnceLock::new();
static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

type LabelTable = [(&'static str, &'static str)];

impl LabelValidator {
    /// Validate every enabled language against the default language.
    pub fn validate_registry() -> ValidationReport {
        let reference = Language::default();
        let mut report = ValidationReport::new();

        for language in Language::all() {
            if language == reference {
                report.merge(Self::validate_table(language.code(), language.config().labels, None));
            } else {
                report.merge(Self::validate_table(
                    language.code(),
                    language.config().labels,
                    Some(reference.config().labels),
                ));
            }
        }

        report
    }

    /// Validate `candidate`, optionally against a `reference` table.
    ///
    /// Errors: duplicate keys, empty values, keys missing from the candidate.
    /// Warnings: keys the reference lacks, values equal to their key, literal
    /// tokens that differ from the reference value.
    pub fn validate_table(
        name: &str,
        candidate: &LabelTable,
        reference: Option<&LabelTable>,
    ) -> ValidationReport {
        let mut report = ValidationReport::new();
        let mut seen = HashSet::new();

        for (key, text) in candidate {
            if !seen.insert(*key) {
                report
                    .errors
                    .push(format!("[{}] duplicate key '{}'", name, key));
            }
            if text.trim().is_empty() {
                report.errors.push(format!("[{}] empty value for '{}'", name, key));
            } else if text == key {
                report
                    .warnings
                    .push(format!("[{}] value of '{}' equals its key", name, key));
            }
        }

        let Some(reference) = reference else {
            return report;
        };

        for (key, reference_text) in reference {
            match candidate.iter().find(|(candidate_key, _)| candidate_key == key) {
                None => report.errors.push(format!("[{}] missing key '{}'", name, key)),
                Some((_, text)) => {
                    if let Some(warning) = Self::compare_tokens(reference_text, text) {
                        report.warnings.push(format!("[{}] '{}': {}", name, key, warning));
                    }
                }
            }
        }

        for (key, _) in candidate {
            if !reference.iter().any(|(reference_key, _)| reference_key == key) {
                report
                    .warnings
                    .push(format!("[{}] key '{}' not in reference table", name, key));
            }
        }

        report
    }

    fn compare_tokens(reference: &str, translated: &str) -> Option<String> {
        let orig_numbers = Self::extract_numbers(reference);
        let trans_numbers = Self::extract_numbers(translated);
        if orig_numbers != trans_numbers {
            return Some(format!(
                "Number mismatch: reference has {:?}, translation has {:?}",
                orig_numbers, trans_numbers
            ));
        }

        let orig_urls = Self::extract_urls(reference);
        let trans_urls = Self::extract_urls(translated);
        if orig_urls != trans_urls {
            return Some(format!(
                "URL mismatch: reference has {} URLs, translation has {} URLs",
                orig_urls.len(),
                trans_urls.len()
            ));
        }

        let orig_emails = Self::extract_emails(reference).len();
        let trans_emails = Self::extract_emails(translated).len();
        if orig_emails != trans_emails {
            return Some(format!(
                "Email count mismatch: reference has {}, translation has {}",
                orig_emails, trans_emails
            ));
        }

        None
    }

    fn extract_numbers(text: &str) -> Vec<String> {
        let regex = NUMBER_REGEX.get_or_init(|| Regex::new(r"\d+").unwrap());

        regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    fn extract_urls(text: &str) -> Vec<String> {
        let regex = URL_REGEX.get_or_init(|| Regex::new(r"https?://[^\s)\]]+").unwrap());

        regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    fn extract_emails(text: &str) -> Vec<String> {
        let regex = EMAIL_REGEX.get_or_init(|| Regex::new(r"[\w.+-]+@[\w-]+\.[\w.]+").unwrap());

        regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}
