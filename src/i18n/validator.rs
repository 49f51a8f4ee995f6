//! Translation quality validation module.
//!
//! Checks that a translation did not drop elements that should pass through
//! untouched (URLs and numbers) and that it is not empty.

use regex::Regex;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about a translation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Critical errors that indicate translation issues
    pub errors: Vec<String>,

    /// Non-critical warnings about potential issues
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

/// Validator for translation quality.
pub struct TranslationValidator;

static URL_REGEX: OnceLock<Regex> = OnceLock::new();
static NUMBER_REGEX: OnceLock<Regex> = OnceLock::new();

impl TranslationValidator {
    /// Validate a translation against its original.
    pub fn validate(original: &str, translated: &str) -> ValidationReport {
        let mut report = ValidationReport::default();

        if translated.trim().is_empty() && !original.trim().is_empty() {
            report
                .errors
                .push("Translation is empty but the original is not".to_string());
            return report;
        }

        let orig_urls = Self::extract_urls(original);
        let trans_urls = Self::extract_urls(translated);
        if orig_urls != trans_urls {
            report.warnings.push(format!(
                "URL mismatch: original has {} URLs, translation has {} URLs",
                orig_urls.len(),
                trans_urls.len()
            ));
        }

        // Numbers may be reformatted (8 -> ocho), so only report missing ones
        let trans_numbers = Self::extract_numbers(translated);
        let missing: Vec<String> = Self::extract_numbers(original)
            .into_iter()
            .filter(|n| !trans_numbers.contains(n))
            .collect();
        if !missing.is_empty() {
            report
                .warnings
                .push(format!("Numbers missing from translation: {:?}", missing));
        }

        report
    }

    fn extract_urls(text: &str) -> Vec<String> {
        let regex =
            URL_REGEX.get_or_init(|| Regex::new(r"https?://[^\s)\]]+").expect("Invalid URL regex"));
        let mut urls: Vec<String> = regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect();
        urls.sort();
        urls
    }

    fn extract_numbers(text: &str) -> Vec<String> {
        let regex = NUMBER_REGEX.get_or_init(|| Regex::new(r"\d+").expect("Invalid number regex"));
        regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_translation() {
        let report = TranslationValidator::validate("Hola mundo", "Hello world");
        assert!(report.is_clean());
    }

    #[test]
    fn test_empty_translation_is_error() {
        let report = TranslationValidator::validate("Hola mundo", "   ");
        assert!(report.has_errors());
        assert!(!report.has_warnings());
    }

    #[test]
    fn test_empty_original_and_translation_is_clean() {
        assert!(TranslationValidator::validate("", "").is_clean());
    }

    #[test]
    fn test_missing_url_is_warning() {
        let report = TranslationValidator::validate(
            "Mira https://example.com/a",
            "Look at the link",
        );
        assert!(!report.has_errors());
        assert!(report.warnings[0].contains("URL mismatch"));
    }

    #[test]
    fn test_preserved_url_is_clean() {
        let report = TranslationValidator::validate(
            "Mira https://example.com/a",
            "Look at https://example.com/a",
        );
        assert!(report.is_clean());
    }

    #[test]
    fn test_missing_number_is_warning() {
        let report = TranslationValidator::validate(
            "El tren sale a las 8",
            "The train leaves at eight",
        );
        assert!(report.has_warnings());
        assert!(report.warnings[0].contains("\"8\""));
    }
}
