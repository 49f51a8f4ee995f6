//! Dominant-language detection.
//!
//! The resolver only needs "which language is this text mostly in"; the
//! default implementation uses the trigram-based `whatlang` crate.

use crate::i18n::LanguageTag;
use tracing::debug;
use whatlang::{Detector, Lang};

/// Reports the dominant language of a piece of text, if any.
pub trait DominantLanguageDetector: Send + Sync {
    /// Returns a family-level tag (e.g. "es"), or `None` when the text has
    /// no recognisable language.
    fn detect(&self, text: &str) -> Option<LanguageTag>;
}

/// `whatlang`-based language detector
pub struct WhatlangDetector {
    detector: Detector,
}

impl WhatlangDetector {
    pub fn new() -> Self {
        Self {
            detector: Detector::new(),
        }
    }
}

impl Default for WhatlangDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl DominantLanguageDetector for WhatlangDetector {
    fn detect(&self, text: &str) -> Option<LanguageTag> {
        if text.trim().is_empty() {
            return None;
        }

        let info = self.detector.detect(text)?;
        let code = iso_639_1(info.lang());
        debug!(
            "Detected dominant language {} (confidence {:.2}, reliable: {})",
            code,
            info.confidence(),
            info.is_reliable()
        );

        LanguageTag::parse(code).ok()
    }
}

/// Map whatlang's ISO 639-3 codes to the two-letter codes hosts report.
fn iso_639_1(lang: Lang) -> &'static str {
    match lang {
        Lang::Eng => "en",
        Lang::Fra => "fr",
        Lang::Spa => "es",
        Lang::Deu => "de",
        Lang::Ita => "it",
        Lang::Rus => "ru",
        Lang::Cmn => "zh",
        Lang::Jpn => "ja",
        Lang::Kor => "ko",
        Lang::Ara => "ar",
        Lang::Hin => "hi",
        Lang::Por => "pt",
        Lang::Nld => "nl",
        Lang::Tur => "tr",
        Lang::Pol => "pl",
        Lang::Swe => "sv",
        Lang::Vie => "vi",
        Lang::Ukr => "uk",
        Lang::Tha => "th",
        // Three-letter code when there is no two-letter mapping
        other => other.code(),
    }
}
