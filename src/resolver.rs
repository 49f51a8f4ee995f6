//! Default source/target selection before the user picks anything.

use crate::detector::DominantLanguageDetector;
use crate::i18n::{LanguageTag, SupportedLanguages};
use crate::session::LanguagePair;
use std::sync::Arc;
use tracing::debug;

/// Best-effort defaults. Unset sides mean "let the user choose".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedLanguages {
    pub source: Option<LanguageTag>,
    pub target: Option<LanguageTag>,
}

impl From<ResolvedLanguages> for LanguagePair {
    fn from(resolved: ResolvedLanguages) -> Self {
        LanguagePair::new(resolved.source, resolved.target)
    }
}

pub struct LanguageResolver {
    detector: Arc<dyn DominantLanguageDetector>,
}

impl LanguageResolver {
    pub fn new(detector: Arc<dyn DominantLanguageDetector>) -> Self {
        Self { detector }
    }

    /// Guess a source from `sample_text` and a target from the user's
    /// ordered `preferred` languages, both drawn from `supported`.
    ///
    /// Never fails: anything that cannot be resolved is left unset. Without a
    /// resolved source the target is left unset as well.
    pub fn resolve_defaults(
        &self,
        sample_text: &str,
        supported: &SupportedLanguages,
        preferred: &[LanguageTag],
    ) -> ResolvedLanguages {
        let Some(detected) = self.detector.detect(sample_text) else {
            debug!("No dominant language in sample text");
            return ResolvedLanguages::default();
        };

        // Keep the host's region/script rather than the bare detector code
        let Some(source) = supported.family_match(&detected).cloned() else {
            debug!("Detected language {} is not supported", detected);
            return ResolvedLanguages::default();
        };

        let target = preferred
            .iter()
            .find(|candidate| !candidate.same_family(&source))
            .and_then(|candidate| match_preferred(candidate, supported));

        debug!(
            "Resolved default languages: source={}, target={:?}",
            source,
            target.as_ref().map(LanguageTag::to_string)
        );

        ResolvedLanguages {
            source: Some(source),
            target,
        }
    }
}

/// Match a preferred language against the supported set.
///
/// The family sweep always runs after the exact sweep and replaces its hit,
/// so the first supported entry of the family wins even when an exact entry
/// exists further down the list.
fn match_preferred(preferred: &LanguageTag, supported: &SupportedLanguages) -> Option<LanguageTag> {
    let mut matched = supported.exact_match(preferred).cloned();
    if let Some(family_hit) = supported.family_match(preferred) {
        matched = Some(family_hit.clone());
    }
    matched
}
