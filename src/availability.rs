//! Language availability: whether the host can translate a pairing.

use crate::detector::DominantLanguageDetector;
use crate::error::{TranslationError, TranslationResult};
use crate::i18n::{LanguageRegistry, LanguageTag, SupportedLanguages};
use crate::session::LanguagePair;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Availability of a pairing as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageStatus {
    /// Ready to translate without downloading anything
    Installed,
    /// Translatable once the language assets are downloaded
    Supported,
    /// The host cannot translate this pairing
    Unsupported,
    /// A status this crate does not recognise, with the host's raw value
    Unknown(String),
}

impl LanguageStatus {
    /// Map the status onto the usable / failure split.
    pub fn ensure_usable(&self) -> TranslationResult<()> {
        match self {
            Self::Installed | Self::Supported => Ok(()),
            Self::Unsupported => Err(TranslationError::UnsupportedLanguagePairing),
            Self::Unknown(raw) => Err(TranslationError::InternalError(format!(
                "Unrecognized language status '{}'",
                raw
            ))),
        }
    }
}

/// Host oracle answering availability questions.
#[async_trait]
pub trait LanguageAvailability: Send + Sync {
    async fn status(
        &self,
        source: &LanguageTag,
        target: Option<&LanguageTag>,
    ) -> Result<LanguageStatus>;

    /// Like [`status`](Self::status), with the source inferred from sample text.
    async fn status_for_text(
        &self,
        sample: &str,
        target: Option<&LanguageTag>,
    ) -> Result<LanguageStatus>;

    async fn supported_languages(&self) -> Result<SupportedLanguages>;
}

/// Check that `pair` is usable before a session is requested for it.
///
/// With an `auto` source the oracle is asked about `sample` instead.
pub async fn check_pairing(
    oracle: &dyn LanguageAvailability,
    pair: &LanguagePair,
    sample: &str,
) -> TranslationResult<LanguageStatus> {
    let status = match &pair.source {
        Some(source) => oracle.status(source, pair.target.as_ref()).await,
        None => oracle.status_for_text(sample, pair.target.as_ref()).await,
    }
    .map_err(|e| TranslationError::from_host(e, TranslationError::InternalError))?;

    debug!("Availability for {}: {:?}", pair, status);
    status.ensure_usable()?;
    Ok(status)
}

/// Availability oracle backed by the static [`LanguageRegistry`].
pub struct RegistryAvailability {
    registry: &'static LanguageRegistry,
    detector: Arc<dyn DominantLanguageDetector>,
}

impl RegistryAvailability {
    pub fn new(detector: Arc<dyn DominantLanguageDetector>) -> Self {
        Self {
            registry: LanguageRegistry::get(),
            detector,
        }
    }

    fn status_of(&self, source: &LanguageTag, target: Option<&LanguageTag>) -> LanguageStatus {
        if self.registry.get_by_family(source).is_none() {
            return LanguageStatus::Unsupported;
        }

        let Some(target) = target else {
            return if self.registry.is_installed(source) {
                LanguageStatus::Installed
            } else {
                LanguageStatus::Supported
            };
        };

        if self.registry.get_by_family(target).is_none() || source.same_family(target) {
            return LanguageStatus::Unsupported;
        }

        if self.registry.is_installed(source) && self.registry.is_installed(target) {
            LanguageStatus::Installed
        } else {
            LanguageStatus::Supported
        }
    }
}

#[async_trait]
impl LanguageAvailability for RegistryAvailability {
    async fn status(
        &self,
        source: &LanguageTag,
        target: Option<&LanguageTag>,
    ) -> Result<LanguageStatus> {
        Ok(self.status_of(source, target))
    }

    async fn status_for_text(
        &self,
        sample: &str,
        target: Option<&LanguageTag>,
    ) -> Result<LanguageStatus> {
        let source = self
            .detector
            .detect(sample)
            .ok_or(TranslationError::UnableToIdentifyLanguage)?;
        Ok(self.status_of(&source, target))
    }

    async fn supported_languages(&self) -> Result<SupportedLanguages> {
        Ok(self.registry.supported_languages())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedDetector(Option<&'static str>);

    impl DominantLanguageDetector for FixedDetector {
        fn detect(&self, _text: &str) -> Option<LanguageTag> {
            self.0.and_then(|code| LanguageTag::parse(code).ok())
        }
    }

    struct RawStatusOracle(LanguageStatus);

    #[async_trait]
    impl LanguageAvailability for RawStatusOracle {
        async fn status(
            &self,
            _source: &LanguageTag,
            _target: Option<&LanguageTag>,
        ) -> Result<LanguageStatus> {
            Ok(self.0.clone())
        }

        async fn status_for_text(
            &self,
            _sample: &str,
            _target: Option<&LanguageTag>,
        ) -> Result<LanguageStatus> {
            Ok(self.0.clone())
        }

        async fn supported_languages(&self) -> Result<SupportedLanguages> {
            Ok(SupportedLanguages::default())
        }
    }

    fn tag(s: &str) -> LanguageTag {
        LanguageTag::parse(s).expect("valid tag")
    }

    fn oracle(detected: Option<&'static str>) -> RegistryAvailability {
        RegistryAvailability::new(Arc::new(FixedDetector(detected)))
    }

    // ==================== Status Mapping Tests ====================

    #[test]
    fn test_usable_statuses() {
        assert!(LanguageStatus::Installed.ensure_usable().is_ok());
        assert!(LanguageStatus::Supported.ensure_usable().is_ok());
    }

    #[test]
    fn test_unsupported_status_is_pairing_error() {
        assert_eq!(
            LanguageStatus::Unsupported.ensure_usable(),
            Err(TranslationError::UnsupportedLanguagePairing)
        );
    }

    #[test]
    fn test_unknown_status_is_internal_error() {
        let result = LanguageStatus::Unknown("pending".to_string()).ensure_usable();
        match result {
            Err(TranslationError::InternalError(message)) => assert!(message.contains("pending")),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    // ==================== Registry Oracle Tests ====================

    #[tokio::test]
    async fn test_registry_installed_pair() {
        let status = oracle(None)
            .status(&tag("es-ES"), Some(&tag("en-US")))
            .await
            .unwrap();
        assert_eq!(status, LanguageStatus::Installed);
    }

    #[tokio::test]
    async fn test_registry_downloadable_pair() {
        let status = oracle(None)
            .status(&tag("es-ES"), Some(&tag("ja-JP")))
            .await
            .unwrap();
        assert_eq!(status, LanguageStatus::Supported);
    }

    #[tokio::test]
    async fn test_registry_unknown_language_is_unsupported() {
        let status = oracle(None)
            .status(&tag("sw"), Some(&tag("en-US")))
            .await
            .unwrap();
        assert_eq!(status, LanguageStatus::Unsupported);
    }

    #[tokio::test]
    async fn test_registry_same_family_is_unsupported() {
        let status = oracle(None)
            .status(&tag("en-GB"), Some(&tag("en-US")))
            .await
            .unwrap();
        assert_eq!(status, LanguageStatus::Unsupported);
    }

    #[tokio::test]
    async fn test_registry_without_target() {
        let availability = oracle(None);
        assert_eq!(
            availability.status(&tag("es"), None).await.unwrap(),
            LanguageStatus::Installed
        );
        assert_eq!(
            availability.status(&tag("fr"), None).await.unwrap(),
            LanguageStatus::Supported
        );
    }

    #[tokio::test]
    async fn test_registry_status_for_text_uses_detector() {
        let status = oracle(Some("es"))
            .status_for_text("Hola", Some(&tag("en-US")))
            .await
            .unwrap();
        assert_eq!(status, LanguageStatus::Installed);
    }

    #[tokio::test]
    async fn test_registry_status_for_undetectable_text() {
        let error = oracle(None)
            .status_for_text("???", Some(&tag("en-US")))
            .await
            .unwrap_err();
        assert_eq!(
            error.downcast_ref::<TranslationError>(),
            Some(&TranslationError::UnableToIdentifyLanguage)
        );
    }

    // ==================== check_pairing Tests ====================

    #[tokio::test]
    async fn test_check_pairing_passes_usable_status() {
        let pair = LanguagePair::new(Some(tag("es-ES")), Some(tag("fr-FR")));
        let status = check_pairing(&oracle(None), &pair, "").await.unwrap();
        assert_eq!(status, LanguageStatus::Supported);
    }

    #[tokio::test]
    async fn test_check_pairing_rejects_unsupported_for_any_pair() {
        let unsupported = RawStatusOracle(LanguageStatus::Unsupported);
        for pair in [
            LanguagePair::new(Some(tag("es")), Some(tag("en"))),
            LanguagePair::new(Some(tag("ja")), None),
            LanguagePair::auto(),
        ] {
            assert_eq!(
                check_pairing(&unsupported, &pair, "sample").await,
                Err(TranslationError::UnsupportedLanguagePairing)
            );
        }
    }

    #[tokio::test]
    async fn test_check_pairing_auto_source_uses_sample_text() {
        let pair = LanguagePair::new(None, Some(tag("en-US")));
        let result = check_pairing(&oracle(None), &pair, "???").await;
        assert_eq!(result, Err(TranslationError::UnableToIdentifyLanguage));
    }

    #[tokio::test]
    async fn test_check_pairing_unknown_status() {
        let pair = LanguagePair::new(Some(tag("es")), Some(tag("en")));
        let oracle = RawStatusOracle(LanguageStatus::Unknown("x".into()));
        let result = check_pairing(&oracle, &pair, "").await;
        assert!(matches!(result, Err(TranslationError::InternalError(_))));
    }
}
