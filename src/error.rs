//! Typed failures surfaced by language resolution and translation sessions.

use thiserror::Error;

/// Result alias used by the coordination layer.
pub type TranslationResult<T> = std::result::Result<T, TranslationError>;

/// Errors a translation attempt can end with.
///
/// Host adapters report their own failures through `anyhow`; the coordinator
/// folds those into [`TranslationError::Provisioning`] or
/// [`TranslationError::Translation`] unless they already carry one of the
/// typed variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslationError {
    /// The availability oracle reported the pairing as unsupported
    #[error("Unsupported language pairing")]
    UnsupportedLanguagePairing,

    /// Preparation was requested without a known source language
    #[error("Unable to identify the source language")]
    UnableToIdentifyLanguage,

    /// The host returned something the coordinator cannot interpret
    #[error("Internal error: {0}")]
    InternalError(String),

    /// The host failed to hand back a session for the requested pair
    #[error("Failed to provision translation session: {0}")]
    Provisioning(String),

    /// The session failed while translating
    #[error("Translation failed: {0}")]
    Translation(String),
}

impl TranslationError {
    /// Message suitable for showing next to the original texts.
    pub fn user_message(&self) -> String {
        match self {
            Self::UnsupportedLanguagePairing => {
                "Translation between these languages isn't supported.".to_string()
            }
            Self::UnableToIdentifyLanguage => {
                "The source language couldn't be identified. Choose it explicitly and try again."
                    .to_string()
            }
            Self::InternalError(_) => "Something went wrong. Please try again.".to_string(),
            Self::Provisioning(_) => {
                "The translation service isn't available right now.".to_string()
            }
            Self::Translation(_) => "The text couldn't be translated.".to_string(),
        }
    }

    /// Fold a host error into a typed one, keeping the full context chain.
    pub(crate) fn from_host(error: anyhow::Error, wrap: fn(String) -> Self) -> Self {
        match error.downcast::<TranslationError>() {
            Ok(typed) => typed,
            Err(other) => wrap(format!("{:#}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            TranslationError::UnsupportedLanguagePairing.to_string(),
            "Unsupported language pairing"
        );
        assert_eq!(
            TranslationError::InternalError("bad status".to_string()).to_string(),
            "Internal error: bad status"
        );
    }

    #[test]
    fn test_user_messages_are_not_empty() {
        let errors = [
            TranslationError::UnsupportedLanguagePairing,
            TranslationError::UnableToIdentifyLanguage,
            TranslationError::InternalError("x".to_string()),
            TranslationError::Provisioning("x".to_string()),
            TranslationError::Translation("x".to_string()),
        ];
        for error in errors {
            assert!(!error.user_message().is_empty());
        }
    }

    #[test]
    fn test_from_host_passes_typed_error_through() {
        let error = anyhow::Error::new(TranslationError::UnableToIdentifyLanguage);
        assert_eq!(
            TranslationError::from_host(error, TranslationError::Translation),
            TranslationError::UnableToIdentifyLanguage
        );
    }

    #[test]
    fn test_from_host_wraps_untyped_error_with_context() {
        let error: anyhow::Result<()> = Err(anyhow::anyhow!("connection reset"));
        let error = error.context("Failed to send request").unwrap_err();

        match TranslationError::from_host(error, TranslationError::Translation) {
            TranslationError::Translation(message) => {
                assert!(message.contains("Failed to send request"));
                assert!(message.contains("connection reset"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
