//! Headless view-model for the custom translation screen.
//!
//! Mirrors what the screen shows: the original texts, the language
//! configuration picked (or resolved) for them, whether they are translated
//! one by one or as a batch, and either the translations or the error from
//! the last attempt.

use crate::availability::{check_pairing, LanguageAvailability};
use crate::coordinator::TranslationCoordinator;
use crate::error::{TranslationError, TranslationResult};
use crate::i18n::{LanguageTag, TranslationMetrics};
use crate::resolver::LanguageResolver;
use crate::session::{LanguagePair, SessionProvisioner};
use anyhow::bail;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// How the original texts are sent to the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TranslationMode {
    /// Each text is translated with its own request
    Single,
    /// All texts go out as one batch
    #[default]
    Batch,
}

impl FromStr for TranslationMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" => Ok(Self::Single),
            "batch" => Ok(Self::Batch),
            other => bail!("Unknown translation mode '{}' (expected 'single' or 'batch')", other),
        }
    }
}

impl fmt::Display for TranslationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single => f.write_str("single"),
            Self::Batch => f.write_str("batch"),
        }
    }
}

pub struct TranslationDemo {
    texts: Vec<String>,
    preferred_languages: Vec<LanguageTag>,
    resolver: LanguageResolver,
    availability: Arc<dyn LanguageAvailability>,
    coordinator: TranslationCoordinator,
    configuration: LanguagePair,
    mode: TranslationMode,
    prepare_first: bool,
    translations: Vec<String>,
    current_error: Option<TranslationError>,
}

impl TranslationDemo {
    pub fn new(
        texts: Vec<String>,
        preferred_languages: Vec<LanguageTag>,
        resolver: LanguageResolver,
        availability: Arc<dyn LanguageAvailability>,
        provisioner: Arc<dyn SessionProvisioner>,
    ) -> Self {
        Self {
            texts,
            preferred_languages,
            resolver,
            availability,
            coordinator: TranslationCoordinator::new(provisioner),
            configuration: LanguagePair::auto(),
            mode: TranslationMode::default(),
            prepare_first: false,
            translations: Vec::new(),
            current_error: None,
        }
    }

    /// Resolve the default configuration from the texts and the user's
    /// preferred languages. Failures leave the configuration on `auto`.
    pub async fn load_default_languages(&mut self) {
        let supported = match self.availability.supported_languages().await {
            Ok(supported) => supported,
            Err(e) => {
                warn!("Could not fetch supported languages: {:#}", e);
                return;
            }
        };

        let sample = self.texts.join("\n");
        let resolved = self
            .resolver
            .resolve_defaults(&sample, &supported, &self.preferred_languages);

        self.configuration = resolved.into();
        info!("Default language configuration: {}", self.configuration);
    }

    /// Explicit choice from the language picker.
    pub fn set_configuration(&mut self, configuration: LanguagePair) {
        debug!("Language configuration set to {}", configuration);
        self.configuration = configuration;
    }

    pub fn set_mode(&mut self, mode: TranslationMode) {
        self.mode = mode;
    }

    /// Ask the session to prepare (download assets) before translating.
    pub fn set_prepare_first(&mut self, prepare_first: bool) {
        self.prepare_first = prepare_first;
    }

    pub fn configuration(&self) -> &LanguagePair {
        &self.configuration
    }

    pub fn mode(&self) -> TranslationMode {
        self.mode
    }

    pub fn texts(&self) -> &[String] {
        &self.texts
    }

    /// Translations from the last successful attempt, in text order.
    pub fn translations(&self) -> &[String] {
        &self.translations
    }

    /// Pair of the session kept from the last attempt, if one was provisioned.
    pub fn session_pair(&self) -> Option<&LanguagePair> {
        self.coordinator.current_pair()
    }

    pub fn current_error(&self) -> Option<&TranslationError> {
        self.current_error.as_ref()
    }

    /// Translate the texts with the current configuration and mode.
    ///
    /// The outcome is stored on the view-model: translations on success, the
    /// error otherwise. Nothing is retried.
    pub async fn translate(&mut self) {
        match self.run_translation().await {
            Ok(translations) => {
                self.translations = translations;
                self.current_error = None;
            }
            Err(e) => {
                warn!("Translation for {} failed: {}", self.configuration, e);
                TranslationMetrics::global().record_failure();
                self.translations.clear();
                self.current_error = Some(e);
            }
        }
    }

    async fn run_translation(&mut self) -> TranslationResult<Vec<String>> {
        let pair = self.configuration.clone();
        let sample = self.texts.join("\n");

        check_pairing(self.availability.as_ref(), &pair, &sample).await?;

        let session = self.coordinator.ensure_session(&pair).await?;
        // Preparing needs a known source; an auto source translates as is
        if self.prepare_first && session.pair().source.is_some() {
            TranslationCoordinator::prepare(session.as_ref()).await?;
        }

        match self.mode {
            TranslationMode::Single => {
                let mut translations = Vec::with_capacity(self.texts.len());
                for text in &self.texts {
                    translations.push(TranslationCoordinator::translate_one(session.as_ref(), text).await?);
                }
                Ok(translations)
            }
            TranslationMode::Batch => {
                TranslationCoordinator::translate_batch(session.as_ref(), &self.texts).await
            }
        }
    }
}
