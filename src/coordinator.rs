//! Single-session translation coordinator.
//!
//! Holds at most one session, keyed by the pair it was created for. Asking
//! for the same pair again hands back the same session; any other pair gets
//! a freshly provisioned one and the old session is dropped.

use crate::error::{TranslationError, TranslationResult};
use crate::i18n::TranslationMetrics;
use crate::session::{LanguagePair, SessionHandle, SessionProvisioner, TranslationSession};
use std::sync::Arc;
use tracing::{debug, info};

pub struct TranslationCoordinator {
    provisioner: Arc<dyn SessionProvisioner>,
    current: Option<(LanguagePair, SessionHandle)>,
}

impl TranslationCoordinator {
    pub fn new(provisioner: Arc<dyn SessionProvisioner>) -> Self {
        Self {
            provisioner,
            current: None,
        }
    }

    /// Return the session for `desired`, provisioning one if needed.
    ///
    /// The cached session is replaced only once the provisioner succeeds, so
    /// a failed request leaves the previous session current.
    pub async fn ensure_session(&mut self, desired: &LanguagePair) -> TranslationResult<SessionHandle> {
        if let Some((pair, handle)) = &self.current {
            if pair == desired {
                debug!("Reusing translation session for {}", pair);
                TranslationMetrics::global().record_session_reused();
                return Ok(Arc::clone(handle));
            }
        }

        info!("Provisioning translation session for {}", desired);
        let handle = self
            .provisioner
            .provision(desired)
            .await
            .map_err(|e| TranslationError::from_host(e, TranslationError::Provisioning))?;

        TranslationMetrics::global().record_session_provisioned();
        self.current = Some((desired.clone(), Arc::clone(&handle)));
        Ok(handle)
    }

    /// The pair of the current session, if any.
    pub fn current_pair(&self) -> Option<&LanguagePair> {
        self.current.as_ref().map(|(pair, _)| pair)
    }

    /// Ask the session to fetch what it needs before translating.
    ///
    /// Requires a known source language.
    pub async fn prepare(session: &dyn TranslationSession) -> TranslationResult<()> {
        if session.pair().source.is_none() {
            return Err(TranslationError::UnableToIdentifyLanguage);
        }

        session
            .prepare_translation()
            .await
            .map_err(|e| TranslationError::from_host(e, TranslationError::Translation))
    }

    pub async fn translate_one(
        session: &dyn TranslationSession,
        text: &str,
    ) -> TranslationResult<String> {
        let translated = session
            .translate(text)
            .await
            .map_err(|e| TranslationError::from_host(e, TranslationError::Translation))?;

        TranslationMetrics::global().record_translated(1);
        Ok(translated)
    }

    /// Translate `texts` in one request; any failure fails the whole batch.
    pub async fn translate_batch(
        session: &dyn TranslationSession,
        texts: &[String],
    ) -> TranslationResult<Vec<String>> {
        let translated = session
            .translate_batch(texts)
            .await
            .map_err(|e| TranslationError::from_host(e, TranslationError::Translation))?;

        if translated.len() != texts.len() {
            return Err(TranslationError::InternalError(format!(
                "Batch returned {} translations for {} texts",
                translated.len(),
                texts.len()
            )));
        }

        TranslationMetrics::global().record_translated(translated.len());
        Ok(translated)
    }
}
