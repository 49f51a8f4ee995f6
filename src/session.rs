//! Translation sessions and the host side that provisions them.
//!
//! A session is bound to exactly one [`LanguagePair`] when the host creates
//! it and is never rebound; a different pair needs a different session.

use crate::i18n::LanguageTag;
use anyhow::Result;
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

/// The source and target of a translation session. `None` means "auto".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct LanguagePair {
    pub source: Option<LanguageTag>,
    pub target: Option<LanguageTag>,
}

impl LanguagePair {
    pub fn new(source: Option<LanguageTag>, target: Option<LanguageTag>) -> Self {
        Self { source, target }
    }

    /// Both sides left for the host to decide.
    pub fn auto() -> Self {
        Self::default()
    }
}

impl fmt::Display for LanguagePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = |tag: &Option<LanguageTag>| {
            tag.as_ref()
                .map(LanguageTag::to_string)
                .unwrap_or_else(|| "auto".to_string())
        };
        write!(f, "{} → {}", side(&self.source), side(&self.target))
    }
}

/// A ready-to-use translation channel.
#[async_trait]
pub trait TranslationSession: Send + Sync {
    /// The pair this session was created for.
    fn pair(&self) -> &LanguagePair;

    /// Fetch anything the session needs before translating (e.g. language
    /// assets). Hosts with nothing to prepare keep the default.
    async fn prepare_translation(&self) -> Result<()> {
        Ok(())
    }

    async fn translate(&self, text: &str) -> Result<String>;

    /// Translate all `texts` in one request. The result must line up
    /// position-for-position with the input.
    async fn translate_batch(&self, texts: &[String]) -> Result<Vec<String>>;
}

/// Shared handle to a session owned by the coordinator.
pub type SessionHandle = Arc<dyn TranslationSession>;

/// The host environment that creates sessions on request.
#[async_trait]
pub trait SessionProvisioner: Send + Sync {
    /// Create a fresh session bound to `pair`.
    async fn provision(&self, pair: &LanguagePair) -> Result<SessionHandle>;
}
