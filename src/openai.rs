//! Translation sessions backed by an OpenAI-compatible chat-completions API.

use crate::config::Config;
use crate::error::TranslationError;
use crate::i18n::{LanguageRegistry, LanguageTag, TranslationValidator};
use crate::session::{LanguagePair, SessionHandle, SessionProvisioner, TranslationSession};
use anyhow::{Context, Result};
use async_trait::async_trait;
use futures::future::try_join_all;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

/// OpenAI Chat Completion request for translation
#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    temperature: f32,
}

#[derive(Debug, Serialize, Deserialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Message,
}

/// Connection settings shared by every session the provisioner creates.
#[derive(Debug, Clone)]
pub struct OpenAiSettings {
    pub api_url: String,
    pub api_key: String,
    pub model: String,
}

impl From<&Config> for OpenAiSettings {
    fn from(config: &Config) -> Self {
        Self {
            api_url: config.openai_api_url.clone(),
            api_key: config.openai_api_key.clone(),
            model: config.openai_model.clone(),
        }
    }
}

/// Creates [`OpenAiSession`]s sharing one HTTP client.
pub struct OpenAiProvisioner {
    client: reqwest::Client,
    settings: Arc<OpenAiSettings>,
    /// Used when a pair leaves its target on "auto"
    fallback_target: LanguageTag,
}

impl OpenAiProvisioner {
    pub fn new(client: reqwest::Client, settings: OpenAiSettings, fallback_target: LanguageTag) -> Self {
        Self {
            client,
            settings: Arc::new(settings),
            fallback_target,
        }
    }
}

#[async_trait]
impl SessionProvisioner for OpenAiProvisioner {
    async fn provision(&self, pair: &LanguagePair) -> Result<SessionHandle> {
        let target = pair
            .target
            .clone()
            .unwrap_or_else(|| self.fallback_target.clone());

        if pair.source.as_ref().is_some_and(|s| s.same_family(&target)) {
            return Err(TranslationError::UnsupportedLanguagePairing.into());
        }

        debug!("Created chat-completions session for {} (target {})", pair, target);
        Ok(Arc::new(OpenAiSession {
            client: self.client.clone(),
            settings: Arc::clone(&self.settings),
            pair: pair.clone(),
            target,
        }))
    }
}

/// A session bound to one pair; every text is one chat-completions call.
pub struct OpenAiSession {
    client: reqwest::Client,
    settings: Arc<OpenAiSettings>,
    pair: LanguagePair,
    target: LanguageTag,
}

impl OpenAiSession {
    async fn complete(&self, text: &str) -> Result<String> {
        let registry = LanguageRegistry::get();
        let source_name = self.pair.source.as_ref().map(|s| registry.display_name(s));
        let target_name = registry.display_name(&self.target);

        let request = ChatRequest {
            model: self.settings.model.clone(),
            messages: vec![
                Message {
                    role: "system".to_string(),
                    content: build_system_prompt(source_name.as_deref(), &target_name),
                },
                Message {
                    role: "user".to_string(),
                    content: text.to_string(),
                },
            ],
            temperature: 0.3,
        };

        let response = self
            .client
            .post(&self.settings.api_url)
            .header("Authorization", format!("Bearer {}", self.settings.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .context("Failed to send translation request")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
            anyhow::bail!("Translation API error ({}): {}", status, body);
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .context("Failed to parse translation response")?;

        let translated = chat_response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content.trim().to_string())
            .context("Translation response contained no choices")?;

        let validation = TranslationValidator::validate(text, &translated);
        if validation.has_errors() {
            anyhow::bail!("Invalid translation: {}", validation.errors.join("; "));
        }
        if validation.has_warnings() {
            warn!(
                "Translation validation warnings for {}: {:?}",
                self.pair, validation.warnings
            );
        }

        Ok(translated)
    }
}

#[async_trait]
impl TranslationSession for OpenAiSession {
    fn pair(&self) -> &LanguagePair {
        &self.pair
    }

    async fn translate(&self, text: &str) -> Result<String> {
        self.complete(text).await
    }

    async fn translate_batch(&self, texts: &[String]) -> Result<Vec<String>> {
        // try_join_all keeps input order and stops at the first failure
        try_join_all(texts.iter().map(|text| self.complete(text))).await
    }
}

/// Build the system prompt for a session
fn build_system_prompt(source: Option<&str>, target: &str) -> String {
    let from = match source {
        Some(source) => format!("from {}", source),
        None => "from whatever language it is written in".to_string(),
    };
    format!(
        "You are a translation engine. Translate the user's text {} to {}. \
         Reply with the translation only, without quotes or commentary. \
         Keep URLs, numbers and proper names unchanged.",
        from, target
    )
}
