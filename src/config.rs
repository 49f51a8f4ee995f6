use crate::demo::TranslationMode;
use crate::i18n::LanguageTag;
use anyhow::{Context, Result};

/// Preferred language when the system reports none
const DEFAULT_LANGUAGE: &str = "en-US";

/// Texts shown when `SAMPLE_TEXTS` is not set
const DEFAULT_SAMPLE_TEXTS: [&str; 3] = [
    "Hola, ¿cómo estás hoy?",
    "El tren sale a las ocho de la mañana desde la estación central.",
    "Me gustaría reservar una mesa para dos personas esta noche.",
];

#[derive(Debug, Clone)]
pub struct Config {
    // OpenAI-compatible translation backend
    pub openai_api_key: String,
    pub openai_model: String,
    pub openai_api_url: String,

    // Content
    pub sample_texts: Vec<String>,

    // Languages
    pub preferred_languages: Vec<LanguageTag>,
    pub source_language: Option<LanguageTag>,
    pub target_language: Option<LanguageTag>,

    // Behaviour
    pub translation_mode: TranslationMode,
    pub prepare_translation: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // OpenAI
            openai_api_key: std::env::var("OPENAI_API_KEY")
                .context("OPENAI_API_KEY not set")?,
            openai_model: std::env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            openai_api_url: std::env::var("OPENAI_API_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1/chat/completions".to_string()),

            // Content
            sample_texts: std::env::var("SAMPLE_TEXTS")
                .ok()
                .map(|v| parse_sample_texts(&v))
                .filter(|texts| !texts.is_empty())
                .unwrap_or_else(|| DEFAULT_SAMPLE_TEXTS.iter().map(|s| s.to_string()).collect()),

            // Languages
            preferred_languages: match std::env::var("PREFERRED_LANGUAGES") {
                Ok(v) => parse_language_list(&v).context("Invalid PREFERRED_LANGUAGES")?,
                Err(_) => system_preferred_languages()?,
            },
            source_language: optional_language("SOURCE_LANGUAGE")?,
            target_language: optional_language("TARGET_LANGUAGE")?,

            // Behaviour
            translation_mode: std::env::var("TRANSLATION_MODE")
                .ok()
                .map(|v| v.parse::<TranslationMode>())
                .transpose()
                .context("Invalid TRANSLATION_MODE")?
                .unwrap_or_default(),
            prepare_translation: std::env::var("PREPARE_TRANSLATION")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        })
    }
}

/// Split `|`-separated texts, dropping blank entries.
fn parse_sample_texts(value: &str) -> Vec<String> {
    value
        .split('|')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse a comma-separated list of tags, most preferred first.
fn parse_language_list(value: &str) -> Result<Vec<LanguageTag>> {
    value
        .split([',', ':'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(LanguageTag::parse)
        .collect()
}

/// Preferred languages from the operating system, most preferred first,
/// else `en-US`.
fn system_preferred_languages() -> Result<Vec<LanguageTag>> {
    // Entries such as "C" name no language and are skipped rather than fatal
    let tags: Vec<LanguageTag> = sys_locale::get_locales()
        .filter_map(|locale| LanguageTag::parse(&locale).ok())
        .collect();
    if !tags.is_empty() {
        return Ok(tags);
    }

    Ok(vec![LanguageTag::parse(DEFAULT_LANGUAGE)?])
}

/// `auto` or an empty value means "no explicit choice".
fn optional_language(var: &str) -> Result<Option<LanguageTag>> {
    match std::env::var(var) {
        Ok(value) if !value.trim().is_empty() && !value.trim().eq_ignore_ascii_case("auto") => {
            LanguageTag::parse(&value)
                .map(Some)
                .with_context(|| format!("Invalid {}", var))
        }
        _ => Ok(None),
    }
}
