//! Language registry: the catalogue of languages the demo host can translate.
//!
//! It uses a singleton pattern with `OnceLock` to ensure thread-safe
//! initialization and access. The registry backs the built-in availability
//! oracle and supplies display names for the command-line output.

use crate::i18n::{LanguageTag, SupportedLanguages};
use std::sync::OnceLock;
use tracing::warn;

/// Configuration for a language the host can translate.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// Tag as the host reports it (e.g., "en-US", "zh-Hant-TW")
    pub tag: LanguageTag,

    /// English name of the language (e.g., "English (US)")
    pub name: &'static str,

    /// Native name of the language (e.g., "Español")
    pub native_name: &'static str,

    /// Whether the language assets are already on the device
    pub installed: bool,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its exact tag.
    pub fn get_by_tag(&self, tag: &LanguageTag) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.tag == *tag)
    }

    /// Get the first language configuration in the same family as `tag`.
    pub fn get_by_family(&self, tag: &LanguageTag) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.tag.same_family(tag))
    }

    /// Get all languages, in host order.
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// The registry as the ordered set reported to the resolver.
    pub fn supported_languages(&self) -> SupportedLanguages {
        self.languages.iter().map(|lang| lang.tag.clone()).collect()
    }

    /// Whether any language of this family is already installed.
    pub fn is_installed(&self, tag: &LanguageTag) -> bool {
        self.languages
            .iter()
            .any(|lang| lang.installed && lang.tag.same_family(tag))
    }

    /// Display name for a tag, with the native name when it differs
    /// (e.g., "Spanish (Español)"). Unknown tags fall back to the tag itself.
    pub fn display_name(&self, tag: &LanguageTag) -> String {
        match self.get_by_tag(tag).or_else(|| self.get_by_family(tag)) {
            Some(lang) if lang.native_name != lang.name => {
                format!("{} ({})", lang.name, lang.native_name)
            }
            Some(lang) => lang.name.to_string(),
            None => tag.to_string(),
        }
    }
}

/// Code, English name, native name and installed flag of each language.
///
/// Mirrors the set of languages typically offered by on-device translation.
/// English (US) and Spanish ship installed; the rest are downloadable.
const DEFAULT_LANGUAGES: [(&str, &str, &str, bool); 20] = [
    ("ar-AE", "Arabic", "العربية", false),
    ("zh-Hans-CN", "Chinese (Simplified)", "简体中文", false),
    ("zh-Hant-TW", "Chinese (Traditional)", "繁體中文", false),
    ("nl-NL", "Dutch", "Nederlands", false),
    ("en-GB", "English (UK)", "English (UK)", false),
    ("en-US", "English (US)", "English (US)", true),
    ("fr-FR", "French", "Français", false),
    ("de-DE", "German", "Deutsch", false),
    ("hi-IN", "Hindi", "हिन्दी", false),
    ("it-IT", "Italian", "Italiano", false),
    ("ja-JP", "Japanese", "日本語", false),
    ("ko-KR", "Korean", "한국어", false),
    ("pl-PL", "Polish", "Polski", false),
    ("pt-BR", "Portuguese (Brazil)", "Português (Brasil)", false),
    ("ru-RU", "Russian", "Русский", false),
    ("es-ES", "Spanish", "Español", true),
    ("th-TH", "Thai", "ไทย", false),
    ("tr-TR", "Turkish", "Türkçe", false),
    ("uk-UA", "Ukrainian", "Українська", false),
    ("vi-VN", "Vietnamese", "Tiếng Việt", false),
];

/// Default language configurations, parsed once when the registry is built.
fn default_languages() -> Vec<LanguageConfig> {
    DEFAULT_LANGUAGES
        .iter()
        .filter_map(|&(code, name, native_name, installed)| match LanguageTag::parse(code) {
            Ok(tag) => Some(LanguageConfig {
                tag,
                name,
                native_name,
                installed,
            }),
            Err(e) => {
                warn!("Skipping registry entry {}: {}", code, e);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(s: &str) -> LanguageTag {
        LanguageTag::parse(s).expect("valid tag")
    }

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LanguageRegistry::get();
        let registry2 = LanguageRegistry::get();

        // Should return the same instance (same memory address)
        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_every_default_entry_is_registered() {
        let registry = LanguageRegistry::get();
        assert_eq!(registry.list_all().len(), DEFAULT_LANGUAGES.len());

        for (code, _, _, _) in DEFAULT_LANGUAGES {
            assert!(registry.get_by_tag(&tag(code)).is_some(), "missing {}", code);
        }
    }

    #[test]
    fn test_get_by_tag_exact() {
        let registry = LanguageRegistry::get();
        let config = registry.get_by_tag(&tag("en-GB")).expect("Should exist");
        assert_eq!(config.name, "English (UK)");
        assert!(registry.get_by_tag(&tag("en-AU")).is_none());
    }

    #[test]
    fn test_get_by_family_uses_host_order() {
        let registry = LanguageRegistry::get();
        let config = registry.get_by_family(&tag("en")).expect("Should exist");
        assert_eq!(config.tag, tag("en-GB"));
    }

    #[test]
    fn test_supported_languages_preserves_order() {
        let registry = LanguageRegistry::get();
        let supported = registry.supported_languages();
        assert_eq!(supported.len(), registry.list_all().len());
        assert_eq!(supported.iter().next(), Some(&tag("ar-AE")));
    }

    #[test]
    fn test_is_installed() {
        let registry = LanguageRegistry::get();
        assert!(registry.is_installed(&tag("es")));
        assert!(registry.is_installed(&tag("en-GB")));
        assert!(!registry.is_installed(&tag("fr-FR")));
        assert!(!registry.is_installed(&tag("sw")));
    }

    #[test]
    fn test_display_name() {
        let registry = LanguageRegistry::get();
        assert_eq!(registry.display_name(&tag("es-ES")), "Spanish (Español)");
        assert_eq!(registry.display_name(&tag("es-MX")), "Spanish (Español)");
        assert_eq!(registry.display_name(&tag("en-GB")), "English (UK)");
        assert_eq!(registry.display_name(&tag("sw-KE")), "sw-KE");
    }
}
