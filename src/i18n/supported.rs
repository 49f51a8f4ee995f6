//! The ordered set of languages a translation host reports as usable.

use crate::i18n::LanguageTag;

/// Languages reported by the host, in the order the host reported them.
///
/// Immutable once fetched. Lookups return the first hit in host order, which
/// keeps the host's own region/script choice for a family.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupportedLanguages {
    languages: Vec<LanguageTag>,
}

impl SupportedLanguages {
    pub fn new(languages: Vec<LanguageTag>) -> Self {
        Self { languages }
    }

    /// First entry equal to `tag` in every subtag.
    pub fn exact_match(&self, tag: &LanguageTag) -> Option<&LanguageTag> {
        self.languages.iter().find(|supported| *supported == tag)
    }

    /// First entry in the same family as `tag`.
    pub fn family_match(&self, tag: &LanguageTag) -> Option<&LanguageTag> {
        self.languages
            .iter()
            .find(|supported| supported.same_family(tag))
    }

    pub fn iter(&self) -> impl Iterator<Item = &LanguageTag> {
        self.languages.iter()
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

impl FromIterator<LanguageTag> for SupportedLanguages {
    fn from_iter<I: IntoIterator<Item = LanguageTag>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn supported(tags: &[&str]) -> SupportedLanguages {
        tags.iter()
            .map(|t| LanguageTag::parse(t).expect("valid tag"))
            .collect()
    }

    fn tag(s: &str) -> LanguageTag {
        LanguageTag::parse(s).expect("valid tag")
    }

    #[test]
    fn test_exact_match_requires_region() {
        let set = supported(&["en-US", "fr-FR"]);
        assert_eq!(set.exact_match(&tag("en-US")), Some(&tag("en-US")));
        assert_eq!(set.exact_match(&tag("en-GB")), None);
    }

    #[test]
    fn test_family_match_returns_first_in_host_order() {
        let set = supported(&["en-US", "en-GB", "fr-FR"]);
        assert_eq!(set.family_match(&tag("en-GB")), Some(&tag("en-US")));
        assert_eq!(set.family_match(&tag("fr")), Some(&tag("fr-FR")));
    }

    #[test]
    fn test_family_match_missing() {
        let set = supported(&["en-US"]);
        assert_eq!(set.family_match(&tag("ja")), None);
    }

    #[test]
    fn test_empty_set() {
        let set = SupportedLanguages::default();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.family_match(&tag("en")), None);
    }
}
