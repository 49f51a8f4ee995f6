//! Language tags: a language subtag optionally qualified by script and region.
//!
//! Two tags are equal only when every subtag matches. Code that only cares
//! about the language itself compares *families* via [`LanguageTag::same_family`].

use anyhow::{bail, Result};
use std::fmt;
use std::str::FromStr;

/// A parsed, canonically cased language tag (e.g. "en", "en-US", "zh-Hant-TW").
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LanguageTag {
    /// ISO 639 language subtag, lowercase (e.g., "en")
    language: String,

    /// ISO 15924 script subtag, title case (e.g., "Hant")
    script: Option<String>,

    /// ISO 3166 region subtag, uppercase (e.g., "US") or UN M.49 digits
    region: Option<String>,
}

impl LanguageTag {
    /// Parse a tag from a BCP 47 identifier or a POSIX locale name.
    ///
    /// Accepts `-` and `_` as separators and ignores POSIX suffixes, so
    /// `"en_US.UTF-8"` parses as `en-US`.
    ///
    /// # Example
    /// ```
    /// use translation_demo::i18n::LanguageTag;
    ///
    /// let tag = LanguageTag::parse("pt_br").unwrap();
    /// assert_eq!(tag.to_string(), "pt-BR");
    /// assert_eq!(tag.family(), "pt");
    /// ```
    pub fn parse(input: &str) -> Result<LanguageTag> {
        let trimmed = input.trim();
        let identifier = trimmed
            .split(['.', '@'])
            .next()
            .unwrap_or_default();

        if identifier.is_empty() {
            bail!("Empty language tag");
        }
        if identifier.eq_ignore_ascii_case("C") || identifier.eq_ignore_ascii_case("POSIX") {
            bail!("'{}' does not name a language", trimmed);
        }

        let mut subtags = identifier.split(['-', '_']);
        let language = match subtags.next() {
            Some(l) if (2..=3).contains(&l.len()) && l.chars().all(|c| c.is_ascii_alphabetic()) => {
                l.to_ascii_lowercase()
            }
            _ => bail!("Invalid language subtag in '{}'", trimmed),
        };

        let mut script = None;
        let mut region = None;
        for subtag in subtags {
            let alphabetic = subtag.chars().all(|c| c.is_ascii_alphabetic());
            let numeric = subtag.chars().all(|c| c.is_ascii_digit());

            if subtag.len() == 4 && alphabetic && script.is_none() && region.is_none() {
                let mut chars = subtag.chars();
                let first = chars.next().map(|c| c.to_ascii_uppercase());
                script = first.map(|f| {
                    std::iter::once(f)
                        .chain(chars.map(|c| c.to_ascii_lowercase()))
                        .collect()
                });
            } else if ((subtag.len() == 2 && alphabetic) || (subtag.len() == 3 && numeric))
                && region.is_none()
            {
                region = Some(subtag.to_ascii_uppercase());
            } else {
                bail!("Unexpected subtag '{}' in '{}'", subtag, trimmed);
            }
        }

        Ok(LanguageTag {
            language,
            script,
            region,
        })
    }

    /// The language family: the tag without script or region (e.g., "en").
    pub fn family(&self) -> &str {
        &self.language
    }

    pub fn script(&self) -> Option<&str> {
        self.script.as_deref()
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Whether both tags belong to the same language family.
    pub fn same_family(&self, other: &LanguageTag) -> bool {
        self.language == other.language
    }
}

impl FromStr for LanguageTag {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        LanguageTag::parse(s)
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.language)?;
        if let Some(script) = &self.script {
            write!(f, "-{}", script)?;
        }
        if let Some(region) = &self.region {
            write!(f, "-{}", region)?;
        }
        Ok(())
    }
}
