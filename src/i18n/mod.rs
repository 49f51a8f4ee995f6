//! Language types and translation support infrastructure.
//!
//! # Architecture
//!
//! - `language`: `LanguageTag`, with tag-exact and family equality
//! - `supported`: the ordered set of languages a host reports as usable
//! - `registry`: catalogue of languages the demo host can translate
//! - `validator`: translation quality validation
//! - `metrics`: translation observability and metrics
//!
//! # Example
//!
//! ```rust
//! use translation_demo::i18n::{LanguageRegistry, LanguageTag};
//!
//! let spanish = LanguageTag::parse("es")?;
//! let supported = LanguageRegistry::get().supported_languages();
//! assert_eq!(supported.family_match(&spanish).map(|t| t.to_string()), Some("es-ES".to_string()));
//! # Ok::<(), anyhow::Error>(())
//! ```

mod language;
mod metrics;
mod registry;
mod supported;
mod validator;

pub use language::LanguageTag;
pub use metrics::{MetricsReport, TranslationMetrics};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use supported::SupportedLanguages;
pub use validator::{TranslationValidator, ValidationReport};
