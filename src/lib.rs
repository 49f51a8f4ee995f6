//! Language resolution and single-session translation coordination.
//!
//! - [`resolver`] picks default source/target languages from sample text and
//!   the user's preferred languages.
//! - [`coordinator`] owns at most one translation session, keyed by its
//!   language pair, and issues single or batch translations through it.
//! - [`demo`] is the view-model the command-line front end renders.

pub mod availability;
pub mod config;
pub mod coordinator;
pub mod demo;
pub mod detector;
pub mod error;
pub mod i18n;
pub mod openai;
pub mod resolver;
pub mod session;

pub use error::{TranslationError, TranslationResult};
