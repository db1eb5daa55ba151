//! Domain error types for result construction and rule evaluation.
//!
//! Uses `thiserror` for typed variants that callers can inspect. Translator
//! failures live with the translator port and are never wrapped here.

use thiserror::Error;

pub use super::ports::translator::TranslatorError;

/// Errors raised when a result cannot be built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResultError {
    /// An invalid result was requested without any message template.
    #[error("an invalid result requires at least one message template")]
    MissingMessageTemplates,

    /// A rule could not evaluate its input at all.
    #[error("validation could not be performed: {0}")]
    ValidationImpossible(String),
}

impl ResultError {
    /// Creates an error for a rule that cannot evaluate its input.
    #[must_use]
    pub fn validation_impossible(reason: impl Into<String>) -> Self {
        Self::ValidationImpossible(reason.into())
    }
}
