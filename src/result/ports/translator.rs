//! Translator port used to localise message templates.

use std::sync::Arc;
use thiserror::Error;

/// Result type for translation operations.
pub type TranslatorResult<T> = Result<T, TranslatorError>;

/// Translates raw message templates before interpolation.
///
/// Implementations receive the template text with its `%name%` placeholders
/// intact and return the translated template. Calls are synchronous and must
/// be deterministic for a given `(message, text_domain)` pair.
pub trait Translator: Send + Sync {
    /// Translates `message` within `text_domain`.
    ///
    /// # Errors
    ///
    /// Returns a [`TranslatorError`] when the backend cannot produce a
    /// translation. Callers propagate it unchanged.
    fn translate(&self, message: &str, text_domain: Option<&str>) -> TranslatorResult<String>;
}

impl<T: Translator + ?Sized> Translator for &T {
    fn translate(&self, message: &str, text_domain: Option<&str>) -> TranslatorResult<String> {
        (**self).translate(message, text_domain)
    }
}

impl<T: Translator + ?Sized> Translator for Box<T> {
    fn translate(&self, message: &str, text_domain: Option<&str>) -> TranslatorResult<String> {
        (**self).translate(message, text_domain)
    }
}

impl<T: Translator + ?Sized> Translator for Arc<T> {
    fn translate(&self, message: &str, text_domain: Option<&str>) -> TranslatorResult<String> {
        (**self).translate(message, text_domain)
    }
}

/// Errors returned by translator backends.
#[derive(Debug, Clone, Error)]
pub enum TranslatorError {
    /// The backend has no translation for the message.
    #[error("no translation for '{message}' in text domain '{}'", .text_domain.as_deref().unwrap_or("default"))]
    MissingTranslation {
        /// The untranslated template.
        message: String,
        /// The requested text domain.
        text_domain: Option<String>,
    },

    /// The backend failed.
    #[error("translator backend error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl TranslatorError {
    /// Creates a missing translation error.
    #[must_use]
    pub fn missing(message: impl Into<String>, text_domain: Option<&str>) -> Self {
        Self::MissingTranslation {
            message: message.into(),
            text_domain: text_domain.map(ToOwned::to_owned),
        }
    }

    /// Wraps a failure from a translator backend.
    #[must_use]
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }
}
