//! Standalone translation of result messages.

use crate::result::decorators::{TranslatedResult, translate_sources};
use crate::result::ports::{
    result::{ValidationResult, render_sources},
    translator::{Translator, TranslatorResult},
};

/// Turns the templates of a result into translated, interpolated messages.
///
/// This is the decoupled alternative to wrapping a result in a
/// [`TranslatedResult`]: the service holds the translator and text domain,
/// and results stay untouched. Both paths share one routine and always
/// produce the same messages.
///
/// # Examples
///
/// ```
/// use validator_result::result::adapters::memory::InMemoryTranslator;
/// use validator_result::result::domain::{BasicResult, variables};
/// use validator_result::result::services::ResultTranslator;
///
/// let translator = InMemoryTranslator::new()
///     .with_translation(None, "Too short: %min%", "Trop court : %min%");
/// let service = ResultTranslator::new(translator);
///
/// let result = BasicResult::invalid_with_variables(
///     "ab",
///     ["Too short: %min%"],
///     variables([("min", 3)]),
/// )
/// .expect("template");
///
/// assert_eq!(
///     service.translate_messages(&result).expect("translation"),
///     vec!["Trop court : 3"],
/// );
/// ```
#[derive(Debug, Clone)]
pub struct ResultTranslator<T> {
    translator: T,
    text_domain: Option<String>,
}

impl<T: Translator> ResultTranslator<T> {
    /// Creates a service using the default text domain.
    #[must_use]
    pub const fn new(translator: T) -> Self {
        Self {
            translator,
            text_domain: None,
        }
    }

    /// Sets the text domain passed to the translator.
    #[must_use]
    pub fn with_text_domain(mut self, text_domain: impl Into<String>) -> Self {
        self.text_domain = Some(text_domain.into());
        self
    }

    /// Returns the configured text domain.
    #[must_use]
    pub fn text_domain(&self) -> Option<&str> {
        self.text_domain.as_deref()
    }

    /// Translates and interpolates every message template of `result`.
    ///
    /// # Errors
    ///
    /// Returns the translator's error unchanged.
    pub fn translate_messages<R>(&self, result: &R) -> TranslatorResult<Vec<String>>
    where
        R: ValidationResult + ?Sized,
    {
        let sources = result.message_sources()?;
        tracing::trace!(
            leaves = sources.len(),
            text_domain = self.text_domain.as_deref(),
            "translating result messages"
        );
        let translated =
            translate_sources(sources, &self.translator, self.text_domain.as_deref())?;
        Ok(render_sources(&translated))
    }

    /// Wraps `result` in a [`TranslatedResult`] sharing this service's
    /// translator and text domain.
    #[must_use]
    pub fn decorate<R>(&self, result: R) -> TranslatedResult<R, &T>
    where
        R: ValidationResult,
    {
        let decorated = TranslatedResult::new(result, &self.translator);
        match &self.text_domain {
            Some(text_domain) => decorated.with_text_domain(text_domain.clone()),
            None => decorated,
        }
    }
}
