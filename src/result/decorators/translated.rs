//! Decorator that translates templates before interpolating them.

use std::borrow::Cow;
use std::fmt;

use crate::result::domain::{MessageTemplate, MessageVariables, Nested, Value};
use crate::result::ports::{
    result::{MessageSource, ValidationResult, render_sources},
    translator::{Translator, TranslatorResult},
};

/// Wraps a result so that its messages are produced from translated
/// templates.
///
/// Each raw template is passed to the translator first, and the inner
/// result's variables are interpolated into the translated text afterwards.
/// Aggregates are handled per leaf and flattened in push order. Leaves that
/// were already translated further down keep their translation.
///
/// The translated templates are exposed through
/// [`ValidationResult::message_sources`], so an outer decorator interpolates
/// them instead of the raw ones. Validity, value, and the raw templates and
/// variables are forwarded to the inner result.
///
/// `R` may be a reference, so the decorator can view a result it does not
/// own.
pub struct TranslatedResult<R, T> {
    inner: R,
    translator: T,
    text_domain: Option<String>,
}

impl<R, T> TranslatedResult<R, T>
where
    R: ValidationResult,
    T: Translator,
{
    /// Decorates `inner` with `translator`, using the default text domain.
    #[must_use]
    pub const fn new(inner: R, translator: T) -> Self {
        Self {
            inner,
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

    /// Returns the decorated result.
    #[must_use]
    pub const fn inner(&self) -> &R {
        &self.inner
    }

    /// Returns the configured text domain.
    #[must_use]
    pub fn text_domain(&self) -> Option<&str> {
        self.text_domain.as_deref()
    }
}

impl<R: fmt::Debug, T> fmt::Debug for TranslatedResult<R, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranslatedResult")
            .field("inner", &self.inner)
            .field("text_domain", &self.text_domain)
            .finish_non_exhaustive()
    }
}

impl<R, T> ValidationResult for TranslatedResult<R, T>
where
    R: ValidationResult,
    T: Translator,
{
    fn is_valid(&self) -> bool {
        self.inner.is_valid()
    }

    fn value(&self) -> Cow<'_, Value> {
        self.inner.value()
    }

    fn messages(&self) -> TranslatorResult<Vec<String>> {
        Ok(render_sources(&self.message_sources()?))
    }

    fn message_templates(&self) -> Nested<Vec<MessageTemplate>> {
        self.inner.message_templates()
    }

    fn message_variables(&self) -> Nested<MessageVariables> {
        self.inner.message_variables()
    }

    fn message_sources(&self) -> TranslatorResult<Vec<MessageSource<'_>>> {
        translate_sources(
            self.inner.message_sources()?,
            &self.translator,
            self.text_domain.as_deref(),
        )
    }
}

/// Translates the templates of every raw source, in order.
///
/// Sources that are already translated pass through untouched. The first
/// translator failure stops the walk and is returned unchanged.
pub(crate) fn translate_sources<'a, T>(
    sources: Vec<MessageSource<'a>>,
    translator: &T,
    text_domain: Option<&str>,
) -> TranslatorResult<Vec<MessageSource<'a>>>
where
    T: Translator + ?Sized,
{
    sources
        .into_iter()
        .map(|source| -> TranslatorResult<MessageSource<'a>> {
            if source.is_translated() {
                return Ok(source);
            }
            let templates = source
                .templates()
                .iter()
                .map(|template| {
                    translator
                        .translate(template, text_domain)
                        .inspect_err(|error| {
                            tracing::debug!(%error, template = %template, "translation failed");
                        })
                })
                .collect::<TranslatorResult<Vec<_>>>()?;
            Ok(source.with_translated_templates(templates))
        })
        .collect()
}
