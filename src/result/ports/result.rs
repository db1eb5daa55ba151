//! The contract every validation result satisfies.
//!
//! Plain results, aggregates, and decorators are interchangeable behind
//! [`ValidationResult`]. Messages are produced on every read from templates
//! and variables; nothing is cached.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::result::domain::{
    MessageTemplate, MessageVariables, Nested, Value, interpolator::interpolate_with_value,
};

use super::translator::TranslatorResult;

/// Outcome of a validation check.
pub trait ValidationResult: fmt::Debug + Send + Sync {
    /// Returns `true` when the check passed.
    fn is_valid(&self) -> bool;

    /// Returns the value the check ran against.
    fn value(&self) -> Cow<'_, Value>;

    /// Produces the failure messages, one per template, in order.
    ///
    /// # Errors
    ///
    /// Returns the translator's error unchanged when a translating
    /// decorator is involved. Untranslated results never fail.
    fn messages(&self) -> TranslatorResult<Vec<String>>;

    /// Returns the raw message templates, shaped like the result tree.
    fn message_templates(&self) -> Nested<Vec<MessageTemplate>>;

    /// Returns the message variables, shaped like the result tree.
    fn message_variables(&self) -> Nested<MessageVariables>;

    /// Returns one [`MessageSource`] per leaf result, depth-first in push
    /// order.
    ///
    /// Decorators build their messages from these sources so that they treat
    /// aggregates per leaf without knowing their concrete type. Sources below
    /// a translating decorator already carry translated templates.
    ///
    /// # Errors
    ///
    /// Returns the translator's error unchanged when a translating
    /// decorator is involved.
    fn message_sources(&self) -> TranslatorResult<Vec<MessageSource<'_>>>;
}

/// Templates, variables, and substitution value of one leaf result.
///
/// A source is either raw, holding the leaf's own templates, or translated,
/// holding templates a translator has already produced. Translated sources
/// are only interpolated from then on.
#[derive(Debug, Clone)]
pub struct MessageSource<'a> {
    templates: Cow<'a, [MessageTemplate]>,
    variables: &'a MessageVariables,
    value: Cow<'a, Value>,
    translated: bool,
}

impl<'a> MessageSource<'a> {
    /// Creates a message source.
    #[must_use]
    pub const fn new(
        templates: &'a [MessageTemplate],
        variables: &'a MessageVariables,
        value: Cow<'a, Value>,
    ) -> Self {
        Self {
            templates: Cow::Borrowed(templates),
            variables,
            value,
            translated: false,
        }
    }

    /// Returns the leaf's templates.
    #[must_use]
    pub fn templates(&self) -> &[MessageTemplate] {
        &self.templates
    }

    /// Returns `true` once the templates have been through a translator.
    #[must_use]
    pub const fn is_translated(&self) -> bool {
        self.translated
    }

    /// Replaces the templates with their translations.
    #[must_use]
    pub fn with_translated_templates(self, templates: Vec<MessageTemplate>) -> Self {
        Self {
            templates: Cow::Owned(templates),
            translated: true,
            ..self
        }
    }

    /// Returns the leaf's variables.
    #[must_use]
    pub const fn variables(&self) -> &'a MessageVariables {
        self.variables
    }

    /// Returns the value substituted for `%value%`.
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Replaces the value substituted for `%value%`.
    #[must_use]
    pub fn with_value(self, value: Cow<'a, Value>) -> Self {
        Self { value, ..self }
    }

    /// Interpolates an arbitrary template against this source.
    #[must_use]
    pub fn render(&self, template: &str) -> String {
        interpolate_with_value(template, self.variables, &self.value, None)
    }

    /// Interpolates every template of this source, in order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.templates
            .iter()
            .map(|template| self.render(template))
            .collect()
    }
}

/// Interpolates every source in order and flattens the messages.
#[must_use]
pub fn render_sources(sources: &[MessageSource<'_>]) -> Vec<String> {
    sources.iter().flat_map(MessageSource::messages).collect()
}

macro_rules! forward_validation_result {
    ($($wrapper:ty),+ $(,)?) => {
        $(
            impl<R: ValidationResult + ?Sized> ValidationResult for $wrapper {
                fn is_valid(&self) -> bool {
                    (**self).is_valid()
                }

                fn value(&self) -> Cow<'_, Value> {
                    (**self).value()
                }

                fn messages(&self) -> TranslatorResult<Vec<String>> {
                    (**self).messages()
                }

                fn message_templates(&self) -> Nested<Vec<MessageTemplate>> {
                    (**self).message_templates()
                }

                fn message_variables(&self) -> Nested<MessageVariables> {
                    (**self).message_variables()
                }

                fn message_sources(&self) -> TranslatorResult<Vec<MessageSource<'_>>> {
                    (**self).message_sources()
                }
            }
        )+
    };
}

forward_validation_result!(&R, Box<R>, Arc<R>);
