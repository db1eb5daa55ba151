//! Decorator that redacts the validated value.

use std::borrow::Cow;

use crate::result::domain::{MessageTemplate, MessageVariables, Nested, Value};
use crate::result::ports::{
    result::{MessageSource, ValidationResult, render_sources},
    translator::TranslatorResult,
};

/// Character every character of an obscured value is replaced with.
pub const OBSCURING_CHARACTER: char = '*';

/// Wraps a result so that its value is masked everywhere it can surface.
///
/// [`ValidationResult::value`] returns the stringified inner value with each
/// character replaced by [`OBSCURING_CHARACTER`]. Messages are rebuilt from
/// the inner message sources with that mask substituted for `%value%`, so the
/// raw value never reaches a message. Templates a translating decorator
/// produced below this one are kept. For an aggregate every leaf shares the
/// mask derived from the aggregate's own value.
///
/// # Examples
///
/// ```
/// use validator_result::result::decorators::ObscuredResult;
/// use validator_result::result::domain::BasicResult;
/// use validator_result::result::ports::result::ValidationResult;
///
/// let inner = BasicResult::invalid("secret", ["%value% is bad"]).expect("template");
/// let obscured = ObscuredResult::new(&inner);
///
/// assert_eq!(obscured.messages().expect("untranslated"), vec!["****** is bad"]);
/// assert_eq!(obscured.value().to_string(), "******");
/// ```
#[derive(Debug, Clone)]
pub struct ObscuredResult<R> {
    inner: R,
}

impl<R: ValidationResult> ObscuredResult<R> {
    /// Decorates `inner`.
    #[must_use]
    pub const fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Returns the decorated result.
    #[must_use]
    pub const fn inner(&self) -> &R {
        &self.inner
    }

    /// Returns the mask for the inner value, preserving its character count.
    #[must_use]
    pub fn obscured_value(&self) -> String {
        let length = self.inner.value().to_string().chars().count();
        std::iter::repeat_n(OBSCURING_CHARACTER, length).collect()
    }
}

impl<R: ValidationResult> ValidationResult for ObscuredResult<R> {
    fn is_valid(&self) -> bool {
        self.inner.is_valid()
    }

    fn value(&self) -> Cow<'_, Value> {
        Cow::Owned(Value::Text(self.obscured_value()))
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
        let masked = self.value().into_owned();
        Ok(self
            .inner
            .message_sources()?
            .into_iter()
            .map(|source| source.with_value(Cow::Owned(masked.clone())))
            .collect())
    }
}
