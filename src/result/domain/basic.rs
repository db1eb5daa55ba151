//! The plain, immutable validation result.

use std::borrow::Cow;

use crate::result::{
    error::ResultError,
    ports::{
        result::{MessageSource, ValidationResult},
        translator::TranslatorResult,
    },
};

use super::message::{MessageTemplate, MessageVariables, Nested};
use super::value::Value;

/// Result of a single validation check.
///
/// A valid result never carries templates. Instances are only built through
/// [`BasicResult::valid`] and the `invalid` factories, and are immutable
/// afterwards.
///
/// # Examples
///
/// ```
/// use validator_result::result::domain::{BasicResult, variables};
/// use validator_result::result::ports::result::ValidationResult;
///
/// let result = BasicResult::invalid_with_variables(
///     7,
///     ["'%value%' is not between '%min%' and '%max%'"],
///     variables([("min", 1), ("max", 5)]),
/// )
/// .expect("templates are present");
///
/// assert!(!result.is_valid());
/// assert_eq!(
///     result.messages().expect("untranslated"),
///     vec!["'7' is not between '1' and '5'"],
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BasicResult {
    value: Value,
    is_valid: bool,
    message_templates: Vec<MessageTemplate>,
    message_variables: MessageVariables,
}

impl BasicResult {
    /// Creates a passing result for `value`.
    #[must_use]
    pub fn valid(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            is_valid: true,
            message_templates: Vec::new(),
            message_variables: MessageVariables::new(),
        }
    }

    /// Creates a failing result without message variables.
    ///
    /// # Errors
    ///
    /// Returns [`ResultError::MissingMessageTemplates`] if `templates` is
    /// empty.
    pub fn invalid<T>(
        value: impl Into<Value>,
        templates: impl IntoIterator<Item = T>,
    ) -> Result<Self, ResultError>
    where
        T: Into<MessageTemplate>,
    {
        Self::invalid_with_variables(value, templates, MessageVariables::new())
    }

    /// Creates a failing result whose templates reference `variables`.
    ///
    /// # Errors
    ///
    /// Returns [`ResultError::MissingMessageTemplates`] if `templates` is
    /// empty.
    pub fn invalid_with_variables<T>(
        value: impl Into<Value>,
        templates: impl IntoIterator<Item = T>,
        variables: MessageVariables,
    ) -> Result<Self, ResultError>
    where
        T: Into<MessageTemplate>,
    {
        let message_templates: Vec<MessageTemplate> =
            templates.into_iter().map(Into::into).collect();
        if message_templates.is_empty() {
            return Err(ResultError::MissingMessageTemplates);
        }

        Ok(Self {
            value: value.into(),
            is_valid: false,
            message_templates,
            message_variables: variables,
        })
    }

    /// Returns the validated value.
    #[must_use]
    pub const fn validated_value(&self) -> &Value {
        &self.value
    }

    /// Returns the message templates.
    #[must_use]
    pub fn templates(&self) -> &[MessageTemplate] {
        &self.message_templates
    }

    /// Returns the message variables.
    #[must_use]
    pub const fn variables(&self) -> &MessageVariables {
        &self.message_variables
    }

    fn source(&self) -> MessageSource<'_> {
        MessageSource::new(
            &self.message_templates,
            &self.message_variables,
            Cow::Borrowed(&self.value),
        )
    }
}

impl ValidationResult for BasicResult {
    fn is_valid(&self) -> bool {
        self.is_valid
    }

    fn value(&self) -> Cow<'_, Value> {
        Cow::Borrowed(&self.value)
    }

    fn messages(&self) -> TranslatorResult<Vec<String>> {
        Ok(self.source().messages())
    }

    fn message_templates(&self) -> Nested<Vec<MessageTemplate>> {
        Nested::Leaf(self.message_templates.clone())
    }

    fn message_variables(&self) -> Nested<MessageVariables> {
        Nested::Leaf(self.message_variables.clone())
    }

    fn message_sources(&self) -> TranslatorResult<Vec<MessageSource<'_>>> {
        Ok(vec![self.source()])
    }
}
