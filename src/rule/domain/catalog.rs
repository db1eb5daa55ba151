//! Keyed message templates and variables owned by a rule.

use std::collections::BTreeMap;

use crate::result::{
    domain::{BasicResult, MessageTemplate, MessageVariables, Value},
    error::ResultError,
};

/// Message templates a rule can fail with, addressed by key, plus the
/// variables those templates reference.
///
/// Templates are overridable per key, which lets an application reword a
/// rule's messages without touching the rule.
///
/// # Examples
///
/// ```
/// use validator_result::result::ports::result::ValidationResult;
/// use validator_result::rule::domain::TemplateCatalog;
///
/// let catalog = TemplateCatalog::new()
///     .with_template("notBetween", "'%value%' is not between '%min%' and '%max%'")
///     .with_variable("min", 1)
///     .with_variable("max", 9);
///
/// let result = catalog.invalid_result(12, ["notBetween"]).expect("key given");
/// assert_eq!(
///     result.messages().expect("untranslated"),
///     vec!["'12' is not between '1' and '9'"],
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateCatalog {
    templates: BTreeMap<String, MessageTemplate>,
    variables: MessageVariables,
}

impl TemplateCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the template for `key`.
    #[must_use]
    pub fn with_template(mut self, key: impl Into<String>, template: impl Into<String>) -> Self {
        self.set_template(key, template);
        self
    }

    /// Adds or replaces a message variable.
    #[must_use]
    pub fn with_variable(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.variables.insert(name.into(), value.into());
        self
    }

    /// Overrides the template for `key`.
    pub fn set_template(&mut self, key: impl Into<String>, template: impl Into<String>) {
        self.templates.insert(key.into(), template.into());
    }

    /// Returns the template for `key`, or an empty template if unknown.
    #[must_use]
    pub fn template(&self, key: &str) -> &str {
        self.templates.get(key).map_or("", String::as_str)
    }

    /// Returns every template keyed by name.
    #[must_use]
    pub const fn templates(&self) -> &BTreeMap<String, MessageTemplate> {
        &self.templates
    }

    /// Returns the message variables.
    #[must_use]
    pub const fn variables(&self) -> &MessageVariables {
        &self.variables
    }

    /// Returns the names of the message variables.
    #[must_use]
    pub fn variable_names(&self) -> Vec<&str> {
        self.variables.keys().map(String::as_str).collect()
    }

    /// Builds a failing result for `value` from the templates at `keys`.
    ///
    /// # Errors
    ///
    /// Returns [`ResultError::MissingMessageTemplates`] if `keys` is empty.
    pub fn invalid_result<'k>(
        &self,
        value: impl Into<Value>,
        keys: impl IntoIterator<Item = &'k str>,
    ) -> Result<BasicResult, ResultError> {
        let templates: Vec<MessageTemplate> = keys
            .into_iter()
            .map(|key| self.template(key).to_owned())
            .collect();
        BasicResult::invalid_with_variables(value, templates, self.variables.clone())
    }
}
