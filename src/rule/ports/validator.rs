//! Validator port: the single entry point through which rules produce
//! results.

use std::collections::BTreeMap;

use crate::result::{domain::Value, error::ResultError, ports::result::ValidationResult};

/// Additional input available to a rule, such as the other fields of a form.
pub type ValidationContext = BTreeMap<String, Value>;

/// Result type returned by [`Validator::validate`].
pub type ValidatorOutcome = Result<Box<dyn ValidationResult>, ResultError>;

/// A validation rule.
///
/// Rules build their results only through the
/// [`BasicResult`](crate::result::domain::BasicResult) factories (directly or
/// via a [`TemplateCatalog`](crate::rule::domain::TemplateCatalog)), or by
/// aggregating the results of nested rules.
pub trait Validator: Send + Sync {
    /// Validates `value`.
    ///
    /// # Errors
    ///
    /// Returns [`ResultError::ValidationImpossible`] when the rule cannot
    /// evaluate the value at all, or a construction error when the rule
    /// builds a malformed result.
    fn validate(&self, value: &Value, context: &ValidationContext) -> ValidatorOutcome;
}

impl<V: Validator + ?Sized> Validator for &V {
    fn validate(&self, value: &Value, context: &ValidationContext) -> ValidatorOutcome {
        (**self).validate(value, context)
    }
}

impl<V: Validator + ?Sized> Validator for Box<V> {
    fn validate(&self, value: &Value, context: &ValidationContext) -> ValidatorOutcome {
        (**self).validate(value, context)
    }
}
