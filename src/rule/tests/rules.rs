//! Small rules used to exercise the rule boundary.

use crate::result::{
    domain::{BasicResult, Value},
    error::ResultError,
};
use crate::rule::{
    domain::TemplateCatalog,
    ports::validator::{ValidationContext, Validator, ValidatorOutcome},
};

pub const TOO_SHORT: &str = "tooShort";
pub const NOT_TEXT: &str = "notText";

/// Fails text shorter than `min` characters.
#[derive(Debug)]
pub struct MinLength {
    min: i64,
    catalog: TemplateCatalog,
}

impl MinLength {
    pub fn new(min: i64) -> Self {
        Self {
            min,
            catalog: TemplateCatalog::new()
                .with_template(TOO_SHORT, "'%value%' is shorter than %min% characters")
                .with_template(NOT_TEXT, "Expected text")
                .with_variable("min", min),
        }
    }
}

impl Validator for MinLength {
    fn validate(&self, value: &Value, _context: &ValidationContext) -> ValidatorOutcome {
        let Some(text) = value.as_text() else {
            return Ok(Box::new(self.catalog.invalid_result(value.clone(), [NOT_TEXT])?));
        };
        let length = i64::try_from(text.chars().count()).unwrap_or(i64::MAX);
        if length < self.min {
            return Ok(Box::new(self.catalog.invalid_result(value.clone(), [TOO_SHORT])?));
        }
        Ok(Box::new(BasicResult::valid(value.clone())))
    }
}

/// Fails unless the context holds an equal `confirm` entry.
#[derive(Debug)]
pub struct MatchesConfirmation;

impl Validator for MatchesConfirmation {
    fn validate(&self, value: &Value, context: &ValidationContext) -> ValidatorOutcome {
        if context.get("confirm") == Some(value) {
            Ok(Box::new(BasicResult::valid(value.clone())))
        } else {
            Ok(Box::new(BasicResult::invalid(
                value.clone(),
                ["The two given tokens do not match"],
            )?))
        }
    }
}

/// Cannot evaluate anything.
#[derive(Debug)]
pub struct Unsupported;

impl Validator for Unsupported {
    fn validate(&self, _value: &Value, _context: &ValidationContext) -> ValidatorOutcome {
        Err(ResultError::validation_impossible("no comparison available"))
    }
}
