//! Rule chain evaluation.

use serde::Deserialize;

use crate::result::{
    domain::{ResultAggregate, Value},
    error::ResultError,
    ports::result::ValidationResult,
};
use crate::rule::ports::validator::{ValidationContext, Validator, ValidatorOutcome};

/// Configuration for chain evaluation.
///
/// # Examples
///
/// ```
/// use validator_result::rule::services::ChainConfig;
///
/// assert!(!ChainConfig::default().break_on_failure);
/// assert!(ChainConfig::fail_fast().break_on_failure);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ChainConfig {
    /// Stop evaluating after the first failing rule.
    pub break_on_failure: bool,
}

impl ChainConfig {
    /// Creates a configuration that stops at the first failing rule.
    #[must_use]
    pub const fn fail_fast() -> Self {
        Self {
            break_on_failure: true,
        }
    }
}

/// Runs rules in order and aggregates their results.
///
/// Every rule's result is pushed into one [`ResultAggregate`] bound to the
/// input value, in execution order. The chain is itself a [`Validator`], so
/// chains nest.
#[derive(Default)]
pub struct ValidatorChain {
    validators: Vec<Box<dyn Validator>>,
    config: ChainConfig,
}

impl ValidatorChain {
    /// Creates an empty chain that runs every rule.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty chain with custom configuration.
    #[must_use]
    pub fn with_config(config: ChainConfig) -> Self {
        Self {
            validators: Vec::new(),
            config,
        }
    }

    /// Appends a rule to the chain.
    #[must_use]
    pub fn with_validator(mut self, validator: impl Validator + 'static) -> Self {
        self.push(validator);
        self
    }

    /// Appends a rule to the chain.
    pub fn push(&mut self, validator: impl Validator + 'static) {
        self.validators.push(Box::new(validator));
    }

    /// Returns the number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// Returns `true` when the chain has no rule.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// Returns the chain configuration.
    #[must_use]
    pub const fn config(&self) -> &ChainConfig {
        &self.config
    }

    /// Runs the chain against `value` and returns the aggregate.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a rule; later rules are not run.
    pub fn run(
        &self,
        value: &Value,
        context: &ValidationContext,
    ) -> Result<ResultAggregate, ResultError> {
        let mut aggregate = ResultAggregate::new(value.clone());

        for (index, validator) in self.validators.iter().enumerate() {
            let result = validator.validate(value, context)?;
            let is_valid = result.is_valid();
            tracing::debug!(rule = index, is_valid, "rule evaluated");
            aggregate.push_boxed(result);

            if !is_valid && self.config.break_on_failure {
                tracing::debug!(
                    rule = index,
                    skipped = self.validators.len() - index - 1,
                    "breaking chain on failure"
                );
                break;
            }
        }

        Ok(aggregate)
    }
}

impl std::fmt::Debug for ValidatorChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidatorChain")
            .field("validators", &self.validators.len())
            .field("config", &self.config)
            .finish()
    }
}

impl Validator for ValidatorChain {
    fn validate(&self, value: &Value, context: &ValidationContext) -> ValidatorOutcome {
        Ok(Box::new(self.run(value, context)?))
    }
}
