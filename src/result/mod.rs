//! Validation results as composable, decoratable values.
//!
//! A result records whether a check passed, the value it ran against, and
//! deferred failure messages built from `%name%` templates. Results can be
//! aggregated for a chain of rules and wrapped by decorators that translate
//! or redact their messages without touching the wrapped result.
//!
//! # Architecture
//!
//! - **Domain**: [`domain::BasicResult`], [`domain::ResultAggregate`], the
//!   [`domain::Value`] model, and template interpolation
//! - **Ports**: the [`ports::result::ValidationResult`] contract and the
//!   [`ports::translator::Translator`] collaborator
//! - **Decorators**: [`decorators::TranslatedResult`] and
//!   [`decorators::ObscuredResult`]
//! - **Services**: [`services::ResultTranslator`]
//! - **Adapters**: [`adapters::memory::InMemoryTranslator`]
//!
//! # Example
//!
//! ```
//! use validator_result::result::adapters::memory::InMemoryTranslator;
//! use validator_result::result::decorators::{ObscuredResult, TranslatedResult};
//! use validator_result::result::domain::{BasicResult, ResultAggregate};
//! use validator_result::result::ports::result::ValidationResult;
//!
//! let mut aggregate = ResultAggregate::new("pa55");
//! aggregate.push(BasicResult::invalid("pa55", ["'%value%' is too short"]).expect("template"));
//!
//! let translator = InMemoryTranslator::new()
//!     .with_translation(None, "'%value%' is too short", "'%value%' est trop court");
//! let view = TranslatedResult::new(ObscuredResult::new(&aggregate), &translator);
//!
//! assert_eq!(view.messages().expect("translation"), vec!["'****' est trop court"]);
//! ```

pub mod adapters;
pub mod decorators;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
