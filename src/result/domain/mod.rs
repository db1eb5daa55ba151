//! Domain types for validation results.
//!
//! Contains the value model, message templates and their interpolation, the
//! plain result, and the aggregate. All types are immutable once built, with
//! the single exception of [`ResultAggregate::push`].

mod aggregate;
mod basic;
pub mod interpolator;
mod message;
mod report;
mod value;

pub use aggregate::{Iter, ResultAggregate};
pub use basic::BasicResult;
pub use message::{MessageTemplate, MessageVariables, Nested, VALUE_VARIABLE, variables};
pub use report::ResultReport;
pub use value::{Value, ValueObject};
