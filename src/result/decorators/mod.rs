//! Decorators over any [`ValidationResult`](crate::result::ports::result::ValidationResult).
//!
//! A decorator forwards every member of the contract to the result it wraps,
//! except the ones it exists to change. Neither decorator copies or mutates
//! the wrapped result.

mod obscured;
mod translated;

pub use obscured::{OBSCURING_CHARACTER, ObscuredResult};
pub use translated::TranslatedResult;
pub(crate) use translated::translate_sources;
