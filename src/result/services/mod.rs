//! Services operating on results.

mod translator;

pub use translator::ResultTranslator;
