//! Validator results: the outcome of a validation check as a value.
//!
//! This crate models what a validation rule reports rather than the rules
//! themselves. A result carries validity, the checked value, and lazily
//! interpolated failure messages; results compose into aggregates and can be
//! decorated to translate or obscure their messages.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure value types with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for results, translators, and rules
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`result`]: Result model, decorators, and translation
//! - [`rule`]: Rule entry point, template catalog, and chain evaluation

pub mod result;
pub mod rule;
