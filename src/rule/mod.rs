//! Boundary between validation rules and the result model.
//!
//! Individual rules live outside this crate. This module defines what they
//! implement ([`ports::validator::Validator`]), a typed home for their
//! message templates ([`domain::TemplateCatalog`]), and the chain evaluator
//! that aggregates their results ([`services::ValidatorChain`]).

pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
