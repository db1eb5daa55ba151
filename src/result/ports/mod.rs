//! Port definitions for the result model.
//!
//! Ports are abstract interfaces: the result contract shared by every result
//! variant, and the translator collaborator that localises templates.

pub mod result;
pub mod translator;
