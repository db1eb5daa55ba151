//! Step definitions for result decoration scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
