//! Adapter implementations for the result ports.

pub mod memory;
