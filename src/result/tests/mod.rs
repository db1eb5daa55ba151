//! Unit tests for the result module.
//!
//! Tests are organised by result variant, covering the contract members,
//! aggregate flattening, and decorator composition.

mod translated_tests;
