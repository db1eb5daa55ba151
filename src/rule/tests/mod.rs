//! Unit tests for the rule module.

mod rules;
