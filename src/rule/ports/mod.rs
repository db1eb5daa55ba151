//! Port definitions for validation rules.

pub mod validator;
