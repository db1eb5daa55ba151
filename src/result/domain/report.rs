//! Serializable snapshot of a result.

use serde::Serialize;

use crate::result::ports::{result::ValidationResult, translator::TranslatorResult};

/// Display-ready view of a result, suitable for logs and JSON output.
///
/// The value is captured in its string form, so a snapshot of an obscured
/// result holds the mask rather than the raw value.
///
/// # Examples
///
/// ```
/// use validator_result::result::decorators::ObscuredResult;
/// use validator_result::result::domain::{BasicResult, ResultReport};
///
/// let result = BasicResult::invalid("hunter2", ["%value% is too weak"]).expect("template");
/// let report = ResultReport::capture(&ObscuredResult::new(result)).expect("untranslated");
///
/// assert_eq!(report.value, "*******");
/// assert_eq!(report.messages, vec!["******* is too weak"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultReport {
    /// Whether the check passed.
    pub is_valid: bool,
    /// The checked value in string form.
    pub value: String,
    /// The failure messages.
    pub messages: Vec<String>,
}

impl ResultReport {
    /// Captures the current view of `result`.
    ///
    /// # Errors
    ///
    /// Returns the translator error if producing the messages fails.
    pub fn capture<R>(result: &R) -> TranslatorResult<Self>
    where
        R: ValidationResult + ?Sized,
    {
        Ok(Self {
            is_valid: result.is_valid(),
            value: result.value().to_string(),
            messages: result.messages()?,
        })
    }
}
