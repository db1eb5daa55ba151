//! Composite result for a chain of rules.

use std::borrow::Cow;
use std::slice;

use crate::result::ports::{
    result::{MessageSource, ValidationResult},
    translator::TranslatorResult,
};

use super::message::{MessageTemplate, MessageVariables, Nested};
use super::value::Value;

/// Ordered collection of results that is itself a result.
///
/// The aggregate is valid when every child is valid, and vacuously valid when
/// empty. Messages are flattened depth-first in push order, while templates
/// and variables keep one entry per child so that decorators can reprocess
/// each child separately.
///
/// Children are appended with [`ResultAggregate::push`] and are never removed
/// or reordered. Reads are recomputed on every call.
///
/// # Examples
///
/// ```
/// use validator_result::result::domain::{BasicResult, ResultAggregate};
/// use validator_result::result::ports::result::ValidationResult;
///
/// let mut aggregate = ResultAggregate::new("abc");
/// aggregate.push(BasicResult::valid("abc"));
/// assert!(aggregate.is_valid());
///
/// aggregate.push(BasicResult::invalid("abc", ["too short"]).expect("template"));
/// assert!(!aggregate.is_valid());
/// assert_eq!(aggregate.messages().expect("untranslated"), vec!["too short"]);
/// ```
#[derive(Debug, Default)]
pub struct ResultAggregate {
    value: Value,
    results: Vec<Box<dyn ValidationResult>>,
}

impl ResultAggregate {
    /// Creates an empty aggregate for the value the rule chain runs against.
    #[must_use]
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            results: Vec::new(),
        }
    }

    /// Appends a result after every previously pushed one.
    pub fn push(&mut self, result: impl ValidationResult + 'static) {
        self.results.push(Box::new(result));
    }

    /// Appends an already boxed result.
    pub fn push_boxed(&mut self, result: Box<dyn ValidationResult>) {
        self.results.push(result);
    }

    /// Returns the number of direct children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Returns `true` when no result has been pushed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Iterates over the direct children in push order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.results.iter(),
        }
    }

    /// Returns the value the whole chain ran against.
    #[must_use]
    pub const fn validated_value(&self) -> &Value {
        &self.value
    }
}

impl ValidationResult for ResultAggregate {
    fn is_valid(&self) -> bool {
        self.results
            .iter()
            .map(Box::as_ref)
            .all(ValidationResult::is_valid)
    }

    fn value(&self) -> Cow<'_, Value> {
        Cow::Borrowed(&self.value)
    }

    fn messages(&self) -> TranslatorResult<Vec<String>> {
        let mut messages = Vec::new();
        for result in &self.results {
            messages.extend(result.messages()?);
        }
        Ok(messages)
    }

    fn message_templates(&self) -> Nested<Vec<MessageTemplate>> {
        Nested::Branch(
            self.results
                .iter()
                .map(Box::as_ref)
                .map(ValidationResult::message_templates)
                .collect(),
        )
    }

    fn message_variables(&self) -> Nested<MessageVariables> {
        Nested::Branch(
            self.results
                .iter()
                .map(Box::as_ref)
                .map(ValidationResult::message_variables)
                .collect(),
        )
    }

    fn message_sources(&self) -> TranslatorResult<Vec<MessageSource<'_>>> {
        let mut sources = Vec::new();
        for result in &self.results {
            sources.extend(result.message_sources()?);
        }
        Ok(sources)
    }
}

/// Iterator over the children of a [`ResultAggregate`].
#[derive(Debug)]
pub struct Iter<'a> {
    inner: slice::Iter<'a, Box<dyn ValidationResult>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a dyn ValidationResult;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|result| &**result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a ResultAggregate {
    type Item = &'a dyn ValidationResult;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
