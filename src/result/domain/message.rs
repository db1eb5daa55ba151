//! Message templates, their variables, and the nested shape aggregates
//! report them in.

use std::collections::BTreeMap;

use super::value::Value;

/// A message string containing zero or more `%name%` placeholders.
pub type MessageTemplate = String;

/// Substitutions for the placeholders of a result's templates.
pub type MessageVariables = BTreeMap<String, Value>;

/// Placeholder name that always resolves to the validated value.
pub const VALUE_VARIABLE: &str = "value";

/// Builds a [`MessageVariables`] map from name/value pairs.
///
/// # Examples
///
/// ```
/// use validator_result::result::domain::{Value, variables};
///
/// let vars = variables([("min", 1), ("max", 10)]);
/// assert_eq!(vars.get("max"), Some(&Value::Integer(10)));
/// ```
pub fn variables<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> MessageVariables
where
    K: Into<String>,
    V: Into<Value>,
{
    pairs
        .into_iter()
        .map(|(name, value)| (name.into(), value.into()))
        .collect()
}

/// Per-result data that keeps the shape of the result tree.
///
/// A plain result reports a single [`Nested::Leaf`]; an aggregate reports a
/// [`Nested::Branch`] holding one entry per child in push order.
#[derive(Debug, Clone, PartialEq)]
pub enum Nested<T> {
    /// Data belonging to one non-aggregate result.
    Leaf(T),
    /// One entry per child of an aggregate.
    Branch(Vec<Self>),
}

impl<T> Nested<T> {
    /// Returns the leaf data, if this is a leaf.
    #[must_use]
    pub const fn as_leaf(&self) -> Option<&T> {
        match self {
            Self::Leaf(data) => Some(data),
            Self::Branch(_) => None,
        }
    }

    /// Returns the children, if this is a branch.
    #[must_use]
    pub fn as_branch(&self) -> Option<&[Self]> {
        match self {
            Self::Leaf(_) => None,
            Self::Branch(children) => Some(children),
        }
    }

    /// Collects every leaf, depth-first and left to right.
    #[must_use]
    pub fn into_leaves(self) -> Vec<T> {
        let mut leaves = Vec::new();
        self.collect_leaves(&mut leaves);
        leaves
    }

    fn collect_leaves(self, leaves: &mut Vec<T>) {
        match self {
            Self::Leaf(data) => leaves.push(data),
            Self::Branch(children) => {
                for child in children {
                    child.collect_leaves(leaves);
                }
            }
        }
    }
}
