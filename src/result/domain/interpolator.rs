//! Placeholder substitution for message templates.
//!
//! A placeholder is `%name%`. It is replaced only when `name` is a known
//! variable; anything else, including a lone `%`, passes through verbatim.
//! Substituted text is never scanned again.

use super::message::{MessageVariables, VALUE_VARIABLE};
use super::value::Value;

/// Replaces every known `%name%` placeholder in `template`.
///
/// # Examples
///
/// ```
/// use validator_result::result::domain::{interpolator::interpolate, variables};
///
/// let vars = variables([("x", "v")]);
/// assert_eq!(interpolate("%x%", &vars), "v");
/// assert_eq!(interpolate("%y%", &vars), "%y%");
/// ```
#[must_use]
pub fn interpolate(template: &str, variables: &MessageVariables) -> String {
    substitute(template, |name| variables.get(name))
}

/// Interpolates `template` with `variables`, the implicit `value` entry, and
/// optional overrides.
///
/// Names resolve against `extra` first, then `value` under
/// [`VALUE_VARIABLE`], then `variables`. Nothing is copied to build the
/// lookup.
#[must_use]
pub fn interpolate_with_value<'v>(
    template: &str,
    variables: &'v MessageVariables,
    value: &'v Value,
    extra: Option<&'v MessageVariables>,
) -> String {
    substitute(template, |name| {
        extra
            .and_then(|overrides| overrides.get(name))
            .or_else(|| (name == VALUE_VARIABLE).then_some(value))
            .or_else(|| variables.get(name))
    })
}

fn substitute<'v>(template: &str, lookup: impl Fn(&str) -> Option<&'v Value>) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some((before, after_open)) = rest.split_once('%') {
        output.push_str(before);
        let known = after_open.split_once('%').and_then(|(name, after_close)| {
            lookup(name).map(|substitution| (substitution, after_close))
        });
        if let Some((substitution, after_close)) = known {
            output.push_str(&substitution.to_string());
            rest = after_close;
        } else {
            // The closing '%' may open the next placeholder.
            output.push('%');
            rest = after_open;
        }
    }

    output.push_str(rest);
    output
}
