//! Compiled fallback patterns for plain-text label recovery.
//!
//! Each alias of each canonical field gets one case-insensitive pattern
//! `alias\s*[:|-]\s*(?P<value>.+)`. They are compiled once, on first use.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

use crate::fields::Field;

/// Fallback patterns per field, in the same order as [`Field::ALL`] and each
/// field's alias list.
pub static TEXT_FALLBACK: LazyLock<Vec<(Field, Vec<Regex>)>> = LazyLock::new(|| {
    Field::ALL
        .into_iter()
        .map(|field| {
            let patterns = field
                .aliases()
                .iter()
                .map(|alias| fallback_pattern(alias).expect("TEXT_FALLBACK regex"))
                .collect();
            (field, patterns)
        })
        .collect()
});

/// Build the plain-text pattern for a single alias.
///
/// ```
/// use task_index::patterns::fallback_pattern;
///
/// let re = fallback_pattern("Status").unwrap();
/// let caps = re.captures("Current status - running").unwrap();
/// assert_eq!(&caps["value"], "running");
/// ```
pub fn fallback_pattern(alias: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(
        r"(?i){}\s*[:|-]\s*(?P<value>.+)",
        regex::escape(alias)
    ))
}

/// Patterns for one field.
#[must_use]
pub fn patterns_for(field: Field) -> &'static [Regex] {
    TEXT_FALLBACK
        .iter()
        .find(|(candidate, _)| *candidate == field)
        .map(|(_, patterns)| patterns.as_slice())
        .unwrap_or_default()
}
