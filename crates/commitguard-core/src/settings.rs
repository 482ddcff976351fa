// Rust guideline compliant 2026-10-18

//! Project settings scanning.
//!
//! Settings documents are line-oriented `key: value` text. A key counts as set
//! when the text after `key:` on the same line ends in a word character once
//! trailing whitespace is dropped.

use crate::SettingsRule;

/// Returns the first rule whose key carries a value somewhere in `text`.
pub fn find_leaked<'a>(text: &str, rules: &'a [SettingsRule]) -> Option<&'a SettingsRule> {
    rules.iter().find(|rule| has_value(text, &rule.key))
}

/// Returns whether any line of `text` assigns a non-empty value to `key`.
pub fn has_value(text: &str, key: &str) -> bool {
    let needle = format!("{}:", key);
    text.lines().any(|line| match line.find(&needle) {
        Some(idx) => value_is_set(&line[idx + needle.len()..]),
        None => false,
    })
}

fn value_is_set(value: &str) -> bool {
    value
        .trim_end()
        .chars()
        .last()
        .is_some_and(|c| c.is_alphanumeric() || c == '_')
}
