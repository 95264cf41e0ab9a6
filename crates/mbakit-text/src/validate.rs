//! Identifier and e-mail validation.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

static IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\A[A-Za-z_][A-Za-z0-9_]*\z").expect("identifier pattern is valid")
});

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\A\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b\z")
        .expect("email pattern is valid")
});

/// Returns `true` when `s` is a valid variable name.
///
/// A valid name is one ASCII letter or underscore followed by any number of
/// ASCII letters, digits, or underscores. Nothing else is allowed, not even
/// a trailing newline.
///
/// # Example
///
/// ```
/// use mbakit_text::is_valid_identifier;
///
/// assert!(is_valid_identifier("first_name"));
/// assert!(!is_valid_identifier("first-name"));
/// assert!(!is_valid_identifier("1name"));
/// ```
pub fn is_valid_identifier(s: &str) -> bool {
    IDENTIFIER.is_match(s)
}

/// Returns `true` when the whole of `word` looks like an e-mail address.
pub fn is_valid_email(word: &str) -> bool {
    EMAIL.is_match(word)
}

/// Collects the distinct e-mail addresses in `text`, in first-seen order.
///
/// Only whole whitespace-separated tokens are considered; an address glued
/// to punctuation (`<a@b.com>`) is not picked up.
pub fn extract_emails(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    text.split_whitespace()
        .filter(|word| is_valid_email(word))
        .filter(|word| seen.insert(*word))
        .map(str::to_string)
        .collect()
}
