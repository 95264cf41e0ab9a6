//! Integer extraction from free text.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-+]?\.?[0-9]+").expect("number pattern is valid"));

/// Integers found in a text, ascending, with the distance they span.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberSummary {
    numbers: Vec<i64>,
    range: u64,
}

impl NumberSummary {
    /// The extracted integers, sorted ascending.
    pub fn numbers(&self) -> &[i64] {
        &self.numbers
    }

    /// `max - min`, or 0 when nothing was found.
    pub fn range(&self) -> u64 {
        self.range
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    pub fn min(&self) -> Option<i64> {
        self.numbers.first().copied()
    }

    pub fn max(&self) -> Option<i64> {
        self.numbers.last().copied()
    }

    pub fn into_numbers(self) -> Vec<i64> {
        self.numbers
    }
}

/// Converts one match of [`NUMBER`] to an integer.
///
/// The leading dot carries no meaning for an integer and is dropped, so
/// `-.5` reads as `-5`. Literals too large for `i64` saturate.
fn parse_integer(literal: &str) -> i64 {
    let negative = literal.starts_with('-');
    let digits = literal.trim_start_matches(['+', '-']).trim_start_matches('.');

    let signed = if negative {
        format!("-{digits}")
    } else {
        digits.to_string()
    };

    signed
        .parse::<i64>()
        .unwrap_or(if negative { i64::MIN } else { i64::MAX })
}

/// Finds every signed integer in `text` and sorts them.
///
/// A number is an optional `+` or `-`, an optional `.`, then one or more
/// ASCII digits. Matches do not overlap, so `1.5` yields `1` and `5`.
///
/// # Example
///
/// ```
/// use mbakit_text::extract_numbers;
///
/// let found = extract_numbers("positions -12, -4, -3 and -1; 0 at origin, 4 and 8");
/// assert_eq!(found.numbers(), &[-12, -4, -3, -1, 0, 4, 8]);
/// assert_eq!(found.range(), 20);
/// ```
pub fn extract_numbers(text: &str) -> NumberSummary {
    let mut numbers: Vec<i64> = NUMBER
        .find_iter(text)
        .map(|m| parse_integer(m.as_str()))
        .collect();
    numbers.sort_unstable();

    let range = match (numbers.first(), numbers.last()) {
        (Some(min), Some(max)) => max.abs_diff(*min),
        _ => 0,
    };

    NumberSummary { numbers, range }
}
