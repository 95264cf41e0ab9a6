//! Stop-word filtering.

use std::collections::HashSet;

/// The short English list used when no dedicated stop-word file is around.
const ENGLISH: [&str; 16] = [
    "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "is", "are",
    "was", "were",
];

/// A set of words to ignore when counting.
///
/// Matching is exact, so the set is meant to be used on cleaned (lowercase)
/// text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// An empty set; nothing is filtered.
    pub fn none() -> Self {
        Self::default()
    }

    /// The built-in English list.
    pub fn english() -> Self {
        Self::from_words(ENGLISH)
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Adds more words to the set.
    ///
    /// This is a builder method that takes ownership and returns `self`
    /// for chaining.
    pub fn with_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.words.extend(words.into_iter().map(Into::into));
        self
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Splits `text` on whitespace and drops every stop word.
///
/// # Example
///
/// ```
/// use mbakit_text::{StopWords, remove_stop_words};
///
/// let words = remove_stop_words("the company is growing and expanding", &StopWords::english());
/// assert_eq!(words, ["company", "growing", "expanding"]);
/// ```
pub fn remove_stop_words<'a>(text: &'a str, stop_words: &StopWords) -> Vec<&'a str> {
    text.split_whitespace()
        .filter(|word| !stop_words.contains(word))
        .collect()
}
