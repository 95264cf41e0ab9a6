//! Word and line counting.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Word frequencies, most frequent first.
///
/// Words with equal counts keep the order in which they first appeared in
/// the input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordCount {
    entries: Vec<(String, usize)>,
}

impl WordCount {
    /// The `(word, count)` pairs in ranked order.
    pub fn entries(&self) -> &[(String, usize)] {
        &self.entries
    }

    /// Number of distinct words listed.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of the listed frequencies.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Type-token ratio as a percentage: distinct words over total words,
    /// times 100. An empty count scores 0.
    ///
    /// Only the listed entries take part, so compute this before
    /// [`limit`](Self::limit) to score a whole text.
    pub fn lexical_diversity(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.len() as f64 / total as f64 * 100.0
    }

    /// The top-ranked entry, if any.
    pub fn most_common(&self) -> Option<(&str, usize)> {
        self.entries.first().map(|(word, count)| (word.as_str(), *count))
    }

    /// Frequency of `word`, or 0 when it is not listed.
    pub fn count_of(&self, word: &str) -> usize {
        self.entries
            .iter()
            .find(|(listed, _)| listed == word)
            .map_or(0, |(_, count)| *count)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(word, count)| (word.as_str(), *count))
    }

    pub fn into_entries(self) -> Vec<(String, usize)> {
        self.entries
    }

    /// Keeps only the first `limit` entries; `None` keeps everything.
    pub fn limit(mut self, limit: Option<usize>) -> Self {
        if let Some(limit) = limit {
            self.entries.truncate(limit);
        }
        self
    }
}

impl IntoIterator for WordCount {
    type Item = (String, usize);
    type IntoIter = std::vec::IntoIter<(String, usize)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Counts tokens and ranks them by frequency.
///
/// Counting keeps first-seen order; the sort afterwards is stable, so ties
/// stay in that order.
pub fn word_frequencies<'a, I>(tokens: I) -> WordCount
where
    I: IntoIterator<Item = &'a str>,
{
    let mut slots: HashMap<&'a str, usize> = HashMap::new();
    let mut ordered: Vec<(&'a str, usize)> = Vec::new();

    for token in tokens {
        let slot = *slots.entry(token).or_insert_with(|| {
            ordered.push((token, 0));
            ordered.len() - 1
        });
        ordered[slot].1 += 1;
    }

    ordered.sort_by(|a, b| b.1.cmp(&a.1));

    WordCount {
        entries: ordered
            .into_iter()
            .map(|(word, count)| (word.to_string(), count))
            .collect(),
    }
}

/// Returns the `limit` most common whitespace-separated words of `text`.
///
/// `None` returns every distinct word. No cleaning is applied; pass the
/// output of [`clean_text`](crate::clean_text) to count normalized words.
///
/// # Example
///
/// ```
/// use mbakit_text::most_common_words;
///
/// let counts = most_common_words("b a b c a b", Some(2));
/// assert_eq!(counts.entries(), &[("b".to_string(), 3), ("a".to_string(), 2)]);
/// ```
pub fn most_common_words(text: &str, limit: Option<usize>) -> WordCount {
    word_frequencies(text.split_whitespace()).limit(limit)
}

/// Line and word totals for a block of text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextCounts {
    pub lines: usize,
    pub words: usize,
}

/// Counts lines and whitespace-separated words.
///
/// A trailing line terminator does not start a new line, and empty text has
/// no lines.
pub fn count_words_and_lines(text: &str) -> TextCounts {
    TextCounts {
        lines: text.lines().count(),
        words: text.split_whitespace().count(),
    }
}
