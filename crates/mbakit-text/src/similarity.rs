//! Bag-of-words document comparison.

use std::collections::HashMap;

use tracing::debug;

use crate::clean::clean_text;
use crate::error::{DocumentSide, TextError};
use crate::stop_words::{StopWords, remove_stop_words};

type Frequencies<'a> = HashMap<&'a str, usize>;

fn frequencies<'a>(words: &[&'a str]) -> Frequencies<'a> {
    let mut counts = HashMap::with_capacity(words.len());
    for word in words {
        *counts.entry(*word).or_insert(0) += 1;
    }
    counts
}

fn dot(a: &Frequencies<'_>, b: &Frequencies<'_>) -> f64 {
    a.iter()
        .filter_map(|(word, &count)| b.get(word).map(|&other| (count * other) as f64))
        .sum()
}

/// Angle in degrees between the word-frequency vectors of two texts.
///
/// Both texts are cleaned with [`clean_text`] and stripped of `stop_words`
/// first. `0.0` means the documents use the same words in the same
/// proportions; `90.0` means they share none.
///
/// # Errors
///
/// [`TextError::EmptyDocument`] when either text has no words left.
///
/// # Example
///
/// ```
/// use mbakit_text::{StopWords, document_similarity};
///
/// let angle = document_similarity("sales grew", "costs fell", &StopWords::english()).unwrap();
/// assert!((angle - 90.0).abs() < 1e-9);
/// ```
pub fn document_similarity(
    left: &str,
    right: &str,
    stop_words: &StopWords,
) -> Result<f64, TextError> {
    let left_clean = clean_text(left);
    let right_clean = clean_text(right);

    let left_words = remove_stop_words(&left_clean, stop_words);
    if left_words.is_empty() {
        return Err(TextError::EmptyDocument {
            side: DocumentSide::Left,
        });
    }
    let right_words = remove_stop_words(&right_clean, stop_words);
    if right_words.is_empty() {
        return Err(TextError::EmptyDocument {
            side: DocumentSide::Right,
        });
    }

    let a = frequencies(&left_words);
    let b = frequencies(&right_words);

    // Rounding can push the ratio a hair past 1.0 for identical documents.
    let cosine = (dot(&a, &b) / (dot(&a, &a) * dot(&b, &b)).sqrt()).clamp(-1.0, 1.0);
    let degrees = cosine.acos().to_degrees();

    debug!(
        left_distinct = a.len(),
        right_distinct = b.len(),
        degrees,
        "compared documents"
    );

    Ok(degrees)
}
