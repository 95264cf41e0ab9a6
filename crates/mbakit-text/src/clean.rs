//! Text cleaning.
//!
//! Cleaning is a fixed, ordered sequence of [`Step`]s. Order matters:
//! digit-bearing words are removed last, after punctuation has been
//! stripped, so that `2020,` and `2020` are treated the same.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

static BRACKETED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[.*?\]").expect("bracket pattern is valid"));

static URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+|www\.\S+").expect("url pattern is valid"));

static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<.*?>+").expect("tag pattern is valid"));

static DIGIT_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S*\d\S*").expect("digit word pattern is valid"));

/// A single cleaning transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Lowercase,
    Brackets,
    Urls,
    Tags,
    Punctuation,
    Newlines,
    DigitWords,
}

/// The cleaning pipeline, applied front to back.
const PIPELINE: [Step; 7] = [
    Step::Lowercase,
    Step::Brackets,
    Step::Urls,
    Step::Tags,
    Step::Punctuation,
    Step::Newlines,
    Step::DigitWords,
];

impl Step {
    fn apply(self, text: &str) -> String {
        match self {
            Self::Lowercase => text.to_lowercase(),
            Self::Brackets => BRACKETED.replace_all(text, "").into_owned(),
            Self::Urls => URL.replace_all(text, "").into_owned(),
            Self::Tags => TAG.replace_all(text, "").into_owned(),
            Self::Punctuation => text.chars().filter(|c| !c.is_ascii_punctuation()).collect(),
            Self::Newlines => text.chars().filter(|&c| c != '\n').collect(),
            Self::DigitWords => DIGIT_WORD.replace_all(text, "").into_owned(),
        }
    }
}

/// Normalizes text for word counting.
///
/// Steps, in order:
///
/// 1. lowercase everything (characters without a lowercase mapping, such
///    as U+1D400 MATHEMATICAL BOLD CAPITAL A, are kept as they are)
/// 2. drop `[...]` spans
/// 3. drop URLs starting with `http://`, `https://`, or `www.`
/// 4. drop `<...>` tags
/// 5. drop ASCII punctuation
/// 6. drop newlines
/// 7. drop every whitespace-delimited word containing a digit
///
/// Whitespace between surviving words is left untouched, so removing a word
/// can leave a double space behind. The function is idempotent.
///
/// # Example
///
/// ```
/// use mbakit_text::clean_text;
///
/// assert_eq!(clean_text("%I $am@% a %tea@cher%, 2020 rocks!"), "i am a teacher  rocks");
/// ```
pub fn clean_text(text: &str) -> String {
    let mut cleaned = text.to_string();
    for step in PIPELINE {
        let before = cleaned.len();
        cleaned = step.apply(&cleaned);
        trace!(?step, before, after = cleaned.len(), "cleaning step applied");
    }
    cleaned
}
