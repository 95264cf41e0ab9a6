//! The word-counting pipeline used throughout the text lessons.

use mbakit_stats::{DescriptiveStats, Summary};
use mbakit_text::{
    NumberSummary, WordCount, clean_text, extract_emails, extract_numbers, remove_stop_words,
    word_frequencies,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::AnalysisConfig;
use crate::error::Result;

/// Everything [`analyze`] learns about a text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextReport {
    /// The text after [`clean_text`].
    pub cleaned: String,
    /// Characters in `cleaned`.
    pub char_count: usize,
    /// Words counted, after stop-word removal.
    pub token_count: usize,
    /// Distinct counted words over `token_count`, as a percentage.
    pub lexical_diversity: f64,
    /// Most common counted words.
    pub top_words: WordCount,
    /// Integers found in the raw text.
    pub numbers: NumberSummary,
    /// Distinct e-mail addresses found in the raw text.
    pub emails: Vec<String>,
}

/// Runs the full text pipeline.
///
/// Numbers and e-mail addresses are read from the raw text, since cleaning
/// removes both. The text is then cleaned, stop words are dropped if the
/// config asks for it, and the remaining words are ranked. Lexical
/// diversity is scored over every counted word, before the `top` limit.
///
/// # Example
///
/// ```
/// use mbakit::{AnalysisConfig, analyze};
///
/// let config = AnalysisConfig::default().with_top(1);
/// let report = analyze("The love of teaching, the love of 2 people.", &config);
///
/// assert_eq!(report.top_words.most_common(), Some(("love", 2)));
/// assert_eq!(report.numbers.numbers(), &[2]);
/// ```
pub fn analyze(text: &str, config: &AnalysisConfig) -> TextReport {
    let numbers = extract_numbers(text);
    let emails = extract_emails(text);

    let cleaned = clean_text(text);
    let stop_words = config.stop_words();
    let words = remove_stop_words(&cleaned, &stop_words);
    let token_count = words.len();

    let ranked = word_frequencies(words);
    let lexical_diversity = ranked.lexical_diversity();
    let top_words = ranked.limit(config.words.top);
    let char_count = cleaned.chars().count();

    debug!(
        raw_len = text.len(),
        char_count,
        token_count,
        lexical_diversity,
        listed = top_words.len(),
        numbers = numbers.numbers().len(),
        emails = emails.len(),
        "analyzed text"
    );

    TextReport {
        cleaned,
        char_count,
        token_count,
        lexical_diversity,
        top_words,
        numbers,
        emails,
    }
}

/// Builds [`DescriptiveStats`] over `sample` and describes it.
pub fn summarize(sample: &[f64]) -> Result<Summary> {
    Ok(DescriptiveStats::new(sample)?.describe())
}
