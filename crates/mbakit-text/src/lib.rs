//! # mbakit-text: Text analysis helpers
//!
//! Small, pure functions for the word-counting exercises that recur across
//! the curriculum:
//!
//! - Cleaning ([`clean_text`]): lowercase, strip markup, URLs, punctuation,
//!   and digit-bearing words, in a fixed order
//! - Counting ([`most_common_words`], [`word_frequencies`],
//!   [`count_words_and_lines`])
//! - Extraction ([`extract_numbers`], [`extract_emails`])
//! - Validation ([`is_valid_identifier`], [`is_valid_email`])
//! - Stop words ([`StopWords`], [`remove_stop_words`])
//! - Similarity ([`document_similarity`])
//!
//! None of these functions hold state between calls. The only shared data
//! are compiled regexes, built once on first use.
//!
//! # Example
//!
//! ```
//! use mbakit_text::{clean_text, most_common_words};
//!
//! let text = "I love teaching. If you do not love teaching what else can you love.";
//! let counts = most_common_words(&clean_text(text), Some(2));
//!
//! assert_eq!(counts.entries(), &[("love".to_string(), 3), ("teaching".to_string(), 2)]);
//! ```

mod clean;
mod count;
mod error;
mod numbers;
mod similarity;
mod stop_words;
mod validate;

pub use clean::clean_text;
pub use count::{TextCounts, WordCount, count_words_and_lines, most_common_words, word_frequencies};
pub use error::{DocumentSide, TextError};
pub use numbers::{NumberSummary, extract_numbers};
pub use similarity::document_similarity;
pub use stop_words::{StopWords, remove_stop_words};
pub use validate::{extract_emails, is_valid_email, is_valid_identifier};
