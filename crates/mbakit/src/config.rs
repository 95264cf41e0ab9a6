//! Analysis configuration.
//!
//! Settings are plain TOML handed in by the caller; the library never reads
//! files or environment variables on its own.
//!
//! ```toml
//! [words]
//! top = 3
//! remove_stop_words = true
//! extra_stop_words = ["python", "data"]
//! ```

use mbakit_text::StopWords;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML config: {source}")]
    ParseError {
        #[from]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Settings for [`analyze`](crate::analyze).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    pub words: WordsConfig,
}

/// How words are counted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WordsConfig {
    /// Keep only this many of the most common words; all when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<usize>,
    /// Drop the built-in English stop words before counting.
    pub remove_stop_words: bool,
    /// Additional stop words, dropped only when `remove_stop_words` is set.
    pub extra_stop_words: Vec<String>,
}

impl Default for WordsConfig {
    fn default() -> Self {
        Self {
            top: None,
            remove_stop_words: true,
            extra_stop_words: Vec::new(),
        }
    }
}

impl AnalysisConfig {
    /// Parses and validates a TOML document.
    ///
    /// Missing sections and keys fall back to their defaults; unknown keys
    /// are rejected.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Limits the report to the `top` most common words.
    pub fn with_top(mut self, top: usize) -> Self {
        self.words.top = Some(top);
        self
    }

    /// Counts every word, stop words included.
    pub fn keep_stop_words(mut self) -> Self {
        self.words.remove_stop_words = false;
        self
    }

    /// Checks that every extra stop word could ever match a cleaned token.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for word in &self.words.extra_stop_words {
            if word.is_empty() {
                return Err(ConfigError::ValidationError(
                    "words.extra_stop_words contains an empty entry".to_string(),
                ));
            }
            if word.chars().any(char::is_whitespace) {
                return Err(ConfigError::ValidationError(format!(
                    "stop word {word:?} contains whitespace"
                )));
            }
            if word.chars().any(char::is_uppercase) {
                return Err(ConfigError::ValidationError(format!(
                    "stop word {word:?} must be lowercase"
                )));
            }
        }
        Ok(())
    }

    /// The stop-word set these settings describe.
    pub fn stop_words(&self) -> StopWords {
        if self.words.remove_stop_words {
            StopWords::english().with_words(self.words.extra_stop_words.iter().cloned())
        } else {
            StopWords::none()
        }
    }
}
