//! Text analysis error types.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Identifies one of the two documents passed to a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentSide {
    Left,
    Right,
}

impl Display for DocumentSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
        }
    }
}

/// Errors from text analysis.
///
/// Cleaning, counting, extraction, and validation are total; only
/// comparisons between documents can fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TextError {
    /// A document had no words left after cleaning and stop-word removal.
    #[error("{side} document has no words after cleaning")]
    EmptyDocument { side: DocumentSide },
}
