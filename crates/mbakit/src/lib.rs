//! # mbakit
//!
//! Text analysis and descriptive statistics for the coding-for-MBA
//! curriculum.
//!
//! The lessons keep returning to two small tools: counting the words of a
//! messy paragraph, and summarizing a list of numbers. This crate gathers
//! both behind one dependency:
//!
//! - **Text**: [`text`] cleans, counts, validates, and extracts
//! - **Statistics**: [`stats`] summarizes a numeric sample
//! - **Pipeline**: [`analyze`] runs the text steps end to end, configured by
//!   [`AnalysisConfig`]
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                    mbakit                    │
//! │   AnalysisConfig → analyze() / summarize()   │
//! │  ┌──────────────────┐  ┌──────────────────┐  │
//! │  │   mbakit-text    │  │   mbakit-stats   │  │
//! │  │ clean → count    │  │ DescriptiveStats │  │
//! │  └──────────────────┘  └──────────────────┘  │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```
//! use mbakit::{AnalysisConfig, analyze, summarize};
//!
//! let config = AnalysisConfig::from_toml_str("[words]\ntop = 2\n")?;
//! let report = analyze("I love teaching. If you do not love teaching what else can you love.", &config);
//! assert_eq!(report.top_words.most_common(), Some(("love", 3)));
//!
//! let summary = summarize(&[31.0, 26.0, 34.0, 26.0])?;
//! assert_eq!(summary.median, 28.5);
//! # Ok::<(), mbakit::Error>(())
//! ```

mod config;
mod error;
mod pipeline;

pub use config::{AnalysisConfig, ConfigError, WordsConfig};
pub use error::{Error, Result};
pub use pipeline::{TextReport, analyze, summarize};

/// Text cleaning, counting, validation, and extraction.
pub mod text {
    pub use mbakit_text::*;
}

/// Descriptive statistics over numeric samples.
pub mod stats {
    pub use mbakit_stats::*;
}

// Re-export the types most callers touch
pub use mbakit_stats::{DescriptiveStats, FrequencyEntry, ModeReport, StatsError, Summary};
pub use mbakit_text::{NumberSummary, StopWords, TextError, WordCount};
