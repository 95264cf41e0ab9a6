//! Error types for the mbakit facade.

use mbakit_stats::StatsError;
use mbakit_text::TextError;

use crate::config::ConfigError;

/// Result type for mbakit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Any error mbakit can return.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Text(#[from] TextError),

    #[error(transparent)]
    Stats(#[from] StatsError),
}
