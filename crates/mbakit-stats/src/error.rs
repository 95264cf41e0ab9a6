//! Statistics error types.

/// Errors from building or querying [`DescriptiveStats`](crate::DescriptiveStats).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StatsError {
    /// The sample had no observations.
    #[error("sample is empty")]
    EmptySample,

    /// The sample contained NaN or an infinity.
    #[error("sample value at index {index} is not finite: {value}")]
    NonFiniteValue { index: usize, value: f64 },

    /// Every distinct value occurs equally often.
    #[error("no unique mode: every value occurs the same number of times")]
    NoUniqueMode,

    /// Variance and standard deviation need more observations.
    #[error("need at least {required} observations, got {actual}")]
    TooFewSamples { required: usize, actual: usize },
}
