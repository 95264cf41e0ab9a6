//! # mbakit-stats: Descriptive statistics
//!
//! [`DescriptiveStats`] wraps a copy of a numeric sample and answers the
//! usual summary questions about it: count, sum, extremes, mean, median,
//! mode, sample variance and standard deviation, and a weighted frequency
//! distribution. [`DescriptiveStats::describe`] gathers everything into a
//! printable [`Summary`].
//!
//! Arithmetic is plain `f64` following the textbook formulas; nothing is
//! compensated or rescaled.
//!
//! # Example
//!
//! ```
//! use mbakit_stats::{DescriptiveStats, ModeReport};
//!
//! let ages = [31.0, 26.0, 34.0, 26.0, 27.0];
//! let stats = DescriptiveStats::new(&ages)?;
//!
//! assert_eq!(stats.count(), 5);
//! assert_eq!(stats.range(), 8.0);
//! assert_eq!(stats.median(), 27.0);
//! assert_eq!(stats.mode()?, ModeReport { value: 26.0, count: 2 });
//! # Ok::<(), mbakit_stats::StatsError>(())
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

mod error;
mod summary;

pub use error::StatsError;
pub use summary::Summary;

/// Result type for statistics operations.
pub type Result<T> = std::result::Result<T, StatsError>;

/// Multiplier applied to raw counts in [`DescriptiveStats::freq_dist`].
///
/// Kept for compatibility with the reports the curriculum prints.
pub const FREQUENCY_WEIGHT: f64 = 4.0;

/// Observations needed for sample variance and standard deviation.
const MIN_SAMPLES_FOR_SPREAD: usize = 2;

/// The most frequent value of a sample and how often it occurs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModeReport {
    pub value: f64,
    pub count: usize,
}

/// One row of a frequency distribution: `count * FREQUENCY_WEIGHT` and the value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrequencyEntry {
    pub weight: f64,
    pub value: f64,
}

/// Summary statistics over an owned copy of a sample.
///
/// Construction rejects empty samples and non-finite values, so every
/// accessor is defined. Only [`mode`](Self::mode),
/// [`variance`](Self::variance), and [`stdev`](Self::stdev) can fail.
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptiveStats {
    /// Observations in the order given.
    sample: Vec<f64>,
    /// The same observations, ascending.
    sorted: Vec<f64>,
}

/// Hash key under which `0.0` and `-0.0` count as the same value.
fn value_key(value: f64) -> u64 {
    if value == 0.0 { 0 } else { value.to_bits() }
}

impl DescriptiveStats {
    /// Copies `sample` and validates it.
    ///
    /// # Errors
    ///
    /// - [`StatsError::EmptySample`] if `sample` is empty
    /// - [`StatsError::NonFiniteValue`] for the first NaN or infinity
    pub fn new(sample: &[f64]) -> Result<Self> {
        if sample.is_empty() {
            return Err(StatsError::EmptySample);
        }
        if let Some((index, &value)) = sample.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(StatsError::NonFiniteValue { index, value });
        }

        let sample = sample.to_vec();
        let mut sorted = sample.clone();
        sorted.sort_by(f64::total_cmp);

        debug!(count = sample.len(), "built descriptive stats");

        Ok(Self { sample, sorted })
    }

    /// The copied observations in their original order.
    pub fn sample(&self) -> &[f64] {
        &self.sample
    }

    pub fn count(&self) -> usize {
        self.sample.len()
    }

    pub fn sum(&self) -> f64 {
        self.sample.iter().sum()
    }

    pub fn min(&self) -> f64 {
        self.sorted[0]
    }

    pub fn max(&self) -> f64 {
        self.sorted[self.sorted.len() - 1]
    }

    /// `max - min`.
    pub fn range(&self) -> f64 {
        self.max() - self.min()
    }

    /// `sum / count`.
    pub fn mean(&self) -> f64 {
        self.sum() / self.count() as f64
    }

    /// Middle value of the sorted sample; the average of the two middle
    /// values when the count is even.
    pub fn median(&self) -> f64 {
        let mid = self.sorted.len() / 2;
        if self.sorted.len().is_multiple_of(2) {
            (self.sorted[mid - 1] + self.sorted[mid]) / 2.0
        } else {
            self.sorted[mid]
        }
    }

    /// Distinct values with their counts, in first-seen order.
    fn tallies(&self) -> Vec<(f64, usize)> {
        let mut slots: HashMap<u64, usize> = HashMap::new();
        let mut tallies: Vec<(f64, usize)> = Vec::new();

        for &value in &self.sample {
            let slot = *slots.entry(value_key(value)).or_insert_with(|| {
                tallies.push((value, 0));
                tallies.len() - 1
            });
            tallies[slot].1 += 1;
        }

        tallies
    }

    /// The most frequent value.
    ///
    /// When several values share the highest count, the one that appears
    /// first in the sample wins. A sample with a single distinct value has
    /// that value as its mode.
    ///
    /// # Errors
    ///
    /// [`StatsError::NoUniqueMode`] when there are at least two distinct
    /// values and all of them occur equally often.
    pub fn mode(&self) -> Result<ModeReport> {
        let tallies = self.tallies();
        let top = tallies.iter().map(|&(_, count)| count).max().unwrap_or(0);

        if tallies.len() > 1 && tallies.iter().all(|&(_, count)| count == top) {
            return Err(StatsError::NoUniqueMode);
        }

        tallies
            .into_iter()
            .find(|&(_, count)| count == top)
            .map(|(value, count)| ModeReport { value, count })
            // Unreachable: `new` rejects empty samples.
            .ok_or(StatsError::EmptySample)
    }

    fn require_spread(&self) -> Result<()> {
        if self.count() < MIN_SAMPLES_FOR_SPREAD {
            return Err(StatsError::TooFewSamples {
                required: MIN_SAMPLES_FOR_SPREAD,
                actual: self.count(),
            });
        }
        Ok(())
    }

    /// Sample variance, `Σ(x - mean)² / (count - 1)`.
    ///
    /// # Errors
    ///
    /// [`StatsError::TooFewSamples`] with fewer than two observations.
    pub fn variance(&self) -> Result<f64> {
        self.require_spread()?;
        let mean = self.mean();
        let squares: f64 = self.sample.iter().map(|x| (x - mean).powi(2)).sum();
        Ok(squares / (self.count() - 1) as f64)
    }

    /// Sample standard deviation, the square root of [`variance`](Self::variance).
    ///
    /// # Errors
    ///
    /// [`StatsError::TooFewSamples`] with fewer than two observations.
    pub fn stdev(&self) -> Result<f64> {
        self.variance().map(f64::sqrt)
    }

    /// `(count * 4.0, value)` for each distinct value, largest first.
    ///
    /// Rows are ordered by weight, then by value, both descending.
    pub fn freq_dist(&self) -> Vec<FrequencyEntry> {
        let mut rows: Vec<FrequencyEntry> = self
            .tallies()
            .into_iter()
            .map(|(value, count)| FrequencyEntry {
                weight: count as f64 * FREQUENCY_WEIGHT,
                value,
            })
            .collect();

        rows.sort_by(|a, b| {
            b.weight
                .total_cmp(&a.weight)
                .then_with(|| b.value.total_cmp(&a.value))
        });
        rows
    }

    /// Every statistic in one [`Summary`].
    ///
    /// Statistics that are undefined for this sample (no unique mode, fewer
    /// than two observations) are left as `None`.
    pub fn describe(&self) -> Summary {
        Summary {
            count: self.count(),
            sum: self.sum(),
            min: self.min(),
            max: self.max(),
            range: self.range(),
            mean: self.mean(),
            median: self.median(),
            mode: self.mode().ok(),
            stdev: self.stdev().ok(),
            variance: self.variance().ok(),
            freq_dist: self.freq_dist(),
        }
    }
}

impl TryFrom<&[f64]> for DescriptiveStats {
    type Error = StatsError;

    fn try_from(sample: &[f64]) -> Result<Self> {
        Self::new(sample)
    }
}

impl TryFrom<Vec<f64>> for DescriptiveStats {
    type Error = StatsError;

    fn try_from(sample: Vec<f64>) -> Result<Self> {
        Self::new(&sample)
    }
}
