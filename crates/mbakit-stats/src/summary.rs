//! Printable summary of a sample.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::{FrequencyEntry, ModeReport};

/// Every statistic of a [`DescriptiveStats`](crate::DescriptiveStats) at once.
///
/// `mode`, `stdev`, and `variance` are `None` when the sample does not
/// define them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub count: usize,
    pub sum: f64,
    pub min: f64,
    pub max: f64,
    pub range: f64,
    pub mean: f64,
    pub median: f64,
    pub mode: Option<ModeReport>,
    pub stdev: Option<f64>,
    pub variance: Option<f64>,
    pub freq_dist: Vec<FrequencyEntry>,
}

fn write_spread(f: &mut fmt::Formatter<'_>, label: &str, value: Option<f64>) -> fmt::Result {
    match value {
        Some(value) => writeln!(f, "{label}: {value:.2}"),
        None => writeln!(f, "{label}: n/a"),
    }
}

impl Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Count: {}", self.count)?;
        writeln!(f, "Sum: {}", self.sum)?;
        writeln!(f, "Min: {}", self.min)?;
        writeln!(f, "Max: {}", self.max)?;
        writeln!(f, "Range: {}", self.range)?;
        writeln!(f, "Mean: {}", self.mean)?;
        writeln!(f, "Median: {}", self.median)?;
        match self.mode {
            Some(ModeReport { value, count }) => writeln!(f, "Mode: {value} (count: {count})")?,
            None => writeln!(f, "Mode: none")?,
        }
        write_spread(f, "Standard Deviation", self.stdev)?;
        write_spread(f, "Variance", self.variance)?;

        write!(f, "Frequency Distribution: [")?;
        for (i, entry) in self.freq_dist.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "({:.1}, {})", entry.weight, entry.value)?;
        }
        write!(f, "]")
    }
}
