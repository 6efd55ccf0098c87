//! Equal-width binning with density normalization
//!
//! This module turns the parsed number sequence into a [`DensityHistogram`]:
//! a fixed count of equal-width bins over `[min, max]` whose bar heights are
//! normalized so the total bar area sums to 1.

use thiserror::Error;

/// Errors that can occur while building a histogram
#[derive(Error, Debug)]
pub enum HistogramError {
    #[error("Cannot build a histogram from an empty sequence")]
    EmptyInput,

    #[error("Bin count must be at least 1, got {bins}")]
    InvalidBinCount { bins: usize },
}

type Result<T> = core::result::Result<T, HistogramError>;

/// A single histogram bin covering the half-open interval `[lower, upper)`.
///
/// The last bin of a histogram is closed on both ends so the maximum value
/// is counted.
#[derive(Debug, Clone, PartialEq)]
pub struct Bin {
    /// Inclusive lower edge of the bin
    pub lower: f64,
    /// Upper edge of the bin
    pub upper: f64,
    /// Number of values that fell into this bin
    pub count: usize,
    /// Normalized bar height: `count / (total * bin_width)`
    pub density: f64,
}

/// Equal-width density histogram over a sequence of integers
#[derive(Debug, Clone)]
pub struct DensityHistogram {
    /// Bins in ascending order of their edges
    pub bins: Vec<Bin>,
    /// Width shared by every bin
    pub bin_width: f64,
    /// Total number of values binned
    pub total: usize,
}

impl DensityHistogram {
    /// Bins the values into `bin_count` equal-width intervals over `[min, max]`
    ///
    /// When every value is identical the range is widened to
    /// `[min - 0.5, max + 0.5]` so binning never divides by a zero width.
    ///
    /// # Arguments
    /// * `values` - The sequence to bin; order does not matter
    /// * `bin_count` - Number of equal-width bins, at least 1
    ///
    /// # Returns
    /// * `Ok(DensityHistogram)` - The binned, density-normalized histogram
    /// * `Err(HistogramError)` - If the sequence is empty or the bin count is 0
    pub fn from_values(values: &[i64], bin_count: usize) -> Result<Self> {
        if bin_count == 0 {
            return Err(HistogramError::InvalidBinCount { bins: bin_count });
        }
        if values.is_empty() {
            return Err(HistogramError::EmptyInput);
        }

        let mut lower = values.iter().copied().min().unwrap_or(0) as f64;
        let mut upper = values.iter().copied().max().unwrap_or(0) as f64;

        // Single-valued input: widen the range so bins have nonzero width.
        if lower == upper {
            lower -= 0.5;
            upper += 0.5;
        }

        let bin_width = (upper - lower) / bin_count as f64;
        let mut counts = vec![0usize; bin_count];

        for &value in values {
            let offset = (value as f64 - lower) / bin_width;
            // Clamp so the maximum value lands in the last bin.
            let index = (offset as usize).min(bin_count - 1);
            counts[index] += 1;
        }

        let total = values.len();
        let bins = counts
            .into_iter()
            .enumerate()
            .map(|(index, count)| {
                let bin_lower = lower + index as f64 * bin_width;
                Bin {
                    lower: bin_lower,
                    upper: bin_lower + bin_width,
                    count,
                    density: count as f64 / (total as f64 * bin_width),
                }
            })
            .collect();

        Ok(DensityHistogram {
            bins,
            bin_width,
            total,
        })
    }

    /// Lower edge of the value range covered by the histogram
    pub fn range_start(&self) -> f64 {
        self.bins.first().map(|bin| bin.lower).unwrap_or(0.0)
    }

    /// Upper edge of the value range covered by the histogram
    pub fn range_end(&self) -> f64 {
        self.bins.last().map(|bin| bin.upper).unwrap_or(0.0)
    }

    /// Largest bar height across all bins
    pub fn max_density(&self) -> f64 {
        self.bins.iter().map(|bin| bin.density).fold(0.0, f64::max)
    }
}
