//! Stdout diagnostics for the parsed sequence and its binning
//!
//! This module provides:
//! - The two diagnostic lines (count, then the full sequence)
//! - A per-bin ASCII table using the [`tabled`] crate
//! - A one-line min/max/mean summary

use crate::histogram::DensityHistogram;
use tabled::{Table, Tabled};

/// One row of the per-bin diagnostic table
#[derive(Debug, Clone, Tabled)]
pub struct BinRow {
    /// Human-readable bin range, e.g. "5.00..5.17"
    #[tabled(rename = "Range")]
    pub range: String,
    /// Number of values in the bin
    #[tabled(rename = "Count")]
    pub count: usize,
    /// Normalized bar height
    #[tabled(rename = "Density")]
    pub density: String,
    /// Share of all values in this bin
    #[tabled(rename = "Percentage")]
    pub percentage: String,
}

impl BinRow {
    /// Creates a row with formatted density and percentage
    pub fn new(range: String, count: usize, density: f64, total: usize) -> Self {
        let percentage = if total == 0 {
            "0.00%".to_string()
        } else {
            format!("{:.2}%", (count as f64 / total as f64) * 100.0)
        };

        Self {
            range,
            count,
            density: format!("{:.4}", density),
            percentage,
        }
    }
}

/// Prints the two diagnostic lines: the count, then the sequence itself
pub fn print_sequence(values: &[i64]) {
    println!("{}", values.len());
    println!("{:?}", values);
}

/// Builds table rows from the histogram's bins
pub fn bin_rows(histogram: &DensityHistogram) -> Vec<BinRow> {
    histogram
        .bins
        .iter()
        .map(|bin| {
            BinRow::new(
                format!("{:.2}..{:.2}", bin.lower, bin.upper),
                bin.count,
                bin.density,
                histogram.total,
            )
        })
        .collect()
}

/// Formats bin rows as an ASCII table with an optional underlined title
pub fn format_bin_table(rows: &[BinRow], title: Option<&str>) -> String {
    if rows.is_empty() {
        return "No data available for binning".to_string();
    }

    let table = Table::new(rows).to_string();

    if let Some(title) = title {
        format!("{}\n{}\n{}", title, "=".repeat(title.len()), table)
    } else {
        table
    }
}

/// Min/max/mean of the parsed sequence
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryStats {
    pub min: i64,
    pub max: i64,
    pub mean: f64,
}

impl SummaryStats {
    /// Computes summary statistics, or `None` for an empty sequence
    pub fn compute(values: &[i64]) -> Option<Self> {
        let min = *values.iter().min()?;
        let max = *values.iter().max()?;
        let sum: i64 = values.iter().sum();
        Some(Self {
            min,
            max,
            mean: sum as f64 / values.len() as f64,
        })
    }
}

impl core::fmt::Display for SummaryStats {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "min: {}, max: {}, mean: {:.2}",
            self.min, self.max, self.mean
        )
    }
}
