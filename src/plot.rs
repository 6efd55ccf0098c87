//! Histogram rendering via the [`plotters`] crate
//!
//! Renders the density histogram as a PNG with fixed 1200x800 resolution.
//! Uses the bitmap backend so rendering works in headless environments
//! (Docker/CI) without a display server.

use crate::histogram::DensityHistogram;
use plotters::prelude::*;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during plot generation
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("Failed to save plot to file: {0}")]
    FileSave(#[from] std::io::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

type Result<T> = core::result::Result<T, PlotError>;

/// Renders a density histogram and saves it as a PNG file
///
/// Bars are drawn as filled rectangles spanning each bin's edges, with bar
/// height equal to the bin's density. The x-axis is labeled "Data" and the
/// y-axis "Probability".
///
/// # Arguments
/// * `histogram` - The binned, density-normalized data to draw
/// * `title` - Chart title displayed at the top of the plot
/// * `output_path` - Path where the PNG file should be saved
///
/// # Returns
/// * `Ok(())` - If the chart was successfully created and saved
/// * `Err(PlotError)` - If an error occurred during chart generation
///
/// # Chart Properties
/// * Resolution: 1200x800 pixels
/// * Format: PNG
/// * Y-axis: 0 to just above the tallest bar, labeled "Probability"
/// * X-axis: linear over the histogram's value range, labeled "Data"
/// * Grid: Enabled for better readability
pub fn render_histogram(
    histogram: &DensityHistogram,
    title: &str,
    output_path: &Path,
) -> Result<()> {
    if histogram.bins.is_empty() {
        return Err(PlotError::InvalidData("Histogram has no bins".to_string()));
    }

    let root = BitMapBackend::new(output_path, (1200, 800));
    let drawing_area = root.into_drawing_area();

    drawing_area
        .fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let x_range = histogram.range_start()..histogram.range_end();
    // Headroom above the tallest bar so it does not touch the frame.
    let y_max = (histogram.max_density() * 1.1).max(f64::MIN_POSITIVE);
    let y_range = 0.0..y_max;

    let mut chart_context = ChartBuilder::on(&drawing_area)
        .caption(title, ("sans-serif", 40))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(85)
        .build_cartesian_2d(x_range, y_range)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart_context
        .configure_mesh()
        .x_desc("Data")
        .x_label_style(("sans-serif", 35))
        .y_desc("Probability")
        .y_label_style(("sans-serif", 35))
        .label_style(("sans-serif", 25))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    chart_context
        .draw_series(histogram.bins.iter().map(|bin| {
            Rectangle::new(
                [(bin.lower, 0.0), (bin.upper, bin.density)],
                BLUE.filled(),
            )
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    drawing_area
        .present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}
