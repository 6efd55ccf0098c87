mod histogram;
mod parsing;
mod plot;
mod report;

use argh::FromArgs;
use histogram::DensityHistogram;
use parsing::{parse_vector, TailPolicy};
use std::path::PathBuf;
use thiserror::Error;

/// Title displayed at the top of the rendered chart
const CHART_TITLE: &str = "Density Histogram";

/// Renders a probability-density histogram from a comma-separated integer file
#[derive(FromArgs, Debug)]
pub struct Args {
    /// input file of comma-separated integers (default: Vector.txt)
    #[argh(option, short = 'i', default = "PathBuf::from(\"Vector.txt\")")]
    input: PathBuf,

    /// output PNG path (default: histogram.png)
    #[argh(option, short = 'o', default = "PathBuf::from(\"histogram.png\")")]
    output: PathBuf,

    /// number of equal-width bins (default: 30)
    #[argh(option, short = 'b', default = "30")]
    bins: usize,

    /// trailing-token policy: drop-always or drop-empty (default: drop-always)
    #[argh(option, short = 't', default = "TailPolicy::DropAlways")]
    tail_policy: TailPolicy,
}

/// Errors that can occur while running the tool
#[derive(Error, Debug)]
pub enum VectorHistError {
    #[error("Parsing error: {0}")]
    Parsing(#[from] parsing::ParsingError),

    #[error("Histogram error: {0}")]
    Histogram(#[from] histogram::HistogramError),

    #[error("Plot error: {0}")]
    Plot(#[from] plot::PlotError),
}

type Result<T> = core::result::Result<T, VectorHistError>;

fn main() -> Result<()> {
    let args: Args = argh::from_env();

    // Validate arguments before touching the file system
    if args.bins == 0 {
        return Err(histogram::HistogramError::InvalidBinCount { bins: args.bins }.into());
    }

    if !args.input.exists() {
        eprintln!("Error: Input file does not exist: {}", args.input.display());
        std::process::exit(1);
    }

    // Load and parse the number sequence
    let numbers = parse_vector(&args.input, args.tail_policy)?;

    // Diagnostic output: count, then the full sequence
    report::print_sequence(&numbers);

    // Bin the sequence; an empty sequence fails here, after the diagnostics
    let hist = DensityHistogram::from_values(&numbers, args.bins)?;

    let rows = report::bin_rows(&hist);
    println!();
    println!(
        "{}",
        report::format_bin_table(&rows, Some("Bin Distribution"))
    );

    if let Some(stats) = report::SummaryStats::compute(&numbers) {
        println!("{}", stats);
    }

    // Render the histogram to the output PNG
    plot::render_histogram(&hist, CHART_TITLE, &args.output)?;
    println!("Saved histogram to {}", args.output.display());

    Ok(())
}
