//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Smudge: messy-data fixture generator
#[derive(Parser)]
#[command(name = "smudge")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a messy dataset from a clean sample file
    Generate {
        /// Path to the clean sample file (CSV/TSV/JSON)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output path (default: messy_data.<format>)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Target number of rows
        #[arg(short, long, default_value = "10000")]
        rows: usize,

        /// Duplicate rate (0-1)
        #[arg(short, long, default_value = "0.15")]
        duplicates: f64,

        /// Null rate (0-1)
        #[arg(short, long, default_value = "0.10")]
        nulls: f64,

        /// Wrong range rate (0-1)
        #[arg(short, long, default_value = "0.08")]
        wrong_ranges: f64,

        /// Wrong timestamp rate (0-1)
        #[arg(short = 't', long, default_value = "0.05")]
        wrong_timestamps: f64,

        /// Text corruption rate (0-1)
        #[arg(short = 'c', long, default_value = "0.05")]
        text_corruption: f64,

        /// RNG seed for reproducible output
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output format
        #[arg(short, long, default_value = "csv")]
        format: OutputFormat,

        /// Path for the plain-text analysis report
        /// (default: <output>_analysis.txt)
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Show the inferred column profiles of a sample file
    Profile {
        /// Path to the sample file (CSV/TSV/JSON)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}. Use csv or json.", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
