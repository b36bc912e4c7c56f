//! Smudge: messy-data fixture generator for tabular datasets.
//!
//! Smudge takes a clean CSV/JSON sample, expands it to a target row count,
//! and deliberately injects realistic data-quality defects: duplicates,
//! missing values, out-of-range numbers, corrupted timestamps, and mangled
//! text. The result is a reproducible "dirty" fixture whose statistical
//! shape still resembles the original sample, ready to exercise downstream
//! cleaning and validation pipelines.
//!
//! # Core Principles
//!
//! - **Profile-driven**: defects respect each column's inferred type and
//!   observed value range, so corruption stays plausible
//! - **Reproducible**: a fixed seed replays the exact same dataset
//! - **Composable**: defect rates are independent; a row can accumulate
//!   several defects
//!
//! # Example
//!
//! ```no_run
//! use smudge::{GenerationConfig, Smudge};
//!
//! let config = GenerationConfig {
//!     target_rows: 1000,
//!     seed: Some(42),
//!     ..GenerationConfig::default()
//! };
//!
//! let (result, source) = Smudge::with_config(config)
//!     .generate_file("clean_sample.csv")
//!     .unwrap();
//!
//! println!("Generated {} rows from {}", result.table.row_count(), source.file);
//! println!("Duplicates: {}", result.report.duplicate_rows);
//! ```

pub mod error;
pub mod generate;
pub mod input;
pub mod output;
pub mod profile;
pub mod report;

mod smudge;

pub use crate::smudge::{GenerationConfig, GenerationResult, Smudge};
pub use error::{Result, SmudgeError};
pub use input::{DataTable, Parser, ParserConfig, SourceMetadata};
pub use profile::{ColumnClass, ColumnProfile, ColumnProfiler, ColumnStats, TableProfile};
pub use report::{QualityAnalyzer, QualityReport};
