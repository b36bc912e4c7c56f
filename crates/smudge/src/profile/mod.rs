//! Column classification and per-column statistics.

mod profiler;
mod types;

pub use profiler::ColumnProfiler;
pub use types::{parse_datetime, ColumnClass, ColumnProfile, ColumnStats, TableProfile, DATE_FORMATS};
