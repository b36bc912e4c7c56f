//! Column classification by majority vote over parsed values.

use std::collections::HashMap;

use indexmap::IndexMap;

use super::types::{parse_datetime, ColumnClass, ColumnProfile, ColumnStats, TableProfile};
use crate::input::DataTable;

/// How a single value parses, used for the majority vote. The declaration
/// order breaks count ties: ambiguity resolves toward `Other` (text).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
enum ValueKind {
    Numeric,
    Datetime,
    Other,
}

/// Classifies columns and extracts the statistics the injectors need.
pub struct ColumnProfiler {
    /// A string column with at most this many distinct values is categorical.
    categorical_unique_cap: usize,
    /// ...or when distinct/non-null is at or below this ratio.
    categorical_ratio: f64,
}

impl ColumnProfiler {
    /// Create a profiler with default thresholds.
    pub fn new() -> Self {
        Self {
            categorical_unique_cap: 20,
            categorical_ratio: 0.5,
        }
    }

    /// Profile every column of a table.
    ///
    /// Never fails: all-null and ambiguous columns fall back to the Text
    /// class with zeroed statistics.
    pub fn profile_table(&self, table: &DataTable) -> TableProfile {
        let columns = table
            .headers
            .iter()
            .enumerate()
            .map(|(position, name)| self.profile_column(table, name, position))
            .collect();

        TableProfile { columns }
    }

    /// Profile a single column.
    pub fn profile_column(&self, table: &DataTable, name: &str, position: usize) -> ColumnProfile {
        let values: Vec<&str> = table
            .column_values(position)
            .filter(|v| !DataTable::is_null_value(v))
            .collect();

        let class_and_stats = if values.is_empty() {
            None
        } else {
            self.classify(&values)
        };

        let (class, stats) = class_and_stats.unwrap_or_else(|| {
            (
                ColumnClass::Text,
                ColumnStats::Text {
                    min_length: 0,
                    max_length: 0,
                    avg_length: 0.0,
                },
            )
        });

        ColumnProfile {
            name: name.to_string(),
            position,
            class,
            stats,
        }
    }

    /// Run the majority vote and compute the winning class's statistics.
    fn classify(&self, values: &[&str]) -> Option<(ColumnClass, ColumnStats)> {
        let mut kind_counts: HashMap<ValueKind, usize> = HashMap::new();
        for value in values {
            *kind_counts.entry(detect_kind(value)).or_insert(0) += 1;
        }

        // Tie-break on the kind itself so the vote never depends on hash
        // iteration order.
        let winner = kind_counts
            .iter()
            .max_by_key(|&(kind, count)| (*count, *kind))
            .map(|(kind, _)| *kind)?;

        match winner {
            ValueKind::Numeric => Some(numeric_stats(values)),
            ValueKind::Datetime => datetime_stats(values),
            ValueKind::Other => Some(self.string_stats(values)),
        }
    }

    /// Decide categorical vs free text for string values.
    fn string_stats(&self, values: &[&str]) -> (ColumnClass, ColumnStats) {
        let mut counts: IndexMap<String, usize> = IndexMap::new();
        for value in values {
            *counts.entry(value.to_string()).or_insert(0) += 1;
        }

        let unique_ratio = counts.len() as f64 / values.len() as f64;
        if counts.len() <= self.categorical_unique_cap || unique_ratio <= self.categorical_ratio {
            return (ColumnClass::Categorical, ColumnStats::Categorical { counts });
        }

        let lengths: Vec<usize> = values.iter().map(|v| v.chars().count()).collect();
        let min_length = lengths.iter().copied().min().unwrap_or(0);
        let max_length = lengths.iter().copied().max().unwrap_or(0);
        let avg_length = lengths.iter().sum::<usize>() as f64 / lengths.len() as f64;

        (
            ColumnClass::Text,
            ColumnStats::Text {
                min_length,
                max_length,
                avg_length,
            },
        )
    }
}

impl Default for ColumnProfiler {
    fn default() -> Self {
        Self::new()
    }
}

/// Detect how a single value parses.
fn detect_kind(value: &str) -> ValueKind {
    let trimmed = value.trim();
    if trimmed.parse::<f64>().is_ok() {
        return ValueKind::Numeric;
    }
    if parse_datetime(trimmed).is_some() {
        return ValueKind::Datetime;
    }
    ValueKind::Other
}

/// Min/max/mean over the values that parse as numbers.
fn numeric_stats(values: &[&str]) -> (ColumnClass, ColumnStats) {
    let parsed: Vec<f64> = values
        .iter()
        .filter_map(|v| v.trim().parse::<f64>().ok())
        .collect();

    let min = parsed.iter().copied().fold(f64::INFINITY, f64::min);
    let max = parsed.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mean = parsed.iter().sum::<f64>() / parsed.len().max(1) as f64;
    let integer = values
        .iter()
        .filter(|v| v.trim().parse::<f64>().is_ok())
        .all(|v| v.trim().parse::<i64>().is_ok());

    (
        ColumnClass::Numeric,
        ColumnStats::Numeric {
            min: if min.is_finite() { min } else { 0.0 },
            max: if max.is_finite() { max } else { 0.0 },
            mean,
            integer,
        },
    )
}

/// Min/max timestamp plus the dominant format among the values that parse.
fn datetime_stats(values: &[&str]) -> Option<(ColumnClass, ColumnStats)> {
    let mut format_counts: HashMap<&'static str, usize> = HashMap::new();
    let mut min = None;
    let mut max = None;

    for value in values {
        let Some((dt, format)) = parse_datetime(value) else {
            continue;
        };
        *format_counts.entry(format).or_insert(0) += 1;
        min = Some(match min {
            Some(m) if m < dt => m,
            _ => dt,
        });
        max = Some(match max {
            Some(m) if m > dt => m,
            _ => dt,
        });
    }

    let format = format_counts
        .iter()
        .max_by_key(|&(format, count)| (*count, *format))
        .map(|(f, _)| (*f).to_string())?;

    Some((
        ColumnClass::Datetime,
        ColumnStats::Datetime {
            min: min?,
            max: max?,
            format,
        },
    ))
}
