//! Profile type definitions.

use chrono::{NaiveDate, NaiveDateTime};
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

// Cheap shape check before attempting the full chrono parse.
static DATE_SHAPES: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"^\d{4}[-/]\d{2}[-/]\d{2}").unwrap(), // ISO-ish
        Regex::new(r"^\d{2}[-/]\d{2}[-/]\d{4}").unwrap(), // US/European
    ]
});

/// Date formats the profiler recognizes, most specific first. The first
/// entry that parses a value becomes a vote for that format.
pub const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d-%m-%Y",
];

/// Try to parse a value against the known date formats.
///
/// Returns the parsed timestamp and the format that matched. Date-only
/// formats are promoted to midnight timestamps.
pub fn parse_datetime(value: &str) -> Option<(NaiveDateTime, &'static str)> {
    let trimmed = value.trim();
    if !DATE_SHAPES.iter().any(|p| p.is_match(trimmed)) {
        return None;
    }
    for format in DATE_FORMATS.iter().copied() {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some((dt, format));
        }
        if let Some(dt) = NaiveDate::parse_from_str(trimmed, format)
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
        {
            return Some((dt, format));
        }
    }
    None
}

/// Inferred class of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnClass {
    /// Numeric values (integer or float).
    Numeric,
    /// Date or timestamp values.
    Datetime,
    /// Low-cardinality string values drawn from a fixed set.
    Categorical,
    /// Free text.
    Text,
}

impl ColumnClass {
    /// Returns true for the string-like classes that duplicate perturbation
    /// and text corruption may touch.
    pub fn is_textual(&self) -> bool {
        matches!(self, ColumnClass::Categorical | ColumnClass::Text)
    }
}

/// Class-specific statistics for a column.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ColumnStats {
    Numeric {
        min: f64,
        max: f64,
        mean: f64,
        /// True when every observed value parses as an integer.
        integer: bool,
    },
    Datetime {
        min: NaiveDateTime,
        max: NaiveDateTime,
        /// Dominant format string among parsed values.
        format: String,
    },
    Categorical {
        /// Observed values with their frequencies, in first-seen order.
        counts: IndexMap<String, usize>,
    },
    Text {
        min_length: usize,
        max_length: usize,
        avg_length: f64,
    },
}

/// Profile of a single column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnProfile {
    /// Column name.
    pub name: String,
    /// Zero-based column position.
    pub position: usize,
    /// Inferred class.
    pub class: ColumnClass,
    /// Class-specific statistics.
    pub stats: ColumnStats,
}

/// Profiles for every column of a table, in column order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableProfile {
    pub columns: Vec<ColumnProfile>,
}

impl TableProfile {
    /// Get a column profile by name.
    pub fn get(&self, name: &str) -> Option<&ColumnProfile> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Columns of a given class.
    pub fn columns_of_class(&self, class: ColumnClass) -> impl Iterator<Item = &ColumnProfile> {
        self.columns.iter().filter(move |c| c.class == class)
    }

    /// Columns whose cells hold string-like values.
    pub fn textual_columns(&self) -> impl Iterator<Item = &ColumnProfile> {
        self.columns.iter().filter(|c| c.class.is_textual())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iso_date() {
        let (dt, format) = parse_datetime("2024-01-15").unwrap();
        assert_eq!(format, "%Y-%m-%d");
        assert_eq!(dt.format("%Y-%m-%d").to_string(), "2024-01-15");
    }

    #[test]
    fn test_parse_datetime_with_time() {
        let (dt, format) = parse_datetime("2024-01-15T10:30:00").unwrap();
        assert_eq!(format, "%Y-%m-%dT%H:%M:%S");
        assert_eq!(dt.format("%H:%M:%S").to_string(), "10:30:00");
    }

    #[test]
    fn test_parse_us_date() {
        let (_, format) = parse_datetime("01/15/2024").unwrap();
        assert_eq!(format, "%m/%d/%Y");
    }

    #[test]
    fn test_parse_rejects_text() {
        assert!(parse_datetime("not a date").is_none());
        assert!(parse_datetime("12345").is_none());
    }
}
