//! CSV/TSV/JSON reader with delimiter detection.

use std::fs::File;
use std::io::Read as _;
use std::path::Path;

use serde_json::Value;
use sha2::{Digest, Sha256};

use super::source::{DataTable, SourceMetadata};
use crate::error::{Result, SmudgeError};

/// Delimiters to try when auto-detecting.
const DELIMITERS: &[u8] = &[b'\t', b',', b';', b'|'];

/// Parser configuration.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Delimiter to use for delimited files (None = auto-detect).
    pub delimiter: Option<u8>,
    /// Whether delimited files have a header row.
    pub has_header: bool,
    /// Quote character.
    pub quote: u8,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: None,
            has_header: true,
            quote: b'"',
        }
    }
}

/// Parses tabular sample files.
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Create a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse a file and return the data table and metadata.
    ///
    /// The format is chosen by extension: `.json` files are parsed as an
    /// array of flat objects, everything else as delimited text.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<(DataTable, SourceMetadata)> {
        let path = path.as_ref();

        let mut file = File::open(path).map_err(|e| SmudgeError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut contents = Vec::new();
        file.read_to_end(&mut contents).map_err(|e| SmudgeError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let size_bytes = contents.len() as u64;

        let mut hasher = Sha256::new();
        hasher.update(&contents);
        let hash = format!("sha256:{:x}", hasher.finalize());

        let is_json = path
            .extension()
            .map(|e| e.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let (table, format) = if is_json {
            (self.parse_json(&contents)?, "json".to_string())
        } else {
            let delimiter = match self.config.delimiter {
                Some(d) => d,
                None => detect_delimiter(&contents)?,
            };
            let table = self.parse_delimited(&contents, delimiter)?;
            let format = match delimiter {
                b'\t' => "tsv",
                b',' => "csv",
                b';' => "csv-semicolon",
                b'|' => "psv",
                _ => "delimited",
            }
            .to_string();
            (table, format)
        };

        let metadata = SourceMetadata::new(
            path.to_path_buf(),
            hash,
            size_bytes,
            format,
            table.row_count(),
            table.column_count(),
        );

        Ok((table, metadata))
    }

    /// Parse delimited bytes directly.
    pub fn parse_delimited(&self, bytes: &[u8], delimiter: u8) -> Result<DataTable> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(self.config.has_header)
            .quote(self.config.quote)
            .flexible(true)
            .from_reader(bytes);

        let mut headers: Vec<String> = if self.config.has_header {
            reader.headers()?.iter().map(|s| s.to_string()).collect()
        } else {
            Vec::new()
        };

        let mut rows = Vec::new();

        for result in reader.records() {
            let record = result?;
            if headers.is_empty() {
                headers = (0..record.len())
                    .map(|i| format!("column_{}", i + 1))
                    .collect();
            }

            let mut row: Vec<String> = record.iter().map(|s| s.to_string()).collect();
            // Normalize ragged rows to the header width.
            row.resize(headers.len(), String::new());
            rows.push(row);
        }

        if headers.is_empty() {
            return Err(SmudgeError::EmptyData("No columns found".to_string()));
        }
        if rows.is_empty() {
            return Err(SmudgeError::EmptyData("No data rows found".to_string()));
        }

        Ok(DataTable::new(headers, rows, delimiter))
    }

    /// Parse a JSON array of flat objects into a table.
    ///
    /// Column order follows the first object; objects missing a key get a
    /// null cell, extra keys in later objects are ignored.
    pub fn parse_json(&self, bytes: &[u8]) -> Result<DataTable> {
        let value: Value = serde_json::from_slice(bytes)?;

        let Value::Array(objects) = value else {
            return Err(SmudgeError::UnsupportedFormat(
                "JSON input must be an array of objects".to_string(),
            ));
        };

        let mut headers: Vec<String> = Vec::new();
        for obj in &objects {
            let Value::Object(map) = obj else {
                return Err(SmudgeError::UnsupportedFormat(
                    "JSON input must be an array of objects".to_string(),
                ));
            };
            if headers.is_empty() {
                headers = map.keys().cloned().collect();
            }
        }

        if headers.is_empty() {
            return Err(SmudgeError::EmptyData("No columns found".to_string()));
        }

        let rows: Vec<Vec<String>> = objects
            .iter()
            .filter_map(|obj| obj.as_object())
            .map(|map| {
                headers
                    .iter()
                    .map(|h| map.get(h).map(json_cell).unwrap_or_default())
                    .collect()
            })
            .collect();

        if rows.is_empty() {
            return Err(SmudgeError::EmptyData("No data rows found".to_string()));
        }

        Ok(DataTable::new(headers, rows, b','))
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a JSON scalar as a cell value.
fn json_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Detect the delimiter by checking which candidate splits the first lines
/// into a consistent number of fields.
fn detect_delimiter(bytes: &[u8]) -> Result<u8> {
    let text = String::from_utf8_lossy(bytes);
    let lines: Vec<&str> = text
        .lines()
        .filter(|l| !l.trim().is_empty())
        .take(10)
        .collect();

    if lines.is_empty() {
        return Err(SmudgeError::EmptyData("No lines to analyze".to_string()));
    }

    let mut best = b',';
    let mut best_score = 0usize;

    for &delim in DELIMITERS {
        let counts: Vec<usize> = lines
            .iter()
            .map(|line| count_unquoted(line, delim))
            .collect();

        let first = counts[0];
        if first == 0 {
            continue;
        }

        let consistent = counts.iter().all(|&c| c == first);
        // Consistent field counts dominate; tab gets a nudge since literal
        // tabs rarely appear inside values.
        let score = if consistent {
            first * 1000 + usize::from(delim == b'\t') * 100
        } else {
            first
        };

        if score > best_score {
            best_score = score;
            best = delim;
        }
    }

    Ok(best)
}

/// Count delimiter occurrences in a line, respecting double quotes.
fn count_unquoted(line: &str, delimiter: u8) -> usize {
    let mut count = 0;
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            c if c == delimiter as char && !in_quotes => count += 1,
            _ => {}
        }
    }

    count
}
