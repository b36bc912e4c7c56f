//! Quality analysis of the generated table.

use std::collections::HashMap;
use std::fmt::Write as _;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::input::DataTable;
use crate::profile::{ColumnClass, TableProfile};

/// Summary statistics over a generated table. Derived and read-only;
/// computing it twice over the same table yields the same report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityReport {
    /// Rows and columns of the clean input sample.
    pub original_shape: (usize, usize),
    /// Rows and columns of the generated table.
    pub generated_shape: (usize, usize),
    /// Rows that are exact copies of an earlier row.
    pub duplicate_rows: usize,
    /// Null cells per column, in column order.
    pub null_counts: IndexMap<String, usize>,
    /// Approximate in-memory footprint of the generated table.
    pub memory_bytes: usize,
    /// Inferred class per column, in column order.
    pub column_classes: IndexMap<String, ColumnClass>,
}

impl QualityReport {
    /// Total null cells across all columns.
    pub fn total_nulls(&self) -> usize {
        self.null_counts.values().sum()
    }

    /// Fraction of rows that are duplicates, 0.0 for an empty table.
    pub fn duplicate_fraction(&self) -> f64 {
        if self.generated_shape.0 == 0 {
            0.0
        } else {
            self.duplicate_rows as f64 / self.generated_shape.0 as f64
        }
    }

    /// Render the report as plain text, the shape the analysis file uses.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Data Quality Analysis Report");
        let _ = writeln!(out, "{}", "=".repeat(30));
        let _ = writeln!(
            out,
            "Original shape: {} rows x {} columns",
            self.original_shape.0, self.original_shape.1
        );
        let _ = writeln!(
            out,
            "Generated shape: {} rows x {} columns",
            self.generated_shape.0, self.generated_shape.1
        );
        let _ = writeln!(
            out,
            "Exact duplicates: {} ({:.2}%)",
            self.duplicate_rows,
            self.duplicate_fraction() * 100.0
        );
        let _ = writeln!(out, "Memory usage: {:.2} MB", self.memory_megabytes());

        let _ = writeln!(out, "\nNull values by column:");
        for (name, nulls) in &self.null_counts {
            if *nulls > 0 {
                let percent = *nulls as f64 / self.generated_shape.0.max(1) as f64 * 100.0;
                let _ = writeln!(out, "  {name}: {nulls} ({percent:.2}%)");
            }
        }

        let _ = writeln!(out, "\nColumn classes:");
        for (name, class) in &self.column_classes {
            let _ = writeln!(out, "  {name}: {class:?}");
        }

        out
    }

    /// Memory footprint in megabytes.
    pub fn memory_megabytes(&self) -> f64 {
        self.memory_bytes as f64 / (1024.0 * 1024.0)
    }
}

/// Computes a [`QualityReport`] from a final table. Pure read-only pass.
pub struct QualityAnalyzer;

impl QualityAnalyzer {
    /// Analyze the generated table against the original shape.
    ///
    /// Safe on empty tables: every count comes back zero.
    pub fn analyze(
        table: &DataTable,
        profile: &TableProfile,
        original_shape: (usize, usize),
    ) -> QualityReport {
        let mut seen: HashMap<&[String], usize> = HashMap::new();
        let mut duplicate_rows = 0;
        for row in &table.rows {
            let entry = seen.entry(row.as_slice()).or_insert(0);
            if *entry > 0 {
                duplicate_rows += 1;
            }
            *entry += 1;
        }

        let mut null_counts = IndexMap::new();
        for (position, name) in table.headers.iter().enumerate() {
            let nulls = table
                .column_values(position)
                .filter(|v| DataTable::is_null_value(v))
                .count();
            null_counts.insert(name.clone(), nulls);
        }

        // Cell payloads plus the container overhead of each String.
        let cell_bytes: usize = table.rows.iter().flatten().map(|v| v.len()).sum();
        let overhead =
            (table.row_count() * table.column_count() + table.headers.len())
                * std::mem::size_of::<String>();
        let header_bytes: usize = table.headers.iter().map(|h| h.len()).sum();
        let memory_bytes = cell_bytes + header_bytes + overhead;

        let column_classes = profile
            .columns
            .iter()
            .map(|c| (c.name.clone(), c.class))
            .collect();

        QualityReport {
            original_shape,
            generated_shape: (table.row_count(), table.column_count()),
            duplicate_rows,
            null_counts,
            memory_bytes,
            column_classes,
        }
    }
}
