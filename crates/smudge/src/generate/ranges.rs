//! Out-of-range value injection for numeric columns.

use crate::input::DataTable;
use crate::profile::{ColumnClass, ColumnStats, TableProfile};

use super::{affected_count, pick_rows};

/// Extreme sentinel magnitude, a classic "clearly wrong" placeholder.
const SENTINEL: f64 = 999_999.0;

/// Replace a fraction of cells in each numeric column with values outside
/// the profiled `[min, max]` range or with an extreme sentinel.
///
/// Null cells are skipped so earlier null injection survives. Integer
/// columns receive integer violations so the column's storage type survives
/// the corruption.
pub fn inject_range_violations(
    mut table: DataTable,
    profile: &TableProfile,
    rate: f64,
    rng: &mut fastrand::Rng,
) -> DataTable {
    let rows = table.row_count();
    if rows == 0 {
        return table;
    }

    for column in profile.columns_of_class(ColumnClass::Numeric) {
        let ColumnStats::Numeric {
            min, max, integer, ..
        } = &column.stats
        else {
            continue;
        };

        let count = affected_count(rate, rows);
        for row in pick_rows(rows, count, rng) {
            let occupied = table
                .get(row, column.position)
                .map(|v| !DataTable::is_null_value(v))
                .unwrap_or(false);
            if !occupied {
                continue;
            }
            let value = violation(*min, *max, rng);
            let rendered = if *integer {
                format!("{}", value.round() as i64)
            } else {
                format!("{value}")
            };
            table.set(row, column.position, rendered);
        }
    }

    table
}

/// Pick one of the four violation shapes: below range, above range, extreme
/// sentinel, or zero when zero itself is implausible.
fn violation(min: f64, max: f64, rng: &mut fastrand::Rng) -> f64 {
    let span = max - min;
    // Degenerate profile (single observed value): synthesize a margin.
    let margin = if span > 0.0 { span } else { min.abs().max(1.0) };

    match rng.usize(0..4) {
        0 => min - margin,
        1 => max + margin,
        2 => {
            if rng.bool() {
                SENTINEL
            } else {
                -SENTINEL
            }
        }
        _ => {
            if min > 0.0 || max < 0.0 {
                0.0
            } else {
                min - margin
            }
        }
    }
}
