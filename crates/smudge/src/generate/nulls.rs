//! Null injection with column bias and burst clustering.

use crate::input::DataTable;
use crate::profile::TableProfile;

use super::affected_count;

/// Longest run of contiguous rows blanked by a single draw.
const MAX_BURST: usize = 4;

/// Blank out cells until roughly `rate * rows * cols` new nulls exist.
///
/// Column selection is weighted 3:1 toward text/categorical columns, the
/// pattern real optional fields show. Placement happens in bursts of up to
/// four contiguous rows rather than independent cells, mimicking systematic
/// gaps from collection outages.
pub fn inject_nulls(
    mut table: DataTable,
    profile: &TableProfile,
    rate: f64,
    rng: &mut fastrand::Rng,
) -> DataTable {
    let rows = table.row_count();
    let cols = table.column_count();
    if rows == 0 || cols == 0 {
        return table;
    }

    let non_null = table
        .rows
        .iter()
        .flatten()
        .filter(|v| !DataTable::is_null_value(v))
        .count();
    let budget = affected_count(rate, rows * cols).min(non_null);
    if budget == 0 {
        return table;
    }

    // Saturated: every cell goes, no point sampling for the last few.
    if budget == non_null {
        for row in &mut table.rows {
            for cell in row {
                cell.clear();
            }
        }
        return table;
    }

    // Weighted pool of column positions; columns that are already entirely
    // null offer nothing to blank and are left out.
    let mut pool: Vec<usize> = Vec::new();
    for column in &profile.columns {
        let all_null = table
            .column_values(column.position)
            .all(DataTable::is_null_value);
        if all_null {
            continue;
        }
        let weight = if column.class.is_textual() { 3 } else { 1 };
        for _ in 0..weight {
            pool.push(column.position);
        }
    }
    if pool.is_empty() {
        return table;
    }

    let mut placed = 0;
    // Non-null cells can run out before the budget does (saturated rates,
    // pre-existing nulls), so bound the loop.
    let mut attempts = budget * 20 + 100;

    while placed < budget && attempts > 0 {
        attempts -= 1;

        let col = pool[rng.usize(0..pool.len())];
        let anchor = rng.usize(0..rows);
        let burst = rng.usize(1..=MAX_BURST);

        for row in anchor..(anchor + burst).min(rows) {
            if placed == budget {
                break;
            }
            let occupied = table
                .get(row, col)
                .map(|v| !DataTable::is_null_value(v))
                .unwrap_or(false);
            if occupied {
                table.set(row, col, String::new());
                placed += 1;
            }
        }
    }

    table
}
