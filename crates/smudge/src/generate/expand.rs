//! Row-count expansion by sampling the clean sample.

use crate::input::DataTable;

/// Produce a table with exactly `target_rows` rows by sampling the input.
///
/// Shrinking samples without replacement; growing keeps every original row
/// and fills the gap with uniform draws (with replacement). Cell values are
/// copied verbatim, so every output row is identical to some input row. An
/// empty input has nothing to sample and comes back empty at any target.
pub fn expand_rows(table: &DataTable, target_rows: usize, rng: &mut fastrand::Rng) -> DataTable {
    let n = table.row_count();
    if n == 0 {
        return DataTable::new(table.headers.clone(), Vec::new(), table.delimiter);
    }

    let rows: Vec<Vec<String>> = if target_rows <= n {
        let mut indices: Vec<usize> = (0..n).collect();
        rng.shuffle(&mut indices);
        indices
            .into_iter()
            .take(target_rows)
            .map(|i| table.rows[i].clone())
            .collect()
    } else {
        let mut rows = table.rows.clone();
        rows.reserve(target_rows - n);
        while rows.len() < target_rows {
            let donor = rng.usize(0..n);
            rows.push(table.rows[donor].clone());
        }
        rows
    };

    DataTable::new(table.headers.clone(), rows, table.delimiter)
}
