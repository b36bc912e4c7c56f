//! Text corruption for text and categorical columns.

use crate::input::DataTable;
use crate::profile::TableProfile;

use super::{affected_count, pick_rows};

/// Symbols used for character substitution.
const SYMBOLS: &[char] = &['!', '@', '#', '$', '%', '&', '*', '?', '~'];

/// Apply one random corruption transform to a fraction of the cells in each
/// text/categorical column. Null and empty cells are skipped; a corrupted
/// cell always differs from its previous value.
pub fn corrupt_text(
    mut table: DataTable,
    profile: &TableProfile,
    rate: f64,
    rng: &mut fastrand::Rng,
) -> DataTable {
    let rows = table.row_count();
    if rows == 0 {
        return table;
    }

    for column in profile.textual_columns() {
        let count = affected_count(rate, rows);
        for row in pick_rows(rows, count, rng) {
            let Some(original) = table.get(row, column.position) else {
                continue;
            };
            if DataTable::is_null_value(original) {
                continue;
            }
            let corrupted = transform(original, rng);
            table.set(row, column.position, corrupted);
        }
    }

    table
}

/// Pick one of the six transforms. Falls back to suffixing when the chosen
/// transform would leave the value unchanged (reversed palindromes, case
/// flips on caseless text).
fn transform(value: &str, rng: &mut fastrand::Rng) -> String {
    let corrupted = match rng.usize(0..6) {
        0 => scramble_case(value, rng),
        1 => substitute_chars(value, rng),
        2 => value.chars().rev().collect(),
        3 => String::new(),
        4 => format!("{value}???"),
        _ => format!("{value}{value}"),
    };

    if corrupted == value {
        format!("{value}???")
    } else {
        corrupted
    }
}

/// Randomize the casing of every letter.
fn scramble_case(value: &str, rng: &mut fastrand::Rng) -> String {
    value
        .chars()
        .flat_map(|c| {
            let flipped: Vec<char> = if rng.bool() {
                c.to_uppercase().collect()
            } else {
                c.to_lowercase().collect()
            };
            flipped
        })
        .collect()
}

/// Replace up to a quarter of the characters with random symbols.
fn substitute_chars(value: &str, rng: &mut fastrand::Rng) -> String {
    let mut chars: Vec<char> = value.chars().collect();
    if chars.is_empty() {
        return String::new();
    }

    let edits = (chars.len() / 4).max(1);
    for _ in 0..edits {
        let idx = rng.usize(0..chars.len());
        chars[idx] = SYMBOLS[rng.usize(0..SYMBOLS.len())];
    }
    chars.into_iter().collect()
}
