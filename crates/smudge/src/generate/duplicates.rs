//! Exact and near duplicate injection.

use crate::input::DataTable;
use crate::profile::TableProfile;

use super::{affected_count, pick_rows};

/// Overwrite a fraction of rows with copies of randomly chosen donor rows.
///
/// Donors come from rows outside the target set, so every copy keeps a
/// surviving twin in the output; the count caps at `n - 1` to leave at least
/// one donor. Targets split evenly between exact copies and near-duplicates.
/// A near-duplicate perturbs text/categorical cells only, so the row stays
/// recognizably derived from its donor.
pub fn inject_duplicates(
    mut table: DataTable,
    profile: &TableProfile,
    rate: f64,
    rng: &mut fastrand::Rng,
) -> DataTable {
    let n = table.row_count();
    if n < 2 {
        return table;
    }

    let count = affected_count(rate, n).min(n - 1);
    let targets = pick_rows(n, count, rng);

    let mut is_target = vec![false; n];
    for &target in &targets {
        is_target[target] = true;
    }
    let donors: Vec<usize> = (0..n).filter(|&i| !is_target[i]).collect();

    for (i, target) in targets.into_iter().enumerate() {
        let donor = donors[rng.usize(0..donors.len())];
        let mut row = table.rows[donor].clone();
        // Alternate exact and near duplicates for an even split.
        if i % 2 == 1 {
            perturb_row(&mut row, profile, rng);
        }
        table.set_row(target, row);
    }

    table
}

/// Apply light textual perturbations to a copied row.
///
/// Each text/categorical cell is perturbed with probability 1/2; if the coin
/// flips all land on "leave it", one eligible cell is perturbed anyway so the
/// near-duplicate is never byte-identical to its donor.
fn perturb_row(row: &mut [String], profile: &TableProfile, rng: &mut fastrand::Rng) {
    let eligible: Vec<usize> = profile
        .textual_columns()
        .map(|c| c.position)
        .filter(|&p| {
            row.get(p)
                .map(|v| !DataTable::is_null_value(v))
                .unwrap_or(false)
        })
        .collect();

    if eligible.is_empty() {
        return;
    }

    let mut touched = false;
    for &position in &eligible {
        if rng.bool() {
            row[position] = perturb_value(&row[position], rng);
            touched = true;
        }
    }

    if !touched {
        let position = eligible[rng.usize(0..eligible.len())];
        row[position] = perturb_value(&row[position], rng);
    }
}

/// One small textual edit: whitespace padding, case toggle, space removal,
/// or a single-character substitution. Never a no-op.
fn perturb_value(value: &str, rng: &mut fastrand::Rng) -> String {
    let candidate = perturb_candidate(value, rng);
    if candidate == value {
        // Case toggle on caseless text or a substitution that drew the same
        // letter; trailing whitespace always changes the value.
        format!("{value} ")
    } else {
        candidate
    }
}

fn perturb_candidate(value: &str, rng: &mut fastrand::Rng) -> String {
    match rng.usize(0..4) {
        0 => {
            if rng.bool() {
                format!("{value} ")
            } else {
                format!(" {value}")
            }
        }
        1 => {
            if value.chars().any(|c| c.is_lowercase()) {
                value.to_uppercase()
            } else {
                value.to_lowercase()
            }
        }
        2 if value.contains(' ') => value.replacen(' ', "", 1),
        _ => {
            let mut chars: Vec<char> = value.chars().collect();
            if chars.is_empty() {
                return String::new();
            }
            let idx = rng.usize(0..chars.len());
            chars[idx] = rng.lowercase();
            chars.into_iter().collect()
        }
    }
}
