//! Row expansion and the defect injection pipeline.
//!
//! Each injector takes the working table by value, mutates the cells it
//! selected, and returns the table. Injectors run sequentially and share one
//! seeded RNG, so a fixed seed reproduces the whole pipeline.

mod duplicates;
mod expand;
mod nulls;
mod ranges;
mod text;
mod timestamps;

pub use duplicates::inject_duplicates;
pub use expand::expand_rows;
pub use nulls::inject_nulls;
pub use ranges::inject_range_violations;
pub use text::corrupt_text;
pub use timestamps::corrupt_timestamps;

/// Number of items a rate selects out of a population.
///
/// Rates at or above 1.0 saturate at the whole population; rates at or
/// below 0.0 select nothing.
pub(crate) fn affected_count(rate: f64, population: usize) -> usize {
    if rate <= 0.0 || population == 0 {
        return 0;
    }
    let count = (rate * population as f64).round() as usize;
    count.min(population)
}

/// Pick `count` distinct row indices out of `rows`, in random order.
pub(crate) fn pick_rows(rows: usize, count: usize, rng: &mut fastrand::Rng) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..rows).collect();
    rng.shuffle(&mut indices);
    indices.truncate(count);
    indices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_affected_count_rounds() {
        assert_eq!(affected_count(0.15, 100), 15);
        assert_eq!(affected_count(0.5, 3), 2);
        assert_eq!(affected_count(0.0, 100), 0);
    }

    #[test]
    fn test_affected_count_saturates() {
        assert_eq!(affected_count(1.0, 100), 100);
        assert_eq!(affected_count(2.5, 100), 100);
        assert_eq!(affected_count(-0.3, 100), 0);
    }

    #[test]
    fn test_pick_rows_distinct() {
        let mut rng = fastrand::Rng::with_seed(7);
        let mut picked = pick_rows(10, 6, &mut rng);
        picked.sort_unstable();
        picked.dedup();
        assert_eq!(picked.len(), 6);
        assert!(picked.iter().all(|&i| i < 10));
    }
}
