//! Property-based tests for the generation pipeline.
//!
//! These tests use proptest to generate random tables and configurations
//! and verify that the core invariants hold under all conditions:
//!
//! 1. **No panics**: generation never crashes on any valid input
//! 2. **Shape**: output row count always equals `target_rows`
//! 3. **Determinism**: a fixed seed reproduces the exact same table
//!
//! # Running Property Tests
//!
//! ```bash
//! cargo test -p smudge --test property_tests
//!
//! # More cases (slower but more thorough)
//! PROPTEST_CASES=2000 cargo test -p smudge --test property_tests
//! ```

use proptest::prelude::*;

use smudge::{DataTable, GenerationConfig, Smudge};

// =============================================================================
// Test Strategies
// =============================================================================

/// Cell values mixing numbers, words, dates, and null markers.
fn cell_value() -> impl Strategy<Value = String> {
    prop_oneof![
        // Integers
        (-1000i64..1000).prop_map(|n| n.to_string()),
        // Floats
        (-100.0f64..100.0).prop_map(|f| format!("{f:.2}")),
        // Short words
        "[a-z]{1,12}",
        // ISO dates in a plausible window
        (2000u32..2030, 1u32..13, 1u32..29)
            .prop_map(|(y, m, d)| format!("{y:04}-{m:02}-{d:02}")),
        // Null markers
        Just(String::new()),
        Just("NA".to_string()),
    ]
}

/// Small random tables: 1-5 columns, 1-30 rows.
fn arb_table() -> impl Strategy<Value = DataTable> {
    (1usize..6, 1usize..31).prop_flat_map(|(cols, rows)| {
        prop::collection::vec(prop::collection::vec(cell_value(), cols), rows).prop_map(
            move |rows| {
                let headers = (0..cols).map(|i| format!("col_{i}")).collect();
                DataTable::new(headers, rows, b',')
            },
        )
    })
}

/// Rates across the whole tolerated span, including saturating values.
fn arb_rate() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.0), 0.0..1.0, Just(1.0), Just(1.5)]
}

fn arb_config() -> impl Strategy<Value = GenerationConfig> {
    (
        0usize..120,
        arb_rate(),
        arb_rate(),
        arb_rate(),
        arb_rate(),
        arb_rate(),
        any::<u64>(),
    )
        .prop_map(
            |(target_rows, dup, null, range, ts, text, seed)| GenerationConfig {
                target_rows,
                duplicate_rate: dup,
                null_rate: null,
                wrong_range_rate: range,
                wrong_timestamp_rate: ts,
                text_corruption_rate: text,
                seed: Some(seed),
            },
        )
}

// =============================================================================
// Pipeline Properties
// =============================================================================

proptest! {
    /// Generation never panics and always hits the target row count.
    #[test]
    fn generation_preserves_shape(table in arb_table(), config in arb_config()) {
        let target = config.target_rows;
        let headers = table.headers.clone();

        let result = Smudge::with_config(config).generate(&table).unwrap();

        prop_assert_eq!(result.table.row_count(), target);
        prop_assert_eq!(result.table.headers, headers);
    }

    /// The same seed replays the exact same table.
    #[test]
    fn generation_is_deterministic(table in arb_table(), config in arb_config()) {
        let first = Smudge::with_config(config.clone()).generate(&table).unwrap();
        let second = Smudge::with_config(config).generate(&table).unwrap();

        prop_assert_eq!(first.table.rows, second.table.rows);
    }

    /// With all rates zero, every output row is byte-identical to some
    /// input row (expansion introduces no defects).
    #[test]
    fn expansion_copies_rows_verbatim(table in arb_table(), target in 0usize..200, seed in any::<u64>()) {
        let config = GenerationConfig {
            target_rows: target,
            duplicate_rate: 0.0,
            null_rate: 0.0,
            wrong_range_rate: 0.0,
            wrong_timestamp_rate: 0.0,
            text_corruption_rate: 0.0,
            seed: Some(seed),
        };

        let result = Smudge::with_config(config).generate(&table).unwrap();

        for row in &result.table.rows {
            prop_assert!(table.rows.contains(row));
        }
    }

    /// The report's generated shape always matches the table it describes.
    #[test]
    fn report_shape_is_consistent(table in arb_table(), config in arb_config()) {
        let result = Smudge::with_config(config).generate(&table).unwrap();

        prop_assert_eq!(
            result.report.generated_shape,
            (result.table.row_count(), result.table.column_count())
        );
        prop_assert_eq!(result.report.null_counts.len(), result.table.column_count());
    }
}
