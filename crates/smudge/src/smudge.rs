//! Main Smudge engine and public API.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SmudgeError};
use crate::generate::{
    corrupt_text, corrupt_timestamps, expand_rows, inject_duplicates, inject_nulls,
    inject_range_violations,
};
use crate::input::{DataTable, Parser, ParserConfig, SourceMetadata};
use crate::profile::{ColumnProfiler, TableProfile};
use crate::report::{QualityAnalyzer, QualityReport};

/// Generation parameters. Rates are fractions of the eligible population;
/// values at or above 1.0 saturate, values at or below 0.0 disable the
/// defect. Range validation belongs to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Number of rows in the generated table.
    pub target_rows: usize,
    /// Fraction of rows overwritten as exact/near duplicates.
    pub duplicate_rate: f64,
    /// Fraction of cells blanked out.
    pub null_rate: f64,
    /// Fraction of numeric cells pushed outside the profiled range.
    pub wrong_range_rate: f64,
    /// Fraction of datetime cells corrupted.
    pub wrong_timestamp_rate: f64,
    /// Fraction of text cells corrupted.
    pub text_corruption_rate: f64,
    /// RNG seed for reproducible output (None = seeded from entropy).
    pub seed: Option<u64>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            target_rows: 10_000,
            duplicate_rate: 0.15,
            null_rate: 0.10,
            wrong_range_rate: 0.08,
            wrong_timestamp_rate: 0.05,
            text_corruption_rate: 0.05,
            seed: None,
        }
    }
}

/// Result of generating a messy dataset.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    /// The generated table.
    pub table: DataTable,
    /// Profile of the clean input sample the defects were derived from.
    pub profile: TableProfile,
    /// Quality summary of the generated table.
    pub report: QualityReport,
}

/// The messy-data generation engine.
///
/// Profiles a clean sample, expands it to the target row count, and runs the
/// defect injectors in sequence over the working table:
/// duplicates, nulls, range violations, timestamp corruption, text
/// corruption. A final shuffle hides the injection order.
pub struct Smudge {
    config: GenerationConfig,
    parser: Parser,
    profiler: ColumnProfiler,
}

impl Smudge {
    /// Create an engine with default configuration.
    pub fn new() -> Self {
        Self::with_config(GenerationConfig::default())
    }

    /// Create an engine with custom configuration.
    pub fn with_config(config: GenerationConfig) -> Self {
        Self {
            config,
            parser: Parser::new(),
            profiler: ColumnProfiler::new(),
        }
    }

    /// Use a custom parser configuration for the input file.
    pub fn with_parser_config(mut self, parser: ParserConfig) -> Self {
        self.parser = Parser::with_config(parser);
        self
    }

    /// Load a clean sample file and generate a messy dataset from it.
    pub fn generate_file(
        &self,
        path: impl AsRef<Path>,
    ) -> Result<(GenerationResult, SourceMetadata)> {
        let (table, metadata) = self.parser.parse_file(path)?;
        let result = self.generate(&table)?;
        Ok((result, metadata))
    }

    /// Generate a messy dataset from an in-memory table.
    ///
    /// The input must be non-empty; the output has exactly
    /// `config.target_rows` rows and the input's column set and order.
    pub fn generate(&self, sample: &DataTable) -> Result<GenerationResult> {
        if sample.column_count() == 0 {
            return Err(SmudgeError::EmptyData(
                "input table has no columns".to_string(),
            ));
        }
        if sample.row_count() == 0 {
            return Err(SmudgeError::EmptyData(
                "input table has no rows".to_string(),
            ));
        }

        let profile = self.profiler.profile_table(sample);

        let mut rng = match self.config.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };

        let mut table = expand_rows(sample, self.config.target_rows, &mut rng);
        table = inject_duplicates(table, &profile, self.config.duplicate_rate, &mut rng);
        table = inject_nulls(table, &profile, self.config.null_rate, &mut rng);
        table = inject_range_violations(table, &profile, self.config.wrong_range_rate, &mut rng);
        table = corrupt_timestamps(table, &profile, self.config.wrong_timestamp_rate, &mut rng);
        table = corrupt_text(table, &profile, self.config.text_corruption_rate, &mut rng);

        rng.shuffle(&mut table.rows);

        let report = QualityAnalyzer::analyze(
            &table,
            &profile,
            (sample.row_count(), sample.column_count()),
        );

        Ok(GenerationResult {
            table,
            profile,
            report,
        })
    }
}

impl Default for Smudge {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> DataTable {
        DataTable::new(
            vec![
                "id".to_string(),
                "name".to_string(),
                "joined".to_string(),
            ],
            (1..=10)
                .map(|i| {
                    vec![
                        i.to_string(),
                        format!("user number {i}"),
                        format!("2023-01-{i:02}"),
                    ]
                })
                .collect(),
            b',',
        )
    }

    fn config(target_rows: usize, seed: u64) -> GenerationConfig {
        GenerationConfig {
            target_rows,
            seed: Some(seed),
            ..GenerationConfig::default()
        }
    }

    #[test]
    fn test_output_shape() {
        let smudge = Smudge::with_config(config(100, 1));
        let result = smudge.generate(&sample_table()).unwrap();

        assert_eq!(result.table.row_count(), 100);
        assert_eq!(result.table.headers, sample_table().headers);
        assert_eq!(result.report.generated_shape, (100, 3));
        assert_eq!(result.report.original_shape, (10, 3));
    }

    #[test]
    fn test_empty_input_rejected() {
        let empty = DataTable::new(vec!["a".to_string()], Vec::new(), b',');
        let smudge = Smudge::new();
        assert!(matches!(
            smudge.generate(&empty),
            Err(SmudgeError::EmptyData(_))
        ));

        let no_columns = DataTable::new(Vec::new(), Vec::new(), b',');
        assert!(smudge.generate(&no_columns).is_err());
    }

    #[test]
    fn test_seed_reproducibility() {
        let smudge = Smudge::with_config(config(50, 99));
        let first = smudge.generate(&sample_table()).unwrap();
        let second = smudge.generate(&sample_table()).unwrap();

        assert_eq!(first.table.rows, second.table.rows);
        assert_eq!(first.report, second.report);
    }

    #[test]
    fn test_different_seeds_differ() {
        let first = Smudge::with_config(config(50, 1))
            .generate(&sample_table())
            .unwrap();
        let second = Smudge::with_config(config(50, 2))
            .generate(&sample_table())
            .unwrap();

        assert_ne!(first.table.rows, second.table.rows);
    }

    #[test]
    fn test_zero_target_rows() {
        let mut cfg = config(0, 5);
        cfg.duplicate_rate = 0.5;
        let result = Smudge::with_config(cfg).generate(&sample_table()).unwrap();

        assert_eq!(result.table.row_count(), 0);
        assert_eq!(result.table.column_count(), 3);
        assert_eq!(result.report.total_nulls(), 0);
        assert_eq!(result.report.duplicate_rows, 0);
    }

    #[test]
    fn test_all_rates_zero_preserves_values() {
        let cfg = GenerationConfig {
            target_rows: 30,
            duplicate_rate: 0.0,
            null_rate: 0.0,
            wrong_range_rate: 0.0,
            wrong_timestamp_rate: 0.0,
            text_corruption_rate: 0.0,
            seed: Some(7),
        };
        let sample = sample_table();
        let result = Smudge::with_config(cfg).generate(&sample).unwrap();

        for row in &result.table.rows {
            assert!(sample.rows.contains(row));
        }
    }
}
