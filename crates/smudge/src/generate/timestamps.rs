//! Timestamp corruption for datetime columns.

use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;

use crate::input::DataTable;
use crate::profile::{parse_datetime, ColumnClass, ColumnStats, TableProfile, DATE_FORMATS};

use super::{affected_count, pick_rows};

/// Marker written for an unparseable/missing timestamp. None of the known
/// date formats can parse it.
pub const INVALID_TIMESTAMP: &str = "not a date";

static HISTORICAL: Lazy<NaiveDateTime> = Lazy::new(|| ymd(1900, 1, 1));
static EPOCH: Lazy<NaiveDateTime> = Lazy::new(|| ymd(1970, 1, 1));
static FAR_FUTURE: Lazy<NaiveDateTime> = Lazy::new(|| ymd(2100, 1, 1));

fn ymd(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap()
}

/// Replace a fraction of cells in each datetime column with a historical
/// sentinel, a far-future date, the Unix epoch, an unparseable marker, or
/// the same instant rendered in a drifted format. Null cells are skipped so
/// earlier null injection survives.
pub fn corrupt_timestamps(
    mut table: DataTable,
    profile: &TableProfile,
    rate: f64,
    rng: &mut fastrand::Rng,
) -> DataTable {
    let rows = table.row_count();
    if rows == 0 {
        return table;
    }

    for column in profile.columns_of_class(ColumnClass::Datetime) {
        let ColumnStats::Datetime { min, format, .. } = &column.stats else {
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
            let corrupted = match rng.usize(0..5) {
                0 => HISTORICAL.format(format).to_string(),
                1 => FAR_FUTURE.format(format).to_string(),
                2 => EPOCH.format(format).to_string(),
                3 => INVALID_TIMESTAMP.to_string(),
                _ => drifted(table.get(row, column.position), *min, format, rng),
            };
            table.set(row, column.position, corrupted);
        }
    }

    table
}

/// Re-render the cell's instant in a format other than the column's
/// dominant one. Unparseable cells drift the profiled minimum instead.
fn drifted(
    cell: Option<&str>,
    fallback: NaiveDateTime,
    dominant: &str,
    rng: &mut fastrand::Rng,
) -> String {
    let instant = cell
        .and_then(parse_datetime)
        .map(|(dt, _)| dt)
        .unwrap_or(fallback);

    let alternates: Vec<&&str> = DATE_FORMATS.iter().filter(|f| **f != dominant).collect();
    let alternate = alternates[rng.usize(0..alternates.len())];

    instant.format(alternate).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::ColumnProfiler;

    fn dates_table(values: Vec<&str>) -> DataTable {
        DataTable::new(
            vec!["when".to_string()],
            values.into_iter().map(|v| vec![v.to_string()]).collect(),
            b',',
        )
    }

    fn year_2020_table(n: usize) -> DataTable {
        dates_table(
            (0..n)
                .map(|i| match i % 3 {
                    0 => "2020-02-10",
                    1 => "2020-07-04",
                    _ => "2020-11-30",
                })
                .collect(),
        )
    }

    #[test]
    fn test_full_rate_corrupts_every_cell() {
        let table = year_2020_table(60);
        let profile = ColumnProfiler::new().profile_table(&table);
        let mut rng = fastrand::Rng::with_seed(31);

        let after = corrupt_timestamps(table, &profile, 1.0, &mut rng);

        for value in after.column_values(0) {
            let in_2020_dominant_format =
                NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok_and(|d| {
                    d.format("%Y").to_string() == "2020"
                });
            assert!(
                !in_2020_dominant_format,
                "cell survived corruption: {value}"
            );
        }
    }

    #[test]
    fn test_corruption_shapes() {
        let table = year_2020_table(200);
        let profile = ColumnProfiler::new().profile_table(&table);
        let mut rng = fastrand::Rng::with_seed(32);

        let after = corrupt_timestamps(table, &profile, 1.0, &mut rng);

        let mut saw_invalid = false;
        let mut saw_out_of_range = false;
        let mut saw_drift = false;

        for value in after.column_values(0) {
            if value == INVALID_TIMESTAMP {
                saw_invalid = true;
            } else if let Ok(d) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
                let year: i32 = d.format("%Y").to_string().parse().unwrap();
                assert_ne!(year, 2020, "in-range survivor: {value}");
                saw_out_of_range = true;
            } else {
                // Not the dominant format: format drift.
                saw_drift = true;
            }
        }

        assert!(saw_invalid && saw_out_of_range && saw_drift);
    }

    #[test]
    fn test_rate_zero_is_noop() {
        let table = year_2020_table(10);
        let profile = ColumnProfiler::new().profile_table(&table);
        let mut rng = fastrand::Rng::with_seed(33);

        let before = table.clone();
        let after = corrupt_timestamps(table, &profile, 0.0, &mut rng);
        assert_eq!(after.rows, before.rows);
    }

    #[test]
    fn test_single_distinct_date_still_corrupted() {
        let table = dates_table(vec!["2021-05-05", "2021-05-05", "2021-05-05"]);
        let profile = ColumnProfiler::new().profile_table(&table);
        let mut rng = fastrand::Rng::with_seed(34);

        let after = corrupt_timestamps(table, &profile, 1.0, &mut rng);

        for value in after.column_values(0) {
            assert_ne!(value, "2021-05-05");
        }
    }

    #[test]
    fn test_null_cells_left_alone() {
        let table = dates_table(vec!["2020-01-01", "", "2020-02-02", "NA"]);
        let profile = ColumnProfiler::new().profile_table(&table);
        let mut rng = fastrand::Rng::with_seed(35);

        let after = corrupt_timestamps(table, &profile, 1.0, &mut rng);

        assert_eq!(after.get(1, 0), Some(""));
        assert_eq!(after.get(3, 0), Some("NA"));
    }

    #[test]
    fn test_invalid_marker_is_unparseable() {
        assert!(parse_datetime(INVALID_TIMESTAMP).is_none());
    }
}
