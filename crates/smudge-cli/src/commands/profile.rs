//! Profile command - show inferred column profiles for a sample file.

use std::path::PathBuf;

use colored::Colorize;
use smudge::{ColumnProfiler, ColumnStats, Parser};

pub fn run(file: PathBuf, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let parser = Parser::new();
    let (table, source) = parser.parse_file(&file)?;
    let profile = ColumnProfiler::new().profile_table(&table);

    if json {
        println!("{}", serde_json::to_string_pretty(&profile)?);
        return Ok(());
    }

    println!(
        "{} {} ({} rows, {} columns, {})",
        "Profiled".cyan().bold(),
        source.file.white(),
        source.row_count,
        source.column_count,
        source.format
    );
    println!();

    for col in &profile.columns {
        println!(
            "{:20} {}",
            col.name.white().bold(),
            format!("{:?}", col.class).yellow()
        );
        match &col.stats {
            ColumnStats::Numeric {
                min,
                max,
                mean,
                integer,
            } => {
                println!("  range: [{min}, {max}], mean {mean:.2}");
                if *integer {
                    println!("  integer-valued");
                }
            }
            ColumnStats::Datetime { min, max, format } => {
                println!("  range: [{min}, {max}]");
                println!("  format: {format}");
            }
            ColumnStats::Categorical { counts } => {
                println!("  {} distinct values", counts.len());
                for (value, count) in counts.iter().take(5) {
                    println!("    {value}: {count}");
                }
                if counts.len() > 5 {
                    println!("    ...");
                }
            }
            ColumnStats::Text {
                min_length,
                max_length,
                avg_length,
            } => {
                println!(
                    "  lengths: {min_length}-{max_length} chars, avg {avg_length:.1}"
                );
            }
        }
    }

    Ok(())
}
