//! Generate command - produce a messy dataset from a clean sample.

use std::path::PathBuf;

use colored::Colorize;
use smudge::output::{write_csv, write_json, write_report};
use smudge::{GenerationConfig, Smudge};

use crate::cli::OutputFormat;

#[allow(clippy::too_many_arguments)]
pub fn run(
    file: PathBuf,
    output: Option<PathBuf>,
    rows: usize,
    duplicates: f64,
    nulls: f64,
    wrong_ranges: f64,
    wrong_timestamps: f64,
    text_corruption: f64,
    seed: Option<u64>,
    format: OutputFormat,
    report: Option<PathBuf>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    for (name, rate) in [
        ("--duplicates", duplicates),
        ("--nulls", nulls),
        ("--wrong-ranges", wrong_ranges),
        ("--wrong-timestamps", wrong_timestamps),
        ("--text-corruption", text_corruption),
    ] {
        if !(0.0..=1.0).contains(&rate) {
            return Err(format!("{name} must be between 0 and 1, got {rate}").into());
        }
    }

    let config = GenerationConfig {
        target_rows: rows,
        duplicate_rate: duplicates,
        null_rate: nulls,
        wrong_range_rate: wrong_ranges,
        wrong_timestamp_rate: wrong_timestamps,
        text_corruption_rate: text_corruption,
        seed,
    };

    println!(
        "{} {}",
        "Generating from".cyan().bold(),
        file.display().to_string().white()
    );

    let (result, source) = Smudge::with_config(config).generate_file(&file)?;

    println!(
        "Loaded {} rows, {} columns ({})",
        source.row_count.to_string().white().bold(),
        source.column_count.to_string().white().bold(),
        source.format
    );

    if verbose {
        println!();
        println!("{}", "Column profiles:".yellow().bold());
        for col in &result.profile.columns {
            println!("  {:20} {:?}", col.name, col.class);
        }
    }

    let output_path = output.unwrap_or_else(|| PathBuf::from(format!("messy_data.{format}")));
    match format {
        OutputFormat::Csv => write_csv(&result.table, &output_path)?,
        OutputFormat::Json => write_json(&result.table, &output_path)?,
    }

    println!();
    println!(
        "{} {} ({} rows)",
        "Saved to".green().bold(),
        output_path.display().to_string().white(),
        result.table.row_count().to_string().white().bold()
    );

    print_summary(&result.report);

    let report_path = report.unwrap_or_else(|| analysis_path(&output_path));
    write_report(&result.report, &report_path)?;
    println!(
        "{} {}",
        "Analysis report saved to".green().bold(),
        report_path.display().to_string().white()
    );

    Ok(())
}

/// Derive `<output stem>_analysis.txt` next to the output file.
fn analysis_path(output: &std::path::Path) -> PathBuf {
    let stem = output
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "messy_data".to_string());
    output.with_file_name(format!("{stem}_analysis.txt"))
}

fn print_summary(report: &smudge::QualityReport) {
    println!();
    println!("{}", "Quality summary".yellow().bold());
    println!(
        "  Exact duplicates: {} ({:.2}%)",
        report.duplicate_rows.to_string().red(),
        report.duplicate_fraction() * 100.0
    );
    println!(
        "  Null cells: {}",
        report.total_nulls().to_string().red()
    );
    println!("  Memory: {:.2} MB", report.memory_megabytes());

    for (name, nulls) in &report.null_counts {
        if *nulls > 0 {
            println!("    {name}: {nulls} nulls");
        }
    }
}
