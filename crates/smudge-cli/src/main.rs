//! Smudge CLI - messy-data fixture generator.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            file,
            output,
            rows,
            duplicates,
            nulls,
            wrong_ranges,
            wrong_timestamps,
            text_corruption,
            seed,
            format,
            report,
        } => commands::generate::run(
            file,
            output,
            rows,
            duplicates,
            nulls,
            wrong_ranges,
            wrong_timestamps,
            text_corruption,
            seed,
            format,
            report,
            cli.verbose,
        ),

        Commands::Profile { file, json } => commands::profile::run(file, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
