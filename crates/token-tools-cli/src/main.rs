mod commands;
mod logging;
mod report;

use clap::{CommandFactory, Parser};
use colored::*;
use commands::{Cli, Commands};
use dotenv::dotenv;
use report::ConsoleReporter;
use token_tools_core::{NormalizeOptions, RunSummary, TokenEngine};
use tracing::error;

fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let _guard = logging::init_logger();

    let args = Cli::parse();
    let engine = TokenEngine::new();
    let reporter = ConsoleReporter::new();

    match args.command {
        Some(Commands::Validate {
            target_directory,
            recursive,
        }) => {
            println!("Starting directory: {}", target_directory.display());
            println!();
            match engine.validate(&target_directory, recursive, &reporter) {
                Ok(summary) => print_summary(&summary),
                Err(err) => error!("Error: {}", err),
            }
        }
        Some(Commands::Normalize {
            target_directory,
            recursive,
            output_prefix,
            dry_run,
        }) => {
            println!("Starting directory: {}", target_directory.display());
            println!();
            let options = NormalizeOptions {
                output_prefix,
                dry_run,
            };
            match engine.normalize(&target_directory, recursive, &options, &reporter) {
                Ok(summary) => print_summary(&summary),
                Err(err) => error!("Error: {}", err),
            }
        }
        None => {
            let _ = Cli::command().print_long_help();
        }
    }

    Ok(())
}

fn print_summary(summary: &RunSummary) {
    let errors = summary.directories_with_errors.len();
    if errors == 0 {
        println!(
            "{}",
            "SUCCESS ===> There were no errors detected in any directory.".green()
        );
    } else if errors == 1 {
        println!(
            "{}",
            "ERROR ===> There was 1 directory with an error. Scroll up to see what the issue \
             was in that directory."
                .red()
        );
    } else {
        println!(
            "{}",
            format!(
                "ERROR ===> There were {} directories with an error. Scroll up to see what \
                 the issues were in each directory.",
                errors
            )
            .red()
        );
    }
}
