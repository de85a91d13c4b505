use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "token-tools")]
#[command(about = "Validate and normalize double-sided token images", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check that every token image has a matching Side A and Side B
    Validate {
        /// Directory to check filenames in. Defaults to the current directory.
        #[arg(short = 't', long, default_value = ".")]
        target_directory: PathBuf,

        /// Also check every subdirectory, each independently
        #[arg(short, long)]
        recursive: bool,
    },
    /// Rename alternating front/back captures to the NNN.A / NNN.B scheme
    Normalize {
        /// Directory to rename files in. Defaults to the current directory.
        #[arg(short = 't', long, default_value = ".")]
        target_directory: PathBuf,

        /// Also rename in every subdirectory, each independently
        #[arg(short, long)]
        recursive: bool,

        /// Prefix to add to the renamed files. Defaults to no prefix.
        #[arg(short, long, default_value = "", value_name = "PREFIX")]
        output_prefix: String,

        /// Check pairing and report per-directory pass/fail without renaming
        #[arg(short, long)]
        dry_run: bool,
    },
}
