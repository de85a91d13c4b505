use std::path::Path;

use colored::*;
use token_tools_core::matcher::MatchReport;
use token_tools_core::renamer::RenamePlan;
use token_tools_core::{Error, RunReporter};

/// Console reporter: per-directory status lines, mismatch report sections
/// and rename confirmations on stdout.
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }
}

impl RunReporter for ConsoleReporter {
    fn on_directory_start(&self, dir: &Path) {
        println!("Checking filenames in: {}", dir.display());
    }

    fn on_match_report(&self, _dir: &Path, report: &MatchReport) {
        if report.is_valid() {
            println!(
                "{}",
                "SUCCESS: All files have a matching Side A and Side B!".green()
            );
            println!();
            return;
        }

        if !report.all_unmatched.is_empty() {
            println!(
                "{}",
                "ERROR: The following images don't have a matching Side A or Side B:".red()
            );
            for filename in &report.all_unmatched {
                println!("{}", filename);
            }
            println!();
        }

        // unmatched_b lacks a Side A counterpart, and vice versa
        if !report.unmatched_b.is_empty() {
            println!(
                "{}",
                "ERROR: The following images don't have a matching Side A:".red()
            );
            for filename in &report.unmatched_b {
                println!("{}", filename);
            }
            println!();
        }

        if !report.unmatched_a.is_empty() {
            println!(
                "{}",
                "ERROR: The following images don't have a matching Side B:".red()
            );
            for filename in &report.unmatched_a {
                println!("{}", filename);
            }
            println!();
        }

        if !report.duplicate_identities.is_empty() {
            println!(
                "{}",
                "ERROR: The following images share a token identity on the same side:".red()
            );
            for dup in &report.duplicate_identities {
                println!(
                    "{} ({}): {}",
                    dup.identity,
                    dup.side.label(),
                    dup.filenames.join(", ")
                );
            }
            println!();
        }
    }

    fn on_plan(&self, _dir: &Path, plan: &RenamePlan, dry_run: bool) {
        if dry_run {
            println!(
                "{}",
                format!("OK: {} pairs ready to rename (dry run)", plan.pair_count()).green()
            );
            println!();
        } else if plan.is_noop() {
            println!("Already normalized, nothing to rename.");
            println!();
        }
    }

    fn on_rename(&self, _dir: &Path, from: &str, to: &str) {
        println!("Renamed {} to {}", from, to);
    }

    fn on_directory_failed(&self, _dir: &Path, err: &Error) {
        println!("{}", format!("ERROR: {}. Stopping here.", err).red());
        println!();
    }
}
