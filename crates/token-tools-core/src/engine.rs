//! Pipeline driver: walks directories and runs validation or normalization
//! over each one independently.

use std::path::{Path, PathBuf};

use tracing::{debug, error};
use walkdir::WalkDir;

use crate::error::Error;
use crate::matcher::{self, MatchReport};
use crate::renamer::{self, RenamePlan};
use crate::store::{DirectoryStore, FsStore};

/// Callbacks for per-directory results.
///
/// The CLI implements this with colored console output; all methods default
/// to no-ops so tests can run silently.
pub trait RunReporter: Send + Sync {
    fn on_directory_start(&self, _dir: &Path) {}
    fn on_match_report(&self, _dir: &Path, _report: &MatchReport) {}
    fn on_plan(&self, _dir: &Path, _plan: &RenamePlan, _dry_run: bool) {}
    fn on_rename(&self, _dir: &Path, _from: &str, _to: &str) {}
    fn on_directory_failed(&self, _dir: &Path, _err: &Error) {}
}

/// No-op reporter for silent operation.
pub struct SilentReporter;

impl RunReporter for SilentReporter {}

#[derive(Debug, Clone)]
pub struct NormalizeOptions {
    /// Text prepended to the zero-padded sequence in every generated name.
    pub output_prefix: String,
    /// Plan and report only; rename nothing.
    pub dry_run: bool,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            output_prefix: String::new(),
            dry_run: false,
        }
    }
}

/// Aggregate result of one run over a directory or tree.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub directories_processed: usize,
    pub directories_with_errors: Vec<PathBuf>,
}

impl RunSummary {
    pub fn is_success(&self) -> bool {
        self.directories_with_errors.is_empty()
    }

    fn record_failure(&mut self, dir: &Path) {
        self.directories_with_errors.push(dir.to_path_buf());
    }
}

/// Drives both pipelines over a `DirectoryStore`.
///
/// Directories are processed one at a time to completion; a failure in one
/// is recorded in the summary and never stops its siblings.
pub struct TokenEngine<S: DirectoryStore = FsStore> {
    store: S,
}

impl TokenEngine<FsStore> {
    pub fn new() -> Self {
        Self { store: FsStore }
    }
}

impl Default for TokenEngine<FsStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: DirectoryStore> TokenEngine<S> {
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    /// Check every directory for files missing their Side A or Side B
    /// counterpart.
    pub fn validate(
        &self,
        root: &Path,
        recursive: bool,
        reporter: &dyn RunReporter,
    ) -> Result<RunSummary, Error> {
        let mut summary = RunSummary::default();

        for dir in self.directories(root, recursive)? {
            summary.directories_processed += 1;
            reporter.on_directory_start(&dir);

            let filenames = match self.store.list_files(&dir) {
                Ok(filenames) => filenames,
                Err(err) => {
                    error!("Error listing {}: {}", dir.display(), err);
                    reporter.on_directory_failed(&dir, &err);
                    summary.record_failure(&dir);
                    continue;
                }
            };

            let report = matcher::match_filenames(&filenames);
            if !report.is_valid() {
                summary.record_failure(&dir);
            }
            reporter.on_match_report(&dir, &report);
        }

        Ok(summary)
    }

    /// Rename every directory's files to the `NNN.A.ext` / `NNN.B.ext`
    /// scheme. Renames are applied in pair order, front before back, with
    /// no batch atomicity: an interrupted run leaves earlier pairs renamed
    /// and later ones untouched.
    pub fn normalize(
        &self,
        root: &Path,
        recursive: bool,
        options: &NormalizeOptions,
        reporter: &dyn RunReporter,
    ) -> Result<RunSummary, Error> {
        let mut summary = RunSummary::default();

        for dir in self.directories(root, recursive)? {
            summary.directories_processed += 1;
            reporter.on_directory_start(&dir);

            if let Err(err) = self.normalize_directory(&dir, options, reporter) {
                error!("Error in {}: {}", dir.display(), err);
                reporter.on_directory_failed(&dir, &err);
                summary.record_failure(&dir);
            }
        }

        Ok(summary)
    }

    fn normalize_directory(
        &self,
        dir: &Path,
        options: &NormalizeOptions,
        reporter: &dyn RunReporter,
    ) -> Result<(), Error> {
        let filenames = self.store.list_files(dir)?;
        let plan = renamer::plan_renames(&filenames, &options.output_prefix)?;
        reporter.on_plan(dir, &plan, options.dry_run);

        if options.dry_run {
            return Ok(());
        }

        for rename in &plan.renames {
            for (from, to) in rename.steps() {
                if from == to {
                    debug!("{} already normalized, skipping", from);
                    continue;
                }
                self.store.rename(dir, from, to)?;
                reporter.on_rename(dir, from, to);
            }
        }

        Ok(())
    }

    /// The directories a run covers: the root alone, or a pre-order walk of
    /// the whole subtree. Unreadable subdirectories are logged and skipped.
    fn directories(&self, root: &Path, recursive: bool) -> Result<Vec<PathBuf>, Error> {
        if !root.is_dir() {
            return Err(Error::NotADirectory(root.to_path_buf()));
        }

        if !recursive {
            return Ok(vec![root.to_path_buf()]);
        }

        let mut dirs = Vec::new();
        for entry in WalkDir::new(root) {
            match entry {
                Ok(entry) if entry.file_type().is_dir() => {
                    dirs.push(entry.path().to_path_buf());
                }
                Ok(_) => {}
                Err(err) => {
                    error!("Error walking {}: {}", root.display(), err);
                }
            }
        }
        Ok(dirs)
    }
}
