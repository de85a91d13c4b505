pub mod engine;
pub mod error;
pub mod matcher;
pub mod natural;
pub mod renamer;
pub mod side;
pub mod store;

pub use engine::{NormalizeOptions, RunReporter, RunSummary, SilentReporter, TokenEngine};
pub use error::Error;
pub use matcher::{match_filenames, MatchReport};
pub use renamer::{plan_renames, RenamePlan, TokenRename};
pub use side::Side;
pub use store::{DirectoryStore, FsStore};
