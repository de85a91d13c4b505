use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("odd number of files ({0}) after excluding hidden files")]
    OddFileCount(usize),

    #[error("rename target '{target}' already exists (would overwrite when renaming '{source_name}')")]
    TargetExists { source_name: String, target: String },

    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),
}
