//! Directory access behind a trait seam.
//!
//! All paths are explicit parameters; nothing mutates the process working
//! directory. Tests substitute their own store, the CLI uses `FsStore`.

use std::fs;
use std::path::Path;

use crate::error::Error;

pub trait DirectoryStore {
    /// Basenames of the immediate child regular files of `dir`, in
    /// filesystem order, without recursing. Hidden files are included;
    /// callers filter where the contract requires it.
    fn list_files(&self, dir: &Path) -> Result<Vec<String>, Error>;

    /// Rename one file within `dir`.
    fn rename(&self, dir: &Path, from: &str, to: &str) -> Result<(), Error>;
}

/// `std::fs`-backed store.
pub struct FsStore;

impl DirectoryStore for FsStore {
    fn list_files(&self, dir: &Path) -> Result<Vec<String>, Error> {
        if !dir.is_dir() {
            return Err(Error::NotADirectory(dir.to_path_buf()));
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        Ok(names)
    }

    fn rename(&self, dir: &Path, from: &str, to: &str) -> Result<(), Error> {
        fs::rename(dir.join(from), dir.join(to))?;
        Ok(())
    }
}
