use crate::chess::FormatError;
use derive_more::{Display, Error, From};
use std::path::{Path, PathBuf};
use std::{fs, io};
use tracing::instrument;

/// The outcome of a file-open action.
#[derive(Debug, Clone, Eq, PartialEq, From)]
pub enum Selection {
    /// A file was chosen.
    Path(PathBuf),
    /// The action was cancelled.
    #[from(ignore)]
    Cancelled,
}

/// The reason why a sequence of boards could not be loaded.
#[derive(Debug, Display, Error, From)]
pub enum LoadError {
    #[display(fmt = "failed to read the file")]
    Io(io::Error),
    #[display(fmt = "failed to decode the file")]
    Format(FormatError),
}

/// Trait for types that read files of placement notation.
#[cfg_attr(test, mockall::automock)]
pub trait Load {
    /// Reads the lines of a file, in order.
    fn read_lines(&self, path: &Path) -> io::Result<Vec<String>>;
}

/// Reads files from the local filesystem.
#[derive(Debug, Default, Copy, Clone)]
pub struct Filesystem;

impl Load for Filesystem {
    #[instrument(level = "debug", skip(self), err)]
    fn read_lines(&self, path: &Path) -> io::Result<Vec<String>> {
        let text = fs::read_to_string(path)?;
        Ok(text.lines().map(String::from).collect())
    }
}
