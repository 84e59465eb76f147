//! # Error Types
//!
//! Problems with an entry's content are not errors in this sense: they are
//! reported as findings and the run continues. `AppcatError` covers the
//! faults that end the run, such as a permission failure while reading a
//! file that is known to exist.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Fatal error raised while validating the catalog.
#[derive(Error, Debug)]
pub enum AppcatError {
    /// Reading a file or directory failed.
    #[error("cannot read '{}': {source}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

impl AppcatError {
    /// Wrap an IO error with the path it occurred on.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
