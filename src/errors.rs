//! Error surface of the path handles and movers.
//!
//! Every failure the wrappers themselves can detect is a named variant
//! (kind conflicts, unsupported formats, missing paths); anything the OS
//! reports travels in [`PathError::Io`] with op+path context attached.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PathError {
    #[error("Path not found (neither file nor directory): {0}")]
    NotFound(PathBuf),

    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Not a file: {0}")]
    NotAFile(PathBuf),

    #[error("A file occupies the path where a directory is needed: {0}")]
    FileInTheWay(PathBuf),

    #[error("Destination directory already exists: {0}")]
    DestinationExists(PathBuf),

    #[error("Dug into a non-directory at {0}")]
    DigIntoNonDirectory(PathBuf),

    #[error("Unsupported write format: '{0}'")]
    UnsupportedFormat(String),

    #[error("Payload does not match format '{format}': expected {expected}")]
    FormatMismatch {
        format: &'static str,
        expected: &'static str,
    },

    #[error("{context}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, PathError>;
