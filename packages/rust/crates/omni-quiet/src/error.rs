//! Error types for comment rewriting operations.
//!
//! Follows ODF-REP: Library crates use `thiserror` for explicit error enums.

use std::path::PathBuf;

use omni_io::IoError;
use thiserror::Error;

/// Error types for comment rewriting.
///
/// The line scan itself cannot fail once a file is decoded, so every
/// variant originates at the file boundary.
#[derive(Error, Debug)]
pub enum CommentError {
    /// Reading the source file failed (missing, too large, binary, not UTF-8).
    #[error("Read error: {source}")]
    Read {
        /// File being processed.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: IoError,
    },

    /// Writing the rewritten content back failed.
    #[error("Write error: {source}")]
    Write {
        /// File being processed.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: IoError,
    },
}
