//! Error types for splitting.
//!
//! The core (segmenting and naming) only fails on precondition checks: an unknown
//! boundary level or input that is not text. The remaining variants belong to the
//! caller layer that reads the source file and writes the output directory.

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop a split from producing its files.
#[derive(Debug, Error)]
pub enum SplitError {
    /// Level token or rank outside `h1`..`h6`.
    #[error("Invalid header level: {0}. Must be one of: h1, h2, h3, h4, h5, h6")]
    InvalidBoundaryLevel(String),

    /// Input bytes could not be decoded as UTF-8 text.
    #[error("Input is not a readable text document: {reason}")]
    InvalidDocument {
        /// Decoder message, including the offending byte offset.
        reason: String,
    },

    /// Input path does not name an existing file.
    #[error("Input file '{}' does not exist.", .0.display())]
    InputNotFound(PathBuf),

    /// Destination directory could not be created or a file in it written.
    #[error("Cannot write to '{}': {source}", .path.display())]
    DestinationUnwritable {
        /// Directory or file that failed.
        path: PathBuf,
        /// Underlying filesystem error.
        #[source]
        source: std::io::Error,
    },

    /// Any other IO failure, typically reading the input.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The JSON manifest could not be serialised.
    #[error("Manifest serialization failed: {0}")]
    Manifest(#[from] serde_json::Error),
}

/// Result type alias for split operations.
pub type Result<T> = std::result::Result<T, SplitError>;
