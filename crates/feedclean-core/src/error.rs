//! Error types for feed inspection.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced while validating a candidate feed file.
///
/// Only inspection reports errors to callers. The cleaning pass is
/// best-effort by contract and logs its failures instead of returning them.
#[derive(Debug, Error)]
pub enum InspectError {
    /// Feed file could not be opened.
    #[error("failed to open feed {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Read failed partway through the feed.
    #[error("failed to read feed {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Feed file has no lines at all.
    #[error("feed is empty: {path}")]
    EmptyFile { path: PathBuf },

    /// First line carries fewer tab-separated columns than the feed format
    /// requires.
    #[error(
        "malformed header in {path}: expected at least {expected} tab-separated columns, got {actual}"
    )]
    MalformedHeader {
        path: PathBuf,
        expected: usize,
        actual: usize,
    },
}

/// Result type for inspection operations.
pub type Result<T> = std::result::Result<T, InspectError>;
