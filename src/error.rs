//! Error types for hash computations.

use thiserror::Error;

/// Failure modes of a single hash computation.
///
/// The library never logs or retries; every failure is handed back to the
/// caller exactly once, and a call never produces both a hash and an error.
#[derive(Error, Debug)]
pub enum HashError {
    /// The input is shorter than one sampling window and has no defined hash.
    /// Recoverable: callers batching many files typically report it and move
    /// on.
    #[error("data is less than 65536 bytes ({len} supplied)")]
    DataTooSmall {
        /// Total input length in bytes.
        len: u64,
    },

    /// A window read returned fewer bytes than requested even though the
    /// length snapshot said enough were there, e.g. the file was truncated
    /// between stat and read.
    #[error("failed to read 65536 bytes at offset {offset}")]
    ShortRead {
        /// File offset the window read started at.
        offset: u64,
    },

    /// Underlying I/O failure during stat or read, passed through unchanged.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias for hash computations.
pub type Result<T> = std::result::Result<T, HashError>;
