//! Error taxonomy for the task store and its persistence layer.
//!
//! Every failure in this subsystem is recoverable at the operation boundary;
//! none of these variants should ever abort the process. Commands convert
//! them into `anyhow::Error` when bubbling up to the CLI.

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Caller-supplied data was rejected at the boundary: an empty task
    /// title or a due-date string that does not parse. The store is left
    /// untouched.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The storage file could not be read or written. File-not-found during
    /// load is NOT this error; a missing file just means an empty store.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(#[from] io::Error),

    /// A stored record failed to parse. Surfaced per record so load can
    /// skip it and continue with the rest of the file.
    #[error("corrupt task record: {0}")]
    CorruptRecord(String),

    /// No task at the referenced position.
    #[error("task not found: {0}")]
    TaskNotFound(usize),
}
