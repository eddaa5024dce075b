//! Application-level errors

use std::path::PathBuf;
use thiserror::Error;

/// Application errors carry the context of the operation that failed.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("output path is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("config error: {message}")]
    Config { message: String },

    /// Setting up output failed (directory or file creation).
    #[error("operation failed: {context}")]
    OperationFailed {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Output was created but writing to it failed.
    #[error("write failed: {context}")]
    WriteFailed {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
