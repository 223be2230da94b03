//! Error types for crucible-core.

use thiserror::Error;

/// Result type for crucible-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in crucible-core.
#[derive(Debug, Error)]
pub enum Error {
    /// A compiler rejected its source text.
    #[error("{language} compilation failed: {message}")]
    Compile {
        language: &'static str,
        message: String,
    },

    /// IPC communication error with a worker process.
    #[error("IPC error: {0}")]
    Ipc(String),

    /// Frame encode/decode error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
