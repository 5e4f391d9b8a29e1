// Central Error Type for I/O operations

use thiserror::Error;

/// I/O-category error returned by plugins and the registry
#[derive(Error, Debug)]
pub enum IoError {
    #[error("Execution error: {0}")]
    Execution(#[from] crate::port::ExecutionError),

    #[error("Domain error: {0}")]
    Domain(#[from] crate::domain::DomainError),

    #[error("Unexpected output '{label}': found {found}")]
    UnexpectedOutput { label: String, found: String },

    #[error("Unsupported data: plugin handles {expected}, got {found}")]
    UnsupportedData { expected: String, found: String },

    #[error("No plugin can save to: {0}")]
    NoSaver(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using IoError
pub type Result<T> = std::result::Result<T, IoError>;
