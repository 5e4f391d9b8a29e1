// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid dataset shape {dims:?}: expected {expected} samples, got {actual}")]
    InvalidShape {
        dims: Vec<usize>,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid dataset shape {dims:?}: sample count overflows")]
    ShapeOverflow { dims: Vec<usize> },
}

pub type Result<T> = std::result::Result<T, DomainError>;
