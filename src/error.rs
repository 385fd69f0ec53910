//! Error types for policy construction.

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ToolkitError {
    #[error("Minimum length must be at least 1, got {0}")]
    InvalidMinimumLength(usize),
    #[error("Invalid value for {name}: {value:?}")]
    InvalidEnvVar { name: &'static str, value: String },
}

/// Result type for the library.
pub type Result<T> = std::result::Result<T, ToolkitError>;
