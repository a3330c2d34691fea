//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur during regression testing
#[derive(Debug, Error)]
pub enum TestError {
    /// Failed to write a fixture or an inspection image
    #[error("failed to write '{path}': {message}")]
    Write { path: String, message: String },

    /// Failed to build a fixture buffer
    #[error("invalid fixture: {0}")]
    Fixture(#[from] rawscale_core::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
