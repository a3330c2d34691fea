//! Error types for rawscale-transform

use thiserror::Error;

/// Errors that can occur during resampling
#[derive(Debug, Error)]
pub enum TransformError {
    /// The run was cancelled through its [`CancelToken`](crate::CancelToken)
    #[error("resampling cancelled")]
    Cancelled,
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;
