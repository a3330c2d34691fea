//! I/O error types
//!
//! Provides a unified error type for the pixel source and the display
//! sinks. Opening failures and short reads get their own variants so the
//! caller can tell "no such file" from "file too small for the declared
//! dimensions".

use std::path::PathBuf;
use thiserror::Error;

/// Error type for pixel source and sink operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// The pixel source could not be opened
    #[error("cannot open pixel source {}: {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source holds fewer bytes than `3 * width * height`
    #[error("truncated pixel source: expected {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },

    /// Standard I/O error while reading or writing
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A sink encoder returned an error
    #[error("encode error: {0}")]
    EncodeError(String),

    /// An error from the core library (e.g. buffer size mismatch)
    #[error("core error: {0}")]
    Core(#[from] rawscale_core::Error),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
