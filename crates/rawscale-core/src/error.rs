//! Error types for rawscale-core
//!
//! Provides a unified error type for the buffer, dimension and configuration
//! types in the core crate. Configuration failures (unknown selectors or
//! presets, zero dimensions) are reported here so that every layer above can
//! surface them before any resampling work begins.

use thiserror::Error;

/// rawscale core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Buffer length does not match `width * height * 3`
    #[error("buffer size mismatch for {width}x{height}: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// Pixel coordinate out of bounds
    #[error("pixel ({x}, {y}) out of bounds for {width}x{height} image")]
    IndexOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Sampling-policy selector is not one of the supported codes
    #[error("unknown resampling method: {0} (expected 1 or 2)")]
    UnknownPolicySelector(u32),

    /// Output resolution selector is not a known preset
    #[error("unknown output format: {0:?} (expected O1, O2, O3 or WIDTHxHEIGHT)")]
    UnknownPreset(String),

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

impl Error {
    /// Whether this error belongs to the configuration class.
    ///
    /// Configuration errors are raised while validating invocation
    /// parameters, before any source data is read.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::InvalidDimension { .. }
                | Error::UnknownPolicySelector(_)
                | Error::UnknownPreset(_)
                | Error::InvalidParameter(_)
        )
    }
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
