//! rawscale - Raw planar RGB resampling
//!
//! Takes a headerless planar RGB file of known size and resamples it to a
//! preset or custom resolution with one of two methods:
//!
//! - method `1`: point sampling (replicate when enlarging, decimate when
//!   shrinking)
//! - method `2`: bilinear interpolation when enlarging, 4-connected
//!   neighbourhood averaging when shrinking
//!
//! # Example
//!
//! ```
//! use rawscale::{Dimensions, PixelBuffer};
//! use rawscale::transform::{PolicySelector, resample};
//!
//! let src = PixelBuffer::filled(Dimensions::new(2, 2).unwrap(), 10, 20, 30);
//! let dst = resample(&src, Dimensions::new(4, 4).unwrap(), PolicySelector::Smooth).unwrap();
//! assert_eq!(dst.get_rgb(3, 3), Some((10, 20, 30)));
//! ```

pub mod config;
pub mod pipeline;

// Re-export core types (primary data structures used everywhere)
pub use rawscale_core::*;

// Re-export layer crates as modules to avoid name conflicts
pub use rawscale_io as io;
pub use rawscale_transform as transform;

pub use config::{Cli, RunConfig, SinkFormat};
pub use pipeline::{RunError, RunSummary, run};
