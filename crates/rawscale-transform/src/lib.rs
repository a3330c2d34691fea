//! rawscale-transform - RGB resampling for rawscale
//!
//! This crate provides the resampling engine:
//!
//! - [`CoordinateMapper`]: destination pixel -> source position
//! - [`reconstruct`]: Point, NeighborhoodAverage and Bilinear kernels
//! - [`resample`] and friends: direction classification, policy selection
//!   and the row-parallel grid walk

mod error;
pub mod kernel;
pub mod mapper;
pub mod resample;

pub use error::{TransformError, TransformResult};
pub use kernel::{NEIGHBOR_OFFSETS, SamplingPolicy, neighborhood, reconstruct};
pub use mapper::{CoordinateMapper, ScaleRatio, SourceCoord};
pub use resample::{
    CancelToken, PolicySelector, ResampleOptions, ResizeDirection, resample, resample_with_options,
    resample_with_policy,
};
