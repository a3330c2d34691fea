//! rawscale Core - Basic data structures for RGB resampling
//!
//! This crate provides the fundamental types shared by the rawscale crates:
//!
//! - [`PixelBuffer`] - Owned interleaved RGB image
//! - [`Dimensions`] - Validated width/height pair
//! - [`OutputPreset`] / [`OutputSize`] - Destination resolution selection
//! - [`Error`] / [`Result`] - Core and configuration errors

pub mod buffer;
pub mod dims;
pub mod error;

pub use buffer::PixelBuffer;
pub use dims::{CHANNELS, Dimensions, OutputPreset, OutputSize};
pub use error::{Error, Result};
