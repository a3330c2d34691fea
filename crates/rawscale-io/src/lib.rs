//! rawscale-io - Pixel source and display sinks for rawscale
//!
//! - **Pixel source**: [`read_planar`] loads the headerless planar
//!   `RRR..GGG..BBB..` layout into an interleaved [`PixelBuffer`];
//!   [`write_planar`] is the inverse.
//! - **Display sinks**: the [`DisplaySink`] trait plus PNG
//!   (`png-format` feature) and PPM (`pnm` feature) implementations.
//!
//! [`PixelBuffer`]: rawscale_core::PixelBuffer

mod error;
#[cfg(feature = "png-format")]
pub mod png;
#[cfg(feature = "pnm")]
pub mod pnm;
pub mod raw;
pub mod sink;

pub use error::{IoError, IoResult};
pub use raw::{TruncationPolicy, read_planar, read_planar_from, write_planar, write_planar_to};
pub use sink::{DisplaySink, MemorySink, title_to_stem};

#[cfg(feature = "png-format")]
pub use crate::png::{PngSink, write_png};
#[cfg(feature = "pnm")]
pub use crate::pnm::{PnmSink, write_pnm};
