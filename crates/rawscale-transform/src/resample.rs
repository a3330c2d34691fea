//! Whole-image resampling
//!
//! The resampler computes the scale ratios once, classifies the operation
//! as magnification or minification, resolves the [`PolicySelector`] to a
//! [`SamplingPolicy`] and then fills every destination row.
//!
//! # Policy selection
//!
//! | Direction     | `Sample` (1) | `Smooth` (2)          |
//! |---------------|--------------|-----------------------|
//! | Minification  | `Point`      | `NeighborhoodAverage` |
//! | Magnification | `Point`      | `Bilinear`            |
//!
//! An operation is a minification as soon as either destination dimension
//! is smaller than the source; equal sizes count as magnification.
//!
//! # Concurrency
//!
//! Rows are independent, so by default they are distributed over the rayon
//! thread pool. Each worker owns a disjoint slice of the output and reads
//! the shared source immutably.

use crate::kernel::{SamplingPolicy, reconstruct};
use crate::mapper::CoordinateMapper;
use crate::{TransformError, TransformResult};
use rawscale_core::{CHANNELS, Dimensions, Error, PixelBuffer};
use rayon::prelude::*;
use std::str::FromStr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

/// Whether the destination is larger or smaller than the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeDirection {
    /// Both destination dimensions are at least the source dimensions
    Magnification,
    /// At least one destination dimension is smaller than the source
    Minification,
}

impl ResizeDirection {
    /// Classify a `src -> dst` resample.
    pub fn classify(src: Dimensions, dst: Dimensions) -> Self {
        if src.width() > dst.width() || src.height() > dst.height() {
            ResizeDirection::Minification
        } else {
            ResizeDirection::Magnification
        }
    }
}

/// Operator-facing resampling method code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicySelector {
    /// `1`: point sampling in both directions
    Sample = 1,
    /// `2`: neighbourhood average when shrinking, bilinear when enlarging
    Smooth = 2,
}

impl PolicySelector {
    /// Map a numeric method code to a selector.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownPolicySelector`] for anything but 1 or 2.
    pub fn from_code(code: u32) -> rawscale_core::Result<Self> {
        match code {
            1 => Ok(PolicySelector::Sample),
            2 => Ok(PolicySelector::Smooth),
            _ => Err(Error::UnknownPolicySelector(code)),
        }
    }

    /// The numeric method code.
    pub fn code(self) -> u32 {
        self as u32
    }

    /// Reconstruction policy for the given direction.
    pub fn resolve(self, direction: ResizeDirection) -> SamplingPolicy {
        match (self, direction) {
            (PolicySelector::Sample, _) => SamplingPolicy::Point,
            (PolicySelector::Smooth, ResizeDirection::Minification) => {
                SamplingPolicy::NeighborhoodAverage
            }
            (PolicySelector::Smooth, ResizeDirection::Magnification) => SamplingPolicy::Bilinear,
        }
    }
}

impl FromStr for PolicySelector {
    type Err = Error;

    fn from_str(s: &str) -> rawscale_core::Result<Self> {
        let code = s
            .trim()
            .parse::<u32>()
            .map_err(|e| Error::InvalidParameter(format!("resampling method {s:?}: {e}")))?;
        Self::from_code(code)
    }
}

/// Cooperative cancellation flag shared between a caller and a running resample.
///
/// Checked once per destination row. Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Options for resample operations
#[derive(Debug, Clone)]
pub struct ResampleOptions {
    /// Spread destination rows over the rayon pool
    pub parallel: bool,
    /// Optional cancellation checkpoint, polled per row
    pub cancel: Option<CancelToken>,
}

impl Default for ResampleOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            cancel: None,
        }
    }
}

impl ResampleOptions {
    /// Options for a single-threaded run
    pub fn serial() -> Self {
        Self {
            parallel: false,
            ..Default::default()
        }
    }

    /// Set whether rows are processed in parallel
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Attach a cancellation token
    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }
}

/// Resample `src` to `dst_dims` with the default options.
///
/// # Example
/// ```
/// use rawscale_core::{Dimensions, PixelBuffer};
/// use rawscale_transform::{PolicySelector, resample};
///
/// let src = PixelBuffer::filled(Dimensions::new(4, 4).unwrap(), 255, 0, 0);
/// let dst = resample(&src, Dimensions::new(2, 2).unwrap(), PolicySelector::Sample).unwrap();
/// assert_eq!(dst.as_bytes().len(), 2 * 2 * 3);
/// ```
pub fn resample(
    src: &PixelBuffer,
    dst_dims: Dimensions,
    selector: PolicySelector,
) -> TransformResult<PixelBuffer> {
    resample_with_options(src, dst_dims, selector, &ResampleOptions::default())
}

/// Resample `src` to `dst_dims`, resolving `selector` by direction.
pub fn resample_with_options(
    src: &PixelBuffer,
    dst_dims: Dimensions,
    selector: PolicySelector,
    options: &ResampleOptions,
) -> TransformResult<PixelBuffer> {
    let direction = ResizeDirection::classify(src.dims(), dst_dims);
    let policy = selector.resolve(direction);
    debug!(?selector, ?direction, ?policy, "resolved sampling policy");
    resample_with_policy(src, dst_dims, policy, options)
}

/// Resample `src` to `dst_dims` with an explicit kernel, bypassing the
/// direction table.
///
/// # Errors
///
/// Returns [`TransformError::Cancelled`] if the token in `options` fires
/// before the last row is written. No partial buffer is returned.
pub fn resample_with_policy(
    src: &PixelBuffer,
    dst_dims: Dimensions,
    policy: SamplingPolicy,
    options: &ResampleOptions,
) -> TransformResult<PixelBuffer> {
    let mapper = CoordinateMapper::new(src.dims(), dst_dims);
    let ratio = mapper.ratio();
    debug!(
        src = %src.dims(),
        dst = %dst_dims,
        ratio_x = ratio.x,
        ratio_y = ratio.y,
        ?policy,
        parallel = options.parallel,
        "resampling"
    );

    let mut dst = PixelBuffer::new(dst_dims);
    let stride = dst_dims.row_stride();

    let fill_row = |(y, row): (usize, &mut [u8])| -> TransformResult<()> {
        if let Some(token) = &options.cancel
            && token.is_cancelled()
        {
            return Err(TransformError::Cancelled);
        }
        render_row(src, &mapper, policy, y as u32, row);
        Ok(())
    };

    if options.parallel {
        dst.as_bytes_mut()
            .par_chunks_mut(stride)
            .enumerate()
            .try_for_each(fill_row)?;
    } else {
        dst.as_bytes_mut()
            .chunks_mut(stride)
            .enumerate()
            .try_for_each(fill_row)?;
    }

    Ok(dst)
}

/// Fill one destination row.
fn render_row(
    src: &PixelBuffer,
    mapper: &CoordinateMapper,
    policy: SamplingPolicy,
    y: u32,
    row: &mut [u8],
) {
    for (x, px) in row.chunks_exact_mut(CHANNELS).enumerate() {
        let coord = mapper.map_continuous(x as u32, y);
        let (r, g, b) = reconstruct(policy, src, coord);
        px[0] = r;
        px[1] = g;
        px[2] = b;
    }
}
