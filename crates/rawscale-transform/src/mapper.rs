//! Destination-to-source coordinate mapping
//!
//! A destination pixel `(x, y)` maps to the source position
//! `(x * ratio_x, y * ratio_y)` with `ratio = src / dst` per axis. The
//! mapping is anchored at the top-left corner of each pixel; there is no
//! half-pixel centre offset.

use rawscale_core::Dimensions;

/// Source-to-destination size ratio, one per axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleRatio {
    /// `src_width / dst_width`
    pub x: f32,
    /// `src_height / dst_height`
    pub y: f32,
}

impl ScaleRatio {
    /// Compute the ratios for a `src -> dst` resample.
    pub fn new(src: Dimensions, dst: Dimensions) -> Self {
        Self {
            x: src.width() as f32 / dst.width() as f32,
            y: src.height() as f32 / dst.height() as f32,
        }
    }
}

/// Continuous source position for one destination pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourceCoord {
    pub x: f32,
    pub y: f32,
}

impl SourceCoord {
    /// Floor to integer pixel coordinates, clamped into `dims`.
    #[inline]
    pub fn snap(self, dims: Dimensions) -> (u32, u32) {
        (snap_axis(self.x, dims.width()), snap_axis(self.y, dims.height()))
    }
}

/// Truncate toward zero and clamp to `[0, len - 1]`.
///
/// The `as` cast saturates, so negative and NaN inputs land on 0.
#[inline]
fn snap_axis(v: f32, len: u32) -> u32 {
    (v as u32).min(len - 1)
}

/// Maps destination pixels into a fixed source image.
#[derive(Debug, Clone, Copy)]
pub struct CoordinateMapper {
    src: Dimensions,
    ratio: ScaleRatio,
}

impl CoordinateMapper {
    /// Create a mapper for a `src -> dst` resample.
    pub fn new(src: Dimensions, dst: Dimensions) -> Self {
        Self {
            src,
            ratio: ScaleRatio::new(src, dst),
        }
    }

    /// The per-axis ratios.
    #[inline]
    pub fn ratio(&self) -> ScaleRatio {
        self.ratio
    }

    /// Source dimensions.
    #[inline]
    pub fn source(&self) -> Dimensions {
        self.src
    }

    /// Continuous source position of destination pixel `(x, y)`.
    #[inline]
    pub fn map_continuous(&self, x: u32, y: u32) -> SourceCoord {
        SourceCoord {
            x: x as f32 * self.ratio.x,
            y: y as f32 * self.ratio.y,
        }
    }

    /// Integer source pixel for destination pixel `(x, y)`:
    /// `floor(x * ratio_x)` and `floor(y * ratio_y)`, clamped into the source.
    #[inline]
    pub fn map_point(&self, x: u32, y: u32) -> (u32, u32) {
        self.map_continuous(x, y).snap(self.src)
    }
}
