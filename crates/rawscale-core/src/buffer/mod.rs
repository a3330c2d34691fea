//! PixelBuffer - The interleaved RGB image container
//!
//! # Pixel layout
//!
//! - One `u8` per channel, three channels per pixel in R, G, B order
//! - Pixels are stored row-major; the row stride is `width * 3` bytes
//! - The buffer length is always exactly `width * height * 3`
//!
//! # Ownership model
//!
//! A `PixelBuffer` owns its storage. Operations that produce a new image
//! (resampling, decoding) return a fresh buffer by value; consumers such as
//! display sinks take the buffer by move.

mod access;
mod planar;

use crate::dims::Dimensions;
use crate::error::{Error, Result};

/// Owned, contiguous interleaved RGB image.
///
/// # Examples
///
/// ```
/// use rawscale_core::{Dimensions, PixelBuffer};
///
/// let dims = Dimensions::new(4, 2).unwrap();
/// let buf = PixelBuffer::new(dims);
/// assert_eq!(buf.as_bytes().len(), 4 * 2 * 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    dims: Dimensions,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Create a black buffer with the given dimensions.
    pub fn new(dims: Dimensions) -> Self {
        Self {
            dims,
            data: vec![0u8; dims.buffer_len()],
        }
    }

    /// Create a buffer where every pixel is `(r, g, b)`.
    pub fn filled(dims: Dimensions, r: u8, g: u8, b: u8) -> Self {
        let data = [r, g, b].repeat(dims.pixel_count());
        Self { dims, data }
    }

    /// Wrap an existing interleaved RGB vector.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferSizeMismatch`] if `data.len()` is not
    /// `width * height * 3`.
    pub fn from_vec(dims: Dimensions, data: Vec<u8>) -> Result<Self> {
        let expected = dims.buffer_len();
        if data.len() != expected {
            return Err(Error::BufferSizeMismatch {
                width: dims.width(),
                height: dims.height(),
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { dims, data })
    }

    /// Get the image dimensions.
    #[inline]
    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.dims.width()
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.dims.height()
    }

    /// Raw interleaved bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Mutable raw interleaved bytes. The length cannot change.
    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// One interleaved row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        let stride = self.dims.row_stride();
        let start = y as usize * stride;
        &self.data[start..start + stride]
    }

    /// Byte offset of the pixel at `(x, y)`.
    #[inline]
    pub(crate) fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.dims.width() as usize + x as usize) * crate::CHANNELS
    }
}
