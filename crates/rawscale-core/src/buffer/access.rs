//! Pixel access methods for PixelBuffer
//!
//! Checked accessors return `Option`/`Result`; the `_unchecked` variants
//! are for inner loops whose coordinates are already clamped and only
//! `debug_assert!` the bounds.

use super::PixelBuffer;
use crate::error::{Error, Result};

impl PixelBuffer {
    /// Get the `(r, g, b)` triple at `(x, y)`, or `None` if out of bounds.
    pub fn get_rgb(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_rgb_unchecked(x, y))
    }

    /// Get the `(r, g, b)` triple at `(x, y)` without a release-mode bounds check
    /// on the coordinates. Slice indexing still panics on overflow.
    #[inline]
    pub fn get_rgb_unchecked(&self, x: u32, y: u32) -> (u8, u8, u8) {
        debug_assert!(x < self.width() && y < self.height());
        let i = self.offset(x, y);
        (self.data[i], self.data[i + 1], self.data[i + 2])
    }

    /// Set the pixel at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the coordinate is outside the image.
    pub fn set_rgb(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) -> Result<()> {
        if x >= self.width() || y >= self.height() {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width(),
                height: self.height(),
            });
        }
        self.set_rgb_unchecked(x, y, r, g, b);
        Ok(())
    }

    /// Set the pixel at `(x, y)` with only a debug bounds check.
    #[inline]
    pub fn set_rgb_unchecked(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) {
        debug_assert!(x < self.width() && y < self.height());
        let i = self.offset(x, y);
        self.data[i] = r;
        self.data[i + 1] = g;
        self.data[i + 2] = b;
    }

    /// Iterate over all pixels as `(r, g, b)` in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = (u8, u8, u8)> + '_ {
        self.data.chunks_exact(crate::CHANNELS).map(|p| (p[0], p[1], p[2]))
    }
}
