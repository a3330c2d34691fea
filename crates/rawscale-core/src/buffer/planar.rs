//! Planar <-> interleaved conversion
//!
//! The raw storage layout keeps all red bytes first, then all green, then
//! all blue, each plane `width * height` bytes in row-major order. In
//! memory a [`PixelBuffer`] is interleaved (`RGBRGB...`).

use super::PixelBuffer;
use crate::dims::Dimensions;
use crate::error::{Error, Result};

impl PixelBuffer {
    /// Build an interleaved buffer from a planar `RRR..GGG..BBB..` slice.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferSizeMismatch`] if `planar.len()` is not
    /// `3 * width * height`.
    pub fn from_planar(dims: Dimensions, planar: &[u8]) -> Result<Self> {
        let expected = dims.buffer_len();
        if planar.len() != expected {
            return Err(Error::BufferSizeMismatch {
                width: dims.width(),
                height: dims.height(),
                expected,
                actual: planar.len(),
            });
        }
        let n = dims.plane_len();
        let (r, rest) = planar.split_at(n);
        let (g, b) = rest.split_at(n);
        Ok(Self::from_planes(dims, r, g, b))
    }

    /// Interleave three equally sized planes.
    fn from_planes(dims: Dimensions, r: &[u8], g: &[u8], b: &[u8]) -> Self {
        let mut data = Vec::with_capacity(dims.buffer_len());
        for ((&rv, &gv), &bv) in r.iter().zip(g).zip(b) {
            data.extend_from_slice(&[rv, gv, bv]);
        }
        Self { dims, data }
    }

    /// Split into the planar `RRR..GGG..BBB..` layout.
    pub fn to_planar(&self) -> Vec<u8> {
        let n = self.dims.plane_len();
        let mut out = vec![0u8; n * crate::CHANNELS];
        let (r, rest) = out.split_at_mut(n);
        let (g, b) = rest.split_at_mut(n);
        for (i, px) in self.data.chunks_exact(crate::CHANNELS).enumerate() {
            r[i] = px[0];
            g[i] = px[1];
            b[i] = px[2];
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use crate::{Dimensions, Error, PixelBuffer};

    #[test]
    fn test_from_planar_interleaves() {
        let dims = Dimensions::new(2, 1).unwrap();
        // R plane: 1 2, G plane: 3 4, B plane: 5 6
        let buf = PixelBuffer::from_planar(dims, &[1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(buf.as_bytes(), &[1, 3, 5, 2, 4, 6]);
        assert_eq!(buf.to_planar(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_from_planar_short_input() {
        let dims = Dimensions::new(2, 2).unwrap();
        assert!(matches!(
            PixelBuffer::from_planar(dims, &[0; 11]),
            Err(Error::BufferSizeMismatch {
                expected: 12,
                actual: 11,
                ..
            })
        ));
    }
}
