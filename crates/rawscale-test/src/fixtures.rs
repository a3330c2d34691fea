//! Synthetic test images
//!
//! Every fixture is generated in code so that no binary data has to be
//! checked in. [`write_planar_fixture`] stores a buffer in the raw planar
//! layout for tests that go through the pixel source.

use crate::error::{TestError, TestResult};
use crate::regout_path;
use rawscale_core::{Dimensions, PixelBuffer};
use std::fs;

/// Build a buffer from a per-pixel function.
pub fn from_fn<F>(width: u32, height: u32, f: F) -> TestResult<PixelBuffer>
where
    F: Fn(u32, u32) -> (u8, u8, u8),
{
    let mut buf = PixelBuffer::new(Dimensions::new(width, height)?);
    for y in 0..height {
        for x in 0..width {
            let (r, g, b) = f(x, y);
            buf.set_rgb_unchecked(x, y, r, g, b);
        }
    }
    Ok(buf)
}

/// Diagonal colour gradient; every pixel of a small image is distinct.
pub fn gradient(width: u32, height: u32) -> TestResult<PixelBuffer> {
    let span_x = width.saturating_sub(1).max(1);
    let span_y = height.saturating_sub(1).max(1);
    from_fn(width, height, |x, y| {
        let r = (x * 255 / span_x).min(255) as u8;
        let g = (y * 255 / span_y).min(255) as u8;
        let b = ((x * 7 + y * 13) % 256) as u8;
        (r, g, b)
    })
}

/// Checkerboard of `cell`-sized squares in two colours.
pub fn checkerboard(
    width: u32,
    height: u32,
    cell: u32,
    a: (u8, u8, u8),
    b: (u8, u8, u8),
) -> TestResult<PixelBuffer> {
    let cell = cell.max(1);
    from_fn(width, height, |x, y| {
        if (x / cell + y / cell) % 2 == 0 { a } else { b }
    })
}

/// Write `buffer` as a planar file named `name` in the regout directory
/// and return its path.
pub fn write_planar_fixture(name: &str, buffer: &PixelBuffer) -> TestResult<String> {
    fs::create_dir_all(crate::regout_dir())?;
    let path = regout_path(name);
    rawscale_io::write_planar(buffer, &path).map_err(|e| TestError::Write {
        path: path.clone(),
        message: e.to_string(),
    })?;
    Ok(path)
}
