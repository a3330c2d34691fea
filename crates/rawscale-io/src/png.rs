//! PNG display sink
//!
//! Encodes a buffer as an 8-bit RGB PNG with no filtering of the pixel
//! values, so the file shows exactly what the resampler produced.

use crate::sink::{DisplaySink, titled_path};
use crate::{IoError, IoResult};
use png::{BitDepth, ColorType, Encoder};
use rawscale_core::PixelBuffer;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tracing::info;

/// Write a buffer as RGB8 PNG.
pub fn write_png<W: Write>(buffer: &PixelBuffer, writer: W) -> IoResult<()> {
    let mut encoder = Encoder::new(writer, buffer.width(), buffer.height());
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;
    writer
        .write_image_data(buffer.as_bytes())
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;
    Ok(())
}

/// Sink that writes one PNG per title into a directory.
#[derive(Debug, Clone)]
pub struct PngSink {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl PngSink {
    /// Create a sink writing into `dir`. The directory is created on first use.
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self {
            dir: dir.into(),
            written: Vec::new(),
        }
    }

    /// Paths of the files written so far.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl DisplaySink for PngSink {
    fn show(&mut self, buffer: PixelBuffer, title: &str) -> IoResult<()> {
        fs::create_dir_all(&self.dir)?;
        let path = titled_path(&self.dir, title, "png");
        let file = File::create(&path)?;
        write_png(&buffer, BufWriter::new(file))?;
        info!(path = %path.display(), dims = %buffer.dims(), title, "displayed as PNG");
        self.written.push(path);
        Ok(())
    }
}
