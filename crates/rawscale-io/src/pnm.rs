//! PPM display sink
//!
//! Writes binary PPM (`P6`, maxval 255). The interleaved buffer already
//! matches the P6 raster, so the body is copied through unchanged.

use crate::IoResult;
use crate::sink::{DisplaySink, titled_path};
use rawscale_core::PixelBuffer;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tracing::info;

/// Write a buffer as binary PPM.
pub fn write_pnm<W: Write>(buffer: &PixelBuffer, mut writer: W) -> IoResult<()> {
    write!(writer, "P6\n{} {}\n255\n", buffer.width(), buffer.height())?;
    writer.write_all(buffer.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Sink that writes one `.ppm` per title into a directory.
#[derive(Debug, Clone)]
pub struct PnmSink {
    dir: PathBuf,
}

impl PnmSink {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }
}

impl DisplaySink for PnmSink {
    fn show(&mut self, buffer: PixelBuffer, title: &str) -> IoResult<()> {
        fs::create_dir_all(&self.dir)?;
        let path = titled_path(&self.dir, title, "ppm");
        write_pnm(&buffer, BufWriter::new(File::create(&path)?))?;
        info!(path = %path.display(), dims = %buffer.dims(), title, "displayed as PPM");
        Ok(())
    }
}
