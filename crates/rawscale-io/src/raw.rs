//! Raw planar RGB pixel source
//!
//! The on-disk layout carries no header: `width * height` red bytes,
//! followed by as many green bytes, followed by as many blue bytes. The
//! caller always supplies the dimensions.
//!
//! A file shorter than `3 * width * height` bytes is rejected by default.
//! [`TruncationPolicy::ZeroFill`] restores the lenient behaviour of
//! treating the missing tail as zero bytes.

use crate::{IoError, IoResult};
use rawscale_core::{Dimensions, PixelBuffer};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use tracing::{info, warn};

/// What to do when the source is shorter than the declared dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TruncationPolicy {
    /// Fail with [`IoError::Truncated`]
    #[default]
    Reject,
    /// Pad the missing planar bytes with zeros
    ZeroFill,
}

/// Load a planar RGB file into an interleaved buffer.
///
/// # Errors
///
/// - [`IoError::SourceUnavailable`] if the file cannot be opened
/// - [`IoError::Truncated`] if the file is short and `policy` is `Reject`
pub fn read_planar<P: AsRef<Path>>(
    path: P,
    dims: Dimensions,
    policy: TruncationPolicy,
) -> IoResult<PixelBuffer> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| IoError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    // Pipes and devices report no length; only regular files are checked up front
    let meta = file.metadata()?;
    if policy == TruncationPolicy::Reject && meta.is_file() {
        let expected = dims.buffer_len();
        let on_disk = meta.len();
        if on_disk < expected as u64 {
            return Err(IoError::Truncated {
                expected,
                actual: on_disk as usize,
            });
        }
    }
    let buf = read_planar_from(BufReader::new(file), dims, policy)?;
    info!(path = %path.display(), %dims, "loaded planar source");
    Ok(buf)
}

/// Read planar RGB data from any reader.
///
/// Reads at most `3 * width * height` bytes; trailing data is ignored.
/// Storage grows with the bytes actually read, so a short stream declared
/// with huge dimensions fails with [`IoError::Truncated`] under `Reject`.
pub fn read_planar_from<R: Read>(
    reader: R,
    dims: Dimensions,
    policy: TruncationPolicy,
) -> IoResult<PixelBuffer> {
    let expected = dims.buffer_len();
    let mut planar = Vec::new();
    reader.take(expected as u64).read_to_end(&mut planar)?;

    let actual = planar.len();
    if actual < expected {
        match policy {
            TruncationPolicy::Reject => return Err(IoError::Truncated { expected, actual }),
            TruncationPolicy::ZeroFill => {
                warn!(expected, actual, "planar source truncated, zero-filling tail");
                planar.resize(expected, 0);
            }
        }
    }

    Ok(PixelBuffer::from_planar(dims, &planar)?)
}

/// Write a buffer in the planar layout.
pub fn write_planar<P: AsRef<Path>>(buffer: &PixelBuffer, path: P) -> IoResult<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_planar_to(buffer, BufWriter::new(file))?;
    info!(path = %path.display(), dims = %buffer.dims(), "wrote planar output");
    Ok(())
}

/// Write a buffer in the planar layout to any writer.
pub fn write_planar_to<W: Write>(buffer: &PixelBuffer, mut writer: W) -> IoResult<()> {
    writer.write_all(&buffer.to_planar())?;
    writer.flush()?;
    Ok(())
}
