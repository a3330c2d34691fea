//! Display sinks
//!
//! A sink receives a fully populated buffer together with a title and
//! presents it pixel-for-pixel. It never resamples, crops or converts the
//! pixels. Buffers are handed over by move.

use crate::IoResult;
use rawscale_core::PixelBuffer;
use std::path::{Path, PathBuf};

/// Consumer of finished buffers.
pub trait DisplaySink {
    /// Present `buffer` under `title`.
    fn show(&mut self, buffer: PixelBuffer, title: &str) -> IoResult<()>;
}

/// Sink that only keeps what it was shown. Useful in tests and dry runs.
#[derive(Debug, Default)]
pub struct MemorySink {
    shown: Vec<(String, PixelBuffer)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffers received so far, in order, with their titles.
    pub fn shown(&self) -> &[(String, PixelBuffer)] {
        &self.shown
    }

    pub fn into_inner(self) -> Vec<(String, PixelBuffer)> {
        self.shown
    }
}

impl DisplaySink for MemorySink {
    fn show(&mut self, buffer: PixelBuffer, title: &str) -> IoResult<()> {
        self.shown.push((title.to_string(), buffer));
        Ok(())
    }
}

/// Turn a window title into a file stem: lowercase ASCII alphanumerics
/// joined by single underscores.
///
/// `"Resampled Image Display"` becomes `"resampled_image_display"`.
pub fn title_to_stem(title: &str) -> String {
    let mut stem = String::with_capacity(title.len());
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            stem.push(c.to_ascii_lowercase());
        } else if !stem.is_empty() && !stem.ends_with('_') {
            stem.push('_');
        }
    }
    while stem.ends_with('_') {
        stem.pop();
    }
    if stem.is_empty() {
        stem.push_str("image");
    }
    stem
}

/// Output path for a titled image inside `dir`.
pub(crate) fn titled_path(dir: &Path, title: &str, ext: &str) -> PathBuf {
    dir.join(format!("{}.{}", title_to_stem(title), ext))
}
