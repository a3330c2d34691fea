//! Image dimensions and output resolution presets
//!
//! [`Dimensions`] is a validated `(width, height)` pair. [`OutputPreset`]
//! is the fixed set of destination resolutions accepted by the
//! command-line surface; any other size can still be expressed as a
//! plain [`Dimensions`].

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Number of interleaved channels per pixel (R, G, B).
pub const CHANNELS: usize = 3;

/// Width and height of an image, both strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    width: u32,
    height: u32,
}

impl Dimensions {
    /// Create a new dimension pair.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0, or if
    /// `width * height * 3` does not fit in `usize`.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(CHANNELS));
        if width == 0 || height == 0 || len.is_none() {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(Self { width, height })
    }

    /// Width in pixels.
    #[inline]
    pub fn width(self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(self) -> u32 {
        self.height
    }

    /// Number of pixels (`width * height`).
    #[inline]
    pub fn pixel_count(self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Size of one colour plane in bytes. Same as [`pixel_count`](Self::pixel_count).
    #[inline]
    pub fn plane_len(self) -> usize {
        self.pixel_count()
    }

    /// Length of an interleaved RGB buffer with these dimensions.
    #[inline]
    pub fn buffer_len(self) -> usize {
        self.pixel_count() * CHANNELS
    }

    /// Bytes per interleaved row.
    #[inline]
    pub fn row_stride(self) -> usize {
        self.width as usize * CHANNELS
    }

    /// Whether `(x, y)` addresses a pixel inside these dimensions.
    #[inline]
    pub fn contains(self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < self.width as i64 && y < self.height as i64
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Parses `WIDTHxHEIGHT` (case-insensitive separator).
impl FromStr for Dimensions {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (w, h) = s
            .split_once(['x', 'X'])
            .ok_or_else(|| Error::InvalidParameter(format!("expected WIDTHxHEIGHT, got {s:?}")))?;
        let width = w
            .trim()
            .parse::<u32>()
            .map_err(|e| Error::InvalidParameter(format!("bad width {w:?}: {e}")))?;
        let height = h
            .trim()
            .parse::<u32>()
            .map_err(|e| Error::InvalidParameter(format!("bad height {h:?}: {e}")))?;
        Self::new(width, height)
    }
}

/// Fixed destination resolutions selectable by code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputPreset {
    /// `O1`: 1920x1080
    FullHd,
    /// `O2`: 1280x720
    Hd,
    /// `O3`: 640x480
    Vga,
}

impl OutputPreset {
    /// All presets in selector order.
    pub const ALL: [OutputPreset; 3] = [OutputPreset::FullHd, OutputPreset::Hd, OutputPreset::Vga];

    /// The selector code used on the command line.
    pub fn code(self) -> &'static str {
        match self {
            OutputPreset::FullHd => "O1",
            OutputPreset::Hd => "O2",
            OutputPreset::Vga => "O3",
        }
    }

    /// Destination dimensions for this preset.
    pub fn dimensions(self) -> Dimensions {
        let (width, height) = match self {
            OutputPreset::FullHd => (1920, 1080),
            OutputPreset::Hd => (1280, 720),
            OutputPreset::Vga => (640, 480),
        };
        Dimensions { width, height }
    }
}

impl FromStr for OutputPreset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        OutputPreset::ALL
            .into_iter()
            .find(|p| p.code() == s)
            .ok_or_else(|| Error::UnknownPreset(s.to_string()))
    }
}

/// Destination size as given by the operator: a preset code or explicit dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputSize {
    Preset(OutputPreset),
    Custom(Dimensions),
}

impl OutputSize {
    /// Resolve to concrete dimensions.
    pub fn dimensions(self) -> Dimensions {
        match self {
            OutputSize::Preset(p) => p.dimensions(),
            OutputSize::Custom(d) => d,
        }
    }
}

impl FromStr for OutputSize {
    type Err = Error;

    /// Accepts `O1`/`O2`/`O3` or `WIDTHxHEIGHT`. Anything else is an
    /// [`Error::UnknownPreset`].
    fn from_str(s: &str) -> Result<Self> {
        if let Ok(preset) = s.parse::<OutputPreset>() {
            return Ok(OutputSize::Preset(preset));
        }
        match s.parse::<Dimensions>() {
            Ok(dims) => Ok(OutputSize::Custom(dims)),
            Err(Error::InvalidDimension { width, height }) => {
                Err(Error::InvalidDimension { width, height })
            }
            Err(_) => Err(Error::UnknownPreset(s.to_string())),
        }
    }
}
