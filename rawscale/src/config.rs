//! Command-line surface and validated run configuration
//!
//! The positional arguments follow the historical invocation
//! `<image_path> <width> <height> <resamplingMethod> <outputFormat>`.
//! [`RunConfig::from_cli`] turns the raw arguments into checked values;
//! every rejection there is a configuration error and happens before
//! the source file is touched.

use clap::{ArgAction, Parser, ValueEnum};
use rawscale_core::{Dimensions, OutputSize, Result};
use rawscale_io::TruncationPolicy;
use rawscale_transform::PolicySelector;
use std::path::PathBuf;

/// File format used when displaying buffers into a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SinkFormat {
    /// 8-bit RGB PNG
    #[default]
    Png,
    /// Binary PPM (P6)
    Ppm,
}

/// Resample a raw planar RGB image
#[derive(Debug, Parser)]
#[command(name = "rawscale", version, about)]
pub struct Cli {
    /// Planar RGB source file (all R bytes, then all G, then all B)
    pub image_path: PathBuf,

    /// Source width in pixels
    pub width: u32,

    /// Source height in pixels
    pub height: u32,

    /// Resampling method: 1 = point sampling, 2 = smoothing
    pub method: String,

    /// Output resolution: O1 (1920x1080), O2 (1280x720), O3 (640x480) or WIDTHxHEIGHT
    pub output_format: String,

    /// Write the resampled image to this path in the planar layout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Display the original and resampled images as files in this directory
    #[arg(long, value_name = "DIR")]
    pub show_dir: Option<PathBuf>,

    /// File format used by --show-dir
    #[arg(long, value_enum, default_value_t = SinkFormat::Png)]
    pub show_format: SinkFormat,

    /// Zero-fill a source file shorter than 3 * width * height bytes instead of failing
    #[arg(long)]
    pub allow_truncated: bool,

    /// Process rows on the calling thread only
    #[arg(long)]
    pub serial: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Validated parameters for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub source: PathBuf,
    pub source_dims: Dimensions,
    pub selector: PolicySelector,
    pub output_size: OutputSize,
    pub output_path: Option<PathBuf>,
    pub show_dir: Option<PathBuf>,
    pub show_format: SinkFormat,
    pub truncation: TruncationPolicy,
    pub parallel: bool,
}

impl RunConfig {
    /// Validate parsed arguments.
    ///
    /// # Errors
    ///
    /// - `InvalidDimension` for a zero source width or height
    /// - `UnknownPolicySelector` / `InvalidParameter` for a bad method
    /// - `UnknownPreset` for an unrecognised output format
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let source_dims = Dimensions::new(cli.width, cli.height)?;
        let selector = cli.method.parse::<PolicySelector>()?;
        let output_size = cli.output_format.parse::<OutputSize>()?;

        Ok(Self {
            source: cli.image_path.clone(),
            source_dims,
            selector,
            output_size,
            output_path: cli.output.clone(),
            show_dir: cli.show_dir.clone(),
            show_format: cli.show_format,
            truncation: if cli.allow_truncated {
                TruncationPolicy::ZeroFill
            } else {
                TruncationPolicy::Reject
            },
            parallel: !cli.serial,
        })
    }

    /// Destination dimensions.
    pub fn output_dims(&self) -> Dimensions {
        self.output_size.dimensions()
    }
}
