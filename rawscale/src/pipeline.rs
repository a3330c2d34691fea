//! One resampling run: load, resample, write, display
//!
//! Errors are raised at the boundary in a fixed order: the source is read
//! and validated before the destination buffer exists, and nothing is
//! displayed or written unless resampling finished.

use crate::config::{RunConfig, SinkFormat};
use rawscale_core::{Dimensions, PixelBuffer};
use rawscale_io::{DisplaySink, IoError, PngSink, PnmSink, read_planar, write_planar};
use rawscale_transform::{
    ResampleOptions, ResizeDirection, SamplingPolicy, TransformError, resample_with_policy,
};
use thiserror::Error;
use tracing::info;

/// Window title for the source image.
pub const ORIGINAL_TITLE: &str = "Original Image Display";
/// Window title for the resampled image.
pub const RESAMPLED_TITLE: &str = "Resampled Image Display";

/// Errors from a run
#[derive(Debug, Error)]
pub enum RunError {
    /// Reading the source or writing/displaying results failed
    #[error(transparent)]
    Io(#[from] IoError),

    /// Resampling failed or was cancelled
    #[error(transparent)]
    Transform(#[from] TransformError),
}

/// What a completed run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub source: Dimensions,
    pub output: Dimensions,
    pub direction: ResizeDirection,
    pub policy: SamplingPolicy,
}

/// Build the display sink requested by `config`, if any.
pub fn sink_for(config: &RunConfig) -> Option<Box<dyn DisplaySink>> {
    let dir = config.show_dir.clone()?;
    Some(match config.show_format {
        SinkFormat::Png => Box::new(PngSink::new(dir)),
        SinkFormat::Ppm => Box::new(PnmSink::new(dir)),
    })
}

/// Execute one run.
///
/// The original buffer and then the resampled buffer are handed to `sink`
/// when one is given.
pub fn run<S>(config: &RunConfig, sink: Option<&mut S>) -> Result<RunSummary, RunError>
where
    S: DisplaySink + ?Sized,
{
    let source = read_planar(&config.source, config.source_dims, config.truncation)?;
    let (output, summary) = resample_buffer(config, &source)?;

    if let Some(path) = &config.output_path {
        write_planar(&output, path)?;
    }
    if let Some(sink) = sink {
        sink.show(source, ORIGINAL_TITLE)?;
        sink.show(output, RESAMPLED_TITLE)?;
    }

    info!(
        src = %summary.source,
        dst = %summary.output,
        direction = ?summary.direction,
        policy = ?summary.policy,
        "run complete"
    );
    Ok(summary)
}

/// Resample an already loaded buffer according to `config`.
pub fn resample_buffer(
    config: &RunConfig,
    source: &PixelBuffer,
) -> Result<(PixelBuffer, RunSummary), RunError> {
    let output_dims = config.output_dims();
    let direction = ResizeDirection::classify(source.dims(), output_dims);
    let policy = config.selector.resolve(direction);
    let options = ResampleOptions::default().parallel(config.parallel);

    let output = resample_with_policy(source, output_dims, policy, &options)?;
    let summary = RunSummary {
        source: source.dims(),
        output: output_dims,
        direction,
        policy,
    };
    Ok((output, summary))
}
