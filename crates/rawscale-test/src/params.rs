//! Regression test parameters and operations

use crate::error::{TestError, TestResult};
use crate::regout_dir;
use rawscale_core::{CHANNELS, PixelBuffer};
use std::fs::{self, File};
use std::io::BufWriter;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Compare values and buffers (default)
    #[default]
    Compare,
    /// Compare, and also write every checked buffer as PNG for inspection
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// Tracks the test name, the running check index, the mode, and every
/// failure so that one run reports all mismatches instead of stopping at
/// the first.
pub struct RegParams {
    /// Name of the test (e.g., "resample")
    pub test_name: String,
    /// Current check index (incremented before each check)
    index: usize,
    /// Test mode
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// The mode is taken from the `REGTEST_MODE` environment variable.
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

        let _ = fs::create_dir_all(regout_dir());

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current check index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn fail(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Compare two floating-point values
    ///
    /// Returns `true` if `|expected - actual| <= delta`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.fail(msg);
            false
        } else {
            true
        }
    }

    /// Compare one pixel triple
    pub fn compare_rgb(&mut self, expected: (u8, u8, u8), actual: (u8, u8, u8)) -> bool {
        self.index += 1;
        if expected != actual {
            let msg = format!(
                "Failure in {}_reg: rgb comparison for index {} - expected {:?}, got {:?}",
                self.test_name, self.index, expected, actual
            );
            self.fail(msg);
            false
        } else {
            true
        }
    }

    /// Compare two buffers for exact equality
    ///
    /// Reports the first differing pixel on mismatch.
    pub fn compare_buffers(&mut self, expected: &PixelBuffer, actual: &PixelBuffer) -> bool {
        self.index += 1;

        if expected.dims() != actual.dims() {
            let msg = format!(
                "Failure in {}_reg: buffer comparison for index {} - dimension mismatch {} vs {}",
                self.test_name,
                self.index,
                expected.dims(),
                actual.dims()
            );
            self.fail(msg);
            return false;
        }

        let mismatch = (0..expected.height()).find_map(|y| {
            let (r1, r2) = (expected.row(y), actual.row(y));
            if r1 == r2 {
                return None;
            }
            let x = r1
                .chunks_exact(CHANNELS)
                .zip(r2.chunks_exact(CHANNELS))
                .position(|(a, b)| a != b)?;
            Some((x as u32, y))
        });

        if let Some((x, y)) = mismatch {
            let msg = format!(
                "Failure in {}_reg: buffer comparison for index {} - pixel mismatch at ({}, {}): {:?} vs {:?}",
                self.test_name,
                self.index,
                x,
                y,
                expected.get_rgb_unchecked(x, y),
                actual.get_rgb_unchecked(x, y)
            );
            self.fail(msg);
            return false;
        }

        true
    }

    /// Record a boolean condition
    pub fn check(&mut self, cond: bool, what: &str) -> bool {
        self.index += 1;
        if !cond {
            let msg = format!(
                "Failure in {}_reg: check for index {} - {}",
                self.test_name, self.index, what
            );
            self.fail(msg);
        }
        cond
    }

    /// In display mode, write `buffer` as PNG into the regout directory
    ///
    /// Does nothing in compare mode.
    pub fn write_buffer_if_display(&self, buffer: &PixelBuffer, label: &str) -> TestResult<()> {
        if !self.display() {
            return Ok(());
        }
        let path = format!("{}/{}.{}.png", regout_dir(), self.test_name, label);
        let file = File::create(&path)?;
        rawscale_io::write_png(buffer, BufWriter::new(file)).map_err(|e| TestError::Write {
            path: path.clone(),
            message: e.to_string(),
        })?;
        eprintln!("Wrote: {}", path);
        Ok(())
    }

    /// Clean up and report results
    ///
    /// Returns `true` if all checks passed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all checks have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}
