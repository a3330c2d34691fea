//! rawscale-test - Regression test framework for rawscale
//!
//! Modelled on a classic regression-test driver: each test creates a
//! [`RegParams`], runs any number of numbered checks and calls
//! [`RegParams::cleanup`] at the end, which reports every failure.
//!
//! # Usage
//!
//! ```ignore
//! use rawscale_test::RegParams;
//!
//! let mut rp = RegParams::new("resample");
//! rp.compare_values(12.0, buf.as_bytes().len() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: `compare` (default) or `display`; display mode also
//!   writes the checked buffers as PNG into `tests/regout/`

mod error;
pub mod fixtures;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // rawscale-test is at crates/rawscale-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}

/// Path of a scratch file inside the regout directory
pub fn regout_path(name: &str) -> String {
    format!("{}/{}", regout_dir(), name)
}
