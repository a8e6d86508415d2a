//! pixkern-test - Regression test framework for pixkern
//!
//! Modeled on a `regutils`-style regression harness:
//!
//! - [`RegParams`] numbers every check, records failures and reports them
//!   together at the end of a test
//! - synthetic images ([`gradient_image`], [`random_image`], [`step_image`])
//!   and a brute-force [`box_mean`] reference
//!
//! # Usage
//!
//! ```
//! use pixkern_test::RegParams;
//!
//! let mut rp = RegParams::new("example");
//! rp.compare_values(12.0, 12.0, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: "compare" (default) or "display"
//! - `RUST_LOG`: log level for kernel diagnostics, e.g. `debug`

mod error;
mod images;
mod params;

pub use error::{TestError, TestResult};
pub use images::{box_mean, gradient_image, random_image, step_image};
pub use params::{RegParams, RegTestMode};

/// Install `env_logger` in test mode. Safe to call more than once.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
