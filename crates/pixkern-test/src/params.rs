//! Regression test parameters and operations

use crate::error::{TestError, TestResult};

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Compare results and record failures (default)
    #[default]
    Compare,
    /// Compare and additionally dump every compared buffer
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
/// Tracks the state of a regression test: the test name, the index of the
/// current check, the mode, and every failure seen so far.
pub struct RegParams {
    /// Name of the test (e.g., "sigma_filter")
    pub test_name: String,
    /// Current check index (incremented before each check)
    index: usize,
    /// Test mode
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<TestError>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// Installs the test logger so kernel diagnostics show up with
    /// `RUST_LOG`, and reads the mode from `REGTEST_MODE`.
    pub fn new(test_name: &str) -> Self {
        crate::init_logging();
        let mode = RegTestMode::from_env();

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

    fn record(&mut self, failure: TestError) {
        eprintln!("Failure in {}_reg: {}", self.test_name, failure);
        self.failures.push(failure);
        self.success = false;
    }

    /// Compare two floating-point values
    ///
    /// Returns `true` if `|expected - actual| <= delta`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            self.record(TestError::ValueMismatch {
                index: self.index,
                expected,
                actual,
                delta,
            });
            false
        } else {
            true
        }
    }

    /// Compare two sample buffers for exact equality
    pub fn compare_buffers(&mut self, expected: &[u8], actual: &[u8]) -> bool {
        self.compare_buffers_within(expected, actual, 0)
    }

    /// Compare two sample buffers, allowing `delta` absolute difference per
    /// sample. Buffers of different lengths never match.
    pub fn compare_buffers_within(&mut self, expected: &[u8], actual: &[u8], delta: u8) -> bool {
        self.index += 1;

        if self.display() {
            eprintln!("  [{}] expected: {:?}", self.index, expected);
            eprintln!("  [{}] actual:   {:?}", self.index, actual);
        }

        let mismatch = expected
            .iter()
            .zip(actual)
            .position(|(&e, &a)| e.abs_diff(a) > delta)
            .or_else(|| (expected.len() != actual.len()).then(|| expected.len().min(actual.len())));

        match mismatch {
            Some(position) => {
                self.record(TestError::BufferMismatch {
                    index: self.index,
                    position,
                });
                false
            }
            None => true,
        }
    }

    /// Clean up and report results
    ///
    /// Returns `true` if all checks passed.
    pub fn cleanup(self) -> bool {
        self.finish().is_ok()
    }

    /// Report results as a `Result`.
    ///
    /// # Errors
    ///
    /// Returns [`TestError::Failed`] with the number of failed checks.
    pub fn finish(self) -> TestResult<()> {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
            eprintln!();
            return Ok(());
        }

        eprintln!("FAILURE: {}_reg", self.test_name);
        for failure in &self.failures {
            eprintln!("  {}", failure);
        }
        eprintln!();
        Err(TestError::Failed {
            test: self.test_name,
            count: self.failures.len(),
        })
    }

    /// Check if all checks have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[TestError] {
        &self.failures
    }
}
