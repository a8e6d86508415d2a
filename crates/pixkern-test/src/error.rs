//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur during regression testing
#[derive(Debug, Error)]
pub enum TestError {
    /// Value comparison failed
    #[error(
        "value comparison failed at index {index}: expected {expected}, got {actual}, delta {delta}"
    )]
    ValueMismatch {
        index: usize,
        expected: f64,
        actual: f64,
        delta: f64,
    },

    /// Buffer comparison failed
    #[error("buffer comparison failed at index {index}: first difference at sample {position}")]
    BufferMismatch { index: usize, position: usize },

    /// One or more checks of a regression test failed
    #[error("{test}_reg: {count} check(s) failed")]
    Failed { test: String, count: usize },
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
