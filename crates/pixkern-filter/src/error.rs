//! Error types for pixkern-filter

use thiserror::Error;

/// Errors that can occur during filtering operations
#[derive(Debug, Error)]
pub enum FilterError {
    /// Core library error (layout, buffer size, pixel format)
    #[error("core error: {0}")]
    Core(#[from] pixkern_core::Error),

    /// A histogram bin would have dropped below zero.
    ///
    /// This is an internal invariant violation: the sliding window removed
    /// a sample it never added.
    #[error("histogram underflow: channel {channel}, bin {value}")]
    HistogramUnderflow {
        /// Channel whose histogram underflowed
        channel: usize,
        /// Bin (sample value) that was already empty
        value: u8,
    },
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
