//! Error types for pixkern-core
//!
//! Provides a unified error type for the buffer and layout checks shared by
//! every kernel. All checks run before a kernel writes anything, so an
//! error always means the output buffer was left untouched.

use thiserror::Error;

/// pixkern-core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: usize, height: usize },

    /// Channel count other than 1 (grayscale) or 3 (rgb)
    #[error("channel count should be either 1 (grayscale) or 3 (rgb), got {0}")]
    UnsupportedChannelCount(usize),

    /// Buffer length does not match `width * height * channels`
    #[error("{name} buffer holds {actual} samples, expected {expected}")]
    BufferSizeMismatch {
        name: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Sample storage is not the one required by the operation
    #[error("unsupported pixel format: {0}")]
    UnsupportedFormat(String),

    /// Sample coordinates outside the image
    #[error("sample ({row}, {col}, channel {channel}) out of bounds for {width}x{height} image")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        channel: usize,
        width: usize,
        height: usize,
    },
}

/// Result type alias for pixkern-core operations
pub type Result<T> = std::result::Result<T, Error>;
