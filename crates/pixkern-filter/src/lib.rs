//! pixkern-filter - Histogram-based sigma filtering
//!
//! This crate provides:
//!
//! - [`HistogramWindow`] - per-channel 256-bin histogram of a sliding
//!   rectangular neighborhood
//! - [`sigma_filter`] - edge-preserving smoothing that averages only the
//!   neighbors within `sigma` of the center intensity

mod error;
pub mod histogram;
pub mod sigma;

pub use error::{FilterError, FilterResult};
pub use histogram::HistogramWindow;

// Re-export commonly used functions
pub use sigma::{
    DEFAULT_RADIUS, SigmaOptions, sigma_filter, sigma_filter_image, sigma_filter_with,
};
