//! pixkern - 8-bit image kernels
//!
//! # Overview
//!
//! pixkern works on row-major, interleaved 8-bit buffers with one
//! (grayscale) or three (rgb) channels and provides:
//!
//! - Sigma filtering: edge-preserving smoothing over a sliding histogram
//! - Rotation about the image center with bilinear interpolation, in
//!   floating point and in 8-bit fixed point
//!
//! Every kernel is available on raw slices and on the [`Image`] container.
//!
//! # Example
//!
//! ```
//! use pixkern::filter::{SigmaOptions, sigma_filter_image};
//! use pixkern::transform::{RotateFill, RotateMethod, rotate_image};
//! use pixkern::{Channels, Image};
//!
//! let image = Image::from_u8(8, 8, Channels::Gray, vec![128; 64]).unwrap();
//! let smoothed = sigma_filter_image(&image, &SigmaOptions::new(20)).unwrap();
//! let rotated =
//!     rotate_image(&smoothed, 0.3, RotateMethod::FixedPoint, RotateFill::White).unwrap();
//! assert_eq!(rotated.get(4, 4, 0), Some(128));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use pixkern_core::*;

// Re-export kernel crates as modules to avoid name conflicts
pub use pixkern_filter as filter;
pub use pixkern_transform as transform;
