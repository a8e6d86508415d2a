//! pixkern-core - Basic data structures for the pixkern kernels
//!
//! This crate provides the pieces shared by every kernel:
//!
//! - [`Channels`] / [`Layout`] - channel count and buffer geometry checks
//! - [`loc`] - flat offset of a sample in a row-major interleaved buffer
//! - [`Image`] - owned pixel container with tagged 8-bit / float storage
//! - [`Error`] - the shared error type

pub mod error;
pub mod image;
pub mod layout;

pub use error::{Error, Result};
pub use image::{Image, ImageData, PixelFormat};
pub use layout::{Channels, Layout, MAX_CHANNELS, loc, sample_count};
