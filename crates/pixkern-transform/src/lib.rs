//! pixkern-transform - Rotation about the image center
//!
//! This crate provides two rotations with bilinear interpolation that
//! share one geometry and one bounds policy:
//!
//! - [`rotate`] - `f32` arithmetic
//! - [`rotate_fxp`] - integer arithmetic with 8 fractional bits
//!
//! Both write only the output pixels whose 2x2 source neighborhood lies
//! inside the image. [`rotate_image`] wraps them for [`Image`] values and
//! pre-fills the background.
//!
//! [`Image`]: pixkern_core::Image

mod error;
pub mod fixed;
pub mod rotate;
pub mod rotate_fxp;

pub use error::{TransformError, TransformResult};
pub use rotate::{
    RotateFill, RotateMethod, bilinear_weights, rotate, rotate_image, rotate_image_by_degrees,
};
pub use rotate_fxp::rotate_fxp;
