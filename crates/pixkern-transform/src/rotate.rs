//! Rotation about the image center with bilinear interpolation
//!
//! Every output pixel `(row, col)` is mapped back into the source image by
//! the inverse rotation about `(height / 2, width / 2)` (integer halves):
//!
//! ```text
//! src_row = cos θ (row - hh) - sin θ (col - hw)
//! src_col = sin θ (row - hh) + cos θ (col - hw)
//! ```
//!
//! The four source pixels around `(src_row, src_col)` are blended with
//! bilinear weights and the result is truncated to 8 bits.
//!
//! Only pixels whose top-left neighbor falls in `[0, height-2] x [0, width-2]`
//! are written. Every other output sample keeps the value it had before the
//! call, so callers wanting a defined background must pre-fill `output`
//! ([`rotate_image`] does this with a [`RotateFill`]).
//!
//! Two variants share this geometry: [`rotate`] in `f32` and
//! [`rotate_fxp`](crate::rotate_fxp::rotate_fxp) in 8-bit fixed point.

use crate::rotate_fxp::rotate_fxp;
use crate::{TransformError, TransformResult};
use pixkern_core::{Image, Layout, MAX_CHANNELS};

/// Arithmetic used by [`rotate_image`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotateMethod {
    /// `f32` trigonometry and interpolation
    #[default]
    Float,
    /// 8-fractional-bit integer arithmetic
    FixedPoint,
}

/// Background used by [`rotate_image`] for pixels the rotation leaves
/// untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotateFill {
    /// Fill with 0
    #[default]
    Black,
    /// Fill with 255
    White,
    /// Fill with a specific sample value
    Value(u8),
}

impl RotateFill {
    /// Sample value written to every channel.
    pub fn to_value(self) -> u8 {
        match self {
            RotateFill::Black => 0,
            RotateFill::White => 255,
            RotateFill::Value(v) => v,
        }
    }
}

/// Validate buffers and angle before a rotation writes anything.
pub(crate) fn check_rotate_args(
    op: &str,
    input: &[u8],
    output: &[u8],
    width: usize,
    height: usize,
    channels: usize,
    angle: f32,
) -> TransformResult<Layout> {
    let layout = Layout::for_buffers(input, output, width, height, channels)
        .inspect_err(|e| log::error!("{op} rejected: {e}"))?;
    if !angle.is_finite() {
        log::error!("{op} rejected: non-finite angle {angle}");
        return Err(TransformError::InvalidParameters(format!(
            "angle must be finite, got {angle}"
        )));
    }
    log::debug!("{op}: {width}x{height}x{channels} angle={angle}");
    Ok(layout)
}

/// Top-left source neighbor if the whole 2x2 neighborhood is inside the
/// image (`int_row <= height-2`, `int_col <= width-2`).
#[inline]
pub(crate) fn interior_anchor(
    int_row: i64,
    int_col: i64,
    layout: &Layout,
) -> Option<(usize, usize)> {
    let max_row = layout.height() as i64 - 1;
    let max_col = layout.width() as i64 - 1;
    if int_row >= 0 && int_row < max_row && int_col >= 0 && int_col < max_col {
        Some((int_row as usize, int_col as usize))
    } else {
        None
    }
}

/// Gather the 2x2 neighborhood `[p00, p01, p10, p11]` for every channel.
#[inline]
pub(crate) fn neighbors(
    input: &[u8],
    layout: &Layout,
    row: usize,
    col: usize,
) -> [[u8; MAX_CHANNELS]; 4] {
    let mut pix = [[0u8; MAX_CHANNELS]; 4];
    let offsets = [(0, 0), (0, 1), (1, 0), (1, 1)];
    for (corner, &(dr, dc)) in pix.iter_mut().zip(offsets.iter()) {
        for (channel, sample) in corner
            .iter_mut()
            .enumerate()
            .take(layout.channels().count())
        {
            *sample = input[layout.index(row + dr, col + dc, channel)];
        }
    }
    pix
}

/// Bilinear weights `[w00, w01, w10, w11]` for row/column fractions.
///
/// The weights are formed in `f64` and narrowed to `f32`.
#[inline]
pub fn bilinear_weights(fr: f32, fc: f32) -> [f32; 4] {
    let fr = fr as f64;
    let fc = fc as f64;
    [
        ((1.0 - fr) * (1.0 - fc)) as f32,
        ((1.0 - fr) * fc) as f32,
        (fr * (1.0 - fc)) as f32,
        (fr * fc) as f32,
    ]
}

/// Rotate a row-major 8-bit buffer by `angle` radians, in `f32`.
///
/// Pixels whose source neighborhood falls outside the image are left as
/// they were in `output`.
///
/// # Arguments
/// * `input` - Source samples, `width * height * channels` long
/// * `output` - Destination samples, same length as `input`
/// * `channels` - 1 (grayscale) or 3 (rgb)
/// * `angle` - Rotation of the output relative to the input, in radians
///
/// # Errors
///
/// Unsupported channel counts, mismatched buffer lengths and non-finite
/// angles are rejected before `output` is touched.
pub fn rotate(
    input: &[u8],
    output: &mut [u8],
    width: usize,
    height: usize,
    channels: usize,
    angle: f32,
) -> TransformResult<()> {
    let layout = check_rotate_args("rotate", input, output, width, height, channels, angle)?;

    let (sin_th, cos_th) = angle.sin_cos();
    let half_width = (width / 2) as i64;
    let half_height = (height / 2) as i64;

    for row in 0..height {
        let dr = (row as i64 - half_height) as f32;
        for col in 0..width {
            let dc = (col as i64 - half_width) as f32;

            let src_row = cos_th * dr - sin_th * dc;
            let src_col = sin_th * dr + cos_th * dc;
            let floor_row = src_row.floor();
            let floor_col = src_col.floor();

            let int_row = floor_row as i64 + half_height;
            let int_col = floor_col as i64 + half_width;
            let Some((r0, c0)) = interior_anchor(int_row, int_col, &layout) else {
                continue;
            };

            let weight = bilinear_weights(src_row - floor_row, src_col - floor_col);
            let pix = neighbors(input, &layout, r0, c0);

            for channel in 0..channels {
                let value = pix[0][channel] as f32 * weight[0]
                    + pix[1][channel] as f32 * weight[1]
                    + pix[2][channel] as f32 * weight[2]
                    + pix[3][channel] as f32 * weight[3];
                output[layout.index(row, col, channel)] = value as u8;
            }
        }
    }

    Ok(())
}

/// Rotate an 8-bit [`Image`] about its center, returning a new image.
///
/// The output starts filled with `fill`; pixels with no source
/// neighborhood keep that value.
pub fn rotate_image(
    image: &Image,
    angle: f32,
    method: RotateMethod,
    fill: RotateFill,
) -> TransformResult<Image> {
    let input = image.require_u8()?;
    let (w, h, channels) = (image.width(), image.height(), image.channels());
    let mut output = vec![fill.to_value(); input.len()];

    match method {
        RotateMethod::Float => rotate(input, &mut output, w, h, channels.count(), angle)?,
        RotateMethod::FixedPoint => {
            rotate_fxp(input, &mut output, w, h, channels.count(), angle)?
        }
    }

    Ok(Image::from_u8(w, h, channels, output)?)
}

/// Rotate an 8-bit [`Image`] by an angle given in degrees.
pub fn rotate_image_by_degrees(
    image: &Image,
    degrees: f32,
    method: RotateMethod,
    fill: RotateFill,
) -> TransformResult<Image> {
    rotate_image(image, degrees.to_radians(), method, fill)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixkern_core::{Channels, Error, PixelFormat};

    fn gradient(width: usize, height: usize, channels: usize) -> Vec<u8> {
        let mut data = vec![0u8; width * height * channels];
        for row in 0..height {
            for col in 0..width {
                for channel in 0..channels {
                    let v = 3 * row + 2 * col + 20 * channel;
                    data[(row * width + col) * channels + channel] = v as u8;
                }
            }
        }
        data
    }

    #[test]
    fn test_bilinear_weights() {
        assert_eq!(bilinear_weights(0.0, 0.0), [1.0, 0.0, 0.0, 0.0]);
        assert_eq!(bilinear_weights(0.5, 0.5), [0.25, 0.25, 0.25, 0.25]);
        let w = bilinear_weights(0.25, 0.75);
        assert!((w.iter().sum::<f32>() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_angle_zero_interior_identity() {
        let (w, h) = (7, 5);
        for channels in [1, 3] {
            let input = gradient(w, h, channels);
            let mut output = vec![0u8; input.len()];
            rotate(&input, &mut output, w, h, channels, 0.0).unwrap();

            for row in 0..h {
                for col in 0..w {
                    for c in 0..channels {
                        let idx = (row * w + col) * channels + c;
                        if row < h - 1 && col < w - 1 {
                            assert_eq!(output[idx], input[idx]);
                        } else {
                            assert_eq!(output[idx], 0);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_untouched_pixels_keep_sentinel() {
        let (w, h) = (16, 16);
        let input = vec![100u8; w * h];
        let mut output = vec![7u8; w * h];
        rotate(&input, &mut output, w, h, 1, 0.5).unwrap();

        // Corner maps outside, center maps onto itself
        assert_eq!(output[0], 7);
        assert_eq!(output[8 * w + 8], 100);
        assert!(output.iter().all(|&v| v == 7 || v == 99 || v == 100));
    }

    #[test]
    fn test_unsupported_channel_count_writes_nothing() {
        let input = [1u8; 16];
        let mut output = [42u8; 16];
        let err = rotate(&input, &mut output, 2, 2, 4, 0.3).unwrap_err();
        assert!(matches!(
            err,
            TransformError::Core(Error::UnsupportedChannelCount(4))
        ));
        assert_eq!(output, [42u8; 16]);
    }

    #[test]
    fn test_non_finite_angle_rejected() {
        let input = [1u8; 4];
        let mut output = [0u8; 4];
        assert!(matches!(
            rotate(&input, &mut output, 2, 2, 1, f32::NAN),
            Err(TransformError::InvalidParameters(_))
        ));
        assert!(rotate(&input, &mut output, 2, 2, 1, f32::INFINITY).is_err());
    }

    #[test]
    fn test_rotate_image_fill() {
        let image = Image::from_u8(9, 9, Channels::Rgb, gradient(9, 9, 3)).unwrap();
        let rotated =
            rotate_image(&image, 0.8, RotateMethod::Float, RotateFill::Value(250)).unwrap();
        assert!(rotated.same_geometry(&image));
        assert_eq!(rotated.get(0, 0, 0), Some(250));
        assert_eq!(rotated.get(4, 4, 1), image.get(4, 4, 1));

        let white = rotate_image(&image, 0.8, RotateMethod::FixedPoint, RotateFill::White).unwrap();
        assert_eq!(white.get(0, 0, 2), Some(255));
    }

    #[test]
    fn test_rotate_image_by_degrees() {
        let image = Image::from_u8(6, 6, Channels::Gray, gradient(6, 6, 1)).unwrap();
        let a = rotate_image_by_degrees(&image, 30.0, RotateMethod::Float, RotateFill::Black)
            .unwrap();
        let b = rotate_image(
            &image,
            30.0f32.to_radians(),
            RotateMethod::Float,
            RotateFill::Black,
        )
        .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rotate_image_rejects_float_storage() {
        let image = Image::new(4, 4, Channels::Gray, PixelFormat::F32).unwrap();
        assert!(matches!(
            rotate_image(&image, 0.1, RotateMethod::Float, RotateFill::Black),
            Err(TransformError::Core(Error::UnsupportedFormat(_)))
        ));
    }
}
