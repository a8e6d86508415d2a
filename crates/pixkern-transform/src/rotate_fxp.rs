//! Fixed-point rotation
//!
//! Same mapping, bounds policy and untouched-output behavior as
//! [`rotate`](crate::rotate::rotate), carried out in integers with 8
//! fractional bits (see [`crate::fixed`]):
//!
//! - `cos θ` and `sin θ` are quantized once per call
//! - source coordinates are integer products; the integer part is an
//!   arithmetic shift and the fraction a mask, both in `0..=255`
//! - the four weights are products of two fractions (sum `65536`) and the
//!   weighted sum is shifted right by 16, truncating
//!
//! Results agree with the `f32` variant up to the quantization error of
//! the 8-bit fractions.

use crate::TransformResult;
use crate::fixed::{WEIGHT_SHIFT, bilinear_weights, fraction, integer_part, to_fixed};
use crate::rotate::{check_rotate_args, interior_anchor, neighbors};

/// Rotate a row-major 8-bit buffer by `angle` radians in fixed point.
///
/// Arguments and errors are those of [`rotate`](crate::rotate::rotate).
pub fn rotate_fxp(
    input: &[u8],
    output: &mut [u8],
    width: usize,
    height: usize,
    channels: usize,
    angle: f32,
) -> TransformResult<()> {
    let layout = check_rotate_args("rotate_fxp", input, output, width, height, channels, angle)?;

    let sin_th = to_fixed(angle.sin());
    let cos_th = to_fixed(angle.cos());
    let half_width = (width / 2) as i64;
    let half_height = (height / 2) as i64;

    for row in 0..height {
        let dr = row as i64 - half_height;
        for col in 0..width {
            let dc = col as i64 - half_width;

            let src_row = cos_th * dr - sin_th * dc;
            let src_col = sin_th * dr + cos_th * dc;

            let int_row = integer_part(src_row) + half_height;
            let int_col = integer_part(src_col) + half_width;
            let Some((r0, c0)) = interior_anchor(int_row, int_col, &layout) else {
                continue;
            };

            let weight = bilinear_weights(fraction(src_row), fraction(src_col));
            let pix = neighbors(input, &layout, r0, c0);

            for channel in 0..channels {
                let value = pix[0][channel] as i64 * weight[0]
                    + pix[1][channel] as i64 * weight[1]
                    + pix[2][channel] as i64 * weight[2]
                    + pix[3][channel] as i64 * weight[3];
                output[layout.index(row, col, channel)] = (value >> WEIGHT_SHIFT) as u8;
            }
        }
    }

    Ok(())
}
