//! Fixed-point helpers with 8 fractional bits
//!
//! A value `x` is stored as the integer `x * 256`. Only the fixed-point
//! rotation uses this representation, for `cos θ`, `sin θ`, the source
//! coordinates and the interpolation weights.

/// Number of fractional bits.
pub const FRAC_BITS: u32 = 8;

/// The value 1.0 in fixed point.
pub const ONE: i64 = 1 << FRAC_BITS;

/// Mask selecting the fractional bits.
pub const FRAC_MASK: i64 = ONE - 1;

/// Shift that rescales a product of two fixed-point weights back to an
/// integer.
pub const WEIGHT_SHIFT: u32 = 2 * FRAC_BITS;

/// Quantize a real value, truncating toward zero.
#[inline]
pub fn to_fixed(x: f32) -> i64 {
    (x * ONE as f32) as i64
}

/// Floor of a fixed-point value (arithmetic shift).
#[inline]
pub fn integer_part(v: i64) -> i64 {
    v >> FRAC_BITS
}

/// Fractional part in `0..=255`, always non-negative.
#[inline]
pub fn fraction(v: i64) -> i64 {
    v & FRAC_MASK
}

/// Bilinear weights `[w00, w01, w10, w11]` for row/column fractions in
/// `0..=255`. The weights always add up to `ONE * ONE`.
#[inline]
pub fn bilinear_weights(fr: i64, fc: i64) -> [i64; 4] {
    [
        (ONE - fr) * (ONE - fc),
        (ONE - fr) * fc,
        fr * (ONE - fc),
        fr * fc,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_fixed_truncates_toward_zero() {
        assert_eq!(to_fixed(1.0), 256);
        assert_eq!(to_fixed(0.0), 0);
        assert_eq!(to_fixed(-0.5), -128);
        assert_eq!(to_fixed(0.7071), 181);
        assert_eq!(to_fixed(-0.7071), -181);
    }

    #[test]
    fn test_integer_and_fraction_parts() {
        assert_eq!(integer_part(256 * 3 + 17), 3);
        assert_eq!(fraction(256 * 3 + 17), 17);
        // -1/256 lies just below zero
        assert_eq!(integer_part(-1), -1);
        assert_eq!(fraction(-1), 255);
        assert_eq!(integer_part(-512), -2);
        assert_eq!(fraction(-512), 0);
    }

    #[test]
    fn test_weights_sum_to_one() {
        for fr in [0, 1, 64, 128, 255] {
            for fc in [0, 3, 100, 255] {
                let w = bilinear_weights(fr, fc);
                assert_eq!(w.iter().sum::<i64>(), ONE * ONE);
                assert!(w.iter().all(|&x| x >= 0));
            }
        }
        assert_eq!(bilinear_weights(0, 0), [65536, 0, 0, 0]);
    }
}
