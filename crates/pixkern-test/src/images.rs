//! Synthetic test images
//!
//! All images are row-major, interleaved, 8-bit buffers of
//! `width * height * channels` samples.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Smooth ramp: `3*row + 2*col + 20*channel`, wrapped to 8 bits.
///
/// The per-pixel gradient is small, which keeps interpolation differences
/// between the float and fixed-point rotations bounded.
pub fn gradient_image(width: usize, height: usize, channels: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(width * height * channels);
    for row in 0..height {
        for col in 0..width {
            for channel in 0..channels {
                data.push(((3 * row + 2 * col + 20 * channel) % 256) as u8);
            }
        }
    }
    data
}

/// Uniformly random samples from a fixed seed.
pub fn random_image(width: usize, height: usize, channels: usize, seed: u64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..width * height * channels)
        .map(|_| rng.random::<u8>())
        .collect()
}

/// Two flat regions split by a vertical edge at `width / 2`.
pub fn step_image(width: usize, height: usize, channels: usize, low: u8, high: u8) -> Vec<u8> {
    let mut data = Vec::with_capacity(width * height * channels);
    for _ in 0..height {
        for col in 0..width {
            let v = if col < width / 2 { low } else { high };
            data.extend(std::iter::repeat_n(v, channels));
        }
    }
    data
}

/// Round-half-up mean of the clipped `(2k+1) x (2k+1)` window around every
/// sample, computed directly.
pub fn box_mean(
    input: &[u8],
    width: usize,
    height: usize,
    channels: usize,
    radius: usize,
) -> Vec<u8> {
    let mut out = vec![0u8; input.len()];
    for row in 0..height {
        let rows = row.saturating_sub(radius)..=(row + radius).min(height - 1);
        for col in 0..width {
            let cols = col.saturating_sub(radius)..=(col + radius).min(width - 1);
            for channel in 0..channels {
                let mut sum = 0u64;
                let mut n = 0u64;
                for r in rows.clone() {
                    for c in cols.clone() {
                        sum += input[(r * width + c) * channels + channel] as u64;
                        n += 1;
                    }
                }
                out[(row * width + col) * channels + channel] = ((sum + n / 2) / n) as u8;
            }
        }
    }
    out
}
