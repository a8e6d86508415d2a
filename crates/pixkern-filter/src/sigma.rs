//! Sigma filter (edge-preserving smoothing)
//!
//! Each output sample is the mean of the neighbors whose intensity lies
//! within `sigma` of the center sample. Neighbors across a strong edge
//! fall outside that intensity window and are ignored, so edges stay sharp
//! while flat regions are smoothed.
//!
//! # Algorithm
//!
//! For every row a [`HistogramWindow`] is rebuilt at column 0 and then slid
//! one column at a time. For center value `v` and channel `c`:
//!
//! ```text
//! lo  = max(0, v - sigma)      hi = min(255, v + sigma)
//! sum = Σ p * hist[c][p]       n  = Σ hist[c][p]        for p in lo..=hi
//! out = (sum + n/2) / n        (v itself if n == 0)
//! ```
//!
//! The spatial window is `(2k+1) x (2k+1)` and shrinks at the image border;
//! no pixel is replicated or mirrored.
//!
//! The bin scan visits up to 256 bins per sample whatever the value of
//! sigma, which dominates the cost for small radii.
//!
//! # Example
//!
//! ```
//! use pixkern_filter::sigma_filter;
//!
//! let input = [10u8, 12, 200, 11, 13, 205];
//! let mut output = [0u8; 6];
//! sigma_filter(&input, &mut output, 3, 2, 1, 10, 1).unwrap();
//! assert_eq!(output[0], 12);
//! ```

use crate::histogram::HistogramWindow;
use crate::FilterResult;
use pixkern_core::{Image, Layout};

/// Radius used when none is given: a 3x3 window.
pub const DEFAULT_RADIUS: usize = 1;

/// Parameters of the sigma filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SigmaOptions {
    /// Intensity threshold around the center sample
    pub sigma: u8,
    /// Window radius `k`; the window is `(2k+1) x (2k+1)`
    pub radius: usize,
}

impl SigmaOptions {
    /// Options with the given threshold and [`DEFAULT_RADIUS`].
    pub fn new(sigma: u8) -> Self {
        Self {
            sigma,
            radius: DEFAULT_RADIUS,
        }
    }

    /// Set the window radius.
    pub fn radius(mut self, radius: usize) -> Self {
        self.radius = radius;
        self
    }
}

/// Apply the sigma filter to a row-major 8-bit buffer.
///
/// # Arguments
/// * `input` - Source samples, `width * height * channels` long
/// * `output` - Destination samples, same length as `input`
/// * `channels` - 1 (grayscale) or 3 (rgb)
/// * `sigma` - Intensity threshold
/// * `radius` - Window radius, [`DEFAULT_RADIUS`] for a 3x3 window
///
/// # Errors
///
/// The layout is checked before anything is written; on
/// [`FilterError::Core`](crate::FilterError::Core) `output` is untouched.
pub fn sigma_filter(
    input: &[u8],
    output: &mut [u8],
    width: usize,
    height: usize,
    channels: usize,
    sigma: u8,
    radius: usize,
) -> FilterResult<()> {
    let layout = Layout::for_buffers(input, output, width, height, channels)
        .inspect_err(|e| log::error!("sigma_filter rejected: {e}"))?;

    log::debug!(
        "sigma_filter: {}x{}x{} sigma={} radius={}",
        width,
        height,
        channels,
        sigma,
        radius
    );

    let mut window = HistogramWindow::new(input, layout, radius);

    for row in 0..height {
        for col in 0..width {
            if col == 0 {
                window.reset(row);
            } else {
                window.slide(col)?;
            }

            for channel in 0..channels {
                let idx = layout.index(row, col, channel);
                let v = input[idx];
                let lo = v.saturating_sub(sigma);
                let hi = v.saturating_add(sigma);
                output[idx] = window.weighted_mean(channel, lo, hi).unwrap_or(v);
            }
        }
    }

    Ok(())
}

/// Apply the sigma filter with an options struct.
pub fn sigma_filter_with(
    input: &[u8],
    output: &mut [u8],
    width: usize,
    height: usize,
    channels: usize,
    options: &SigmaOptions,
) -> FilterResult<()> {
    sigma_filter(
        input,
        output,
        width,
        height,
        channels,
        options.sigma,
        options.radius,
    )
}

/// Apply the sigma filter to an 8-bit [`Image`], returning a new image.
pub fn sigma_filter_image(image: &Image, options: &SigmaOptions) -> FilterResult<Image> {
    let input = image.require_u8()?;
    let mut output = vec![0u8; input.len()];
    sigma_filter_with(
        input,
        &mut output,
        image.width(),
        image.height(),
        image.channels().count(),
        options,
    )?;
    Ok(Image::from_u8(
        image.width(),
        image.height(),
        image.channels(),
        output,
    )?)
}
