//! Row-major buffer layout
//!
//! Samples are interleaved per pixel and rows are stored consecutively:
//!
//! ```text
//! data[(row * stride + col) * channels + channel]
//! ```
//!
//! where `stride` is the row length in pixels.

use crate::error::{Error, Result};

/// Largest channel count any kernel has to handle.
///
/// Per-pixel scratch arrays are sized with this so no allocation happens
/// in the inner loops.
pub const MAX_CHANNELS: usize = 3;

/// Interleaved channel layout of a pixel buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channels {
    /// Single channel (grayscale)
    Gray,
    /// Three interleaved channels (rgb)
    Rgb,
}

impl Channels {
    /// Build a layout from a raw channel count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedChannelCount`] for anything but 1 or 3.
    pub fn from_count(count: usize) -> Result<Self> {
        match count {
            1 => Ok(Channels::Gray),
            3 => Ok(Channels::Rgb),
            n => Err(Error::UnsupportedChannelCount(n)),
        }
    }

    /// Number of interleaved samples per pixel.
    #[inline]
    pub fn count(self) -> usize {
        match self {
            Channels::Gray => 1,
            Channels::Rgb => 3,
        }
    }
}

impl TryFrom<usize> for Channels {
    type Error = Error;

    fn try_from(count: usize) -> Result<Self> {
        Channels::from_count(count)
    }
}

/// Flat offset of a sample in a row-major interleaved buffer.
///
/// `stride` is the row length in pixels, `channels` the number of samples
/// per pixel.
#[inline]
pub fn loc(row: usize, col: usize, channel: usize, stride: usize, channels: usize) -> usize {
    (row * stride + col) * channels + channel
}

/// Number of samples in a `width x height` buffer with `channels` samples
/// per pixel.
///
/// # Errors
///
/// Returns [`Error::InvalidDimension`] if either dimension is zero or the
/// product does not fit in `usize`.
pub fn sample_count(width: usize, height: usize, channels: usize) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimension { width, height });
    }
    width
        .checked_mul(height)
        .and_then(|pixels| pixels.checked_mul(channels))
        .ok_or(Error::InvalidDimension { width, height })
}

/// Geometry shared by an input/output buffer pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    width: usize,
    height: usize,
    channels: Channels,
}

impl Layout {
    /// Validate dimensions and channel count.
    ///
    /// # Errors
    ///
    /// - [`Error::UnsupportedChannelCount`] if `channels` is not 1 or 3
    /// - [`Error::InvalidDimension`] if either dimension is zero or the
    ///   sample count overflows `usize`
    pub fn new(width: usize, height: usize, channels: usize) -> Result<Self> {
        let channels = Channels::from_count(channels)?;
        sample_count(width, height, channels.count())?;
        Ok(Self {
            width,
            height,
            channels,
        })
    }

    /// Validate the layout against an input and an output buffer.
    ///
    /// Nothing is written to either buffer; this is meant to run before a
    /// kernel touches `output`.
    pub fn for_buffers(
        input: &[u8],
        output: &[u8],
        width: usize,
        height: usize,
        channels: usize,
    ) -> Result<Self> {
        let layout = Self::new(width, height, channels)?;
        layout.check_len("input", input.len())?;
        layout.check_len("output", output.len())?;
        Ok(layout)
    }

    fn check_len(&self, name: &'static str, actual: usize) -> Result<()> {
        let expected = self.sample_count();
        if actual != expected {
            return Err(Error::BufferSizeMismatch {
                name,
                expected,
                actual,
            });
        }
        Ok(())
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Channel layout.
    #[inline]
    pub fn channels(&self) -> Channels {
        self.channels
    }

    /// Total number of samples (`width * height * channels`).
    ///
    /// Cannot overflow: [`Layout::new`] rejects geometries whose count does
    /// not fit in `usize`.
    #[inline]
    pub fn sample_count(&self) -> usize {
        self.width * self.height * self.channels.count()
    }

    /// Offset of `(row, col, channel)` within a buffer of this layout.
    #[inline]
    pub fn index(&self, row: usize, col: usize, channel: usize) -> usize {
        loc(row, col, channel, self.width, self.channels.count())
    }
}
