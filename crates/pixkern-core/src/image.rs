//! Image - the pixel container handed to the kernels
//!
//! An `Image` owns a row-major, interleaved sample buffer together with its
//! geometry. Samples are either 8-bit (`U8`) or floating point (`F32`);
//! every kernel in this workspace consumes the 8-bit storage only.
//!
//! New images are zero-filled, which gives rotations a defined black
//! background for the pixels they leave untouched.

use crate::error::{Error, Result};
use crate::layout::{self, Channels, loc};
use std::fmt;

/// Sample type stored by an [`Image`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PixelFormat {
    /// 8-bit unsigned samples
    #[default]
    U8,
    /// 32-bit floating point samples
    F32,
}

/// Tagged sample storage.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageData {
    U8(Vec<u8>),
    F32(Vec<f32>),
}

impl ImageData {
    fn zeroed(len: usize, format: PixelFormat) -> Self {
        match format {
            PixelFormat::U8 => ImageData::U8(vec![0; len]),
            PixelFormat::F32 => ImageData::F32(vec![0.0; len]),
        }
    }

    fn format(&self) -> PixelFormat {
        match self {
            ImageData::U8(_) => PixelFormat::U8,
            ImageData::F32(_) => PixelFormat::F32,
        }
    }

    fn len(&self) -> usize {
        match self {
            ImageData::U8(data) => data.len(),
            ImageData::F32(data) => data.len(),
        }
    }
}

/// A 2D image with interleaved samples in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    width: usize,
    height: usize,
    channels: Channels,
    data: ImageData,
}

impl Image {
    /// Create a zero-filled image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is zero or
    /// the sample count overflows `usize`.
    pub fn new(
        width: usize,
        height: usize,
        channels: Channels,
        format: PixelFormat,
    ) -> Result<Self> {
        let len = layout::sample_count(width, height, channels.count())?;
        Ok(Self {
            width,
            height,
            channels,
            data: ImageData::zeroed(len, format),
        })
    }

    /// Wrap an existing 8-bit buffer.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidDimension`] if either dimension is zero or the
    ///   sample count overflows `usize`
    /// - [`Error::BufferSizeMismatch`] if `data` is not
    ///   `width * height * channels` samples long
    pub fn from_u8(
        width: usize,
        height: usize,
        channels: Channels,
        data: Vec<u8>,
    ) -> Result<Self> {
        let expected = layout::sample_count(width, height, channels.count())?;
        if data.len() != expected {
            return Err(Error::BufferSizeMismatch {
                name: "image",
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            channels,
            data: ImageData::U8(data),
        })
    }

    /// Create a zero-filled image with the same geometry and format.
    pub fn create_template(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            channels: self.channels,
            data: ImageData::zeroed(self.data.len(), self.data.format()),
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn channels(&self) -> Channels {
        self.channels
    }

    #[inline]
    pub fn format(&self) -> PixelFormat {
        self.data.format()
    }

    /// Number of samples (`width * height * channels`).
    #[inline]
    pub fn sample_count(&self) -> usize {
        self.data.len()
    }

    /// True if both images share width, height, channels and format.
    pub fn same_geometry(&self, other: &Image) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.channels == other.channels
            && self.format() == other.format()
    }

    /// Borrow the tagged storage.
    pub fn data(&self) -> &ImageData {
        &self.data
    }

    /// 8-bit samples, or `None` for a floating-point image.
    pub fn as_u8(&self) -> Option<&[u8]> {
        match &self.data {
            ImageData::U8(data) => Some(data),
            ImageData::F32(_) => None,
        }
    }

    /// Mutable 8-bit samples, or `None` for a floating-point image.
    pub fn as_u8_mut(&mut self) -> Option<&mut [u8]> {
        match &mut self.data {
            ImageData::U8(data) => Some(data),
            ImageData::F32(_) => None,
        }
    }

    /// Floating-point samples, or `None` for an 8-bit image.
    pub fn as_f32(&self) -> Option<&[f32]> {
        match &self.data {
            ImageData::F32(data) => Some(data),
            ImageData::U8(_) => None,
        }
    }

    /// 8-bit samples, or [`Error::UnsupportedFormat`].
    pub fn require_u8(&self) -> Result<&[u8]> {
        self.as_u8()
            .ok_or_else(|| Error::UnsupportedFormat("expected 8-bit samples, got f32".into()))
    }

    /// Read one 8-bit sample.
    ///
    /// Returns `None` for out-of-range coordinates or a floating-point image.
    pub fn get(&self, row: usize, col: usize, channel: usize) -> Option<u8> {
        if row >= self.height || col >= self.width || channel >= self.channels.count() {
            return None;
        }
        let idx = loc(row, col, channel, self.width, self.channels.count());
        self.as_u8().map(|data| data[idx])
    }

    /// Write one 8-bit sample.
    ///
    /// # Errors
    ///
    /// - [`Error::IndexOutOfBounds`] for out-of-range coordinates
    /// - [`Error::UnsupportedFormat`] for a floating-point image
    pub fn set(&mut self, row: usize, col: usize, channel: usize, value: u8) -> Result<()> {
        if row >= self.height || col >= self.width || channel >= self.channels.count() {
            return Err(Error::IndexOutOfBounds {
                row,
                col,
                channel,
                width: self.width,
                height: self.height,
            });
        }
        let idx = loc(row, col, channel, self.width, self.channels.count());
        let data = self
            .as_u8_mut()
            .ok_or_else(|| Error::UnsupportedFormat("expected 8-bit samples, got f32".into()))?;
        data[idx] = value;
        Ok(())
    }

    /// Set every sample to `value` (converted for floating-point storage).
    pub fn fill_u8(&mut self, value: u8) {
        match &mut self.data {
            ImageData::U8(data) => data.fill(value),
            ImageData::F32(data) => data.fill(value as f32),
        }
    }

    /// Reset every sample to zero, keeping the geometry.
    pub fn clear(&mut self) {
        self.fill_u8(0);
    }
}

/// Dumps one line per pixel: `col\trow\t` followed by each sample and a tab.
impl fmt::Display for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let channels = self.channels.count();
        for row in 0..self.height {
            for col in 0..self.width {
                write!(f, "{col}\t{row}\t")?;
                for channel in 0..channels {
                    let idx = loc(row, col, channel, self.width, channels);
                    match &self.data {
                        ImageData::U8(data) => write!(f, "{}\t", data[idx])?,
                        ImageData::F32(data) => write!(f, "{}\t", data[idx])?,
                    }
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
