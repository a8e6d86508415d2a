//! Sliding histogram window
//!
//! Keeps, for every channel, a 256-bin count of the samples inside a
//! `(2k+1)`-row band and a sliding column range. Moving one column to the
//! right costs one column removal plus one column insertion (each
//! `O(band height)`) instead of recounting the whole window.
//!
//! The window is clipped at the image border: columns or rows outside the
//! image contribute nothing, there is no replication or wraparound.

use crate::{FilterError, FilterResult};
use pixkern_core::{Layout, MAX_CHANNELS};

/// Number of histogram bins (one per 8-bit sample value).
pub const BINS: usize = 256;

/// Per-channel intensity histogram over a rectangular neighborhood.
#[derive(Debug, Clone)]
pub struct HistogramWindow<'a> {
    input: &'a [u8],
    layout: Layout,
    radius: usize,
    row_min: usize,
    row_max: usize,
    col_min: usize,
    col_max: usize,
    bins: [[u32; BINS]; MAX_CHANNELS],
}

impl<'a> HistogramWindow<'a> {
    /// Create an empty window over `input`.
    ///
    /// `input` must already have been validated against `layout`. Call
    /// [`reset`](Self::reset) before reading any counts.
    pub fn new(input: &'a [u8], layout: Layout, radius: usize) -> Self {
        Self {
            input,
            layout,
            radius,
            row_min: 0,
            row_max: 0,
            col_min: 0,
            col_max: 0,
            bins: [[0; BINS]; MAX_CHANNELS],
        }
    }

    /// Rebuild the histogram for column 0 of `row`.
    ///
    /// The band becomes `[max(0, row-k), min(height-1, row+k)]` and the
    /// column range `[0, min(width-1, k)]`.
    pub fn reset(&mut self, row: usize) {
        let last_row = self.layout.height() - 1;
        let last_col = self.layout.width() - 1;

        self.row_min = row.saturating_sub(self.radius);
        self.row_max = row.saturating_add(self.radius).min(last_row);
        self.col_min = 0;
        self.col_max = self.radius.min(last_col);
        for channel in self.bins.iter_mut() {
            channel.fill(0);
        }

        log::trace!(
            "histogram reset: rows {}..={}, cols 0..={}",
            self.row_min,
            self.row_max,
            self.col_max
        );

        for col in 0..=self.col_max {
            self.add_column(col);
        }
        debug_assert!(self.is_consistent());
    }

    /// Move the window so that it is centered on column `col` (`col > 0`).
    ///
    /// Column `col-k-1` leaves the window and column `col+k` enters it,
    /// each only if it lies inside the image.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::HistogramUnderflow`] if a removal would drive
    /// a bin below zero. This can only happen if the window is slid out of
    /// order (e.g. without a preceding [`reset`](Self::reset)).
    pub fn slide(&mut self, col: usize) -> FilterResult<()> {
        let width = self.layout.width();

        if let Some(col_out) = col.checked_sub(self.radius.saturating_add(1)) {
            if col_out < width {
                self.remove_column(col_out)?;
                self.col_min = col_out + 1;
            }
        }

        let col_in = col.saturating_add(self.radius);
        if col_in < width {
            self.add_column(col_in);
            self.col_max = col_in;
        }

        debug_assert!(self.is_consistent());
        Ok(())
    }

    fn add_column(&mut self, col: usize) {
        let channels = self.layout.channels().count();
        for row in self.row_min..=self.row_max {
            for (channel, bins) in self.bins.iter_mut().enumerate().take(channels) {
                let value = self.input[self.layout.index(row, col, channel)];
                bins[value as usize] += 1;
            }
        }
    }

    fn remove_column(&mut self, col: usize) -> FilterResult<()> {
        let channels = self.layout.channels().count();
        for row in self.row_min..=self.row_max {
            for (channel, bins) in self.bins.iter_mut().enumerate().take(channels) {
                let value = self.input[self.layout.index(row, col, channel)];
                let bin = &mut bins[value as usize];
                *bin = bin
                    .checked_sub(1)
                    .ok_or(FilterError::HistogramUnderflow { channel, value })?;
            }
        }
        Ok(())
    }

    /// Occurrences of `value` in `channel`.
    #[inline]
    pub fn count(&self, channel: usize, value: u8) -> u32 {
        self.bins[channel][value as usize]
    }

    /// Sum of all bins of `channel`.
    pub fn population(&self, channel: usize) -> u64 {
        self.bins[channel].iter().map(|&n| n as u64).sum()
    }

    /// Number of pixels currently covered by the window.
    pub fn area(&self) -> u64 {
        let rows = (self.row_max - self.row_min + 1) as u64;
        let cols = if self.col_max >= self.col_min {
            (self.col_max - self.col_min + 1) as u64
        } else {
            0
        };
        rows * cols
    }

    /// Current row band, inclusive.
    pub fn rows(&self) -> (usize, usize) {
        (self.row_min, self.row_max)
    }

    /// Current column range, inclusive.
    pub fn cols(&self) -> (usize, usize) {
        (self.col_min, self.col_max)
    }

    /// True if every channel's population equals the window area.
    pub fn is_consistent(&self) -> bool {
        let area = self.area();
        (0..self.layout.channels().count()).all(|channel| self.population(channel) == area)
    }

    /// Round-half-up mean of the samples of `channel` whose value lies in
    /// `lo..=hi`.
    ///
    /// Returns `None` when no sample falls in the range, including an empty
    /// range (`lo > hi`).
    pub fn weighted_mean(&self, channel: usize, lo: u8, hi: u8) -> Option<u8> {
        if lo > hi {
            return None;
        }
        let bins = &self.bins[channel][lo as usize..=hi as usize];
        let (sum, n) = bins
            .iter()
            .zip(lo as u64..)
            .fold((0u64, 0u64), |(sum, n), (&count, value)| {
                (sum + value * count as u64, n + count as u64)
            });
        if n == 0 {
            return None;
        }
        Some(((sum + n / 2) / n) as u8)
    }
}
