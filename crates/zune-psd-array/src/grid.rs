/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Multi-channel pixel grids
//!
//! Channels come out of a PSD planar, i.e `RRRR`,`GGGG`,`BBBB`, while
//! consumers expect them interleaved per pixel, `RGBRGBRGBRGB`.
//!
//! A [`PixelGrid`] stores samples interleaved in row major order, the sample for
//! `(row, column, channel)` lives at `(row * width + column) * channels + channel`.
use alloc::vec;
use alloc::vec::Vec;

use log::trace;

use crate::constants::ColorMode;
use crate::diagnostics::{Anomaly, Diagnostics};
use crate::errors::PSDArrayErrors;

/// An owned array of floating point samples with shape
/// `(height, width, channels)`, or `(height, width)` for single plane results
#[derive(Clone, Debug, PartialEq)]
pub struct PixelGrid {
    height:   usize,
    width:    usize,
    channels: usize,
    /// Whether the trailing channel axis was dropped
    planar:   bool,
    data:     Vec<f64>
}

impl PixelGrid {
    /// Create a grid from interleaved samples
    ///
    /// # Errors
    /// [`PSDArrayErrors::ShapeMismatch`] if `data` does not contain exactly
    /// `height * width * channels` samples
    pub fn new(
        height: usize, width: usize, channels: usize, data: Vec<f64>
    ) -> Result<PixelGrid, PSDArrayErrors> {
        let expected = height * width * channels;

        if data.len() != expected {
            return Err(PSDArrayErrors::ShapeMismatch {
                expected,
                found: data.len()
            });
        }
        Ok(PixelGrid {
            height,
            width,
            channels,
            planar: false,
            data
        })
    }

    /// A grid of the given shape where every sample is `1.0`
    pub fn ones(height: usize, width: usize, channels: usize) -> PixelGrid {
        PixelGrid {
            height,
            width,
            channels,
            planar: false,
            data: vec![1.0; height * width * channels]
        }
    }

    /// Create a grid from channel major samples, `(channels, height, width)`,
    /// transposing them into `(height, width, channels)`
    ///
    /// The channel count is inferred from the number of samples
    pub fn from_planar(
        samples: &[f64], height: usize, width: usize
    ) -> Result<PixelGrid, PSDArrayErrors> {
        let plane = height * width;

        if plane == 0 || samples.len() % plane != 0 {
            return Err(PSDArrayErrors::ShapeMismatch {
                expected: plane * (samples.len() / plane.max(1)),
                found:    samples.len()
            });
        }
        let channels = samples.len() / plane;

        let mut data = vec![0.0; samples.len()];

        for (channel, plane_samples) in samples.chunks_exact(plane).enumerate() {
            for (pixel, sample) in plane_samples.iter().enumerate() {
                data[pixel * channels + channel] = *sample;
            }
        }
        PixelGrid::new(height, width, channels, data)
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of channels, `1` for single plane grids
    pub const fn channels(&self) -> usize {
        self.channels
    }

    /// Number of axes, `3` normally and `2` for single plane grids
    pub const fn ndim(&self) -> usize {
        if self.planar {
            2
        } else {
            3
        }
    }

    /// Shape of the grid, either `[height, width, channels]`
    /// or `[height, width]`
    pub fn shape(&self) -> Vec<usize> {
        if self.planar {
            vec![self.height, self.width]
        } else {
            vec![self.height, self.width, self.channels]
        }
    }

    /// Interleaved samples
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// Sample at `(row, column, channel)` or `None` if out of bounds
    pub fn get(&self, row: usize, column: usize, channel: usize) -> Option<f64> {
        if row >= self.height || column >= self.width || channel >= self.channels {
            return None;
        }
        self.data
            .get((row * self.width + column) * self.channels + channel)
            .copied()
    }

    /// Keep only the first `count` channels
    ///
    /// Does nothing if the grid has `count` channels or fewer
    #[must_use]
    pub fn truncate_channels(self, count: usize) -> PixelGrid {
        if count >= self.channels {
            return self;
        }
        let data = self
            .data
            .chunks_exact(self.channels)
            .flat_map(|pixel| pixel[..count].iter().copied())
            .collect();

        PixelGrid {
            height: self.height,
            width: self.width,
            channels: count,
            planar: false,
            data
        }
    }

    /// Extract a single channel as a two axis `(height, width)` grid
    pub fn plane(&self, channel: usize) -> Option<PixelGrid> {
        if channel >= self.channels {
            return None;
        }
        let data = self
            .data
            .iter()
            .skip(channel)
            .step_by(self.channels)
            .copied()
            .collect();

        Some(PixelGrid {
            height: self.height,
            width: self.width,
            channels: 1,
            planar: true,
            data
        })
    }

    /// Append the channels of `other` after the channels of `self`
    ///
    /// # Errors
    /// [`PSDArrayErrors::ShapeMismatch`] if both grids do not share the same
    /// height and width
    pub fn concat_channels(self, other: &PixelGrid) -> Result<PixelGrid, PSDArrayErrors> {
        if self.height != other.height || self.width != other.width {
            return Err(PSDArrayErrors::ShapeMismatch {
                expected: self.height * self.width * other.channels,
                found:    other.data.len()
            });
        }
        let channels = self.channels + other.channels;
        let mut data = Vec::with_capacity(self.height * self.width * channels);

        for (left, right) in self
            .data
            .chunks_exact(self.channels)
            .zip(other.data.chunks_exact(other.channels))
        {
            data.extend_from_slice(left);
            data.extend_from_slice(right);
        }
        PixelGrid::new(self.height, self.width, channels, data)
    }
}

/// Stack decoded channels into a `(height, width, channels)` grid
///
/// Channels keep the order they are given in.
///
/// # Returns
/// - `Ok(None)`: No channels were given or the first one is empty
/// - `Ok(Some(grid))`: The assembled grid
/// - `Err(PSDArrayErrors::ShapeMismatch)`: A channel does not hold exactly `height * width` samples
pub fn assemble(
    channels: &[Vec<f64>], height: usize, width: usize
) -> Result<Option<PixelGrid>, PSDArrayErrors> {
    match channels.first() {
        None => return Ok(None),
        Some(first) if first.is_empty() => return Ok(None),
        _ => ()
    }
    let plane = height * width;

    if channels.iter().any(|c| c.len() != plane) {
        return Err(PSDArrayErrors::ShapeMismatch {
            expected: plane * channels.len(),
            found:    channels.iter().map(Vec::len).sum()
        });
    }
    trace!("Assembling {} channels of {width}x{height}", channels.len());

    let mut data = vec![0.0; plane * channels.len()];

    for (position, channel) in channels.iter().enumerate() {
        for (out, sample) in data
            .chunks_exact_mut(channels.len())
            .zip(channel.iter())
        {
            out[position] = *sample;
        }
    }
    PixelGrid::new(height, width, channels.len(), data).map(Some)
}

/// Drop channels the color mode does not account for
///
/// Grids with as many or fewer channels than `color_mode` expects
/// are returned unchanged, they are never padded.
pub fn reconcile(
    grid: PixelGrid, color_mode: ColorMode, diagnostics: &mut dyn Diagnostics
) -> PixelGrid {
    let expected = color_mode.expected_channels();

    if grid.channels() > expected {
        diagnostics.report(Anomaly::ExtraChannels {
            found: grid.channels(),
            expected,
            color_mode
        });
        return grid.truncate_channels(expected);
    }
    grid
}
