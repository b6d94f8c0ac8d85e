/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Channel bit depths and sample decoding
//!
//! PSD channels store samples big endian, the following mapping
//! indicates how each depth is turned into a float
//!
//!|BitDepth              |stored as       |decoded range       |
//!|----------------------|----------------|--------------------|
//!|BitDepth::One         | packed bits    |0.0 or 1.0          |
//!|BitDepth::Eight       | [`u8`]         |0.0 - 1.0           |
//!|BitDepth::Sixteen     | [`u16`]        |0.0 - 1.0           |
//!|BitDepth::ThirtyTwo   | [`f32`]        |passed through as is|
//!
//! 32 bit samples are not divided by anything, they are widened
//! to [`f64`] and handed back unchanged.
use alloc::vec::Vec;

use crate::errors::PSDArrayErrors;

/// Bit depth of a channel
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BitDepth {
    /// One bit per sample, eight samples per byte, most significant bit first
    One,
    Eight,
    /// Big endian unsigned 16 bit samples
    Sixteen,
    /// Big endian IEEE-754 single precision samples
    ThirtyTwo
}

impl BitDepth {
    pub const fn from_int(int: u16) -> Option<BitDepth> {
        match int {
            1 => Some(BitDepth::One),
            8 => Some(BitDepth::Eight),
            16 => Some(BitDepth::Sixteen),
            32 => Some(BitDepth::ThirtyTwo),
            _ => None
        }
    }

    /// Number of bits a single sample occupies
    pub const fn bits(self) -> usize {
        match self {
            BitDepth::One => 1,
            BitDepth::Eight => 8,
            BitDepth::Sixteen => 16,
            BitDepth::ThirtyTwo => 32
        }
    }

    /// Number of samples a buffer of `len` bytes decodes to
    ///
    /// Trailing bytes that cannot make up a whole sample are not counted
    pub const fn sample_count(self, len: usize) -> usize {
        match self {
            BitDepth::One => len * 8,
            _ => len / (self.bits() / 8)
        }
    }

    /// Decode a big endian buffer into floating point samples
    ///
    /// # Example
    /// ```
    /// use zune_psd_array::bit_depth::BitDepth;
    ///
    /// assert_eq!(BitDepth::Sixteen.decode(&[0xFF, 0xFF, 0x00, 0x00]), [1.0, 0.0]);
    /// ```
    pub fn decode(self, data: &[u8]) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.sample_count(data.len()));

        match self {
            BitDepth::One => {
                for byte in data {
                    for shift in (0..8).rev() {
                        out.push(f64::from((*byte >> shift) & 1));
                    }
                }
            }
            BitDepth::Eight => {
                out.extend(data.iter().map(|x| f64::from(*x) / 255.0));
            }
            BitDepth::Sixteen => {
                out.extend(data.chunks_exact(2).map(|chunk| {
                    let value = u16::from_be_bytes([chunk[0], chunk[1]]);
                    f64::from(value) / 65535.0
                }));
            }
            BitDepth::ThirtyTwo => {
                out.extend(data.chunks_exact(4).map(|chunk| {
                    let value = f32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
                    f64::from(value)
                }));
            }
        }
        out
    }
}

/// Decode a raw channel buffer stored at `depth` bits per sample
///
/// # Errors
/// [`PSDArrayErrors::UnsupportedDepth`] if depth is not one of 1, 8, 16 or 32
pub fn decode_samples(data: &[u8], depth: u16) -> Result<Vec<f64>, PSDArrayErrors> {
    let depth = BitDepth::from_int(depth).ok_or(PSDArrayErrors::UnsupportedDepth(depth))?;

    Ok(depth.decode(data))
}
