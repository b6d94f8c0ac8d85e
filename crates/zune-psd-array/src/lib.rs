/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! PSD channels to pixel arrays
//!
//! This crate takes channel data a PSD parser already decompressed and turns it
//! into floating point pixel arrays, laid out as `(height, width, channels)`.
//!
//! It does not read files, decompress RLE/ZIP streams, convert colorspaces or blend
//! layers. It decodes 1, 8, 16 and 32 bit big endian samples, picks the channels
//! making up a group (color, shape or mask) and stacks them into a [`PixelGrid`].
//!
//! Samples are normalized to `0.0..=1.0` except for 32 bit data which is
//! passed through as stored.
//!
//! # Example
//! - Extracting the color channels of a layer
//! ```
//! use zune_psd_array::errors::PSDArrayErrors;
//! use zune_psd_array::model::{ChannelData, LayerChannels, PsdEntity, RawChannel};
//! use zune_psd_array::{get_array, ChannelGroup, ChannelId, ColorMode};
//!
//! struct Layer {
//!     channels: Vec<RawChannel>
//! }
//!
//! impl PsdEntity for Layer {
//!     fn width(&self) -> usize { 2 }
//!     fn height(&self) -> usize { 1 }
//!     fn color_mode(&self) -> ColorMode { ColorMode::Grayscale }
//!     fn depth(&self) -> u16 { 8 }
//!     fn channel_data(&self) -> ChannelData<'_> {
//!         ChannelData::Layer(LayerChannels { channels: &self.channels, mask: None })
//!     }
//! }
//!
//! fn main() -> Result<(), PSDArrayErrors> {
//!     let layer = Layer {
//!         channels: vec![
//!             RawChannel::new(ChannelId(0), vec![0, 255]),
//!             RawChannel::new(ChannelId::TRANSPARENCY_MASK, vec![255, 255]),
//!         ]
//!     };
//!     let grid = get_array(&layer, ChannelGroup::All)?.expect("layer has pixels");
//!
//!     assert_eq!(grid.shape(), [1, 2, 2]);
//!     assert_eq!(grid.data(), [0.0, 1.0, 1.0, 1.0]);
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!  - `std`: Implements `std::error::Error` for [`errors::PSDArrayErrors`]
//!  - `serde`: Serializes color modes, bit depths and channel groups
#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;

pub use constants::{ChannelId, ColorMode, Tag};
pub use grid::PixelGrid;
pub use resolver::{get_array, get_array_with_options, get_pattern, ChannelGroup};

pub mod alpha;
pub mod bit_depth;
mod constants;
pub mod diagnostics;
pub mod errors;
pub mod grid;
pub mod model;
pub mod options;
pub mod resolver;
pub mod select;
mod serde;
