/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Views into an already parsed document
//!
//! Nothing here parses bytes. The header, layer records and compressed
//! channel streams are decoded elsewhere, the types below only borrow
//! what that parser produced.
use alloc::vec::Vec;

use crate::constants::{ChannelId, ColorMode, Tag};

/// Descriptor of a stored channel
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ChannelInfo {
    pub id: ChannelId
}

/// A single decompressed channel of a layer
///
/// An empty `data` means the channel is listed in the layer record
/// but its pixels were never materialized.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RawChannel {
    pub info: ChannelInfo,
    pub data: Vec<u8>
}

impl RawChannel {
    pub fn new(id: ChannelId, data: Vec<u8>) -> RawChannel {
        RawChannel {
            info: ChannelInfo { id },
            data
        }
    }
}

/// Geometry of a layer's user mask
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct LayerMask {
    pub width:    usize,
    pub height:   usize,
    /// Whether the mask stores a real user mask, i.e
    /// full per-pixel data instead of the simplified one
    pub has_real: bool
}

/// Merged image of the whole document
#[derive(Debug, Copy, Clone)]
pub struct CompositeImage<'a> {
    /// Decompressed image data, channel after channel
    pub data:          &'a [u8],
    /// Channel count declared by the file header
    pub channel_count: usize,
    /// Keys of the tagged blocks found in the document,
    /// empty when the document has none
    pub tagged_blocks: &'a [Tag]
}

/// Channels of a single layer
#[derive(Debug, Copy, Clone)]
pub struct LayerChannels<'a> {
    /// Channels in the order they are listed in the layer record
    pub channels: &'a [RawChannel],
    pub mask:     Option<LayerMask>
}

/// Raw channel access of an entity
#[derive(Debug, Copy, Clone)]
pub enum ChannelData<'a> {
    /// The document composite, one buffer holding every channel
    Composite(CompositeImage<'a>),
    /// A layer, one buffer per channel
    Layer(LayerChannels<'a>)
}

/// Something that can be turned into a pixel array,
/// either a whole document or one of its layers
pub trait PsdEntity {
    /// Width in pixels
    fn width(&self) -> usize;
    /// Height in pixels
    fn height(&self) -> usize;
    /// Color mode of the owning document
    fn color_mode(&self) -> ColorMode;
    /// Bits per sample of the owning document
    fn depth(&self) -> u16;
    fn channel_data(&self) -> ChannelData<'_>;
}

/// A channel of a pattern, each carries its own depth
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PatternChannel {
    /// Whether the channel holds data
    pub is_written: bool,
    pub depth:      u16,
    pub data:       Vec<u8>
}

/// A pattern as stored in the document's pattern resources
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Pattern {
    pub height:   usize,
    pub width:    usize,
    pub channels: Vec<PatternChannel>
}
