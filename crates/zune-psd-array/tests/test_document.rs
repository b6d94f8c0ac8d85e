/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use zune_psd_array::errors::PSDArrayErrors;
use zune_psd_array::model::{ChannelData, CompositeImage, PsdEntity};
use zune_psd_array::{get_array, ChannelGroup, ColorMode, PixelGrid, Tag};

struct Document {
    width:         usize,
    height:        usize,
    color_mode:    ColorMode,
    depth:         u16,
    channel_count: usize,
    /// planar image data, channel after channel
    image_data:    Vec<u8>,
    tagged_blocks: Vec<Tag>
}

impl PsdEntity for Document {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    fn depth(&self) -> u16 {
        self.depth
    }

    fn channel_data(&self) -> ChannelData<'_> {
        ChannelData::Composite(CompositeImage {
            data:          &self.image_data,
            channel_count: self.channel_count,
            tagged_blocks: &self.tagged_blocks
        })
    }
}

/// A 1x2 RGBA document
fn rgba_document() -> Document {
    Document {
        width:         2,
        height:        1,
        color_mode:    ColorMode::RGB,
        depth:         8,
        channel_count: 4,
        image_data:    vec![
            255, 0, // red
            0, 255, // green
            0, 0, // blue
            255, 51, // alpha
        ],
        tagged_blocks: vec![]
    }
}

#[test]
fn test_mask_is_synthetic() {
    let grid = get_array(&rgba_document(), ChannelGroup::Mask)
        .unwrap()
        .unwrap();

    assert_eq!(grid, PixelGrid::ones(1, 2, 1));
}

#[test]
fn test_full_composite_is_interleaved() {
    let grid = get_array(&rgba_document(), ChannelGroup::All)
        .unwrap()
        .unwrap();

    assert_eq!(grid.shape(), [1, 2, 4]);
    assert_eq!(grid.data(), [1.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.2]);
}

#[test]
fn test_color_keeps_color_mode_channels() {
    let grid = get_array(&rgba_document(), ChannelGroup::Color)
        .unwrap()
        .unwrap();

    assert_eq!(grid.shape(), [1, 2, 3]);
    assert_eq!(grid.data(), [1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
}

#[test]
fn test_shape_is_last_channel_without_channel_axis() {
    let grid = get_array(&rgba_document(), ChannelGroup::Shape)
        .unwrap()
        .unwrap();

    assert_eq!(grid.ndim(), 2);
    assert_eq!(grid.shape(), [1, 2]);
    assert_eq!(grid.data(), [1.0, 0.2]);
}

#[test]
fn test_shape_without_alpha_is_opaque() {
    let mut document = rgba_document();
    document.channel_count = 3;
    document.image_data.truncate(6);

    let grid = get_array(&document, ChannelGroup::Shape).unwrap().unwrap();
    assert_eq!(grid, PixelGrid::ones(1, 2, 1));

    // tagged blocks without a transparency tag override the channel count
    let mut document = rgba_document();
    document.tagged_blocks = vec![Tag(*b"lnk2")];

    let grid = get_array(&document, ChannelGroup::Shape).unwrap().unwrap();
    assert_eq!(grid, PixelGrid::ones(1, 2, 1));
}

#[test]
fn test_transparency_tag_enables_shape() {
    let mut document = rgba_document();
    document.tagged_blocks = vec![Tag(*b"lnk2"), Tag::SAVING_MERGED_TRANSPARENCY16];

    let grid = get_array(&document, ChannelGroup::Shape).unwrap().unwrap();
    assert_eq!(grid.data(), [1.0, 0.2]);
}

#[test]
fn test_bitmap_composite() {
    let document = Document {
        width:         8,
        height:        2,
        color_mode:    ColorMode::Bitmap,
        depth:         1,
        channel_count: 1,
        image_data:    vec![0b1010_0000, 0b0000_0001],
        tagged_blocks: vec![]
    };
    let grid = get_array(&document, ChannelGroup::Color).unwrap().unwrap();

    assert_eq!(grid.shape(), [2, 8, 1]);
    assert_eq!(grid.get(0, 0, 0), Some(1.0));
    assert_eq!(grid.get(0, 1, 0), Some(0.0));
    assert_eq!(grid.get(0, 2, 0), Some(1.0));
    assert_eq!(grid.get(1, 7, 0), Some(1.0));
    assert_eq!(grid.data().iter().sum::<f64>(), 3.0);
}

#[test]
fn test_truncated_composite_is_fatal() {
    let mut document = rgba_document();
    document.image_data.pop();

    assert!(matches!(
        get_array(&document, ChannelGroup::All),
        Err(PSDArrayErrors::ShapeMismatch { .. })
    ));
    // synthetic results never touch the image data
    assert!(get_array(&document, ChannelGroup::Mask).is_ok());
}

#[test]
fn test_unsupported_depth() {
    let mut document = rgba_document();
    document.depth = 24;

    assert!(matches!(
        get_array(&document, ChannelGroup::Color),
        Err(PSDArrayErrors::UnsupportedDepth(24))
    ));
}
