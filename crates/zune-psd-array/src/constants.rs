/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![allow(clippy::upper_case_acronyms)]

/// Document color modes as stored in the PSD header
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ColorMode {
    Bitmap = 0,
    Grayscale = 1,
    Indexed = 2,
    RGB = 3,
    CMYK = 4,
    MultiChannel = 7,
    DuoTone = 8,
    Lab = 9
}

impl ColorMode {
    pub fn from_int(int: u16) -> Option<ColorMode> {
        use crate::constants::ColorMode::{
            Bitmap, DuoTone, Grayscale, Indexed, Lab, MultiChannel, CMYK, RGB
        };

        match int {
            0 => Some(Bitmap),
            1 => Some(Grayscale),
            2 => Some(Indexed),
            3 => Some(RGB),
            4 => Some(CMYK),
            7 => Some(MultiChannel),
            8 => Some(DuoTone),
            9 => Some(Lab),
            _ => None
        }
    }

    /// Number of color channels a document in this mode
    /// is expected to carry, alpha excluded.
    ///
    /// Anything stored beyond this count is treated as an
    /// extra channel.
    pub const fn expected_channels(self) -> usize {
        match self {
            ColorMode::Bitmap | ColorMode::Grayscale | ColorMode::Indexed => 1,
            ColorMode::RGB | ColorMode::Lab => 3,
            ColorMode::CMYK => 4,
            ColorMode::MultiChannel => 64,
            ColorMode::DuoTone => 2
        }
    }
}

/// Identifier of a stored channel
///
/// Non-negative values index color components, negative
/// values mark the special planes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ChannelId(pub i16);

impl ChannelId {
    /// Layer transparency, called shape throughout this crate
    pub const TRANSPARENCY_MASK: ChannelId = ChannelId(-1);
    /// User supplied layer mask
    pub const USER_LAYER_MASK: ChannelId = ChannelId(-2);
    /// User supplied layer mask carrying full per-pixel data
    pub const REAL_USER_LAYER_MASK: ChannelId = ChannelId(-3);

    /// Whether this channel is a color component
    pub const fn is_color(self) -> bool {
        self.0 >= 0
    }
}

/// Four byte key of a tagged block
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Tag(pub [u8; 4]);

impl Tag {
    pub const SAVING_MERGED_TRANSPARENCY: Tag = Tag(*b"Mtrn");
    pub const SAVING_MERGED_TRANSPARENCY16: Tag = Tag(*b"Mt16");
    pub const SAVING_MERGED_TRANSPARENCY32: Tag = Tag(*b"Mt32");

    /// Tags whose presence means the merged image was saved with transparency
    pub const MERGED_TRANSPARENCY: [Tag; 3] = [
        Tag::SAVING_MERGED_TRANSPARENCY,
        Tag::SAVING_MERGED_TRANSPARENCY16,
        Tag::SAVING_MERGED_TRANSPARENCY32
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_mode_round_trips_header_values() {
        for (value, count) in [(0, 1), (1, 1), (2, 1), (3, 3), (4, 4), (7, 64), (8, 2), (9, 3)] {
            let mode = ColorMode::from_int(value).unwrap();
            assert_eq!(mode as u16, value);
            assert_eq!(mode.expected_channels(), count);
        }
        assert!(ColorMode::from_int(5).is_none());
        assert!(ColorMode::from_int(6).is_none());
    }

    #[test]
    fn special_channels_are_not_color() {
        assert!(ChannelId(0).is_color());
        assert!(ChannelId(3).is_color());
        assert!(!ChannelId::TRANSPARENCY_MASK.is_color());
        assert!(!ChannelId::USER_LAYER_MASK.is_color());
        assert!(!ChannelId::REAL_USER_LAYER_MASK.is_color());
    }
}
