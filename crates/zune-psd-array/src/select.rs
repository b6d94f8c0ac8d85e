/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Picking the channels of a layer that belong to a group
use alloc::vec::Vec;

use log::trace;

use crate::bit_depth::decode_samples;
use crate::constants::ChannelId;
use crate::errors::PSDArrayErrors;
use crate::model::{ChannelInfo, RawChannel};

/// Which stored channels to pick
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ChannelCriterion {
    /// Every color component, i.e every channel with a non-negative id
    Color,
    /// Only channels with exactly this id
    Id(ChannelId)
}

impl ChannelCriterion {
    pub const fn matches(self, info: &ChannelInfo) -> bool {
        match self {
            ChannelCriterion::Color => info.id.is_color(),
            ChannelCriterion::Id(id) => info.id.0 == id.0
        }
    }
}

/// Decode every channel matching `criterion`
///
/// Channels with no data are skipped, the rest keep the
/// order they are stored in.
///
/// # Errors
/// [`PSDArrayErrors::UnsupportedDepth`] if a matching channel has to be
/// decoded at an unsupported depth
pub fn select_channels(
    channels: &[RawChannel], criterion: ChannelCriterion, depth: u16
) -> Result<Vec<Vec<f64>>, PSDArrayErrors> {
    let selected = channels
        .iter()
        .filter(|channel| !channel.data.is_empty() && criterion.matches(&channel.info))
        .map(|channel| decode_samples(&channel.data, depth))
        .collect::<Result<Vec<_>, _>>()?;

    trace!("Selected {} channels matching {criterion:?}", selected.len());

    Ok(selected)
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    fn layer() -> Vec<RawChannel> {
        vec![
            RawChannel::new(ChannelId::TRANSPARENCY_MASK, vec![255, 255]),
            RawChannel::new(ChannelId(0), vec![0, 255]),
            RawChannel::new(ChannelId(1), vec![]),
            RawChannel::new(ChannelId(2), vec![255, 0]),
            RawChannel::new(ChannelId::USER_LAYER_MASK, vec![0]),
        ]
    }

    #[test]
    fn color_skips_special_and_empty_channels() {
        let selected = select_channels(&layer(), ChannelCriterion::Color, 8).unwrap();

        assert_eq!(selected, [vec![0.0, 1.0], vec![1.0, 0.0]]);
    }

    #[test]
    fn id_selects_exact_channel() {
        let shape = ChannelCriterion::Id(ChannelId::TRANSPARENCY_MASK);
        assert_eq!(select_channels(&layer(), shape, 8).unwrap(), [vec![1.0, 1.0]]);

        let real = ChannelCriterion::Id(ChannelId::REAL_USER_LAYER_MASK);
        assert!(select_channels(&layer(), real, 8).unwrap().is_empty());
    }

    #[test]
    fn depth_is_checked_only_when_decoding() {
        let real = ChannelCriterion::Id(ChannelId::REAL_USER_LAYER_MASK);
        assert!(select_channels(&layer(), real, 24).unwrap().is_empty());

        assert!(matches!(
            select_channels(&layer(), ChannelCriterion::Color, 24),
            Err(PSDArrayErrors::UnsupportedDepth(24))
        ));
    }
}
