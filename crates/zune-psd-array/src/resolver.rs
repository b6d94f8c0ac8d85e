/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Turning documents and layers into pixel arrays
//!
//! The entry point is [`get_array`], it resolves a [`ChannelGroup`] for
//! anything implementing [`PsdEntity`].
//!
//! Channel order within the returned grids is the order the channels
//! are stored in, i.e `RGB` for an RGB layer and `RGBA` when asking for
//! [`ChannelGroup::All`] on a layer with transparency.
use alloc::vec::Vec;
use core::str::FromStr;

use log::trace;

use crate::alpha::has_alpha;
use crate::bit_depth::decode_samples;
use crate::constants::{ChannelId, ColorMode};
use crate::diagnostics::{Diagnostics, LogDiagnostics};
use crate::errors::PSDArrayErrors;
use crate::grid::{assemble, reconcile, PixelGrid};
use crate::model::{ChannelData, CompositeImage, LayerChannels, Pattern, PsdEntity};
use crate::options::ArrayOptions;
use crate::select::{select_channels, ChannelCriterion};

/// Logical group of channels to extract
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum ChannelGroup {
    /// Color components only
    Color,
    /// Transparency
    Shape,
    /// User mask
    Mask,
    /// Color followed by shape
    #[default]
    All
}

impl FromStr for ChannelGroup {
    type Err = PSDArrayErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "color" => Ok(ChannelGroup::Color),
            "shape" => Ok(ChannelGroup::Shape),
            "mask" => Ok(ChannelGroup::Mask),
            _ => Err(PSDArrayErrors::UnknownChannelGroup)
        }
    }
}

/// Extract `group` from `entity` as a pixel grid
///
/// Uses default options and logs anomalies through the `log` crate.
///
/// # Returns
/// - `Ok(None)`: The entity has no data for the group, e.g a layer without a mask
/// - `Ok(Some(grid))`: The extracted channels
/// - `Err(e)`: Channel data could not be decoded or doesn't fit the entity's geometry
pub fn get_array(
    entity: &dyn PsdEntity, group: ChannelGroup
) -> Result<Option<PixelGrid>, PSDArrayErrors> {
    get_array_with_options(entity, group, &ArrayOptions::default(), &mut LogDiagnostics)
}

/// Extract `group` from `entity` with custom options, reporting
/// anomalies to `diagnostics`
pub fn get_array_with_options(
    entity: &dyn PsdEntity, group: ChannelGroup, options: &ArrayOptions,
    diagnostics: &mut dyn Diagnostics
) -> Result<Option<PixelGrid>, PSDArrayErrors> {
    check_dimensions(entity.width(), entity.height(), options)?;

    trace!("Entity width:{}", entity.width());
    trace!("Entity height:{}", entity.height());
    trace!("Requested group: {group:?}");

    match entity.channel_data() {
        ChannelData::Composite(composite) => composite_array(entity, &composite, group),
        ChannelData::Layer(layer) => layer_array(entity, &layer, group, options, diagnostics)
    }
}

/// Extract the pixels of a pattern
///
/// Only written channels are decoded, each at its own depth.
/// Returns `Ok(None)` if the pattern has no written channels.
pub fn get_pattern(pattern: &Pattern) -> Result<Option<PixelGrid>, PSDArrayErrors> {
    let channels = pattern
        .channels
        .iter()
        .filter(|c| c.is_written)
        .map(|c| decode_samples(&c.data, c.depth))
        .collect::<Result<Vec<_>, _>>()?;

    assemble(&channels, pattern.height, pattern.width)
}

fn check_dimensions(
    width: usize, height: usize, options: &ArrayOptions
) -> Result<(), PSDArrayErrors> {
    if width > options.max_width() {
        return Err(PSDArrayErrors::LargeDimensions(options.max_width(), width));
    }
    if height > options.max_height() {
        return Err(PSDArrayErrors::LargeDimensions(options.max_height(), height));
    }
    Ok(())
}

fn composite_array(
    entity: &dyn PsdEntity, composite: &CompositeImage<'_>, group: ChannelGroup
) -> Result<Option<PixelGrid>, PSDArrayErrors> {
    let (width, height) = (entity.width(), entity.height());
    let color_mode = entity.color_mode();

    // the composite has no mask of its own, and without
    // alpha everything is opaque
    if group == ChannelGroup::Mask
        || (group == ChannelGroup::Shape && !has_alpha(composite, color_mode))
    {
        return Ok(Some(PixelGrid::ones(height, width, 1)));
    }
    let samples = decode_samples(composite.data, entity.depth())?;
    let grid = PixelGrid::from_planar(&samples, height, width)?;

    trace!("Composite channels: {}", grid.channels());

    match group {
        ChannelGroup::Shape => Ok(grid.plane(grid.channels().saturating_sub(1))),
        ChannelGroup::Color => Ok(Some(grid.truncate_channels(color_mode.expected_channels()))),
        _ => Ok(Some(grid))
    }
}

fn layer_array(
    entity: &dyn PsdEntity, layer: &LayerChannels<'_>, group: ChannelGroup,
    options: &ArrayOptions, diagnostics: &mut dyn Diagnostics
) -> Result<Option<PixelGrid>, PSDArrayErrors> {
    let mut find_channel = |criterion: ChannelCriterion,
                            width: usize,
                            height: usize|
     -> Result<Option<PixelGrid>, PSDArrayErrors> {
        let channels = select_channels(layer.channels, criterion, entity.depth())?;

        find_layer_channel(
            &channels,
            width,
            height,
            entity.color_mode(),
            options,
            &mut *diagnostics
        )
    };
    let (width, height) = (entity.width(), entity.height());

    match group {
        ChannelGroup::Color => find_channel(ChannelCriterion::Color, width, height),
        ChannelGroup::Shape => find_channel(
            ChannelCriterion::Id(ChannelId::TRANSPARENCY_MASK),
            width,
            height
        ),
        ChannelGroup::Mask => {
            let Some(mask) = layer.mask else {
                trace!("Layer has no mask");
                return Ok(None);
            };
            check_dimensions(mask.width, mask.height, options)?;

            let id = if mask.has_real {
                ChannelId::REAL_USER_LAYER_MASK
            } else {
                ChannelId::USER_LAYER_MASK
            };
            find_channel(ChannelCriterion::Id(id), mask.width, mask.height)
        }
        ChannelGroup::All => {
            let color = find_channel(ChannelCriterion::Color, width, height)?;
            let shape = find_channel(
                ChannelCriterion::Id(ChannelId::TRANSPARENCY_MASK),
                width,
                height
            )?;

            match (color, shape) {
                (Some(color), Some(shape)) => color.concat_channels(&shape).map(Some),
                (color, None) => Ok(color),
                (None, shape) => Ok(shape)
            }
        }
    }
}

fn find_layer_channel(
    channels: &[Vec<f64>], width: usize, height: usize, color_mode: ColorMode,
    options: &ArrayOptions, diagnostics: &mut dyn Diagnostics
) -> Result<Option<PixelGrid>, PSDArrayErrors> {
    let Some(grid) = assemble(channels, height, width)? else {
        return Ok(None);
    };
    if options.reconcile_channels() {
        return Ok(Some(reconcile(grid, color_mode, diagnostics)));
    }
    Ok(Some(grid))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_names() {
        assert_eq!("color".parse::<ChannelGroup>().unwrap(), ChannelGroup::Color);
        assert_eq!("shape".parse::<ChannelGroup>().unwrap(), ChannelGroup::Shape);
        assert_eq!("mask".parse::<ChannelGroup>().unwrap(), ChannelGroup::Mask);
        assert!(matches!(
            "alpha".parse::<ChannelGroup>(),
            Err(PSDArrayErrors::UnknownChannelGroup)
        ));
        assert_eq!(ChannelGroup::default(), ChannelGroup::All);
    }

    #[test]
    fn pattern_uses_written_channels_only() {
        use alloc::vec;

        use crate::model::PatternChannel;

        let pattern = Pattern {
            height:   1,
            width:    2,
            channels: vec![
                PatternChannel {
                    is_written: true,
                    depth:      8,
                    data:       vec![0, 255]
                },
                PatternChannel {
                    is_written: false,
                    depth:      8,
                    data:       vec![]
                },
                PatternChannel {
                    is_written: true,
                    depth:      16,
                    data:       vec![0xFF, 0xFF, 0x00, 0x00]
                },
            ]
        };
        let grid = get_pattern(&pattern).unwrap().unwrap();

        assert_eq!(grid.shape(), [1, 2, 2]);
        assert_eq!(grid.data(), [0.0, 1.0, 1.0, 0.0]);

        let empty = Pattern {
            height:   1,
            width:    1,
            channels: vec![]
        };
        assert!(get_pattern(&empty).unwrap().is_none());
    }
}
