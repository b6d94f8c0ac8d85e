/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::constants::{ColorMode, Tag};
use crate::model::CompositeImage;

/// Whether the document composite carries a real transparency channel
///
/// Documents with tagged blocks say so explicitly through one of the
/// merged transparency tags. Older documents without tagged blocks
/// are assumed to carry alpha when they store more channels than
/// `color_mode` needs.
pub fn has_alpha(composite: &CompositeImage<'_>, color_mode: ColorMode) -> bool {
    if !composite.tagged_blocks.is_empty() {
        return Tag::MERGED_TRANSPARENCY
            .iter()
            .any(|key| composite.tagged_blocks.contains(key));
    }
    composite.channel_count > color_mode.expected_channels()
}
