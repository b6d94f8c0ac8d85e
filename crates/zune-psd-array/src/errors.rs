/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

/// Errors that can occur while turning channel data into arrays
pub enum PSDArrayErrors {
    /// The bit depth is none of 1, 8, 16 or 32
    UnsupportedDepth(u16),
    /// Decoded sample count does not fit the requested geometry
    ShapeMismatch { expected: usize, found: usize },
    /// Geometry larger than the configured limit, (limit, found)
    LargeDimensions(usize, usize),
    /// Channel group name is not one of `color`, `shape` or `mask`
    UnknownChannelGroup,
    Generic(&'static str)
}

impl Debug for PSDArrayErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            PSDArrayErrors::UnsupportedDepth(depth) => {
                writeln!(
                    f,
                    "Unsupported depth: {depth}, supported depths are 1, 8, 16 and 32"
                )
            }
            PSDArrayErrors::ShapeMismatch { expected, found } => {
                writeln!(
                    f,
                    "Cannot reshape {found} samples into an array of {expected} samples"
                )
            }
            PSDArrayErrors::LargeDimensions(supported, found) => {
                writeln!(
                    f,
                    "Too large dimensions, supported {supported} but found {found}",
                )
            }
            PSDArrayErrors::UnknownChannelGroup => {
                writeln!(f, "Unknown channel group, expected one of color, shape or mask")
            }
            PSDArrayErrors::Generic(reason) => {
                writeln!(f, "{reason}")
            }
        }
    }
}

impl Display for PSDArrayErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PSDArrayErrors {}

impl From<&'static str> for PSDArrayErrors {
    fn from(r: &'static str) -> Self {
        Self::Generic(r)
    }
}
