/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Options influencing array conversion

/// Largest width or height a large document (PSB) may declare
const PSB_MAX_DIMENSION: usize = 300_000;

/// Array conversion options
///
/// Not every option is respected by every conversion path
#[derive(Debug, Copy, Clone)]
pub struct ArrayOptions {
    /// Maximum width for which conversions will
    /// not try to produce arrays wider than the
    /// specified width.
    ///
    /// - Default value: 300000
    /// - Respected by: `all conversions`
    max_width:          usize,
    /// Maximum height for which conversions will
    /// not try to produce arrays taller than the
    /// specified height.
    ///
    /// - Default value: 300000
    /// - Respected by: `all conversions`
    max_height:         usize,
    /// Whether layer channels beyond what the color mode
    /// expects should be dropped.
    ///
    /// - Default value: true
    /// - Respected by: `layer conversions`
    reconcile_channels: bool
}

impl Default for ArrayOptions {
    fn default() -> Self {
        Self {
            max_width:          PSB_MAX_DIMENSION,
            max_height:         PSB_MAX_DIMENSION,
            reconcile_channels: true
        }
    }
}

impl ArrayOptions {
    /// Get maximum width configured for which the conversion
    /// should not try to produce arrays greater than this width
    pub const fn max_width(&self) -> usize {
        self.max_width
    }

    /// Get maximum height configured for which the conversion should
    /// not try to produce arrays greater than this height
    pub const fn max_height(&self) -> usize {
        self.max_height
    }

    /// Whether extra layer channels are truncated
    pub const fn reconcile_channels(&self) -> bool {
        self.reconcile_channels
    }

    /// Set maximum width for which the conversion should not try
    /// producing arrays greater than that width
    ///
    /// # Arguments
    ///  - width: The maximum width allowed
    ///
    /// # Returns
    /// -  Self: The modified options
    #[must_use]
    pub fn set_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }

    /// Set maximum height for which the conversion should not try
    /// producing arrays greater than that height
    ///
    /// # Arguments
    ///  - height: The maximum height allowed
    ///
    /// # Returns
    /// -  Self: The modified options
    #[must_use]
    pub fn set_max_height(mut self, height: usize) -> Self {
        self.max_height = height;
        self
    }

    /// Set whether layer channels beyond the color mode's expectation
    /// are dropped
    ///
    /// When false, every selected channel is kept and no anomaly is reported
    #[must_use]
    pub fn set_reconcile_channels(mut self, yes: bool) -> Self {
        self.reconcile_channels = yes;
        self
    }
}
