/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Reporting of non-fatal anomalies
//!
//! Conversions never fail because a document carries more than it should,
//! instead the oddity is handed to a [`Diagnostics`] sink and extraction
//! carries on.
//!
//! The default sink, [`LogDiagnostics`] forwards everything to the [`log`] crate,
//! callers wanting to inspect anomalies can pass a `Vec<Anomaly>` instead.
use alloc::vec::Vec;

use log::debug;

use crate::constants::ColorMode;

/// A non-fatal oddity found during conversion
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Anomaly {
    /// More channels were stored than the color mode expects,
    /// the extra ones were dropped
    ExtraChannels {
        found:      usize,
        expected:   usize,
        color_mode: ColorMode
    }
}

/// A sink receiving anomalies found during conversion
pub trait Diagnostics {
    fn report(&mut self, anomaly: Anomaly);
}

/// Forward anomalies to the `log` crate at debug level
#[derive(Debug, Copy, Clone, Default)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn report(&mut self, anomaly: Anomaly) {
        match anomaly {
            Anomaly::ExtraChannels {
                found,
                expected,
                color_mode
            } => {
                debug!("Extra channel found, {color_mode:?} expects {expected} channels but found {found}");
            }
        }
    }
}

impl Diagnostics for Vec<Anomaly> {
    fn report(&mut self, anomaly: Anomaly) {
        self.push(anomaly);
    }
}
