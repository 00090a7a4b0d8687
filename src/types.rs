// Copyright 2026, the sgp30_i2c authors
//
// Licensed under the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>,
// This file may not be copied, modified, or distributed
// except according to those terms.

//! Values decoded from sensor responses.

/// One air quality measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reading {
    /// Equivalent CO2 in ppm.
    pub equivalent_co2: u16,
    /// Total volatile organic compounds in ppb.
    pub total_voc: u16,
}

/// State of the dynamic baseline compensation algorithm.
///
/// The words are opaque to the driver. Persist them and restore them
/// via [`set_baseline`](crate::Sgp30::set_baseline) after the next
/// power-up; without a restored baseline the sensor derives a fresh
/// one over roughly 12 hours of continuous operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Baseline {
    /// Equivalent CO2 compensation word.
    pub equivalent_co2: u16,
    /// Total VOC compensation word.
    pub total_voc: u16,
}

/// Product type and feature set version of the sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureSet {
    /// Product type, bits 15..12 of the raw word.
    pub product_type: u8,
    /// Feature set version, the low byte of the raw word.
    pub version: u8,
}

/// Uncompensated measurement signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawSignals {
    /// H2 signal word.
    pub h2: u16,
    /// Ethanol signal word.
    pub ethanol: u16,
}
