// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Cell intensity classification.
//!
//! Two policies cover the two render targets: binary for the static
//! export look (any activity is full-strength), quantile for graded
//! shading relative to the year's busiest day.

use crate::models::combined::CombinedAggregate;
use crate::models::types::{self, EMPTY_COLOR, MULTI_TYPE_COLOR};

/// How a day's activity count maps to a palette level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IntensityPolicy {
    #[default]
    Binary,
    Quantile,
}

impl IntensityPolicy {
    /// Parse a configuration value.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "binary" => Some(Self::Binary),
            "quantile" => Some(Self::Quantile),
            _ => None,
        }
    }
}

/// Classify a day's count into a palette level 0..=4.
///
/// `max` is the highest daily count of the year being rendered; it only
/// matters for the quantile policy.
pub fn level(policy: IntensityPolicy, count: u32, max: u32) -> u8 {
    match policy {
        IntensityPolicy::Binary => {
            if count > 0 {
                4
            } else {
                0
            }
        }
        IntensityPolicy::Quantile => quantile_level(count, max),
    }
}

/// Quantile levels: 0 for inactive days, then 1..=4 by the ratio of the
/// day's count to the year maximum. A year whose maximum is a single
/// activity per day shades uniformly light.
fn quantile_level(count: u32, max: u32) -> u8 {
    if count == 0 || max == 0 {
        return 0;
    }
    if max == 1 {
        return 1;
    }
    let scaled = (count as f64 / max as f64) * 3.0;
    // Counts above the year max clamp to the darkest step
    (scaled.floor().min(3.0) as u8) + 1
}

/// Fill color for a single-type cell at a given level.
pub fn cell_color(activity_type: &str, level: u8) -> &'static str {
    types::palette(activity_type)[level.min(4) as usize]
}

/// Fill color for a combined-view cell.
///
/// The combined view colors by contributor rather than by level: one
/// contributing type takes that type's darkest palette color, several
/// take the shared multi-type color, none takes the neutral empty color.
pub fn combined_cell_color(entry: &CombinedAggregate) -> &'static str {
    let mut contributors = entry.types.iter();
    match (contributors.next(), contributors.next()) {
        (None, _) => EMPTY_COLOR,
        (Some(only), None) => types::accent_color(only),
        (Some(_), Some(_)) => MULTI_TYPE_COLOR,
    }
}
