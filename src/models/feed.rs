// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Aggregate feed data model.
//!
//! The feed is the precomputed `data.json` payload produced by the sync
//! pipeline: per-day aggregates indexed by year -> activity type -> date,
//! plus the unit system and the declared type/year axes. The engine never
//! mutates it; every view is derived fresh per request.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Distance display unit declared by the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "site/src/generated/")
)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    Km,
    Mi,
}

/// Elevation display unit declared by the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "site/src/generated/")
)]
#[serde(rename_all = "lowercase")]
pub enum ElevationUnit {
    M,
    Ft,
}

/// Unit system for rendering distances and elevations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "site/src/generated/")
)]
pub struct Units {
    pub distance: DistanceUnit,
    pub elevation: ElevationUnit,
}

/// One calendar date's activity summary for a single activity type.
///
/// A day with no activity has `count == 0` and every other field
/// zero/empty; the sync pipeline guarantees this and the engine relies
/// on it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyAggregate {
    /// Number of activities recorded that day
    #[serde(default)]
    pub count: u32,
    /// Total distance in meters
    #[serde(default)]
    pub distance: f64,
    /// Total moving time in seconds
    #[serde(default)]
    pub moving_time: f64,
    /// Total elevation gain in meters
    #[serde(default)]
    pub elevation_gain: f64,
    /// Upstream activity IDs contributing to this day
    #[serde(default)]
    pub activity_ids: Vec<u64>,
}

impl DailyAggregate {
    /// Whether any activity was recorded that day.
    pub fn is_active(&self) -> bool {
        self.count > 0
    }
}

/// Shared zero aggregate returned for absent (year, type, date) entries.
static ZERO: DailyAggregate = DailyAggregate {
    count: 0,
    distance: 0.0,
    moving_time: 0.0,
    elevation_gain: 0.0,
    activity_ids: Vec::new(),
};

/// Stored daily aggregates for one (year, type) pair, keyed by date.
pub type TypeAggregates = BTreeMap<NaiveDate, DailyAggregate>;

/// The aggregate feed payload.
///
/// All four top-level fields are required: a feed missing `units`,
/// `types`, `years`, or `aggregates` is rejected at the load boundary
/// rather than rendered as a misleadingly empty dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feed {
    /// Unit system the dashboard renders in
    pub units: Units,
    /// Known activity types, in display order
    pub types: Vec<String>,
    /// Years present in the data, ascending
    pub years: Vec<i32>,
    /// When the feed was generated (ISO 8601), if recorded
    #[serde(default)]
    pub generated_at: Option<String>,
    /// year -> type -> date -> daily aggregate
    pub aggregates: BTreeMap<i32, BTreeMap<String, TypeAggregates>>,
}

impl Feed {
    /// Look up the aggregate for a (year, type, date) triple.
    ///
    /// Absence is a valid, common case (most days have no activity of a
    /// given type) and reads as the zero aggregate. This is the single
    /// place that owns the "absent means zero" rule.
    pub fn lookup(&self, year: i32, activity_type: &str, date: NaiveDate) -> &DailyAggregate {
        self.type_aggregates(year, activity_type)
            .and_then(|entries| entries.get(&date))
            .unwrap_or(&ZERO)
    }

    /// All stored entries for one (year, type) pair, if any.
    pub fn type_aggregates(&self, year: i32, activity_type: &str) -> Option<&TypeAggregates> {
        self.aggregates
            .get(&year)
            .and_then(|by_type| by_type.get(activity_type))
    }

    /// Maximum daily count for one (year, type) pair.
    ///
    /// Drives the quantile intensity scale; 0 when the pair has no entries.
    pub fn max_count(&self, year: i32, activity_type: &str) -> u32 {
        self.type_aggregates(year, activity_type)
            .map(|entries| entries.values().map(|a| a.count).max().unwrap_or(0))
            .unwrap_or(0)
    }

    /// Total number of stored daily entries across the whole feed.
    pub fn entry_count(&self) -> usize {
        self.aggregates
            .values()
            .flat_map(|by_type| by_type.values())
            .map(|entries| entries.len())
            .sum()
    }

    /// Warn about aggregates filed under years or types the feed does not
    /// declare. Such entries are unreachable through the declared axes, so
    /// they are surfaced in the log instead of failing the load.
    pub fn audit(&self) {
        for (&year, by_type) in &self.aggregates {
            if !self.years.contains(&year) {
                tracing::warn!(year, "Aggregates present for a year missing from 'years'");
            }
            for activity_type in by_type.keys() {
                if !self.types.contains(activity_type) {
                    tracing::warn!(
                        year,
                        activity_type = %activity_type,
                        "Aggregates present for a type missing from 'types'"
                    );
                }
            }
        }
    }
}
