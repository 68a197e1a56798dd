// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Merging per-type daily aggregates into one combined series.

use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet};

use crate::models::feed::{DailyAggregate, Feed};

/// Per-date metrics summed across a set of selected activity types.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CombinedAggregate {
    pub count: u32,
    pub distance: f64,
    pub moving_time: f64,
    pub elevation_gain: f64,
    /// Exactly the types that recorded at least one activity this date,
    /// so the set is empty iff `count` is zero.
    pub types: BTreeSet<String>,
}

impl CombinedAggregate {
    /// Fold one type's stored aggregate into this entry.
    fn absorb(&mut self, activity_type: &str, entry: &DailyAggregate) {
        self.count += entry.count;
        self.distance += entry.distance;
        self.moving_time += entry.moving_time;
        self.elevation_gain += entry.elevation_gain;
        if entry.count > 0 {
            self.types.insert(activity_type.to_string());
        }
    }
}

/// Date-indexed combined aggregates for one year, calendar-ordered.
pub type CombinedSeries = BTreeMap<NaiveDate, CombinedAggregate>;

/// Merge the stored aggregates of `types` for one year into a combined,
/// date-indexed series.
///
/// Sums are commutative, so the order of `types` cannot change the numeric
/// result. Dates with no entry under any selected type are omitted; callers
/// read missing dates as the zero aggregate, matching [`Feed::lookup`].
pub fn combine(feed: &Feed, year: i32, types: &[&str]) -> CombinedSeries {
    let mut series = CombinedSeries::new();
    for &activity_type in types {
        if let Some(entries) = feed.type_aggregates(year, activity_type) {
            for (date, entry) in entries {
                series.entry(*date).or_default().absorb(activity_type, entry);
            }
        }
    }
    series
}

/// Resolve the date-indexed aggregates for a selection of types.
///
/// A single selected type copies the stored map in one pass; anything else
/// goes through [`combine`]. Both arms produce the same shape, so the view
/// builder does not care which path ran.
pub fn resolve_aggregates(feed: &Feed, year: i32, types: &[&str]) -> CombinedSeries {
    match types {
        [single] => feed
            .type_aggregates(year, single)
            .map(|entries| {
                entries
                    .iter()
                    .map(|(date, entry)| {
                        let mut combined = CombinedAggregate::default();
                        combined.absorb(single, entry);
                        (*date, combined)
                    })
                    .collect()
            })
            .unwrap_or_default(),
        _ => combine(feed, year, types),
    }
}
