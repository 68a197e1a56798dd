// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Summary totals over a type/year selection, for the dashboard cards.

use chrono::NaiveDate;
use std::collections::{HashMap, HashSet};

use crate::models::feed::Feed;

/// Aggregate totals for a selection of activity types and years.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Totals {
    /// Total number of activities
    pub count: u64,
    /// Total distance in meters
    pub distance: f64,
    /// Total moving time in seconds
    pub moving_time: f64,
    /// Total elevation gain in meters
    pub elevation_gain: f64,
    /// Distinct dates with any activity; a day active in two selected
    /// types counts once
    pub active_days: u64,
    /// Activity count per selected type, over the selected years only
    pub per_type: HashMap<String, u64>,
}

impl Totals {
    /// Sum every stored (year, type, date) entry where the year and the
    /// type are both selected.
    ///
    /// Correct for any subset of the feed's years and types, including the
    /// full axes and singletons; unselected entries never leak in.
    pub fn collect(feed: &Feed, types: &[&str], years: &[i32]) -> Totals {
        let mut totals = Totals::default();
        let mut active_days: HashSet<NaiveDate> = HashSet::new();

        for &year in years {
            for &activity_type in types {
                if let Some(entries) = feed.type_aggregates(year, activity_type) {
                    let per_type = totals
                        .per_type
                        .entry(activity_type.to_string())
                        .or_insert(0);
                    for (date, entry) in entries {
                        totals.count += entry.count as u64;
                        totals.distance += entry.distance;
                        totals.moving_time += entry.moving_time;
                        totals.elevation_gain += entry.elevation_gain;
                        *per_type += entry.count as u64;
                        if entry.is_active() {
                            active_days.insert(*date);
                        }
                    }
                }
            }
        }

        totals.active_days = active_days.len() as u64;
        totals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::feed::{DailyAggregate, DistanceUnit, ElevationUnit, Units};
    use std::collections::BTreeMap;

    fn add_entry(feed: &mut Feed, year: i32, ty: &str, day: &str, count: u32, distance: f64) {
        feed.aggregates
            .entry(year)
            .or_default()
            .entry(ty.to_string())
            .or_default()
            .insert(
                day.parse().unwrap(),
                DailyAggregate {
                    count,
                    distance,
                    moving_time: count as f64 * 1800.0,
                    elevation_gain: count as f64 * 25.0,
                    activity_ids: (0..count as u64).collect(),
                },
            );
    }

    fn test_feed() -> Feed {
        let mut feed = Feed {
            units: Units {
                distance: DistanceUnit::Km,
                elevation: ElevationUnit::M,
            },
            types: vec!["Run".to_string(), "Ride".to_string()],
            years: vec![2022, 2023],
            generated_at: None,
            aggregates: BTreeMap::new(),
        };
        add_entry(&mut feed, 2022, "Run", "2022-03-01", 1, 5_000.0);
        add_entry(&mut feed, 2023, "Run", "2023-06-15", 2, 10_000.0);
        add_entry(&mut feed, 2023, "Ride", "2023-06-15", 1, 30_000.0);
        add_entry(&mut feed, 2023, "Ride", "2023-06-16", 1, 25_000.0);
        feed
    }

    #[test]
    fn test_full_selection() {
        let feed = test_feed();
        let totals = Totals::collect(&feed, &["Run", "Ride"], &[2022, 2023]);

        assert_eq!(totals.count, 5);
        assert_eq!(totals.distance, 70_000.0);
        assert_eq!(totals.moving_time, 5.0 * 1800.0);
        assert_eq!(totals.elevation_gain, 5.0 * 25.0);
        // 2023-06-15 is active in both types but counts once
        assert_eq!(totals.active_days, 3);
        assert_eq!(totals.per_type.get("Run"), Some(&3));
        assert_eq!(totals.per_type.get("Ride"), Some(&2));
    }

    #[test]
    fn test_singleton_selection() {
        let feed = test_feed();

        let run_2023 = Totals::collect(&feed, &["Run"], &[2023]);
        assert_eq!(run_2023.count, 2);
        assert_eq!(run_2023.distance, 10_000.0);
        assert_eq!(run_2023.active_days, 1);
        assert_eq!(run_2023.per_type.get("Run"), Some(&2));
        assert_eq!(run_2023.per_type.get("Ride"), None);

        // Per-type counts must not include unselected years
        assert_eq!(run_2023.per_type.get("Run"), Some(&2));
        let run_all = Totals::collect(&feed, &["Run"], &[2022, 2023]);
        assert_eq!(run_all.per_type.get("Run"), Some(&3));
    }

    #[test]
    fn test_decomposable_by_year() {
        let feed = test_feed();
        let whole = Totals::collect(&feed, &["Run", "Ride"], &[2022, 2023]);

        let mut merged = Totals::default();
        for year in [2022, 2023] {
            let part = Totals::collect(&feed, &["Run", "Ride"], &[year]);
            merged.count += part.count;
            merged.distance += part.distance;
            merged.moving_time += part.moving_time;
            merged.elevation_gain += part.elevation_gain;
            // Dates carry their year, so per-year active sets are disjoint
            merged.active_days += part.active_days;
            for (ty, count) in part.per_type {
                *merged.per_type.entry(ty).or_insert(0) += count;
            }
        }

        assert_eq!(whole, merged);
    }

    #[test]
    fn test_empty_selection_is_zero() {
        let feed = test_feed();
        assert_eq!(Totals::collect(&feed, &[], &[2022, 2023]), Totals::default());
        assert_eq!(
            Totals::collect(&feed, &["Run", "Ride"], &[1999]),
            Totals::default()
        );
    }

    #[test]
    fn test_single_day_feed() {
        let mut feed = test_feed();
        feed.aggregates.clear();
        feed.types = vec!["Run".to_string()];
        feed.years = vec![2023];
        feed.aggregates
            .entry(2023)
            .or_default()
            .entry("Run".to_string())
            .or_default()
            .insert(
                "2023-06-15".parse().unwrap(),
                DailyAggregate {
                    count: 2,
                    distance: 10_000.0,
                    moving_time: 3_600.0,
                    elevation_gain: 50.0,
                    activity_ids: vec![1, 2],
                },
            );

        let totals = Totals::collect(&feed, &["Run"], &[2023]);
        assert_eq!(totals.count, 2);
        assert_eq!(totals.distance, 10_000.0);
        assert_eq!(totals.moving_time, 3_600.0);
        assert_eq!(totals.elevation_gain, 50.0);
        assert_eq!(totals.active_days, 1);
    }
}
