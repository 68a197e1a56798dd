// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for rendering metric feed values in the feed-declared
//! unit system.
//!
//! Per-cell detail text uses the plain fixed-point forms; the summary cards
//! use the thousands-grouped variants.

use crate::models::feed::{DistanceUnit, ElevationUnit};

/// Meters per statute mile.
const METERS_PER_MILE: f64 = 1609.344;

/// Feet per meter.
const FEET_PER_METER: f64 = 3.28084;

/// Format a distance in meters as "12.3 km" / "7.6 mi" (one decimal place).
pub fn format_distance(meters: f64, unit: DistanceUnit) -> String {
    match unit {
        DistanceUnit::Km => format!("{:.1} km", meters / 1000.0),
        DistanceUnit::Mi => format!("{:.1} mi", meters / METERS_PER_MILE),
    }
}

/// Two-decimal variant of [`format_distance`] for per-cell detail text
/// ("6.21 mi").
pub fn format_distance_precise(meters: f64, unit: DistanceUnit) -> String {
    match unit {
        DistanceUnit::Km => format!("{:.2} km", meters / 1000.0),
        DistanceUnit::Mi => format!("{:.2} mi", meters / METERS_PER_MILE),
    }
}

/// Format an elevation in meters as "123 m" / "404 ft" (nearest integer).
pub fn format_elevation(meters: f64, unit: ElevationUnit) -> String {
    match unit {
        ElevationUnit::M => format!("{} m", meters.round() as i64),
        ElevationUnit::Ft => format!("{} ft", (meters * FEET_PER_METER).round() as i64),
    }
}

/// Format a duration in seconds as "45m" or "2h 5m" (rounded to minutes).
pub fn format_duration(seconds: f64) -> String {
    let minutes = (seconds / 60.0).round() as i64;
    if minutes >= 60 {
        format!("{}h {}m", minutes / 60, minutes % 60)
    } else {
        format!("{}m", minutes)
    }
}

/// Format an activity count with thousands grouping ("12,345").
pub fn format_count(count: u64) -> String {
    group_thousands(&count.to_string())
}

/// Grouped variant of [`format_distance`] for the summary cards
/// ("1,234.5 km").
pub fn format_distance_grouped(meters: f64, unit: DistanceUnit) -> String {
    group_decimal(&format_distance(meters, unit))
}

/// Grouped variant of [`format_elevation`] for the summary cards
/// ("123,456 ft").
pub fn format_elevation_grouped(meters: f64, unit: ElevationUnit) -> String {
    group_decimal(&format_elevation(meters, unit))
}

/// Insert thousands separators into the integer part of an already
/// formatted value, leaving any fraction and unit suffix untouched.
fn group_decimal(formatted: &str) -> String {
    match formatted.find(|c: char| !c.is_ascii_digit()) {
        Some(end) if end > 0 => format!("{}{}", group_thousands(&formatted[..end]), &formatted[end..]),
        _ => formatted.to_string(),
    }
}

/// Group a run of ASCII digits into threes with commas.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
