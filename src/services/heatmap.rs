// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Heatmap view assembly.
//!
//! One render pass composes the year grid, the resolved aggregates, the
//! intensity levels and the per-cell detail text into a single view
//! struct. The JSON API serializes it and the SVG renderer draws it, so
//! the two outputs agree on layout and colors by construction.

use chrono::NaiveDate;
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::combined::{resolve_aggregates, CombinedAggregate};
use crate::models::feed::{Feed, Units};
use crate::models::grid::YearGrid;
use crate::models::types;
use crate::services::intensity::{self, IntensityPolicy};
use crate::units;

/// Column header text, one entry per month at the week column of that
/// month's first day.
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Row labels, Monday first.
pub const DAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Which slice of the feed a view renders.
#[derive(Debug, Clone)]
pub enum ViewSelection<'a> {
    /// One activity type, shaded through its palette.
    Single(&'a str),
    /// The listed types together, colored by contributing type.
    Combined(Vec<&'a str>),
}

impl<'a> ViewSelection<'a> {
    fn as_types(&self) -> &[&'a str] {
        match self {
            ViewSelection::Single(ty) => std::slice::from_ref(ty),
            ViewSelection::Combined(list) => list,
        }
    }

    /// Heading text for the rendered card.
    pub fn label(&self) -> String {
        match self {
            ViewSelection::Single(ty) => types::display_name(ty).to_string(),
            ViewSelection::Combined(_) => "All Types".to_string(),
        }
    }
}

/// One grid position of a rendered heatmap.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "site/src/generated/")
)]
pub struct CellView {
    /// ISO date ("YYYY-MM-DD")
    pub date: String,
    /// 0-based week column
    pub week: u32,
    /// 0 = Monday ... 6 = Sunday
    pub weekday: u32,
    /// False for alignment filler from adjacent years
    pub in_year: bool,
    pub count: u32,
    /// Palette level 0..=4
    pub level: u8,
    /// Fill color (hex)
    pub color: String,
    /// Hover detail text; empty for filler cells
    pub title: String,
}

/// A month heading and the week column it sits over.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "site/src/generated/")
)]
pub struct MonthLabel {
    pub month: String,
    pub week: u32,
}

/// A fully assembled heatmap for one year and type selection.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "site/src/generated/")
)]
pub struct HeatmapView {
    pub year: i32,
    /// Display heading ("Run", "All Types", ...)
    pub label: String,
    /// Number of week columns
    pub weeks: u32,
    pub month_labels: Vec<MonthLabel>,
    /// `weeks * 7` cells in date order
    pub cells: Vec<CellView>,
}

impl HeatmapView {
    /// Assemble the view for one year.
    ///
    /// Returns `None` only when the year is outside chrono's supported
    /// range; a year the feed has no data for renders as an all-empty
    /// grid.
    pub fn build(
        feed: &Feed,
        year: i32,
        selection: &ViewSelection<'_>,
        policy: IntensityPolicy,
    ) -> Option<HeatmapView> {
        let grid = YearGrid::compute(year)?;
        let series = resolve_aggregates(feed, year, selection.as_types());
        let max = series.values().map(|e| e.count).max().unwrap_or(0);
        let empty = CombinedAggregate::default();

        let mut cells = Vec::with_capacity(grid.cells.len());
        for cell in &grid.cells {
            if !cell.in_year {
                cells.push(CellView {
                    date: cell.date.to_string(),
                    week: cell.week,
                    weekday: cell.weekday,
                    in_year: false,
                    count: 0,
                    level: 0,
                    color: types::EMPTY_COLOR.to_string(),
                    title: String::new(),
                });
                continue;
            }

            let entry = series.get(&cell.date).unwrap_or(&empty);
            let level = intensity::level(policy, entry.count, max);
            let color = match selection {
                ViewSelection::Single(ty) => intensity::cell_color(ty, level),
                ViewSelection::Combined(_) => intensity::combined_cell_color(entry),
            };

            cells.push(CellView {
                date: cell.date.to_string(),
                week: cell.week,
                weekday: cell.weekday,
                in_year: true,
                count: entry.count,
                level,
                color: color.to_string(),
                title: detail_text(cell.date, entry, selection, feed.units),
            });
        }

        let month_labels = MONTH_LABELS
            .iter()
            .zip(grid.month_starts)
            .map(|(month, week)| MonthLabel {
                month: (*month).to_string(),
                week,
            })
            .collect();

        Some(HeatmapView {
            year,
            label: selection.label(),
            weeks: grid.weeks,
            month_labels,
            cells,
        })
    }
}

/// Hover detail text: ISO date, workout count, then distance, elevation
/// and duration lines as applicable.
fn detail_text(
    date: NaiveDate,
    entry: &CombinedAggregate,
    selection: &ViewSelection<'_>,
    units: Units,
) -> String {
    let mut lines = vec![
        date.to_string(),
        format!(
            "{} workout{}",
            entry.count,
            if entry.count == 1 { "" } else { "s" }
        ),
    ];

    if shows_distance(selection, entry) {
        lines.push(format!(
            "Distance: {}",
            units::format_distance_precise(entry.distance, units.distance)
        ));
        lines.push(format!(
            "Elevation: {}",
            units::format_elevation(entry.elevation_gain, units.elevation)
        ));
    }

    lines.push(format!(
        "Duration: {}",
        units::format_duration(entry.moving_time)
    ));
    lines.join("\n")
}

/// Distance and elevation lines apply to distance-carrying types. In the
/// combined view they apply when any contributing type carries distance,
/// so a pure weight-training day stays free of zero-length noise.
fn shows_distance(selection: &ViewSelection<'_>, entry: &CombinedAggregate) -> bool {
    match selection {
        ViewSelection::Single(ty) => types::carries_distance(ty),
        ViewSelection::Combined(_) => entry.types.iter().any(|ty| types::carries_distance(ty)),
    }
}
