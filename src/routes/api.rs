// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! JSON API routes for the dashboard frontend.

use crate::error::{AppError, Result};
use crate::models::feed::Units;
use crate::models::types;
use crate::models::Totals;
use crate::services::HeatmapView;
use crate::units;
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// API routes. Everything here is public and read-only.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/meta", get(get_meta))
        .route("/api/grid/{year}", get(get_grid))
        .route("/api/summary", get(get_summary))
}

fn default_type() -> String {
    "all".to_string()
}

fn default_year() -> String {
    "all".to_string()
}

// ─── Feed Metadata ───────────────────────────────────────────

/// One selectable activity type with its legend presentation.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "site/src/generated/")
)]
pub struct TypeInfo {
    /// Feed identifier ("WeightTraining")
    pub id: String,
    /// Display label ("Weight Training")
    pub label: String,
    /// Darkest palette color, for legend dots
    pub color: String,
}

/// Feed metadata for populating the dashboard controls.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "site/src/generated/")
)]
pub struct MetaResponse {
    pub units: Units,
    /// Declared types in display order
    pub types: Vec<TypeInfo>,
    /// Declared years, ascending
    pub years: Vec<i32>,
    pub generated_at: Option<String>,
}

/// Get the feed axes: units, types, years, generation timestamp.
async fn get_meta(State(state): State<Arc<AppState>>) -> Json<MetaResponse> {
    let feed = state.feed.feed();

    Json(MetaResponse {
        units: feed.units,
        types: feed
            .types
            .iter()
            .map(|ty| TypeInfo {
                id: ty.clone(),
                label: types::display_name(ty).to_string(),
                color: types::accent_color(ty).to_string(),
            })
            .collect(),
        years: feed.years.clone(),
        generated_at: feed.generated_at.clone(),
    })
}

// ─── Heatmap Grid ────────────────────────────────────────────

#[derive(Deserialize)]
struct GridQuery {
    /// Activity type id, or "all" for the combined view
    #[serde(rename = "type", default = "default_type")]
    activity_type: String,
}

/// Get the assembled heatmap view for one year.
///
/// A year the feed has no data for is a valid request and yields an
/// all-empty grid; only an unknown type or an unrepresentable year is
/// rejected.
async fn get_grid(
    State(state): State<Arc<AppState>>,
    Path(year): Path<i32>,
    Query(params): Query<GridQuery>,
) -> Result<Json<HeatmapView>> {
    tracing::debug!(year, activity_type = %params.activity_type, "Building heatmap grid");

    let selection = state
        .feed
        .resolve_selection(&params.activity_type)
        .ok_or_else(|| {
            AppError::BadRequest(format!("Unknown activity type: {}", params.activity_type))
        })?;

    let view = HeatmapView::build(state.feed.feed(), year, &selection, state.config.intensity)
        .ok_or_else(|| AppError::BadRequest(format!("Year {year} is out of range")))?;

    Ok(Json(view))
}

// ─── Summary Totals ──────────────────────────────────────────

#[derive(Deserialize)]
struct SummaryQuery {
    /// Activity type id or "all"
    #[serde(rename = "type", default = "default_type")]
    activity_type: String,
    /// Year or "all"
    #[serde(default = "default_year")]
    year: String,
}

/// Totals rendered as display strings.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "site/src/generated/")
)]
pub struct FormattedTotals {
    pub count: String,
    pub distance: String,
    pub elevation: String,
    pub duration: String,
    pub active_days: String,
}

/// Activity count for one type over the selected years.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "site/src/generated/")
)]
pub struct TypeCount {
    pub id: String,
    pub label: String,
    pub color: String,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub count: u64,
}

/// Summary totals response.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "site/src/generated/")
)]
pub struct SummaryResponse {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub count: u64,
    /// Meters
    pub distance: f64,
    /// Seconds
    pub moving_time: f64,
    /// Meters
    pub elevation_gain: f64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub active_days: u64,
    /// The same totals in the feed's display units
    pub formatted: FormattedTotals,
    /// Per-type counts over the selection, in feed display order
    pub per_type: Vec<TypeCount>,
}

/// Get summary totals over a type/year selection.
///
/// Both parameters default to "all". A selected year absent from the
/// feed simply contributes nothing.
async fn get_summary(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SummaryQuery>,
) -> Result<Json<SummaryResponse>> {
    tracing::debug!(
        activity_type = %params.activity_type,
        year = %params.year,
        "Computing summary totals"
    );

    let feed = state.feed.feed();

    let selected_types = state
        .feed
        .resolve_types(&params.activity_type)
        .ok_or_else(|| {
            AppError::BadRequest(format!("Unknown activity type: {}", params.activity_type))
        })?;

    let years: Vec<i32> = if params.year == "all" {
        feed.years.clone()
    } else {
        let year = params
            .year
            .parse()
            .map_err(|_| AppError::BadRequest(format!("Invalid year: {}", params.year)))?;
        vec![year]
    };

    let totals = Totals::collect(feed, &selected_types, &years);

    let formatted = FormattedTotals {
        count: units::format_count(totals.count),
        distance: units::format_distance_grouped(totals.distance, feed.units.distance),
        elevation: units::format_elevation_grouped(totals.elevation_gain, feed.units.elevation),
        duration: units::format_duration(totals.moving_time),
        active_days: units::format_count(totals.active_days),
    };

    let per_type = selected_types
        .iter()
        .map(|ty| TypeCount {
            id: (*ty).to_string(),
            label: types::display_name(ty).to_string(),
            color: types::accent_color(ty).to_string(),
            count: totals.per_type.get(*ty).copied().unwrap_or(0),
        })
        .collect();

    Ok(Json(SummaryResponse {
        count: totals.count,
        distance: totals.distance,
        moving_time: totals.moving_time,
        elevation_gain: totals.elevation_gain,
        active_days: totals.active_days,
        formatted,
        per_type,
    }))
}
