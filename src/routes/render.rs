// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Standalone SVG heatmap rendering.
//!
//! URLs follow the published-image layout, `/heatmaps/{type}/{year}.svg`,
//! so images stay embeddable from READMEs and external pages.

use crate::error::{AppError, Result};
use crate::services::{svg, HeatmapView};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/heatmaps/{type}/{file}", get(get_heatmap_svg))
}

/// Render one year's heatmap as an SVG image.
///
/// The type segment accepts "all" for the combined view. An unknown type
/// is a missing resource here, not a malformed request.
async fn get_heatmap_svg(
    State(state): State<Arc<AppState>>,
    Path((activity_type, file)): Path<(String, String)>,
) -> Result<Response> {
    let year_str = file
        .strip_suffix(".svg")
        .ok_or_else(|| AppError::NotFound(format!("No such file: {file}")))?;
    let year: i32 = year_str
        .parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid year: {year_str}")))?;

    tracing::debug!(year, activity_type = %activity_type, "Rendering heatmap SVG");

    let selection = state
        .feed
        .resolve_selection(&activity_type)
        .ok_or_else(|| AppError::NotFound(format!("Unknown activity type: {activity_type}")))?;

    let view = HeatmapView::build(state.feed.feed(), year, &selection, state.config.intensity)
        .ok_or_else(|| AppError::BadRequest(format!("Year {year} is out of range")))?;

    let body = svg::render_svg(&view);
    Ok(([(header::CONTENT_TYPE, "image/svg+xml")], body).into_response())
}
