// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Workout-Graph: activity heatmap dashboard backend
//!
//! This crate serves calendar heatmaps and summary totals computed from a
//! pre-aggregated daily activity feed, as JSON for the interactive
//! frontend and as standalone SVG images.

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod units;

use config::Config;
use services::FeedService;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub feed: FeedService,
}
