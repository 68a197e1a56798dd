// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod feed;
pub mod heatmap;
pub mod intensity;
pub mod svg;

pub use feed::{FeedError, FeedService};
pub use heatmap::{HeatmapView, ViewSelection};
pub use intensity::IntensityPolicy;
pub use svg::render_svg;
