// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity-type display table: palettes, labels, and metric coverage.
//!
//! Every lookup is a pure function of the type identifier with a neutral
//! fallback, so unrecognized types render gracefully instead of failing.

/// Five-step color scale, lightest (empty) to darkest.
pub type Palette = [&'static str; 5];

/// Fallback scale for types without a dedicated palette.
pub const DEFAULT_PALETTE: Palette = ["#f3f5f8", "#dfeae4", "#bdd8cf", "#8ebfad", "#5f9f8a"];

const RUN_PALETTE: Palette = ["#f3f5f8", "#dee8f6", "#bfcfe9", "#93aed7", "#5d82c1"];
const RIDE_PALETTE: Palette = ["#f3f5f8", "#dff1e7", "#bcdcc9", "#8cbda2", "#5c9674"];
const WEIGHT_PALETTE: Palette = ["#f3f5f8", "#f3dddd", "#e7bcbc", "#d59393", "#b66565"];

/// Neutral color for days with no activity (step 0 of every palette).
pub const EMPTY_COLOR: &str = "#f3f5f8";

/// Color for combined-view days where two or more types contributed.
/// Deliberately outside every single-type palette.
pub const MULTI_TYPE_COLOR: &str = "#7c5cbf";

/// Palette for an activity type.
pub fn palette(activity_type: &str) -> &'static Palette {
    match activity_type {
        "Run" => &RUN_PALETTE,
        "Ride" => &RIDE_PALETTE,
        "WeightTraining" => &WEIGHT_PALETTE,
        _ => &DEFAULT_PALETTE,
    }
}

/// Darkest palette step for a type (legend dots, single-type days in the
/// combined view).
pub fn accent_color(activity_type: &str) -> &'static str {
    palette(activity_type)[4]
}

/// Human-readable label for a type identifier.
pub fn display_name(activity_type: &str) -> &str {
    match activity_type {
        "WeightTraining" => "Weight Training",
        other => other,
    }
}

/// Whether activities of this type cover ground. Weight training does not,
/// so its detail text omits the distance and elevation lines.
pub fn carries_distance(activity_type: &str) -> bool {
    activity_type != "WeightTraining"
}
