// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod combined;
pub mod feed;
pub mod grid;
pub mod summary;
pub mod types;

pub use combined::{CombinedAggregate, CombinedSeries};
pub use feed::{DailyAggregate, Feed, TypeAggregates, Units};
pub use grid::{GridCell, YearGrid};
pub use summary::Totals;
