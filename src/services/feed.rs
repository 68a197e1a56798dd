// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity feed loading service.

use crate::models::feed::Feed;
use crate::services::heatmap::ViewSelection;
use std::fs;
use std::path::Path;

/// Service holding the aggregate feed for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct FeedService {
    feed: Feed,
}

impl FeedService {
    /// Load the feed from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, FeedError> {
        let json_data =
            fs::read_to_string(path.as_ref()).map_err(|e| FeedError::IoError(e.to_string()))?;
        Self::load_from_json(&json_data)
    }

    /// Load the feed from a JSON string.
    pub fn load_from_json(json_data: &str) -> Result<Self, FeedError> {
        let feed: Feed =
            serde_json::from_str(json_data).map_err(|e| FeedError::ParseError(e.to_string()))?;

        if feed.years.is_empty() {
            return Err(FeedError::EmptyFeed);
        }

        feed.audit();

        tracing::info!(
            years = feed.years.len(),
            types = feed.types.len(),
            entries = feed.entry_count(),
            "Loaded activity feed"
        );
        Ok(Self { feed })
    }

    /// Get the loaded feed.
    pub fn feed(&self) -> &Feed {
        &self.feed
    }

    /// Resolve a type selector to the concrete list of feed types.
    ///
    /// `"all"` selects every declared type; anything else must match a
    /// declared type exactly. Returns `None` for an unknown selector.
    pub fn resolve_types<'a>(&'a self, selector: &'a str) -> Option<Vec<&'a str>> {
        if selector == "all" {
            Some(self.feed.types.iter().map(String::as_str).collect())
        } else if self.feed.types.iter().any(|t| t == selector) {
            Some(vec![selector])
        } else {
            None
        }
    }

    /// Resolve a type selector to a view selection: `"all"` renders the
    /// combined view, a single type its palette-shaded view.
    pub fn resolve_selection<'a>(&'a self, selector: &'a str) -> Option<ViewSelection<'a>> {
        let types = self.resolve_types(selector)?;
        Some(if selector == "all" {
            ViewSelection::Combined(types)
        } else {
            ViewSelection::Single(selector)
        })
    }
}

/// Errors from feed loading.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("Failed to read file: {0}")]
    IoError(String),

    #[error("Failed to parse feed JSON: {0}")]
    ParseError(String),

    #[error("Feed declares no years")]
    EmptyFeed,
}
