// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use std::sync::Arc;
use workout_graph::config::Config;
use workout_graph::routes::create_router;
use workout_graph::services::FeedService;
use workout_graph::AppState;

/// Feed fixture shared across the API tests: two years, three types,
/// one day active in two types and one weight-training-only day.
#[allow(dead_code)]
pub const FEED_JSON: &str = r#"{
    "units": { "distance": "km", "elevation": "m" },
    "types": ["Run", "Ride", "WeightTraining"],
    "years": [2022, 2023],
    "generated_at": "2024-01-02T03:04:05Z",
    "aggregates": {
        "2022": {
            "Run": {
                "2022-03-01": {
                    "count": 1,
                    "distance": 5000,
                    "moving_time": 1800,
                    "elevation_gain": 25,
                    "activity_ids": [51]
                }
            }
        },
        "2023": {
            "Run": {
                "2023-06-15": {
                    "count": 2,
                    "distance": 10000,
                    "moving_time": 3600,
                    "elevation_gain": 50,
                    "activity_ids": [101, 102]
                }
            },
            "Ride": {
                "2023-06-15": {
                    "count": 1,
                    "distance": 20000,
                    "moving_time": 3600,
                    "elevation_gain": 120,
                    "activity_ids": [103]
                },
                "2023-06-16": {
                    "count": 1,
                    "distance": 30000,
                    "moving_time": 5400,
                    "elevation_gain": 200,
                    "activity_ids": [104]
                }
            },
            "WeightTraining": {
                "2023-06-19": {
                    "count": 1,
                    "distance": 0,
                    "moving_time": 1800,
                    "elevation_gain": 0,
                    "activity_ids": [105]
                }
            }
        }
    }
}"#;

/// Create a test app over the fixture feed.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let config = Config::default();
    let feed = FeedService::load_from_json(FEED_JSON).expect("fixture feed should parse");

    let state = Arc::new(AppState { config, feed });

    (create_router(state.clone()), state)
}
