// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout-Graph API Server
//!
//! Serves activity heatmaps and summary totals from a pre-aggregated
//! daily feed: JSON views for the interactive frontend, SVG images for
//! embedding.

use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use workout_graph::{config::Config, services::FeedService, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(port = config.port, "Starting Workout-Graph API");

    // Load the aggregate feed; the process serves this snapshot until restart
    tracing::info!(path = %config.feed_path, "Loading activity feed");
    let feed =
        FeedService::load_from_file(&config.feed_path).expect("Failed to load activity feed");

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        feed,
    });

    // Build router
    let app = workout_graph::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer().with_target(false);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("workout_graph=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
