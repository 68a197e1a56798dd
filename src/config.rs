//! Application configuration loaded from environment variables.
//!
//! Everything has a development-friendly default; a fresh checkout with a
//! feed file in place starts without any environment setup.

use std::env;

use crate::services::intensity::IntensityPolicy;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the aggregate feed JSON
    pub feed_path: String,
    /// Frontend origin allowed by CORS
    pub frontend_url: String,
    /// Server port
    pub port: u16,
    /// Intensity policy for rendered grids
    pub intensity: IntensityPolicy,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            feed_path: "data/feed.json".to_string(),
            frontend_url: "http://localhost:5173".to_string(),
            port: 8080,
            intensity: IntensityPolicy::Binary,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let intensity = match env::var("INTENSITY") {
            Ok(value) => IntensityPolicy::parse(&value).ok_or(ConfigError::Invalid {
                name: "INTENSITY",
                value,
            })?,
            Err(_) => IntensityPolicy::default(),
        };

        Ok(Self {
            feed_path: env::var("FEED_PATH").unwrap_or_else(|_| "data/feed.json".to_string()),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            intensity,
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}
