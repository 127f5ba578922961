//! Configuration loaded from environment variables

use crate::opensky::client::DEFAULT_BASE_URL;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the OpenSky REST API
    pub opensky_url: String,

    /// Observer latitude in degrees
    pub observer_lat: Option<f64>,

    /// Observer longitude in degrees
    pub observer_lon: Option<f64>,

    /// Snapshot poll interval in seconds
    pub poll_interval_secs: u64,

    /// Upstream request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            opensky_url: std::env::var("OPENSKY_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),

            observer_lat: std::env::var("OBSERVER_LAT")
                .ok()
                .and_then(|s| s.parse().ok()),

            observer_lon: std::env::var("OBSERVER_LON")
                .ok()
                .and_then(|s| s.parse().ok()),

            poll_interval_secs: std::env::var("POLL_INTERVAL_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),

            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
        }
    }
}
