//! OpenSky Network upstream protocol module
//!
//! Decodes the two REST endpoints this engine consumes: bounding-box state
//! vectors and per-aircraft flight legs. The `FlightDataSource` trait seams
//! the live client so the ingester, route resolver and session can run
//! against a mock in tests.

pub mod client;
mod types;

use async_trait::async_trait;

pub use client::OpenSkyClient;
pub use types::{decode_state_row, BoundingBox, FlightLeg, RawStateVector};

/// Upstream request failure, recovered locally by callers
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("upstream returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("malformed response body: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Source of live aircraft data
#[async_trait]
pub trait FlightDataSource: Send + Sync {
    /// All aircraft state vectors intersecting the bounding box
    async fn states_in_box(&self, bbox: BoundingBox) -> Result<Vec<RawStateVector>, SourceError>;

    /// Recorded flight legs for one aircraft in an epoch-second window,
    /// assumed chronologically ascending
    async fn legs_for_aircraft(
        &self,
        icao24: &str,
        begin: i64,
        end: i64,
    ) -> Result<Vec<FlightLeg>, SourceError>;
}
