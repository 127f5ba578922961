//! Live OpenSky REST client

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use super::types::{decode_state_row, BoundingBox, FlightLeg, RawStateVector, StatesResponse};
use super::{FlightDataSource, SourceError};

/// Default public OpenSky API base
pub const DEFAULT_BASE_URL: &str = "https://opensky-network.org/api";

/// HTTP client for the OpenSky Network API
///
/// Requests carry a bounded timeout so a hung upstream cannot starve the
/// poll loop; a timed-out request surfaces as a transport error.
pub struct OpenSkyClient {
    base_url: String,
    http: reqwest::Client,
}

impl OpenSkyClient {
    pub fn new(base_url: &str, request_timeout: Duration) -> Result<Self, SourceError> {
        let http = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    async fn get_body(&self, url: &str) -> Result<String, SourceError> {
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status));
        }
        Ok(response.text().await?)
    }
}

#[async_trait]
impl FlightDataSource for OpenSkyClient {
    async fn states_in_box(&self, bbox: BoundingBox) -> Result<Vec<RawStateVector>, SourceError> {
        let url = format!(
            "{}/states/all?lamin={}&lomin={}&lamax={}&lomax={}",
            self.base_url, bbox.lamin, bbox.lomin, bbox.lamax, bbox.lomax
        );
        let body = self.get_body(&url).await?;
        let parsed: StatesResponse = serde_json::from_str(&body)?;

        // A null states field means no aircraft in the box
        let rows = parsed.states.unwrap_or_default();
        let states: Vec<RawStateVector> = rows
            .iter()
            .filter_map(|row| decode_state_row(row))
            .collect();
        debug!("states query returned {} of {} rows", states.len(), rows.len());
        Ok(states)
    }

    async fn legs_for_aircraft(
        &self,
        icao24: &str,
        begin: i64,
        end: i64,
    ) -> Result<Vec<FlightLeg>, SourceError> {
        let url = format!(
            "{}/flights/aircraft?icao24={}&begin={}&end={}",
            self.base_url,
            icao24.to_lowercase(),
            begin,
            end
        );
        let body = self.get_body(&url).await?;
        let legs: Vec<FlightLeg> = serde_json::from_str(&body)?;
        debug!("legs query for {} returned {} legs", icao24, legs.len());
        Ok(legs)
    }
}
