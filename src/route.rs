//! Flight route resolution
//!
//! Best-effort departure/arrival enrichment for one captured aircraft.
//! Route data is cosmetic; every failure path degrades to an empty route
//! so the capture workflow is never blocked on it.

use tracing::warn;

use crate::airports::{self, AirportInfo};
use crate::opensky::{FlightDataSource, SourceError};

/// Lookback window for the leg history query, in seconds
pub const LOOKBACK_SECS: i64 = 86_400;

/// Departure/arrival pair for one captured aircraft; either end may be
/// unresolved
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlightRoute {
    pub departure_airport: Option<AirportInfo>,
    pub arrival_airport: Option<AirportInfo>,
}

fn resolve_code(code: &str) -> AirportInfo {
    airports::lookup(code).unwrap_or_else(|| airports::placeholder(code))
}

/// Resolve the most recent route for an aircraft within the last 24 hours
///
/// Takes the last leg of the returned sequence as the most recent one.
/// No legs, or any upstream failure, yields an empty route.
pub async fn resolve_route(
    icao24: &str,
    now_epoch: i64,
    source: &dyn FlightDataSource,
) -> FlightRoute {
    let begin = now_epoch - LOOKBACK_SECS;
    let legs = match source.legs_for_aircraft(icao24, begin, now_epoch).await {
        Ok(legs) => legs,
        Err(SourceError::Status(status)) => {
            // OpenSky answers 404 when an aircraft has no recorded legs
            warn!("leg history for {icao24} returned status {status}");
            return FlightRoute::default();
        }
        Err(e) => {
            warn!("leg history fetch for {icao24} failed: {e}");
            return FlightRoute::default();
        }
    };

    let Some(latest) = legs.last() else {
        return FlightRoute::default();
    };

    FlightRoute {
        departure_airport: latest.est_departure_airport.as_deref().map(resolve_code),
        arrival_airport: latest.est_arrival_airport.as_deref().map(resolve_code),
    }
}
