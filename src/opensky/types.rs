//! Wire types for the OpenSky REST API
//!
//! State vectors arrive as heterogeneous positional arrays; they are decoded
//! into a named record here, at the boundary, with explicit handling for
//! null fields. Nothing past this module sees a positional array.

use serde::Deserialize;
use serde_json::Value;

use crate::geo::Position;

/// Geographic query box in degrees, min/max latitude and longitude
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub lamin: f64,
    pub lomin: f64,
    pub lamax: f64,
    pub lomax: f64,
}

impl BoundingBox {
    /// A box of `delta_deg` degrees on each side of a center point.
    /// 0.5 degrees approximates a 50-60 km square away from the poles.
    pub fn around(center: Position, delta_deg: f64) -> Self {
        Self {
            lamin: center.latitude - delta_deg,
            lomin: center.longitude - delta_deg,
            lamax: center.latitude + delta_deg,
            lomax: center.longitude + delta_deg,
        }
    }
}

/// One state vector with its fields named and nulls made explicit
///
/// OpenSky positional index map: 0 icao24, 1 callsign, 2 origin_country,
/// 3 time_position, 4 last_contact, 5 longitude, 6 latitude,
/// 7 baro_altitude, 8 on_ground, 9 velocity, 10 true_track, 11.. unused.
#[derive(Debug, Clone, PartialEq)]
pub struct RawStateVector {
    /// 24-bit transponder address as lowercase hex
    pub icao24: String,
    pub callsign: Option<String>,
    pub origin_country: String,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    /// Barometric altitude in meters
    pub baro_altitude: Option<f64>,
    pub on_ground: bool,
    /// Ground speed in meters per second
    pub velocity: Option<f64>,
    /// True track in degrees clockwise from north
    pub true_track: Option<f64>,
}

/// Decode one positional state-vector row
///
/// Returns `None` only when the identity field itself is missing; every
/// other absent field is preserved as `None` on the record.
pub fn decode_state_row(row: &[Value]) -> Option<RawStateVector> {
    let icao24 = row.first()?.as_str()?.trim().to_lowercase();
    if icao24.is_empty() {
        return None;
    }

    Some(RawStateVector {
        icao24,
        callsign: row.get(1).and_then(Value::as_str).map(str::to_string),
        origin_country: row
            .get(2)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        longitude: row.get(5).and_then(Value::as_f64),
        latitude: row.get(6).and_then(Value::as_f64),
        baro_altitude: row.get(7).and_then(Value::as_f64),
        on_ground: row.get(8).and_then(Value::as_bool).unwrap_or(false),
        velocity: row.get(9).and_then(Value::as_f64),
        true_track: row.get(10).and_then(Value::as_f64),
    })
}

/// Response envelope for /states/all; `states` is null for an empty area
#[derive(Debug, Deserialize)]
pub struct StatesResponse {
    pub states: Option<Vec<Vec<Value>>>,
}

/// One recorded departure-to-arrival segment from /flights/aircraft
///
/// The airport codes are the source's estimates and either may be absent.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FlightLeg {
    pub icao24: String,
    #[serde(rename = "estDepartureAirport")]
    pub est_departure_airport: Option<String>,
    #[serde(rename = "estArrivalAirport")]
    pub est_arrival_airport: Option<String>,
    #[serde(rename = "firstSeen")]
    pub first_seen: Option<i64>,
    #[serde(rename = "lastSeen")]
    pub last_seen: Option<i64>,
}
