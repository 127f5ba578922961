//! Flight domain types and overhead classification
//!
//! An `AircraftState` is one observed aircraft with derived ranking fields;
//! a `FlightSnapshot` is the complete ranked set from one poll cycle. The
//! derived fields are recomputed on every refresh and never carried forward.

use crate::geo::Position;

/// Closest distance at which an aircraft counts as overhead, in km.
/// Anything nearer is treated as noise or not yet meaningfully in view.
pub const OVERHEAD_MIN_KM: f64 = 0.2;

/// Farthest distance at which an aircraft counts as overhead, in km.
/// Beyond this an aircraft is not confidently identifiable by eye.
pub const OVERHEAD_MAX_KM: f64 = 0.9;

/// Sentinel for a blank or missing callsign
pub const UNKNOWN_CALLSIGN: &str = "unknown";

/// One observed aircraft, normalized from an upstream state vector
///
/// Numeric fields the source omitted stay `None`; a zero altitude is
/// meaningfully different from an unknown altitude.
#[derive(Debug, Clone)]
pub struct AircraftState {
    /// ICAO 24-bit transponder address as lowercase hex, the stable
    /// identity key across polls
    pub icao24: String,
    /// Callsign, trimmed; `UNKNOWN_CALLSIGN` when the source had none
    pub callsign: String,
    pub origin_country: String,
    /// Last reported position, absent if the source omitted it
    pub position: Option<Position>,
    /// Barometric altitude in meters
    pub baro_altitude_m: Option<f64>,
    /// Ground speed in meters per second
    pub ground_speed_ms: Option<f64>,
    /// Compass bearing of travel in degrees
    pub true_track_deg: Option<f64>,
    pub on_ground: bool,
    /// Distance from the observer in km, derived each refresh; absent
    /// when the aircraft reported no position
    pub distance_km: Option<f64>,
    /// Whether the aircraft is in the capturable band, derived each refresh
    pub is_overhead: bool,
}

/// Overhead means inside the capturable distance band and airborne.
/// An aircraft with no known distance is never overhead.
pub fn is_overhead(distance_km: Option<f64>, on_ground: bool) -> bool {
    match distance_km {
        Some(d) => (OVERHEAD_MIN_KM..=OVERHEAD_MAX_KM).contains(&d) && !on_ground,
        None => false,
    }
}

/// One complete ranked set of aircraft from a single poll cycle
///
/// Sorted ascending by distance, ties keeping input order, aircraft with no
/// known distance last. Each poll fully replaces the previous snapshot; an
/// aircraft absent from a new snapshot is no longer tracked.
#[derive(Debug, Clone, Default)]
pub struct FlightSnapshot {
    aircraft: Vec<AircraftState>,
}

impl FlightSnapshot {
    /// Build a snapshot from normalized states, applying the ranking sort
    pub fn from_states(mut aircraft: Vec<AircraftState>) -> Self {
        // Vec::sort_by is stable, which preserves input order for ties
        aircraft.sort_by(|a, b| match (a.distance_km, b.distance_km) {
            (Some(da), Some(db)) => da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });
        Self { aircraft }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn aircraft(&self) -> &[AircraftState] {
        &self.aircraft
    }

    pub fn len(&self) -> usize {
        self.aircraft.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aircraft.is_empty()
    }

    /// The capturable subsequence, a derived view over the snapshot
    pub fn overhead(&self) -> impl Iterator<Item = &AircraftState> {
        self.aircraft.iter().filter(|a| a.is_overhead)
    }

    /// Top-ranked capture candidate: the nearest overhead aircraft
    pub fn best_capture_candidate(&self) -> Option<&AircraftState> {
        self.overhead().next()
    }
}
