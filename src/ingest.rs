//! Flight snapshot ingester
//!
//! Turns one bounding-box query against the upstream source into a ranked,
//! classified `FlightSnapshot` for an observer position.

use tracing::warn;

use crate::flight::{is_overhead, AircraftState, FlightSnapshot, UNKNOWN_CALLSIGN};
use crate::geo::{distance_km, Position};
use crate::opensky::{BoundingBox, FlightDataSource, RawStateVector, SourceError};

/// Half-width of the query box in degrees, roughly a 50-60 km square
pub const BOX_DELTA_DEG: f64 = 0.5;

/// Normalize one raw state vector and derive its ranking fields
fn normalize(raw: RawStateVector, observer: Position) -> AircraftState {
    let callsign = match raw.callsign.as_deref().map(str::trim) {
        Some(cs) if !cs.is_empty() => cs.to_string(),
        _ => UNKNOWN_CALLSIGN.to_string(),
    };

    let position = match (raw.latitude, raw.longitude) {
        (Some(latitude), Some(longitude)) => Some(Position::new(latitude, longitude)),
        _ => None,
    };

    let distance = position.map(|p| distance_km(observer, p));

    AircraftState {
        icao24: raw.icao24,
        callsign,
        origin_country: raw.origin_country,
        position,
        baro_altitude_m: raw.baro_altitude,
        ground_speed_ms: raw.velocity,
        true_track_deg: raw.true_track,
        on_ground: raw.on_ground,
        distance_km: distance,
        is_overhead: is_overhead(distance, raw.on_ground),
    }
}

/// Build a fresh snapshot for the observer, propagating upstream failure
///
/// The session controller uses the error to decide whether to keep the
/// previous snapshot; callers without their own policy should use
/// [`snapshot_or_empty`].
pub async fn build_snapshot(
    observer: Position,
    source: &dyn FlightDataSource,
) -> Result<FlightSnapshot, SourceError> {
    let bbox = BoundingBox::around(observer, BOX_DELTA_DEG);
    let raw = source.states_in_box(bbox).await?;
    let states = raw.into_iter().map(|r| normalize(r, observer)).collect();
    Ok(FlightSnapshot::from_states(states))
}

/// Build a snapshot, degrading any upstream failure to an empty one
///
/// A transient outage must not take down a polling loop; the failure is
/// logged as a diagnostic instead of propagated.
pub async fn snapshot_or_empty(
    observer: Position,
    source: &dyn FlightDataSource,
) -> FlightSnapshot {
    match build_snapshot(observer, source).await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            warn!("snapshot fetch failed, returning empty: {e}");
            FlightSnapshot::empty()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{raw_state, transient_error, ScriptedSource};

    // Observer at the origin; 0.01 degrees of longitude there is ~1.11 km
    const OBSERVER: Position = Position {
        latitude: 0.0,
        longitude: 0.0,
    };

    #[tokio::test]
    async fn test_snapshot_ranked_and_classified() {
        let source = ScriptedSource::new();
        source.push_states(Ok(vec![
            raw_state("far", 0.0, 0.05, false),
            raw_state("near", 0.0, 0.004, false),
            raw_state("grounded", 0.0, 0.004, true),
        ]));

        let snapshot = build_snapshot(OBSERVER, &source).await.unwrap();
        let order: Vec<&str> = snapshot.aircraft().iter().map(|a| a.icao24.as_str()).collect();
        assert_eq!(order, vec!["near", "grounded", "far"]);

        // ~0.44 km airborne is overhead; same distance on ground is not
        assert!(snapshot.aircraft()[0].is_overhead);
        assert!(!snapshot.aircraft()[1].is_overhead);
        assert!(!snapshot.aircraft()[2].is_overhead);
    }

    #[tokio::test]
    async fn test_blank_callsign_gets_sentinel() {
        let source = ScriptedSource::new();
        let mut raw = raw_state("abc123", 0.0, 0.004, false);
        raw.callsign = Some("   ".to_string());
        source.push_states(Ok(vec![raw]));

        let snapshot = build_snapshot(OBSERVER, &source).await.unwrap();
        assert_eq!(snapshot.aircraft()[0].callsign, UNKNOWN_CALLSIGN);
    }

    #[tokio::test]
    async fn test_callsign_trimmed() {
        let source = ScriptedSource::new();
        let mut raw = raw_state("abc123", 0.0, 0.004, false);
        raw.callsign = Some("SWR123  ".to_string());
        source.push_states(Ok(vec![raw]));

        let snapshot = build_snapshot(OBSERVER, &source).await.unwrap();
        assert_eq!(snapshot.aircraft()[0].callsign, "SWR123");
    }

    #[tokio::test]
    async fn test_missing_position_is_not_zero() {
        let source = ScriptedSource::new();
        let mut raw = raw_state("abc123", 0.0, 0.0, false);
        raw.latitude = None;
        raw.longitude = None;
        raw.baro_altitude = None;
        source.push_states(Ok(vec![raw]));

        let snapshot = build_snapshot(OBSERVER, &source).await.unwrap();
        let a = &snapshot.aircraft()[0];
        assert!(a.position.is_none());
        assert!(a.distance_km.is_none());
        assert!(a.baro_altitude_m.is_none());
        assert!(!a.is_overhead);
    }

    #[tokio::test]
    async fn test_failure_degrades_to_empty() {
        let source = ScriptedSource::new();
        source.push_states(Err(transient_error()));

        let snapshot = snapshot_or_empty(OBSERVER, &source).await;
        assert!(snapshot.is_empty());
    }

    #[tokio::test]
    async fn test_failure_propagates_from_build() {
        let source = ScriptedSource::new();
        source.push_states(Err(transient_error()));
        assert!(build_snapshot(OBSERVER, &source).await.is_err());
    }
}
