//! Great-circle geometry
//!
//! Pure functions, no dependencies. Everything else in the crate measures
//! distance through here so the haversine math lives in exactly one place.

/// Mean Earth radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// A point on the Earth's surface in degrees
///
/// Latitude is in [-90, 90], longitude in [-180, 180]. Immutable once read
/// from the position provider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

impl Position {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Haversine great-circle distance between two points in kilometers
///
/// Symmetric, returns 0 for identical points. The intermediate term is
/// clamped into [0, 1] so floating-point overshoot near antipodal or
/// near-identical points cannot push `sqrt`/`asin` out of domain. NaN
/// input propagates as NaN.
pub fn distance_km(a: Position, b: Position) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let dlat = (b.latitude - a.latitude).to_radians();
    let dlon = (b.longitude - a.longitude).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let h = h.clamp(0.0, 1.0);

    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_identical_points() {
        let p = Position::new(47.4197, 8.4344);
        assert_eq!(distance_km(p, p), 0.0);
    }

    #[test]
    fn test_distance_symmetric() {
        let a = Position::new(40.6413, -73.7781);
        let b = Position::new(51.4700, -0.4543);
        assert_eq!(distance_km(a, b), distance_km(b, a));
    }

    #[test]
    fn test_distance_known_value() {
        // 5 degrees of longitude at the equator is roughly 555.8 km
        let a = Position::new(0.0, 0.0);
        let b = Position::new(0.0, 5.0);
        let d = distance_km(a, b);
        assert!((d - 555.8).abs() < 1.0, "got {d}");
    }

    #[test]
    fn test_distance_antipodal_stable() {
        // Exactly opposite points must not produce NaN from domain errors
        let a = Position::new(0.0, 0.0);
        let b = Position::new(0.0, 180.0);
        let d = distance_km(a, b);
        assert!(d.is_finite());
        assert!((d - std::f64::consts::PI * 6371.0).abs() < 1.0);
    }

    #[test]
    fn test_distance_nan_propagates() {
        let a = Position::new(f64::NAN, 0.0);
        let b = Position::new(0.0, 0.0);
        assert!(distance_km(a, b).is_nan());
    }
}
