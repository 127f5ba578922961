//! Shared test doubles

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::opensky::{BoundingBox, FlightDataSource, FlightLeg, RawStateVector, SourceError};

/// Scripted in-memory source: queued responses are served in order; once the
/// states queue is exhausted the most recent successful response repeats, so
/// a polling loop under test sees a steady sky
pub struct ScriptedSource {
    states: Mutex<VecDeque<Result<Vec<RawStateVector>, SourceError>>>,
    last_states: Mutex<Vec<RawStateVector>>,
    legs: Mutex<VecDeque<Result<Vec<FlightLeg>, SourceError>>>,
    last_legs_query: Mutex<Option<(String, i64, i64)>>,
    states_served: Mutex<usize>,
    legs_served: Mutex<usize>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self {
            states: Mutex::new(VecDeque::new()),
            last_states: Mutex::new(Vec::new()),
            legs: Mutex::new(VecDeque::new()),
            last_legs_query: Mutex::new(None),
            states_served: Mutex::new(0),
            legs_served: Mutex::new(0),
        }
    }

    pub fn push_states(&self, response: Result<Vec<RawStateVector>, SourceError>) {
        self.states.lock().unwrap().push_back(response);
    }

    pub fn push_legs(&self, response: Result<Vec<FlightLeg>, SourceError>) {
        self.legs.lock().unwrap().push_back(response);
    }

    pub fn last_legs_query(&self) -> Option<(String, i64, i64)> {
        self.last_legs_query.lock().unwrap().clone()
    }

    pub fn states_served(&self) -> usize {
        *self.states_served.lock().unwrap()
    }

    pub fn legs_served(&self) -> usize {
        *self.legs_served.lock().unwrap()
    }
}

#[async_trait]
impl FlightDataSource for ScriptedSource {
    async fn states_in_box(&self, _bbox: BoundingBox) -> Result<Vec<RawStateVector>, SourceError> {
        *self.states_served.lock().unwrap() += 1;
        match self.states.lock().unwrap().pop_front() {
            Some(Ok(states)) => {
                *self.last_states.lock().unwrap() = states.clone();
                Ok(states)
            }
            Some(Err(e)) => Err(e),
            None => Ok(self.last_states.lock().unwrap().clone()),
        }
    }

    async fn legs_for_aircraft(
        &self,
        icao24: &str,
        begin: i64,
        end: i64,
    ) -> Result<Vec<FlightLeg>, SourceError> {
        *self.last_legs_query.lock().unwrap() = Some((icao24.to_string(), begin, end));
        *self.legs_served.lock().unwrap() += 1;
        self.legs
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

/// An airborne (or grounded) state vector at the given coordinates
pub fn raw_state(icao24: &str, latitude: f64, longitude: f64, on_ground: bool) -> RawStateVector {
    RawStateVector {
        icao24: icao24.to_string(),
        callsign: Some(format!("TST{}", &icao24[..icao24.len().min(3)])),
        origin_country: "Testland".to_string(),
        longitude: Some(longitude),
        latitude: Some(latitude),
        baro_altitude: Some(3000.0),
        on_ground,
        velocity: Some(200.0),
        true_track: Some(90.0),
    }
}

pub fn leg(icao24: &str, departure: Option<&str>, arrival: Option<&str>) -> FlightLeg {
    FlightLeg {
        icao24: icao24.to_string(),
        est_departure_airport: departure.map(str::to_string),
        est_arrival_airport: arrival.map(str::to_string),
        first_seen: Some(1_699_990_000),
        last_seen: Some(1_699_999_000),
    }
}

/// A non-success upstream response, the shape of a transient outage
pub fn transient_error() -> SourceError {
    SourceError::Status(reqwest::StatusCode::BAD_GATEWAY)
}
