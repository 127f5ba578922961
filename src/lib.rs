//! Geospatial flight tracking and classification engine
//!
//! Ingests live aircraft state vectors around an observer, ranks them by
//! great-circle distance, classifies which are capturable overhead, and
//! runs the capture/route-enrichment workflow behind a tracking session.
//! Camera, rendering and image identification live outside this crate and
//! talk to it through the session handle.

pub mod airports;
pub mod config;
pub mod flight;
pub mod geo;
pub mod ingest;
pub mod opensky;
pub mod position;
pub mod route;
pub mod session;

#[cfg(test)]
mod testutil;
