//! skyspot - overhead flight tracker
//!
//! Polls live aircraft state around a configured observer, classifies what
//! is capturable overhead, and logs every snapshot. Stands in for the
//! presentation layer that would render the same data over a camera view.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use skyspot::config::Config;
use skyspot::opensky::OpenSkyClient;
use skyspot::position::ConfiguredPosition;
use skyspot::session::{SessionConfig, TrackingSession};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_target(false)
        .init();

    let config = Config::from_env();
    info!("Configuration:");
    info!("  OpenSky URL: {}", config.opensky_url);
    info!(
        "  Observer: {:?}, {:?}",
        config.observer_lat, config.observer_lon
    );
    info!("  Poll interval: {}s", config.poll_interval_secs);
    info!("  Request timeout: {}s", config.request_timeout_secs);

    let provider = ConfiguredPosition::new(config.observer_lat, config.observer_lon);
    let client = OpenSkyClient::new(
        &config.opensky_url,
        Duration::from_secs(config.request_timeout_secs),
    )
    .context("failed to build OpenSky client")?;

    let session = TrackingSession::start(
        &provider,
        Arc::new(client),
        SessionConfig {
            poll_interval: Duration::from_secs(config.poll_interval_secs),
        },
    )
    .context("session not started, set OBSERVER_LAT and OBSERVER_LON")?;

    let mut snapshots = session.snapshots();

    loop {
        tokio::select! {
            changed = snapshots.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = snapshots.borrow_and_update().clone();
                info!(
                    "snapshot: {} aircraft, {} overhead",
                    snapshot.len(),
                    snapshot.overhead().count()
                );
                for a in snapshot.overhead() {
                    info!(
                        "  overhead: {} {} {:.2} km alt={}",
                        a.icao24,
                        a.callsign,
                        a.distance_km.unwrap_or(f64::NAN),
                        a.baro_altitude_m
                            .map(|m| format!("{m:.0}m"))
                            .unwrap_or_else(|| "unknown".to_string()),
                    );
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("shutting down");
                break;
            }
        }
    }

    session.end().await;
    Ok(())
}
