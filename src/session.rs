//! Tracking session controller
//!
//! One tokio task owns the polling lifecycle, the current snapshot and the
//! capture workflow. Commands arrive over an mpsc channel; snapshot, state
//! and capture updates go out over watch channels, which the presentation
//! layer only reads.
//!
//! The snapshot fetch is awaited inline inside the loop, so polls never
//! overlap and snapshots are applied in request order; a tick that fires
//! while a fetch is still running is skipped.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::flight::{AircraftState, FlightSnapshot};
use crate::geo::Position;
use crate::ingest::build_snapshot;
use crate::opensky::FlightDataSource;
use crate::position::{PositionError, PositionProvider};
use crate::route::{resolve_route, FlightRoute};

/// Session lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Acquiring,
    Tracking,
    Capturing,
}

/// Route enrichment progress for a capture
#[derive(Debug, Clone, PartialEq)]
pub enum RouteStatus {
    Loading,
    Resolved(FlightRoute),
}

/// The aircraft selected at the moment of capture, with its eventually
/// resolved route. At most one is active at a time.
#[derive(Debug, Clone)]
pub struct CaptureResult {
    pub aircraft: AircraftState,
    pub route: RouteStatus,
}

#[derive(Debug)]
enum SessionCommand {
    Capture,
    ClearCapture,
    End,
}

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub poll_interval: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(10),
        }
    }
}

/// Handle to a running tracking session
pub struct TrackingSession {
    cmd_tx: mpsc::Sender<SessionCommand>,
    state_rx: watch::Receiver<SessionState>,
    snapshot_rx: watch::Receiver<FlightSnapshot>,
    capture_rx: watch::Receiver<Option<CaptureResult>>,
    task: JoinHandle<()>,
}

impl TrackingSession {
    /// Acquire the observer position and start polling
    ///
    /// A position failure means the session does not start; there is no
    /// internal retry.
    pub fn start(
        provider: &dyn PositionProvider,
        source: Arc<dyn FlightDataSource>,
        config: SessionConfig,
    ) -> Result<Self, PositionError> {
        let observer = provider.current_position()?;

        let (cmd_tx, cmd_rx) = mpsc::channel(8);
        let (state_tx, state_rx) = watch::channel(SessionState::Acquiring);
        let (snapshot_tx, snapshot_rx) = watch::channel(FlightSnapshot::empty());
        let (capture_tx, capture_rx) = watch::channel(None);

        let controller = Controller {
            observer,
            source,
            state_tx,
            snapshot_tx,
            capture_tx,
        };
        let task = tokio::spawn(controller.run(cmd_rx, config.poll_interval));

        Ok(Self {
            cmd_tx,
            state_rx,
            snapshot_rx,
            capture_rx,
            task,
        })
    }

    pub fn state(&self) -> watch::Receiver<SessionState> {
        self.state_rx.clone()
    }

    pub fn snapshots(&self) -> watch::Receiver<FlightSnapshot> {
        self.snapshot_rx.clone()
    }

    pub fn captures(&self) -> watch::Receiver<Option<CaptureResult>> {
        self.capture_rx.clone()
    }

    /// Request a capture of the top-ranked overhead aircraft.
    /// A no-op if nothing qualifies or a capture is already active.
    pub async fn capture(&self) {
        let _ = self.cmd_tx.send(SessionCommand::Capture).await;
    }

    /// Dismiss the active capture result, if any
    pub async fn clear_capture(&self) {
        let _ = self.cmd_tx.send(SessionCommand::ClearCapture).await;
    }

    /// End the session: stops the poll interval and makes any in-flight
    /// response a no-op. Teardown runs exactly once.
    pub async fn end(self) {
        let _ = self.cmd_tx.send(SessionCommand::End).await;
        let _ = self.task.await;
    }
}

struct Controller {
    observer: Position,
    source: Arc<dyn FlightDataSource>,
    state_tx: watch::Sender<SessionState>,
    snapshot_tx: watch::Sender<FlightSnapshot>,
    capture_tx: watch::Sender<Option<CaptureResult>>,
}

impl Controller {
    async fn run(self, mut cmd_rx: mpsc::Receiver<SessionCommand>, poll_interval: Duration) {
        // First tick completes immediately, giving the initial poll on
        // entering Tracking
        let mut interval = tokio::time::interval(poll_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let mut route_task: Option<JoinHandle<FlightRoute>> = None;

        self.state_tx.send_replace(SessionState::Tracking);
        info!(
            "tracking session started at ({:.4}, {:.4})",
            self.observer.latitude, self.observer.longitude
        );

        loop {
            let resolving = route_task.is_some();
            tokio::select! {
                _ = interval.tick() => {
                    self.poll().await;
                }

                cmd = cmd_rx.recv() => match cmd {
                    Some(SessionCommand::Capture) => {
                        self.begin_capture(&mut route_task);
                    }
                    Some(SessionCommand::ClearCapture) => {
                        // A still-running resolution belongs to a discarded
                        // capture; its result must not surface later
                        if let Some(task) = route_task.take() {
                            task.abort();
                        }
                        self.capture_tx.send_replace(None);
                        self.state_tx.send_replace(SessionState::Tracking);
                    }
                    Some(SessionCommand::End) | None => break,
                },

                route = async { route_task.as_mut().expect("resolving is set").await },
                    if resolving =>
                {
                    route_task = None;
                    self.finish_route(route.unwrap_or_default());
                }
            }
        }

        if let Some(task) = route_task.take() {
            task.abort();
        }
        self.state_tx.send_replace(SessionState::Idle);
        info!("tracking session ended");
    }

    async fn poll(&self) {
        match build_snapshot(self.observer, self.source.as_ref()).await {
            Ok(snapshot) => {
                debug!(
                    "poll applied: {} aircraft, {} overhead",
                    snapshot.len(),
                    snapshot.overhead().count()
                );
                self.snapshot_tx.send_replace(snapshot);
            }
            Err(e) => {
                // Transient upstream failure: keep the previous snapshot
                // instead of flashing to empty
                warn!("poll failed, keeping previous snapshot: {e}");
            }
        }
    }

    fn begin_capture(&self, route_task: &mut Option<JoinHandle<FlightRoute>>) {
        if self.capture_tx.borrow().is_some() {
            debug!("capture rejected: another capture is active");
            return;
        }

        let Some(aircraft) = self.snapshot_tx.borrow().best_capture_candidate().cloned() else {
            debug!("capture rejected: no overhead candidate");
            return;
        };

        info!(
            "captured {} ({}) at {:.2} km",
            aircraft.icao24,
            aircraft.callsign,
            aircraft.distance_km.unwrap_or(f64::NAN)
        );

        let icao24 = aircraft.icao24.clone();
        let source = Arc::clone(&self.source);
        let now = chrono::Utc::now().timestamp();
        *route_task = Some(tokio::spawn(async move {
            resolve_route(&icao24, now, source.as_ref()).await
        }));

        self.capture_tx.send_replace(Some(CaptureResult {
            aircraft,
            route: RouteStatus::Loading,
        }));
        self.state_tx.send_replace(SessionState::Capturing);
    }

    fn finish_route(&self, route: FlightRoute) {
        let current = self.capture_tx.borrow().clone();
        match current {
            Some(capture) => {
                self.capture_tx.send_replace(Some(CaptureResult {
                    route: RouteStatus::Resolved(route),
                    ..capture
                }));
            }
            // Capture was cleared while the resolution ran; drop the result
            None => debug!("route resolved for a discarded capture, ignoring"),
        }
    }
}
