use std::sync::Arc;

use mapview::{MapView, Pose, Transform};
use tokio::sync::watch;
use tracing::warn;

use crate::context::SessionContext;
use crate::envelope::{Inbound, RobotStatus, Tracking};

/// Where the console's observable side effects go: the connection
/// indicator, the numeric pose readout and the raw telemetry dump. The
/// embedding UI implements this; the binary ships a logging one.
pub trait StatusSink: Send + Sync {
    fn connection(&self, connected: bool);
    fn pose(&self, pose: &Pose);
    fn status(&self, status: &RobotStatus);
}

/// Dispatches decoded inbound messages to the map view, the session
/// context and the status sink.
pub struct Router {
    view: MapView,
    ctx: Arc<SessionContext>,
    sink: Arc<dyn StatusSink>,
    transform: watch::Sender<Option<Transform>>,
}

impl Router {
    pub fn new(view: MapView, ctx: Arc<SessionContext>, sink: Arc<dyn StatusSink>) -> Self {
        let (transform, _) = watch::channel(view.transform().copied());
        Self {
            view,
            ctx,
            sink,
            transform,
        }
    }

    pub fn view(&self) -> &MapView {
        &self.view
    }

    /// Follow the current transform from outside the session task, e.g.
    /// for the cursor world-coordinate readout.
    pub fn transform_feed(&self) -> watch::Receiver<Option<Transform>> {
        self.transform.subscribe()
    }

    pub fn dispatch(&mut self, inbound: Inbound) {
        match inbound {
            Inbound::Map(map) => {
                // A refused map keeps the previous background on screen.
                match self.view.set_map(&map) {
                    Ok(()) => {
                        let _ = self.transform.send(self.view.transform().copied());
                    }
                    Err(err) => warn!(%err, "map refused"),
                }
            }
            Inbound::Tracking(Tracking::History(points)) => self.view.bulk_trail(&points),
            Inbound::Tracking(Tracking::Update(pose)) => {
                self.view.robot_update(&pose);
                self.sink.pose(&pose);
            }
            Inbound::Status(status) => {
                self.sink.status(&status);
                self.ctx.set_status(status);
            }
        }
    }
}
