use link::{RobotStatus, StatusSink};
use mapview::Pose;
use tracing::{debug, info, warn};

/// [`StatusSink`] that narrates the console state into the log, standing in
/// for the page's indicator and readout widgets.
#[derive(Clone, Copy, Default)]
pub struct LogReadout;

impl StatusSink for LogReadout {
    fn connection(&self, connected: bool) {
        if connected {
            info!("link connected");
        } else {
            warn!("link disconnected");
        }
    }

    fn pose(&self, pose: &Pose) {
        debug!(
            x = format_args!("{:.2}", pose.x),
            y = format_args!("{:.2}", pose.y),
            heading = format_args!("{:.0}", pose.heading_degrees()),
            "robot"
        );
    }

    fn status(&self, status: &RobotStatus) {
        match serde_json::to_string_pretty(status) {
            Ok(json) => debug!(%json, "status"),
            Err(err) => warn!(%err, "status not serializable"),
        }
    }
}
