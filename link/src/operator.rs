use std::sync::Arc;

use thiserror::Error;
use tokio::sync::mpsc;

use crate::context::{SessionContext, CUT_POWER, OMEGA, SPEED};
use crate::envelope::Outbound;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("mission name must not be empty")]
    EmptyMissionName,
}

/// The operator-facing command surface, i.e. what the console's buttons
/// call.
///
/// Motion setters only update the shared intent; the heartbeat puts it on
/// the wire at its own pace. Stop and the mission commands are sent
/// immediately, out of band.
#[derive(Clone)]
pub struct Operator {
    ctx: Arc<SessionContext>,
    commands: mpsc::UnboundedSender<Outbound>,
}

impl Operator {
    pub fn new(ctx: Arc<SessionContext>, commands: mpsc::UnboundedSender<Outbound>) -> Self {
        Self { ctx, commands }
    }

    pub fn forward(&self) {
        self.ctx.set_speed(SPEED);
    }

    pub fn backward(&self) {
        self.ctx.set_speed(-SPEED);
    }

    pub fn left(&self) {
        self.ctx.set_omega(OMEGA);
    }

    pub fn right(&self) {
        self.ctx.set_omega(-OMEGA);
    }

    pub fn cut(&self) {
        self.ctx.set_cut_power(CUT_POWER);
    }

    /// Zero the intent and tell the robot to stop right now, without
    /// waiting for the next heartbeat.
    pub fn stop(&self) {
        self.ctx.clear_intent();
        self.send(Outbound::MoveStop);
    }

    /// Start the named mission. The name is trimmed and must be non-empty;
    /// nothing goes on the wire otherwise.
    pub fn mission_start(&self, name: &str) -> Result<(), CommandError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CommandError::EmptyMissionName);
        }
        self.send(Outbound::MissionStart(name.to_string()));
        Ok(())
    }

    pub fn mission_abort(&self) {
        self.send(Outbound::MissionAbort);
    }

    /// Gate the command heartbeat.
    pub fn set_heartbeat(&self, enabled: bool) {
        self.ctx.set_heartbeat(enabled);
    }

    fn send(&self, command: Outbound) {
        // A session that is gone drops the command like any other
        // transport failure.
        let _ = self.commands.send(command);
    }
}
