use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use crate::envelope::RobotStatus;

/// Speed commanded by the forward/backward buttons, m/s.
pub const SPEED: f64 = 0.1;
/// Turn rate commanded by the left/right buttons, rad/s, positive left.
pub const OMEGA: f64 = 0.1;
/// Cutter power when engaged.
pub const CUT_POWER: f64 = 1.0;

/// Current commanded motion. The operator writes it, the heartbeat reads a
/// snapshot once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Intent {
    pub speed: f64,
    pub omega: f64,
    pub cut_power: f64,
}

/// State shared between the operator surface, the router and the session:
/// the intent, the heartbeat gate and the latest telemetry snapshot.
///
/// Created once at startup. The intent is zeroed by an explicit stop and
/// whenever the link closes, so stale motion never rides the first
/// heartbeat of a new connection.
#[derive(Debug, Default)]
pub struct SessionContext {
    intent: Mutex<Intent>,
    heartbeat_enabled: AtomicBool,
    status: Mutex<Option<RobotStatus>>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intent(&self) -> Intent {
        *self.intent.lock().expect("intent poisoned")
    }

    pub fn set_speed(&self, speed: f64) {
        self.intent.lock().expect("intent poisoned").speed = speed;
    }

    pub fn set_omega(&self, omega: f64) {
        self.intent.lock().expect("intent poisoned").omega = omega;
    }

    pub fn set_cut_power(&self, power: f64) {
        self.intent.lock().expect("intent poisoned").cut_power = power;
    }

    /// Zero all commanded motion.
    pub fn clear_intent(&self) {
        *self.intent.lock().expect("intent poisoned") = Intent::default();
    }

    pub fn set_heartbeat(&self, enabled: bool) {
        self.heartbeat_enabled.store(enabled, Ordering::SeqCst);
    }

    pub fn heartbeat_enabled(&self) -> bool {
        self.heartbeat_enabled.load(Ordering::SeqCst)
    }

    pub fn set_status(&self, status: RobotStatus) {
        *self.status.lock().expect("status poisoned") = Some(status);
    }

    pub fn status(&self) -> Option<RobotStatus> {
        self.status.lock().expect("status poisoned").clone()
    }

    /// The last known robot clock, seconds. `None` until the first
    /// telemetry message arrives.
    pub fn robot_clock(&self) -> Option<f64> {
        self.status
            .lock()
            .expect("status poisoned")
            .as_ref()
            .map(|s| s.time.robot_time)
    }
}
