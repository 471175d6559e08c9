use mapview::{Point, Pose, SiteMap};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Topic strings multiplexed over the link. Matching is case-exact, no
/// prefix or wildcard semantics.
pub mod topic {
    pub const MAP: &str = "map";
    pub const ROBOT_TRACKING: &str = "robot_tracking";
    pub const STATUS: &str = "status";
    pub const MOVE: &str = "move";
    pub const CUT: &str = "cut";
    pub const MOVE_STOP: &str = "move/stop";
    pub const MISSION_START: &str = "mission/start";
    pub const MISSION_ABORT: &str = "mission/abort";
}

#[derive(Serialize, Deserialize)]
struct Envelope {
    topic: String,
    message: Value,
}

/// `robot_tracking` carries either the mission history in bulk (sent once
/// when the connection opens) or a single live pose.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Tracking {
    History(Vec<Point>),
    Update(Pose),
}

/// The robot's own clock, as reported in telemetry. Command leases are
/// expressed against this clock, not the console's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RobotClock {
    /// Seconds on the motor controller clock.
    pub robot_time: f64,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Telemetry snapshot. Only the clock is interpreted; the rest is carried
/// opaquely for the raw status display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RobotStatus {
    pub time: RobotClock,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Inbound messages, one payload type per topic.
#[derive(Debug, Clone, PartialEq)]
pub enum Inbound {
    Map(SiteMap),
    Tracking(Tracking),
    Status(RobotStatus),
}

impl Inbound {
    /// Decode one wire frame. Unknown topics decode to `None` so newer
    /// counterparts can speak to an older console; malformed payloads are
    /// an error for the caller to drop.
    pub fn decode(raw: &str) -> Result<Option<Self>, serde_json::Error> {
        let envelope: Envelope = serde_json::from_str(raw)?;
        let inbound = match envelope.topic.as_str() {
            topic::MAP => Self::Map(serde_json::from_value(envelope.message)?),
            topic::ROBOT_TRACKING => Self::Tracking(serde_json::from_value(envelope.message)?),
            topic::STATUS => Self::Status(serde_json::from_value(envelope.message)?),
            _ => return Ok(None),
        };
        Ok(Some(inbound))
    }
}

/// Outbound commands, one per topic.
#[derive(Debug, Clone, PartialEq)]
pub enum Outbound {
    /// Movement lease: valid until `timeout` on the robot clock.
    Move {
        timeout: f64,
        speed: f64,
        omega: f64,
    },
    /// Cutter lease.
    Cut { timeout: f64, power: f64 },
    /// Unconditional stop, sent out of band from the heartbeat.
    MoveStop,
    MissionStart(String),
    MissionAbort,
}

impl Outbound {
    pub fn topic(&self) -> &'static str {
        match self {
            Self::Move { .. } => topic::MOVE,
            Self::Cut { .. } => topic::CUT,
            Self::MoveStop => topic::MOVE_STOP,
            Self::MissionStart(_) => topic::MISSION_START,
            Self::MissionAbort => topic::MISSION_ABORT,
        }
    }

    /// Serialize to one wire frame.
    pub fn encode(&self) -> Result<String, serde_json::Error> {
        let message = match self {
            Self::Move {
                timeout,
                speed,
                omega,
            } => json!({ "timeout": timeout, "speed": speed, "omega": omega }),
            Self::Cut { timeout, power } => json!({ "timeout": timeout, "power": power }),
            Self::MissionStart(name) => Value::String(name.clone()),
            Self::MoveStop | Self::MissionAbort => Value::Null,
        };
        serde_json::to_string(&Envelope {
            topic: self.topic().to_string(),
            message,
        })
    }
}
