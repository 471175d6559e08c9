//! Control link to the robot.
//!
//! One WebSocket connection carries JSON envelopes `{"topic", "message"}`
//! in both directions. Inbound traffic (site map, tracking, telemetry) is
//! decoded against a per-topic schema and routed into the map view; outbound
//! traffic is the operator's commands plus a 1 Hz heartbeat that keeps the
//! robot's command lease fresh. The session reconnects forever; a dropped
//! link is an inconvenience, never a failure.

pub mod context;
pub mod envelope;
pub mod heartbeat;
pub mod operator;
pub mod router;
pub mod session;

pub use context::{Intent, SessionContext, CUT_POWER, OMEGA, SPEED};
pub use envelope::{Inbound, Outbound, RobotClock, RobotStatus, Tracking};
pub use heartbeat::COMMAND_LEASE;
pub use operator::{CommandError, Operator};
pub use router::{Router, StatusSink};
pub use session::{LinkState, Session, RECONNECT_DELAY};
