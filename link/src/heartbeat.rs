use std::time::Duration;

use crate::context::Intent;
use crate::envelope::Outbound;

/// Robot-side command lease, seconds. A lease that lapses without refresh
/// stops the robot on its own; the console only keeps refreshing it.
pub const COMMAND_LEASE: f64 = 2.5;

/// Period of the refresh ticker while the link is open.
pub const HEARTBEAT_PERIOD: Duration = Duration::from_secs(1);

/// Commands for one heartbeat tick: movement and cutter leases from the
/// current intent, with the deadline expressed on the robot's clock.
pub fn tick(intent: Intent, robot_time: f64) -> [Outbound; 2] {
    let timeout = robot_time + COMMAND_LEASE;
    [
        Outbound::Move {
            timeout,
            speed: intent.speed,
            omega: intent.omega,
        },
        Outbound::Cut {
            timeout,
            power: intent.cut_power,
        },
    ]
}
