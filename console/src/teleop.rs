//! Stdin driver standing in for the console's buttons and fields.

use link::Operator;
use mapview::Transform;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::watch;
use tracing::{info, warn};

/// One parsed console line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Forward,
    Backward,
    Left,
    Right,
    Cut,
    Stop,
    MissionStart(String),
    MissionAbort,
    Heartbeat(bool),
    /// Cursor probe: canvas pixels to world coordinates.
    Probe { px: f64, py: f64 },
    Quit,
}

impl Command {
    /// Parse one input line; `None` for anything unrecognized.
    ///
    /// A bare `start` parses to an empty mission name on purpose; the
    /// operator surface owns that validation, not the parser.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (line, ""),
        };
        match head {
            "forward" | "f" => Some(Self::Forward),
            "backward" | "b" => Some(Self::Backward),
            "left" | "l" => Some(Self::Left),
            "right" | "r" => Some(Self::Right),
            "cut" => Some(Self::Cut),
            "stop" | "s" => Some(Self::Stop),
            "start" => Some(Self::MissionStart(rest.to_string())),
            "abort" => Some(Self::MissionAbort),
            "heartbeat" => match rest {
                "on" => Some(Self::Heartbeat(true)),
                "off" => Some(Self::Heartbeat(false)),
                _ => None,
            },
            "where" => {
                let (px, py) = rest.split_once(char::is_whitespace)?;
                Some(Self::Probe {
                    px: px.trim().parse().ok()?,
                    py: py.trim().parse().ok()?,
                })
            }
            "quit" | "exit" => Some(Self::Quit),
            _ => None,
        }
    }
}

const USAGE: &str = "commands: forward backward left right cut stop | start <name> | \
                     abort | heartbeat on|off | where <px> <py> | quit";

/// Read console lines until EOF or `quit`, applying each to the operator.
pub async fn run(operator: Operator, transform: watch::Receiver<Option<Transform>>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    info!("{USAGE}");
    while let Ok(Some(line)) = lines.next_line().await {
        if line.trim().is_empty() {
            continue;
        }
        match Command::parse(&line) {
            Some(command) => {
                if apply(&operator, &transform, command) {
                    break;
                }
            }
            None => info!("{USAGE}"),
        }
    }
}

/// Apply one command; `true` means the operator is done.
fn apply(
    operator: &Operator,
    transform: &watch::Receiver<Option<Transform>>,
    command: Command,
) -> bool {
    match command {
        Command::Forward => operator.forward(),
        Command::Backward => operator.backward(),
        Command::Left => operator.left(),
        Command::Right => operator.right(),
        Command::Cut => operator.cut(),
        Command::Stop => operator.stop(),
        Command::MissionStart(name) => {
            if let Err(err) = operator.mission_start(&name) {
                warn!(%err, "mission not started");
            }
        }
        Command::MissionAbort => operator.mission_abort(),
        Command::Heartbeat(enabled) => operator.set_heartbeat(enabled),
        Command::Probe { px, py } => match *transform.borrow() {
            Some(t) => {
                let p = t.to_world(px, py);
                info!("({px:.0}, {py:.0}) px is ({:.2}, {:.2}) m", p.x, p.y);
            }
            None => warn!("no map yet"),
        },
        Command::Quit => return true,
    }
    false
}
