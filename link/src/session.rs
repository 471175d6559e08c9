use std::sync::Arc;
use std::time::Duration;

use futures_util::stream::SplitSink;
use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio::sync::{mpsc, watch};
use tokio::time::MissedTickBehavior;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};
use tracing::{debug, info, warn};

use crate::context::SessionContext;
use crate::envelope::{Inbound, Outbound};
use crate::heartbeat::{self, HEARTBEAT_PERIOD};
use crate::router::{Router, StatusSink};

/// Connection lifecycle. `Closed` always leads back to `Connecting` after
/// [`RECONNECT_DELAY`]; there is no terminal failure state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkState {
    Connecting,
    Open,
    Closed,
}

/// Delay between a close and the next connection attempt.
pub const RECONNECT_DELAY: Duration = Duration::from_secs(5);

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;
type WsWriter = SplitSink<WsStream, Message>;

/// Why the connected loop ended.
enum Disconnect {
    Peer,
    OperatorGone,
}

/// The control link session.
///
/// Owns the transport for its whole lifecycle: connect, pump frames and the
/// heartbeat while open, then sleep and reconnect. The heartbeat ticker is
/// local to the connected scope, so a close destroys it before another tick
/// can fire. Inbound frames, heartbeat ticks and operator commands all run
/// on one task; the router and view have no other writers.
pub struct Session {
    url: String,
    ctx: Arc<SessionContext>,
    router: Router,
    sink: Arc<dyn StatusSink>,
    commands: mpsc::UnboundedReceiver<Outbound>,
    state: watch::Sender<LinkState>,
}

impl Session {
    pub fn new(
        url: String,
        ctx: Arc<SessionContext>,
        router: Router,
        sink: Arc<dyn StatusSink>,
        commands: mpsc::UnboundedReceiver<Outbound>,
    ) -> (Self, watch::Receiver<LinkState>) {
        let (state, state_rx) = watch::channel(LinkState::Connecting);
        (
            Self {
                url,
                ctx,
                router,
                sink,
                commands,
                state,
            },
            state_rx,
        )
    }

    /// Drive the session until the operator handle goes away. Transport
    /// failures are never fatal: every close schedules exactly one
    /// reconnect attempt, five seconds out.
    pub async fn run(mut self) {
        loop {
            let _ = self.state.send(LinkState::Connecting);
            info!(url = %self.url, "connecting");
            match connect_async(&self.url).await {
                Ok((ws, _)) => {
                    info!("link open");
                    let _ = self.state.send(LinkState::Open);
                    self.sink.connection(true);
                    let disconnect = self.connected(ws).await;
                    self.sink.connection(false);
                    let _ = self.state.send(LinkState::Closed);
                    self.ctx.clear_intent();
                    if matches!(disconnect, Disconnect::OperatorGone) {
                        info!("operator gone, session over");
                        return;
                    }
                }
                Err(err) => {
                    warn!(%err, "connect failed");
                    self.sink.connection(false);
                    let _ = self.state.send(LinkState::Closed);
                    self.ctx.clear_intent();
                }
            }
            tokio::time::sleep(RECONNECT_DELAY).await;
        }
    }

    async fn connected(&mut self, ws: WsStream) -> Disconnect {
        let (mut writer, mut reader) = ws.split();
        let mut ticker = tokio::time::interval(HEARTBEAT_PERIOD);
        // Missed ticks are skipped, never queued for catch-up.
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                frame = reader.next() => match frame {
                    Some(Ok(Message::Text(text))) => self.on_frame(text.as_str()),
                    Some(Ok(Message::Close(_))) | None => {
                        info!("link closed by peer");
                        return Disconnect::Peer;
                    }
                    Some(Ok(_)) => {}
                    Some(Err(err)) => {
                        warn!(%err, "link error");
                        return Disconnect::Peer;
                    }
                },
                _ = ticker.tick() => {
                    if !self.ctx.heartbeat_enabled() {
                        continue;
                    }
                    let Some(robot_time) = self.ctx.robot_clock() else {
                        debug!("heartbeat skipped, no robot clock yet");
                        continue;
                    };
                    for command in heartbeat::tick(self.ctx.intent(), robot_time) {
                        send(&mut writer, &command).await;
                    }
                },
                command = self.commands.recv() => match command {
                    Some(command) => send(&mut writer, &command).await,
                    None => return Disconnect::OperatorGone,
                },
            }
        }
    }

    fn on_frame(&mut self, raw: &str) {
        match Inbound::decode(raw) {
            Ok(Some(message)) => self.router.dispatch(message),
            Ok(None) => debug!(frame = %raw, "ignoring unknown topic"),
            Err(err) => warn!(%err, "dropping malformed frame"),
        }
    }
}

/// Write one command. Failures are logged and swallowed, never surfaced to
/// the operator path and never retried; the next heartbeat refreshes the
/// lease regardless.
async fn send(writer: &mut WsWriter, command: &Outbound) {
    match command.encode() {
        Ok(frame) => {
            if let Err(err) = writer.send(Message::Text(frame.into())).await {
                warn!(topic = command.topic(), %err, "send failed");
            }
        }
        Err(err) => warn!(topic = command.topic(), %err, "encode failed"),
    }
}
