use std::sync::{Arc, Mutex};

use link::{Inbound, RobotStatus, Router, SessionContext, StatusSink};
use mapview::{MapView, Pose};

#[derive(Default)]
struct RecordingSink {
    connections: Mutex<Vec<bool>>,
    poses: Mutex<Vec<Pose>>,
    statuses: Mutex<Vec<RobotStatus>>,
}

impl StatusSink for RecordingSink {
    fn connection(&self, connected: bool) {
        self.connections.lock().unwrap().push(connected);
    }
    fn pose(&self, pose: &Pose) {
        self.poses.lock().unwrap().push(*pose);
    }
    fn status(&self, status: &RobotStatus) {
        self.statuses.lock().unwrap().push(status.clone());
    }
}

fn router() -> (Router, Arc<SessionContext>, Arc<RecordingSink>) {
    let ctx = Arc::new(SessionContext::new());
    let sink = Arc::new(RecordingSink::default());
    let router = Router::new(MapView::new(800.0, 600.0), ctx.clone(), sink.clone());
    (router, ctx, sink)
}

fn decode(raw: &str) -> Inbound {
    Inbound::decode(raw).unwrap().unwrap()
}

const MAP: &str = r#"{"topic":"map","message":{
    "exterior":[{"x":0,"y":0},{"x":10,"y":0},{"x":10,"y":6},{"x":0,"y":6}],
    "interiors":[]
}}"#;

#[test]
fn a_map_message_triggers_the_full_redraw() {
    let (mut router, _ctx, sink) = router();
    router.dispatch(decode(MAP));
    assert!(!router.view().background().is_empty());
    assert!(router.view().transform().is_some());
    // The connection indicator belongs to the session, not the router.
    assert!(sink.connections.lock().unwrap().is_empty());
}

#[test]
fn a_degenerate_map_leaves_the_previous_drawing() {
    let (mut router, _ctx, _sink) = router();
    router.dispatch(decode(MAP));
    let drawn = router.view().background().len();

    let bad = r#"{"topic":"map","message":{"exterior":[{"x":4,"y":4}],"interiors":[]}}"#;
    router.dispatch(decode(bad));
    assert_eq!(router.view().background().len(), drawn);
}

#[test]
fn a_live_pose_draws_and_feeds_the_readout() {
    let (mut router, _ctx, sink) = router();
    router.dispatch(decode(MAP));
    router.dispatch(decode(
        r#"{"topic":"robot_tracking","message":{"x":1.0,"y":2.0,"theta":1.5707963}}"#,
    ));

    assert_eq!(router.view().foreground().len(), 4);
    let poses = sink.poses.lock().unwrap();
    assert_eq!(poses.len(), 1);
    assert!((poses[0].heading_degrees() - 90.0).abs() < 1e-4);
}

#[test]
fn bulk_history_replays_without_touching_the_readout() {
    let (mut router, _ctx, sink) = router();
    router.dispatch(decode(MAP));
    let before = router.view().background().len();
    router.dispatch(decode(
        r#"{"topic":"robot_tracking","message":[{"x":0,"y":0},{"x":1,"y":1},{"x":2,"y":2}]}"#,
    ));
    assert_eq!(router.view().background().len(), before + 3);
    assert!(sink.poses.lock().unwrap().is_empty());
    // History alone never paints a robot.
    assert!(router.view().foreground().is_empty());
}

#[test]
fn status_is_stored_and_surfaced_raw() {
    let (mut router, ctx, sink) = router();
    router.dispatch(decode(
        r#"{"topic":"status","message":{"time":{"robot_time":7.5},"battery":{"voltage":23.9}}}"#,
    ));
    assert_eq!(ctx.robot_clock(), Some(7.5));
    let statuses = sink.statuses.lock().unwrap();
    assert_eq!(statuses.len(), 1);
    assert_eq!(statuses[0].extra["battery"]["voltage"], 23.9);
}
