use std::sync::Arc;

use link::{CommandError, Intent, Operator, Outbound, SessionContext, OMEGA, SPEED};
use tokio::sync::mpsc;

fn operator() -> (Operator, Arc<SessionContext>, mpsc::UnboundedReceiver<Outbound>) {
    let ctx = Arc::new(SessionContext::new());
    let (tx, rx) = mpsc::unbounded_channel();
    (Operator::new(ctx.clone(), tx), ctx, rx)
}

#[test]
fn motion_buttons_only_touch_the_intent() {
    let (op, ctx, mut rx) = operator();

    op.forward();
    assert_eq!(ctx.intent().speed, SPEED);
    op.backward();
    assert_eq!(ctx.intent().speed, -SPEED);
    op.left();
    assert_eq!(ctx.intent().omega, OMEGA);
    op.right();
    assert_eq!(ctx.intent().omega, -OMEGA);
    op.cut();
    assert_eq!(ctx.intent().cut_power, 1.0);

    // Nothing goes on the wire until the heartbeat picks the intent up.
    assert!(rx.try_recv().is_err());
}

#[test]
fn stop_zeroes_the_intent_and_sends_once() {
    let (op, ctx, mut rx) = operator();
    op.forward();
    op.left();
    op.cut();

    op.stop();
    assert_eq!(ctx.intent(), Intent::default());
    assert_eq!(rx.try_recv().unwrap(), Outbound::MoveStop);
    assert!(rx.try_recv().is_err());
}

#[test]
fn blank_mission_names_are_rejected_before_the_wire() {
    let (op, _ctx, mut rx) = operator();
    assert_eq!(op.mission_start(""), Err(CommandError::EmptyMissionName));
    assert_eq!(op.mission_start("   "), Err(CommandError::EmptyMissionName));
    assert_eq!(op.mission_start("\t\n"), Err(CommandError::EmptyMissionName));
    assert!(rx.try_recv().is_err());
}

#[test]
fn mission_names_are_trimmed() {
    let (op, _ctx, mut rx) = operator();
    op.mission_start("  perimeter pass  ").unwrap();
    assert_eq!(
        rx.try_recv().unwrap(),
        Outbound::MissionStart("perimeter pass".to_string())
    );
}

#[test]
fn mission_abort_goes_straight_out() {
    let (op, _ctx, mut rx) = operator();
    op.mission_abort();
    assert_eq!(rx.try_recv().unwrap(), Outbound::MissionAbort);
}

#[test]
fn heartbeat_toggle_reaches_the_context() {
    let (op, ctx, _rx) = operator();
    assert!(!ctx.heartbeat_enabled());
    op.set_heartbeat(true);
    assert!(ctx.heartbeat_enabled());
    op.set_heartbeat(false);
    assert!(!ctx.heartbeat_enabled());
}
