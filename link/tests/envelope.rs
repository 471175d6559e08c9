use link::{Inbound, Outbound, Tracking};

#[test]
fn decodes_a_site_map() {
    let raw = r#"{"topic":"map","message":{
        "exterior":[{"x":0,"y":0},{"x":10,"y":0},{"x":10,"y":6},{"x":0,"y":6}],
        "interiors":[[{"x":2,"y":2},{"x":3,"y":2},{"x":3,"y":3}]]
    }}"#;
    match Inbound::decode(raw).unwrap().unwrap() {
        Inbound::Map(map) => {
            assert_eq!(map.exterior.points.len(), 4);
            assert_eq!(map.interiors.len(), 1);
            assert_eq!(map.interiors[0].points.len(), 3);
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn decodes_a_live_pose() {
    let raw = r#"{"topic":"robot_tracking","message":{"x":1.5,"y":-2.0,"theta":0.75}}"#;
    match Inbound::decode(raw).unwrap().unwrap() {
        Inbound::Tracking(Tracking::Update(pose)) => {
            assert_eq!(pose.x, 1.5);
            assert_eq!(pose.y, -2.0);
            assert_eq!(pose.theta, 0.75);
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn decodes_bulk_history_with_extra_fields() {
    // Historical states carry theta as well; the trail only needs x and y.
    let raw = r#"{"topic":"robot_tracking","message":[
        {"x":0.0,"y":0.0,"theta":0.0},
        {"x":0.5,"y":0.1,"theta":0.2},
        {"x":1.0,"y":0.3,"theta":0.4}
    ]}"#;
    match Inbound::decode(raw).unwrap().unwrap() {
        Inbound::Tracking(Tracking::History(points)) => {
            assert_eq!(points.len(), 3);
            assert_eq!(points[2].x, 1.0);
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn decodes_status_and_keeps_the_rest_raw() {
    let raw = r#"{"topic":"status","message":{
        "time":{"robot_time":41.5,"timestamp":1700000000.0},
        "battery":{"voltage":24.1},
        "mode":"manual"
    }}"#;
    match Inbound::decode(raw).unwrap().unwrap() {
        Inbound::Status(status) => {
            assert_eq!(status.time.robot_time, 41.5);
            assert_eq!(status.extra["mode"], "manual");
            assert_eq!(status.extra["battery"]["voltage"], 24.1);
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn unknown_topics_are_ignored() {
    let raw = r#"{"topic":"firmware/update","message":{"version":2}}"#;
    assert!(Inbound::decode(raw).unwrap().is_none());
}

#[test]
fn malformed_frames_are_an_error() {
    assert!(Inbound::decode("not json at all").is_err());
    assert!(Inbound::decode(r#"{"topic":"map","message":{"interiors":[]}}"#).is_err());
}

fn wire(command: &Outbound) -> serde_json::Value {
    serde_json::from_str(&command.encode().unwrap()).unwrap()
}

#[test]
fn encodes_move_and_cut_leases() {
    let frame = wire(&Outbound::Move {
        timeout: 44.0,
        speed: 0.1,
        omega: -0.1,
    });
    assert_eq!(frame["topic"], "move");
    assert_eq!(frame["message"]["timeout"], 44.0);
    assert_eq!(frame["message"]["speed"], 0.1);
    assert_eq!(frame["message"]["omega"], -0.1);

    let frame = wire(&Outbound::Cut {
        timeout: 44.0,
        power: 1.0,
    });
    assert_eq!(frame["topic"], "cut");
    assert_eq!(frame["message"]["power"], 1.0);
}

#[test]
fn encodes_stop_and_mission_commands() {
    let frame = wire(&Outbound::MoveStop);
    assert_eq!(frame["topic"], "move/stop");
    assert!(frame["message"].is_null());

    let frame = wire(&Outbound::MissionStart("perimeter".to_string()));
    assert_eq!(frame["topic"], "mission/start");
    assert_eq!(frame["message"], "perimeter");

    let frame = wire(&Outbound::MissionAbort);
    assert_eq!(frame["topic"], "mission/abort");
    assert!(frame["message"].is_null());
}
