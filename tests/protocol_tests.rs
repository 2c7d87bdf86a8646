use cueforge::layout::{BallState, TurnOrder};
use cueforge::planner::{ShotDecision, ShotPlan};
use cueforge::protocol::{
    encode_greeting, encode_resend_request, encode_shot, parse_message, ServerMessage,
};
use rstest::rstest;

fn shot(angle: f64, power: f64) -> ShotDecision {
    ShotDecision {
        angle,
        power,
        plan: ShotPlan::TableCenter,
    }
}

#[test]
fn test_snapshot_parsing() {
    let raw = "10.5/20/30/40/-1/-1/50/60/70/80/90/100/";
    let ServerMessage::Snapshot(layout) = parse_message(raw, 6).unwrap() else {
        panic!("expected a snapshot");
    };
    assert_eq!(layout.len(), 6);
    assert_eq!(layout.cue().map(|p| (p.x, p.y)), Some((10.5, 20.0)));
    assert_eq!(layout.state(2), BallState::Off);
    assert_eq!(layout.on_table().count(), 5);
}

#[test]
fn test_extra_fields_are_ignored() {
    let raw = "1/2/3/4/5/6/7/8/9/10/11/12/13/14/";
    assert!(matches!(
        parse_message(raw, 6),
        Ok(ServerMessage::Snapshot(_))
    ));
}

#[rstest]
#[case("9909/", ServerMessage::Close)]
#[case("9909/0/0/", ServerMessage::Close)]
#[case("9908/1/", ServerMessage::AssignOrder(TurnOrder::First))]
#[case("9908/2/0/0/0/0/0/0/0/0/0/0/", ServerMessage::AssignOrder(TurnOrder::Second))]
fn test_signals(#[case] raw: &str, #[case] expected: ServerMessage) {
    assert_eq!(parse_message(raw, 6).unwrap(), expected);
}

#[rstest]
#[case("1/2/3/4/")] // Too short
#[case("")]
#[case("1/2/3/x/5/6/7/8/9/10/11/12/")] // Not a number
#[case("9908/3/")] // Unknown order
#[case("9908/")]
fn test_malformed_messages(#[case] raw: &str) {
    assert!(parse_message(raw, 6).is_err(), "'{}' should be rejected", raw);
}

#[test]
fn test_encoders() {
    assert_eq!(encode_greeting("CUEFORGE"), "9901/CUEFORGE/");
    assert_eq!(encode_resend_request(), "9902/9902/");
    assert_eq!(encode_shot(&shot(123.456, 56.789)), "123.46/56.79/");
    assert_eq!(encode_shot(&shot(0.0, 24.0)), "0.00/24.00/");
}

#[test]
fn test_angle_rounding_never_prints_360() {
    assert_eq!(encode_shot(&shot(359.999, 50.0)), "0.00/50.00/");
    assert_eq!(encode_shot(&shot(359.99, 50.0)), "359.99/50.00/");
}
