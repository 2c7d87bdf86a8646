use cueforge::config::{FallbackParams, PowerParams, ScoringWeights};
use cueforge::geometry::Point2;
use cueforge::layout::Layout;
use cueforge::planner::power::{approach_power, shot_power};
use cueforge::planner::scoring::{evaluate, measure, score, ShotGeometry};
use cueforge::planner::{CuePath, ShotMetrics};
use cueforge::table::Pocket;
use rstest::rstest;

fn metrics(cue_len: f64, target_len: f64, alignment: f64) -> ShotMetrics {
    ShotMetrics {
        cue_leg_clear: true,
        target_leg_clear: true,
        cue_path_length: cue_len,
        target_path_length: target_len,
        cut_alignment: alignment,
        rails: 0,
        decisive: false,
    }
}

// --- MEASUREMENT ---

#[test]
fn test_measure_straight_in_shot() {
    // Cue, target and corner pocket on one diagonal
    let layout = Layout::from_coordinates(&[(40.0, 40.0), (20.0, 20.0), (200.0, 100.0)]).unwrap();
    let target = Point2::new(20.0, 20.0);
    let pocket = Pocket::BottomLeft.position();
    let contact = cueforge::planner::aim::ghost_ball(target, pocket).unwrap();
    let path = CuePath::direct(Point2::new(40.0, 40.0), contact);

    let m = measure(
        &layout,
        &ShotGeometry {
            target_index: 1,
            target,
            pocket,
            contact,
            path: &path,
            decisive: false,
        },
    )
    .unwrap();

    assert!(m.cue_leg_clear && m.target_leg_clear);
    assert!((m.cut_alignment - 1.0).abs() < 1e-9);
    assert!((m.target_path_length - 20.0 * 2f64.sqrt()).abs() < 1e-9);
    assert!((m.cue_path_length - contact.distance(Point2::new(40.0, 40.0))).abs() < 1e-9);
    assert_eq!(m.rails, 0);
}

#[test]
fn test_measure_flags_blocked_target_leg() {
    let layout = Layout::from_coordinates(&[(40.0, 40.0), (20.0, 20.0), (10.0, 10.0)]).unwrap();
    let target = Point2::new(20.0, 20.0);
    let pocket = Pocket::BottomLeft.position();
    let contact = cueforge::planner::aim::ghost_ball(target, pocket).unwrap();
    let path = CuePath::direct(Point2::new(40.0, 40.0), contact);

    let m = measure(
        &layout,
        &ShotGeometry {
            target_index: 1,
            target,
            pocket,
            contact,
            path: &path,
            decisive: false,
        },
    )
    .unwrap();

    assert!(m.cue_leg_clear);
    assert!(!m.target_leg_clear, "ball 2 sits between target and pocket");
}

#[test]
fn test_measure_rejects_contact_off_the_cloth() {
    let layout = Layout::from_coordinates(&[(40.0, 40.0), (3.0, 50.0)]).unwrap();
    let contact = Point2::new(1.0, 50.0);
    let path = CuePath::direct(Point2::new(40.0, 40.0), contact);
    let geom = ShotGeometry {
        target_index: 1,
        target: Point2::new(3.0, 50.0),
        pocket: Pocket::TopRight.position(),
        contact,
        path: &path,
        decisive: false,
    };
    assert!(measure(&layout, &geom).is_none());
    assert!(evaluate(&layout, &geom, &ScoringWeights::default()).is_none());
}

#[test]
fn test_bank_alignment_uses_last_leg() {
    let layout = Layout::from_coordinates(&[(50.0, 40.0), (156.0, 40.0)]).unwrap();
    let target = Point2::new(156.0, 40.0);
    let contact = Point2::new(150.0, 40.0);
    let path = CuePath::bank(Point2::new(50.0, 40.0), Point2::new(100.0, 0.0), contact);

    let m = measure(
        &layout,
        &ShotGeometry {
            target_index: 1,
            target,
            pocket: Pocket::BottomRight.position(),
            contact,
            path: &path,
            decisive: false,
        },
    )
    .unwrap();

    assert_eq!(m.rails, 1);
    assert!((m.cue_path_length - 2.0 * 4100f64.sqrt()).abs() < 1e-9);
    // Rail point -> contact against rail point -> target
    let expected = (50.0 * 56.0 + 40.0 * 40.0) / (4100f64.sqrt() * 4736f64.sqrt());
    assert!((m.cut_alignment - expected).abs() < 1e-9);
}

#[test]
fn test_target_on_first_bank_leg_blocks_cue_path() {
    let cue = Point2::new(50.0, 40.0);
    let rail = Point2::new(100.0, 0.0);
    let contact = Point2::new(150.0, 40.0);
    let path = CuePath::bank(cue, rail, contact);
    let geom = |target: Point2| ShotGeometry {
        target_index: 1,
        target,
        pocket: Pocket::BottomRight.position(),
        contact,
        path: &path,
        decisive: false,
    };

    // Cue ball would hit its own object ball before reaching the rail
    let in_the_way = Layout::from_coordinates(&[(50.0, 40.0), (75.0, 20.0)]).unwrap();
    let m = measure(&in_the_way, &geom(Point2::new(75.0, 20.0))).unwrap();
    assert!(!m.cue_leg_clear);

    // Next to the contact point on the final leg it is the intended party
    let at_contact = Layout::from_coordinates(&[(50.0, 40.0), (156.0, 40.0)]).unwrap();
    let m = measure(&at_contact, &geom(Point2::new(156.0, 40.0))).unwrap();
    assert!(m.cue_leg_clear);
}

// --- SCORING ---

#[test]
fn test_clear_long_shot_beats_blocked_short_shot() {
    let w = ScoringWeights::default();
    let open_long = metrics(200.0, 100.0, 1.0);
    let blocked_short = ShotMetrics {
        cue_leg_clear: false,
        ..metrics(10.0, 10.0, 1.0)
    };
    assert!(score(&open_long, &w) > score(&blocked_short, &w));

    let target_blocked = ShotMetrics {
        target_leg_clear: false,
        ..metrics(10.0, 10.0, 1.0)
    };
    assert!(score(&open_long, &w) > score(&target_blocked, &w));
}

#[test]
fn test_score_of_reference_shot() {
    let w = ScoringWeights::default();
    // 2200 + 1600 + 320 - 200*4.6 - 100*2.8 - (200-130)*3.5
    let s = score(&metrics(200.0, 100.0, 1.0), &w);
    assert!((s - 2675.0).abs() < 1e-9, "got {}", s);
}

#[test]
fn test_thin_cut_costs_extra() {
    let w = ScoringWeights::default();
    let at_threshold = score(&metrics(50.0, 50.0, 0.35), &w);
    let thinner = score(&metrics(50.0, 50.0, 0.15), &w);
    // Linear alignment term plus the thin-cut penalty
    let expected_gap = 0.2 * w.weight_alignment + 0.2 * w.penalty_thin_cut;
    assert!((at_threshold - thinner - expected_gap).abs() < 1e-9);
}

#[rstest]
#[case(ShotMetrics { rails: 1, ..metrics(50.0, 50.0, 0.8) }, 450.0)]
#[case(ShotMetrics { decisive: true, ..metrics(50.0, 50.0, 0.8) }, 250.0)]
fn test_fixed_penalties(#[case] m: ShotMetrics, #[case] penalty: f64) {
    let w = ScoringWeights::default();
    let plain = score(&metrics(50.0, 50.0, 0.8), &w);
    assert!((plain - score(&m, &w) - penalty).abs() < 1e-9);
}

// --- POWER ---

#[test]
fn test_power_affine_for_straight_shot() {
    let p = PowerParams::default();
    let power = shot_power(&metrics(40.0, 30.0, 1.0), &p);
    assert!((power - (28.0 + 0.72 * 40.0 + 0.42 * 30.0)).abs() < 1e-9);
}

#[test]
fn test_power_cut_and_bank_boost() {
    let p = PowerParams::default();
    let straight = shot_power(&metrics(40.0, 30.0, 1.0), &p);
    let cut = shot_power(&metrics(40.0, 30.0, 0.4), &p);
    assert!((cut - straight - 0.5 * 20.0).abs() < 1e-9);

    let bank = shot_power(&ShotMetrics { rails: 1, ..metrics(40.0, 30.0, 1.0) }, &p);
    assert!((bank - straight - 6.0).abs() < 1e-9);
}

#[test]
fn test_power_clamped_and_capped() {
    let p = PowerParams::default();
    assert_eq!(shot_power(&metrics(300.0, 200.0, 1.0), &p), 100.0);

    let blocked = ShotMetrics {
        target_leg_clear: false,
        ..metrics(300.0, 200.0, 1.0)
    };
    assert_eq!(shot_power(&blocked, &p), 80.0);
}

#[rstest]
#[case(10.0, 30.0)]
#[case(50.0, 46.0)]
#[case(200.0, 90.0)]
fn test_approach_power(#[case] distance: f64, #[case] expected: f64) {
    let power = approach_power(distance, &FallbackParams::default());
    assert!((power - expected).abs() < 1e-9, "got {}", power);
}
