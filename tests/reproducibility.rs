use cueforge::layout::CUE_INDEX;
use cueforge::planner::Planner;
use cueforge::simulate::{self, random_layout, SimulationOptions};
use cueforge::table::{inside_table, CONTACT_DISTANCE};

fn opts(seed: u64) -> SimulationOptions {
    SimulationOptions {
        games: 200,
        seed: Some(seed),
        ball_count: 6,
        off_table_chance: 0.2,
    }
}

#[test]
fn test_same_seed_same_summary() {
    let planner = Planner::default();
    let a = simulate::run(&planner, &opts(42)).unwrap();
    let b = simulate::run(&planner, &opts(42)).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.games, 200);
    assert_eq!(
        a.direct + a.bank + a.nearest_own + a.table_center + a.safe_default,
        200
    );
    // The cue ball is always placed
    assert_eq!(a.safe_default, 0);
}

#[test]
fn test_random_layouts_are_playable() {
    let mut rng = fastrand::Rng::with_seed(7);
    for _ in 0..50 {
        let layout = random_layout(&mut rng, 6, 0.3).unwrap();
        assert_eq!(layout.len(), 6);
        assert!(layout.position(CUE_INDEX).is_some());

        let balls: Vec<_> = layout.on_table().collect();
        for (i, p) in &balls {
            assert!(inside_table(*p, 0.0), "ball {} at {:?}", i, p);
            for (j, q) in &balls {
                if i < j {
                    assert!(p.distance(*q) > CONTACT_DISTANCE, "{} overlaps {}", i, j);
                }
            }
        }
    }
}

#[test]
fn test_bad_ball_count_is_rejected() {
    let planner = Planner::default();
    let mut o = opts(1);
    o.ball_count = 0;
    assert!(simulate::run(&planner, &o).is_err());
    o.ball_count = 17;
    assert!(simulate::run(&planner, &o).is_err());
}
