//! Batch evaluation of the planner over random layouts.

use crate::error::CfResult;
use crate::geometry::Point2;
use crate::layout::{check_ball_count, BallState, Layout, TurnOrder, CUE_INDEX};
use crate::planner::{PlanContext, Planner, ShotKind, ShotPlan};
use crate::table::{BALL_RADIUS, CONTACT_DISTANCE, TABLE_HEIGHT, TABLE_WIDTH};
use rayon::prelude::*;
use serde::Serialize;

const PLACEMENT_ATTEMPTS: usize = 100;

#[derive(Debug, Clone)]
pub struct SimulationOptions {
    pub games: usize,
    pub seed: Option<u64>,
    pub ball_count: usize,
    /// Chance that an object ball is already potted.
    pub off_table_chance: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SimulationSummary {
    pub games: usize,
    pub direct: usize,
    pub bank: usize,
    pub blocked_pots: usize,
    pub nearest_own: usize,
    pub table_center: usize,
    pub safe_default: usize,
    pub mean_power: f64,
    pub mean_pot_score: f64,
}

struct Outcome {
    plan: ShotPlan,
    power: f64,
}

/// Scatters `ball_count` balls over the table without overlaps. The cue
/// ball is always on the table.
pub fn random_layout(
    rng: &mut fastrand::Rng,
    ball_count: usize,
    off_table_chance: f64,
) -> CfResult<Layout> {
    let mut states: Vec<BallState> = Vec::with_capacity(ball_count);
    let mut placed: Vec<Point2> = Vec::with_capacity(ball_count);

    for index in 0..ball_count {
        if index != CUE_INDEX && rng.f64() < off_table_chance {
            states.push(BallState::Off);
            continue;
        }
        let mut p = random_spot(rng);
        for _ in 0..PLACEMENT_ATTEMPTS {
            if placed.iter().all(|q| q.distance(p) > CONTACT_DISTANCE) {
                break;
            }
            p = random_spot(rng);
        }
        placed.push(p);
        states.push(BallState::OnTable(p));
    }

    Layout::from_states(&states)
}

fn random_spot(rng: &mut fastrand::Rng) -> Point2 {
    let x = BALL_RADIUS + rng.f64() * (TABLE_WIDTH - 2.0 * BALL_RADIUS);
    let y = BALL_RADIUS + rng.f64() * (TABLE_HEIGHT - 2.0 * BALL_RADIUS);
    Point2::new(x, y)
}

pub fn run(planner: &Planner, opts: &SimulationOptions) -> CfResult<SimulationSummary> {
    check_ball_count(opts.ball_count)?;
    let base_seed = opts.seed.unwrap_or_else(|| fastrand::u64(..));

    let outcomes: Vec<Outcome> = (0..opts.games)
        .into_par_iter()
        .map(|i| {
            let mut rng = fastrand::Rng::with_seed(base_seed.wrapping_add(i as u64));
            let layout = random_layout(&mut rng, opts.ball_count, opts.off_table_chance)?;
            let order = if i % 2 == 0 {
                TurnOrder::First
            } else {
                TurnOrder::Second
            };
            let decision = planner.decide(&layout, &PlanContext::new(order));
            Ok(Outcome {
                plan: decision.plan,
                power: decision.power,
            })
        })
        .collect::<CfResult<Vec<Outcome>>>()?;

    Ok(summarize(&outcomes))
}

fn summarize(outcomes: &[Outcome]) -> SimulationSummary {
    let mut s = SimulationSummary {
        games: outcomes.len(),
        ..Default::default()
    };
    let mut power_sum = 0.0;
    let mut score_sum = 0.0;

    for o in outcomes {
        power_sum += o.power;
        match &o.plan {
            ShotPlan::Pot(shot) => {
                match shot.kind {
                    ShotKind::Direct => s.direct += 1,
                    ShotKind::Bank(_) => s.bank += 1,
                }
                if !shot.metrics.is_clear() {
                    s.blocked_pots += 1;
                }
                score_sum += shot.score;
            }
            ShotPlan::NearestOwn { .. } => s.nearest_own += 1,
            ShotPlan::TableCenter => s.table_center += 1,
            ShotPlan::SafeDefault => s.safe_default += 1,
        }
    }

    if s.games > 0 {
        s.mean_power = power_sum / s.games as f64;
    }
    let pots = s.direct + s.bank;
    if pots > 0 {
        s.mean_pot_score = score_sum / pots as f64;
    }
    s
}
