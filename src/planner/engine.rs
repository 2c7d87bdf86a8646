use crate::config::Config;
use crate::geometry::{clamp, heading, Point2};
use crate::layout::{Layout, OwnTargets};
use crate::planner::aim::{bank_point, ghost_ball};
use crate::planner::power::{approach_power, shot_power};
use crate::planner::scoring::{evaluate, CuePath, ShotGeometry};
use crate::planner::types::{CandidateShot, ShotDecision, ShotKind, ShotPlan};
use crate::table::{table_center, Pocket, Wall};
use strum::IntoEnumIterator;
use tracing::debug;

/// Every viable (own target x pocket x path) combination, in enumeration
/// order: targets by priority, pockets, then direct before the four banks.
pub fn enumerate_candidates(layout: &Layout, own: &OwnTargets, cfg: &Config) -> Vec<CandidateShot> {
    let mut out = Vec::new();
    let Some(cue) = layout.cue() else {
        return out;
    };

    for target_index in own.iter() {
        let Some(target) = layout.position(target_index) else {
            continue;
        };
        let decisive = own.is_decisive(target_index);

        for pocket in Pocket::iter() {
            let pocket_pos = pocket.position();
            let Some(contact) = ghost_ball(target, pocket_pos) else {
                continue;
            };

            let mut push = |kind: ShotKind, reflection: Option<Point2>, path: CuePath| {
                let geom = ShotGeometry {
                    target_index,
                    target,
                    pocket: pocket_pos,
                    contact,
                    path: &path,
                    decisive,
                };
                if let Some((metrics, score)) = evaluate(layout, &geom, &cfg.weights) {
                    out.push(CandidateShot {
                        target: target_index,
                        pocket,
                        kind,
                        contact,
                        reflection,
                        metrics,
                        score,
                    });
                }
            };

            push(ShotKind::Direct, None, CuePath::direct(cue, contact));

            if !cfg.weights.bank_shots {
                continue;
            }
            for wall in Wall::iter() {
                if let Some(bank) = bank_point(cue, contact, wall, cfg.weights.bank_rail_margin) {
                    push(
                        ShotKind::Bank(wall),
                        Some(bank.point),
                        CuePath::bank(cue, bank.point, contact),
                    );
                }
            }
        }
    }

    out
}

/// Highest score wins; on ties the first candidate encountered is kept.
/// Candidates whose cue path is blocked cannot be struck and are never
/// selected; a blocked target leg alone still qualifies.
pub fn select_best(candidates: Vec<CandidateShot>) -> Option<CandidateShot> {
    let mut best: Option<CandidateShot> = None;
    for c in candidates {
        if !c.score.is_finite() || !c.metrics.cue_leg_clear {
            continue;
        }
        match &best {
            Some(b) if c.score <= b.score => {}
            _ => best = Some(c),
        }
    }
    best
}

pub fn safe_default(cfg: &Config) -> ShotDecision {
    ShotDecision {
        angle: cfg.fallback.default_angle,
        power: cfg.fallback.default_power,
        plan: ShotPlan::SafeDefault,
    }
}

/// Conservative play when nothing can be potted: approach the nearest own
/// ball, or aim at the table center when none remain. Opponent balls are
/// never targeted.
pub fn fallback(cue: Point2, layout: &Layout, own: &OwnTargets, cfg: &Config) -> ShotDecision {
    let mut nearest: Option<(usize, Point2, f64)> = None;
    for index in own.iter() {
        let Some(p) = layout.position(index) else {
            continue;
        };
        let d = cue.distance(p);
        match nearest {
            Some((_, _, best)) if d >= best => {}
            _ => nearest = Some((index, p, d)),
        }
    }

    match nearest {
        Some((target, p, distance)) => ShotDecision {
            angle: heading(cue, p),
            power: approach_power(distance, &cfg.fallback),
            plan: ShotPlan::NearestOwn { target, distance },
        },
        None => ShotDecision {
            angle: heading(cue, table_center()),
            power: cfg.fallback.center_power,
            plan: ShotPlan::TableCenter,
        },
    }
}

pub fn pot(cue: Point2, shot: CandidateShot, cfg: &Config) -> ShotDecision {
    debug!(
        "Selected {} ball {} -> {} (score {:.1}, align {:.3})",
        shot.kind, shot.target, shot.pocket, shot.score, shot.metrics.cut_alignment
    );
    ShotDecision {
        angle: heading(cue, shot.aim_point()),
        power: shot_power(&shot.metrics, &cfg.power),
        plan: ShotPlan::Pot(shot),
    }
}

/// Replaces non-finite output with the safe default and pins power to the
/// configured range.
pub fn finalize(decision: ShotDecision, cfg: &Config) -> ShotDecision {
    if !decision.angle.is_finite()
        || !decision.power.is_finite()
        || !(0.0..360.0).contains(&decision.angle)
    {
        debug!("Non-finite shot {:?}, using safe default", decision);
        return safe_default(cfg);
    }
    ShotDecision {
        power: clamp(decision.power, cfg.power.power_min, cfg.power.power_max),
        ..decision
    }
}
