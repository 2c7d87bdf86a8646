use crate::config::ScoringWeights;
use crate::geometry::{cosine_between, Point2};
use crate::layout::{Layout, CUE_INDEX};
use crate::planner::occlusion::is_clear;
use crate::table::{inside_table, CONTACT_MARGIN};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Leg {
    pub from: Point2,
    pub to: Point2,
}

impl Leg {
    pub fn length(&self) -> f64 {
        self.from.distance(self.to)
    }
}

/// The cue ball's route to the contact point, one leg per straight segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CuePath {
    pub legs: Vec<Leg>,
}

impl CuePath {
    pub fn direct(cue: Point2, contact: Point2) -> Self {
        Self {
            legs: vec![Leg {
                from: cue,
                to: contact,
            }],
        }
    }

    pub fn bank(cue: Point2, rail: Point2, contact: Point2) -> Self {
        Self {
            legs: vec![
                Leg {
                    from: cue,
                    to: rail,
                },
                Leg {
                    from: rail,
                    to: contact,
                },
            ],
        }
    }

    pub fn length(&self) -> f64 {
        self.legs.iter().map(Leg::length).sum()
    }

    pub fn rails(&self) -> usize {
        self.legs.len().saturating_sub(1)
    }

    pub fn final_leg(&self) -> Option<&Leg> {
        self.legs.last()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShotMetrics {
    pub cue_leg_clear: bool,
    pub target_leg_clear: bool,
    pub cue_path_length: f64,
    pub target_path_length: f64,
    /// Cosine between the cue ball's final travel direction and the line to
    /// the target center: 1.0 is a full-ball hit, near 0 a razor-thin cut.
    pub cut_alignment: f64,
    pub rails: usize,
    pub decisive: bool,
}

impl ShotMetrics {
    pub fn is_clear(&self) -> bool {
        self.cue_leg_clear && self.target_leg_clear
    }
}

/// Everything needed to judge one (target, pocket, path) combination.
#[derive(Debug, Clone, Copy)]
pub struct ShotGeometry<'a> {
    pub target_index: usize,
    pub target: Point2,
    pub pocket: Point2,
    pub contact: Point2,
    pub path: &'a CuePath,
    pub decisive: bool,
}

/// Measures a candidate. `None` when the contact point is off the playable
/// surface or the cut angle is undefined.
pub fn measure(layout: &Layout, shot: &ShotGeometry<'_>) -> Option<ShotMetrics> {
    if !inside_table(shot.contact, CONTACT_MARGIN) {
        return None;
    }
    let last = shot.path.final_leg()?;
    let cut_alignment = cosine_between(last.to - last.from, shot.target - last.from)?;

    // The target only touches the final leg; earlier legs must avoid it too
    let ignore = [CUE_INDEX, shot.target_index];
    let final_index = shot.path.legs.len() - 1;
    let cue_leg_clear = shot.path.legs.iter().enumerate().all(|(i, leg)| {
        let skip: &[usize] = if i == final_index {
            &ignore
        } else {
            &ignore[..1]
        };
        is_clear(leg.from, leg.to, layout, skip)
    });
    let target_leg_clear = is_clear(shot.target, shot.pocket, layout, &ignore);

    Some(ShotMetrics {
        cue_leg_clear,
        target_leg_clear,
        cue_path_length: shot.path.length(),
        target_path_length: shot.target.distance(shot.pocket),
        cut_alignment,
        rails: shot.path.rails(),
        decisive: shot.decisive,
    })
}

pub fn score(m: &ShotMetrics, w: &ScoringWeights) -> f64 {
    let mut score = w.base_offset;

    score += if m.target_leg_clear {
        w.bonus_target_clear
    } else {
        -w.penalty_target_blocked
    };
    score += if m.cue_leg_clear {
        w.bonus_cue_clear
    } else {
        -w.penalty_cue_blocked
    };

    score += m.cut_alignment * w.weight_alignment;
    score -= m.cue_path_length * w.weight_cue_distance;
    score -= m.target_path_length * w.weight_target_distance;
    score -= m.rails as f64 * w.penalty_bank_rail;

    if m.cut_alignment < w.thin_cut_threshold {
        score -= (w.thin_cut_threshold - m.cut_alignment) * w.penalty_thin_cut;
    }
    if m.cue_path_length > w.long_shot_threshold {
        score -= (m.cue_path_length - w.long_shot_threshold) * w.penalty_long_shot;
    }
    if m.decisive {
        score -= w.penalty_decisive;
    }

    score
}

pub fn evaluate(
    layout: &Layout,
    shot: &ShotGeometry<'_>,
    weights: &ScoringWeights,
) -> Option<(ShotMetrics, f64)> {
    let metrics = measure(layout, shot)?;
    Some((metrics, score(&metrics, weights)))
}
