use crate::geometry::Point2;
use crate::planner::scoring::ShotMetrics;
use crate::table::{Pocket, Wall};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShotKind {
    Direct,
    Bank(Wall),
}

impl fmt::Display for ShotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotKind::Direct => write!(f, "direct"),
            ShotKind::Bank(wall) => write!(f, "bank_{}", wall),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateShot {
    pub target: usize,
    pub pocket: Pocket,
    pub kind: ShotKind,
    pub contact: Point2,
    pub reflection: Option<Point2>,
    pub metrics: ShotMetrics,
    pub score: f64,
}

impl CandidateShot {
    /// The point the cue is aimed at: the rail point for banks, else the contact.
    pub fn aim_point(&self) -> Point2 {
        self.reflection.unwrap_or(self.contact)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "plan", rename_all = "snake_case")]
pub enum ShotPlan {
    Pot(CandidateShot),
    /// No viable pot: roll up to the closest own ball.
    NearestOwn { target: usize, distance: f64 },
    /// No own ball left on the table.
    TableCenter,
    /// Cue ball missing or the geometry produced a non-finite result.
    SafeDefault,
}

impl ShotPlan {
    pub fn label(&self) -> &'static str {
        match self {
            ShotPlan::Pot(_) => "pot",
            ShotPlan::NearestOwn { .. } => "nearest_own",
            ShotPlan::TableCenter => "table_center",
            ShotPlan::SafeDefault => "safe_default",
        }
    }

    pub fn is_fallback(&self) -> bool {
        !matches!(self, ShotPlan::Pot(_))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShotDecision {
    /// Table degrees: 0 = north, clockwise, [0, 360).
    pub angle: f64,
    pub power: f64,
    pub plan: ShotPlan,
}
