//! Typed snapshot of the balls on the table for one decision cycle.

use crate::error::{CfResult, CueForgeError};
use crate::geometry::Point2;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Slots available in a layout (cue + 15 object balls).
pub const MAX_BALLS: usize = 16;
pub const CUE_INDEX: usize = 0;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum BallState {
    OnTable(Point2),
    #[default]
    Off,
}

impl BallState {
    /// The server marks potted balls with negative coordinates.
    pub fn from_wire(x: f64, y: f64) -> Self {
        if !x.is_finite() || !y.is_finite() || x < 0.0 || y < 0.0 {
            BallState::Off
        } else {
            BallState::OnTable(Point2::new(x, y))
        }
    }

    pub fn position(&self) -> Option<Point2> {
        match self {
            BallState::OnTable(p) => Some(*p),
            BallState::Off => None,
        }
    }

    pub fn is_on_table(&self) -> bool {
        matches!(self, BallState::OnTable(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    slots: [BallState; MAX_BALLS],
    len: usize,
}

/// Rejects ball counts a layout cannot hold: at least the cue, at most `MAX_BALLS`.
pub fn check_ball_count(count: usize) -> CfResult<()> {
    if count == 0 || count > MAX_BALLS {
        return Err(CueForgeError::Layout(format!(
            "ball count must lie within 1..={}, got {}",
            MAX_BALLS, count
        )));
    }
    Ok(())
}

impl Layout {
    pub fn from_states(states: &[BallState]) -> CfResult<Self> {
        if states.is_empty() {
            return Err(CueForgeError::Layout("layout has no cue ball".into()));
        }
        if states.len() > MAX_BALLS {
            return Err(CueForgeError::Layout(format!(
                "{} balls supplied, at most {} supported",
                states.len(),
                MAX_BALLS
            )));
        }
        let mut slots = [BallState::Off; MAX_BALLS];
        slots[..states.len()].copy_from_slice(states);
        Ok(Self {
            slots,
            len: states.len(),
        })
    }

    /// Builds a layout from raw wire coordinates, index 0 being the cue ball.
    pub fn from_coordinates(coords: &[(f64, f64)]) -> CfResult<Self> {
        let states: Vec<BallState> = coords
            .iter()
            .map(|&(x, y)| BallState::from_wire(x, y))
            .collect();
        Self::from_states(&states)
    }

    /// Number of supplied slots, on or off the table.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn state(&self, index: usize) -> BallState {
        if index < self.len {
            self.slots[index]
        } else {
            BallState::Off
        }
    }

    pub fn position(&self, index: usize) -> Option<Point2> {
        self.state(index).position()
    }

    pub fn cue(&self) -> Option<Point2> {
        self.position(CUE_INDEX)
    }

    /// All on-table balls (cue included) with their indices.
    pub fn on_table(&self) -> impl Iterator<Item = (usize, Point2)> + '_ {
        self.slots[..self.len]
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.position().map(|p| (i, p)))
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, EnumString, Display, Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
pub enum TurnOrder {
    #[default]
    First,
    Second,
}

impl TurnOrder {
    pub fn from_wire(value: f64) -> Option<Self> {
        if value == 1.0 {
            Some(Self::First)
        } else if value == 2.0 {
            Some(Self::Second)
        } else {
            None
        }
    }
}

/// Which object balls belong to which side, and which one decides the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
pub enum RuleSet {
    /// Cue + five object balls: odd/even split, ball 5 decides.
    SixBall,
    /// Cue + fifteen: 1-7 against 9-15, ball 8 decides.
    EightBall,
}

impl RuleSet {
    pub fn for_layout(layout: &Layout) -> Self {
        if layout.len() <= 6 {
            Self::SixBall
        } else {
            Self::EightBall
        }
    }

    fn group(self, order: TurnOrder) -> Vec<usize> {
        match (self, order) {
            (Self::SixBall, TurnOrder::First) => vec![1, 3],
            (Self::SixBall, TurnOrder::Second) => vec![2, 4],
            (Self::EightBall, TurnOrder::First) => (1..=7).collect(),
            (Self::EightBall, TurnOrder::Second) => (9..=15).collect(),
        }
    }

    fn designated_decisive(self) -> usize {
        match self {
            Self::SixBall => 5,
            Self::EightBall => 8,
        }
    }

    pub fn own_targets(self, order: TurnOrder, layout: &Layout) -> OwnTargets {
        let mut indices: Vec<usize> = self
            .group(order)
            .into_iter()
            .filter(|&i| i < layout.len())
            .collect();

        let designated = self.designated_decisive();
        if designated < layout.len() {
            indices.push(designated);
        }
        // Only a ball still on the table can carry the risk
        let decisive = indices
            .iter()
            .rev()
            .copied()
            .find(|&i| layout.position(i).is_some());

        OwnTargets { indices, decisive }
    }
}

/// Own object-ball indices in priority order; the decisive ball comes last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnTargets {
    pub indices: Vec<usize>,
    pub decisive: Option<usize>,
}

impl OwnTargets {
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }

    pub fn is_decisive(&self, index: usize) -> bool {
        self.decisive == Some(index)
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }
}
