//! Fixed table dimensions, pockets and rails.
//!
//! Coordinates run from (0, 0) at the bottom-left corner to
//! (`TABLE_WIDTH`, `TABLE_HEIGHT`) at the top-right. "Top" is the north rail,
//! the direction of a 0° heading.

use crate::geometry::Point2;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

pub const TABLE_WIDTH: f64 = 254.0;
pub const TABLE_HEIGHT: f64 = 127.0;
pub const BALL_RADIUS: f64 = 2.865;

/// Center-to-center distance at the moment of a full ghost-ball contact.
pub const CONTACT_DISTANCE: f64 = BALL_RADIUS * 2.0;
/// Extra clearance added to `CONTACT_DISTANCE` when testing occlusion.
pub const BLOCK_MARGIN: f64 = BALL_RADIUS * 0.15;
/// Balls this close to a segment endpoint take part in the contact.
pub const ENDPOINT_EXCLUSION: f64 = BALL_RADIUS * 1.05;
/// Inward margin a ghost-ball position must keep from every rail.
pub const CONTACT_MARGIN: f64 = BALL_RADIUS * 0.6;

/// A ball whose center is at most this far from a path blocks it.
pub const BLOCK_THRESHOLD: f64 = CONTACT_DISTANCE + BLOCK_MARGIN;

pub fn table_center() -> Point2 {
    Point2::new(TABLE_WIDTH / 2.0, TABLE_HEIGHT / 2.0)
}

/// True when `p` lies in [margin, dimension - margin] on both axes.
pub fn inside_table(p: Point2, margin: f64) -> bool {
    margin <= p.x && p.x <= TABLE_WIDTH - margin && margin <= p.y && p.y <= TABLE_HEIGHT - margin
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
pub enum Pocket {
    BottomLeft,
    BottomMiddle,
    BottomRight,
    TopLeft,
    TopMiddle,
    TopRight,
}

impl Pocket {
    pub fn position(self) -> Point2 {
        match self {
            Self::BottomLeft => Point2::new(0.0, 0.0),
            Self::BottomMiddle => Point2::new(TABLE_WIDTH / 2.0, 0.0),
            Self::BottomRight => Point2::new(TABLE_WIDTH, 0.0),
            Self::TopLeft => Point2::new(0.0, TABLE_HEIGHT),
            Self::TopMiddle => Point2::new(TABLE_WIDTH / 2.0, TABLE_HEIGHT),
            Self::TopRight => Point2::new(TABLE_WIDTH, TABLE_HEIGHT),
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
pub enum Wall {
    Left,
    Right,
    Bottom,
    Top,
}

impl Wall {
    /// Rails at x = const.
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    /// The constant coordinate of the rail line.
    pub fn offset(self) -> f64 {
        match self {
            Self::Left | Self::Bottom => 0.0,
            Self::Right => TABLE_WIDTH,
            Self::Top => TABLE_HEIGHT,
        }
    }

    /// Mirror image of `p` across the rail line.
    pub fn mirror(self, p: Point2) -> Point2 {
        let c = self.offset();
        if self.is_vertical() {
            Point2::new(2.0 * c - p.x, p.y)
        } else {
            Point2::new(p.x, 2.0 * c - p.y)
        }
    }

    /// Checks the along-rail coordinate of `p` against [margin, len - margin].
    pub fn span_contains(self, p: Point2, margin: f64) -> bool {
        let (along, len) = if self.is_vertical() {
            (p.y, TABLE_HEIGHT)
        } else {
            (p.x, TABLE_WIDTH)
        };
        margin <= along && along <= len - margin
    }
}
