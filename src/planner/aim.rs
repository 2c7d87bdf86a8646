//! Aim points: the ghost-ball position for a direct pot and the rail point
//! for a one-cushion bank.

use crate::geometry::{Point2, EPSILON};
use crate::table::{Wall, CONTACT_DISTANCE};
use serde::{Deserialize, Serialize};

/// Where the cue ball's center must be when it meets `target` so that the
/// target rolls straight towards `pocket`.
///
/// `None` when target and pocket coincide (no direction to send it in).
pub fn ghost_ball(target: Point2, pocket: Point2) -> Option<Point2> {
    let dir = pocket - target;
    if dir.norm() < EPSILON {
        return None;
    }
    Some(target - dir.unit() * CONTACT_DISTANCE)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BankAim {
    pub wall: Wall,
    /// Rail contact, exactly on the wall line.
    pub point: Point2,
    /// The contact point mirrored across the wall.
    pub mirrored: Point2,
    /// Position of `point` along cue -> mirrored (0 = cue, 1 = mirrored).
    pub t: f64,
}

/// Mirrored-target construction for a cue -> wall -> contact bank.
///
/// Rejects walls parallel to the cue -> mirror line, walls at or behind the
/// cue ball (`t <= 0`) and rail points within `rail_margin` of a rail end.
pub fn bank_point(cue: Point2, contact: Point2, wall: Wall, rail_margin: f64) -> Option<BankAim> {
    let mirrored = wall.mirror(contact);
    let d = mirrored - cue;

    let (start, delta) = if wall.is_vertical() {
        (cue.x, d.x)
    } else {
        (cue.y, d.y)
    };
    if delta.abs() < EPSILON {
        return None;
    }

    let t = (wall.offset() - start) / delta;
    if !(t > 0.0) {
        return None;
    }

    let hit = cue + d * t;
    let point = if wall.is_vertical() {
        Point2::new(wall.offset(), hit.y)
    } else {
        Point2::new(hit.x, wall.offset())
    };

    if !point.is_finite() || !wall.span_contains(point, rail_margin) {
        return None;
    }

    Some(BankAim {
        wall,
        point,
        mirrored,
        t,
    })
}
