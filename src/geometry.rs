use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// Below this length a vector is treated as having no direction.
pub const EPSILON: f64 = 1e-9;

/// A position (or displacement) in table space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const ZERO: Point2 = Point2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn dot(self, other: Point2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    #[inline]
    pub fn norm(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Unit vector in the same direction, or `ZERO` for a (near) null vector.
    pub fn unit(self) -> Point2 {
        let n = self.norm();
        if n < EPSILON {
            return Point2::ZERO;
        }
        Point2::new(self.x / n, self.y / n)
    }

    #[inline]
    pub fn distance(self, other: Point2) -> f64 {
        (other - self).norm()
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point2 {
    type Output = Point2;
    fn add(self, rhs: Point2) -> Point2 {
        Point2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point2 {
    type Output = Point2;
    fn sub(self, rhs: Point2) -> Point2 {
        Point2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point2 {
    type Output = Point2;
    fn mul(self, rhs: f64) -> Point2 {
        Point2::new(self.x * rhs, self.y * rhs)
    }
}

pub fn distance(a: Point2, b: Point2) -> f64 {
    a.distance(b)
}

pub fn clamp(v: f64, lo: f64, hi: f64) -> f64 {
    v.max(lo).min(hi)
}

/// Minimum distance from `p` to the segment AB (not the infinite line).
pub fn point_segment_distance(a: Point2, b: Point2, p: Point2) -> f64 {
    let ab = b - a;
    let ap = p - a;
    let ab2 = ab.dot(ab);
    if ab2 == 0.0 {
        return ap.norm();
    }
    let t = ap.dot(ab) / ab2;
    if t <= 0.0 {
        return p.distance(a);
    }
    if t >= 1.0 {
        return p.distance(b);
    }
    p.distance(a + ab * t)
}

/// Heading of `v` in table degrees: 0° points at +Y (north), angles grow
/// clockwise, result in [0, 360).
///
/// The null vector has no heading; it maps to 0°.
pub fn table_angle(v: Point2) -> f64 {
    if v.norm() < EPSILON {
        return 0.0;
    }
    let mut deg = v.x.atan2(v.y).to_degrees();
    if deg < 0.0 {
        deg += 360.0;
    }
    // -1e-15 + 360.0 rounds to 360.0
    if deg >= 360.0 {
        deg -= 360.0;
    }
    deg
}

/// Table heading from `from` towards `to`.
pub fn heading(from: Point2, to: Point2) -> f64 {
    table_angle(to - from)
}

/// Cosine of the angle between `u` and `v`; `None` when either is null.
pub fn cosine_between(u: Point2, v: Point2) -> Option<f64> {
    let nu = u.norm();
    let nv = v.norm();
    if nu < EPSILON || nv < EPSILON {
        return None;
    }
    Some(clamp(u.dot(v) / (nu * nv), -1.0, 1.0))
}
