use crate::geometry::{point_segment_distance, Point2, EPSILON};
use crate::layout::Layout;
use crate::table::{BLOCK_THRESHOLD, ENDPOINT_EXCLUSION};

/// Returns true when some on-table ball, other than those in `ignore`,
/// obstructs the straight path from `a` to `b`.
///
/// Balls sitting on either endpoint are the parties of the contact, not
/// obstacles, and are skipped. A zero-length path counts as blocked.
pub fn is_blocked(a: Point2, b: Point2, layout: &Layout, ignore: &[usize]) -> bool {
    if a.distance(b) < EPSILON {
        return true;
    }

    // Canonical endpoint order keeps is_blocked(a, b) == is_blocked(b, a) bit-for-bit
    let (a, b) = if (a.x, a.y) <= (b.x, b.y) { (a, b) } else { (b, a) };

    for (index, p) in layout.on_table() {
        if ignore.contains(&index) {
            continue;
        }
        if p.distance(a) < ENDPOINT_EXCLUSION || p.distance(b) < ENDPOINT_EXCLUSION {
            continue;
        }
        if point_segment_distance(a, b, p) <= BLOCK_THRESHOLD {
            return true;
        }
    }
    false
}

pub fn is_clear(a: Point2, b: Point2, layout: &Layout, ignore: &[usize]) -> bool {
    !is_blocked(a, b, layout, ignore)
}
