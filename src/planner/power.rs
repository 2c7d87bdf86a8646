use crate::config::{FallbackParams, PowerParams};
use crate::geometry::clamp;
use crate::planner::scoring::ShotMetrics;

/// Strike power for a planned pot.
pub fn shot_power(m: &ShotMetrics, p: &PowerParams) -> f64 {
    let mut power = p.power_base
        + p.power_per_cue_distance * m.cue_path_length
        + p.power_per_target_distance * m.target_path_length;

    // Thin cuts pass on less of the cue ball's speed
    if m.cut_alignment < p.straight_threshold {
        power += (p.straight_threshold - m.cut_alignment) * p.cut_power_gain;
    }
    if m.rails > 0 {
        power += p.bank_power_boost;
    }

    let power = clamp(power, p.power_min, p.power_max);
    if m.is_clear() {
        power
    } else {
        power.min(p.blocked_power_cap)
    }
}

/// Reduced power for rolling up to the nearest own ball.
pub fn approach_power(distance: f64, f: &FallbackParams) -> f64 {
    clamp(
        distance * f.fallback_power_per_distance,
        f.fallback_power_min,
        f.fallback_power_max,
    )
}
