//! Heading math shared by every animal
//!
//! Headings are angles in the ground plane measured from +x toward +z, so a
//! heading `a` faces the planar direction `(cos a, sin a)`. Every stored
//! heading lives in `(-PI, PI]`.

use std::f32::consts::{PI, TAU};

use glam::Vec2;

/// Map any angle into `(-PI, PI]`
pub fn normalize_angle(theta: f32) -> f32 {
    let wrapped = theta.sin().atan2(theta.cos());
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}

/// Turn from `current` toward `target` along the shorter arc, by at most `max_step`
pub fn rotate_towards(current: f32, target: f32, max_step: f32) -> f32 {
    let max_step = max_step.abs();
    let diff = normalize_angle(target - current);
    normalize_angle(current + diff.clamp(-max_step, max_step))
}

/// Unsigned angular distance between two headings, in `[0, PI]`
pub fn angular_distance(a: f32, b: f32) -> f32 {
    normalize_angle(a - b).abs()
}

/// Heading that faces along a planar direction
#[inline]
pub fn heading_of(direction: Vec2) -> f32 {
    normalize_angle(direction.y.atan2(direction.x))
}

/// Unit planar direction for a heading
#[inline]
pub fn direction_of(heading: f32) -> Vec2 {
    Vec2::new(heading.cos(), heading.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_range() {
        let mut theta = -20.0f32;
        while theta < 20.0 {
            let n = normalize_angle(theta);
            assert!(n > -PI && n <= PI, "{theta} -> {n}");
            theta += 0.037;
        }
    }

    #[test]
    fn test_normalize_negative_pi_maps_to_pi() {
        let n = normalize_angle(-PI);
        assert!(n > -PI && angular_distance(n, PI) < 1e-5);
        let n = normalize_angle(3.0 * PI);
        assert!(n > -PI && angular_distance(n, PI) < 1e-5);
    }

    #[test]
    fn test_normalize_keeps_small_angles() {
        assert!((normalize_angle(0.5) - 0.5).abs() < 1e-6);
        assert!((normalize_angle(-1.25) + 1.25).abs() < 1e-6);
        assert!((normalize_angle(0.5 + TAU) - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_rotate_takes_short_way_round() {
        // From just below PI to just above -PI is a tiny positive turn
        let next = rotate_towards(PI - 0.1, -PI + 0.1, 0.05);
        assert!(angular_distance(next, PI - 0.05) < 1e-5);
    }

    #[test]
    fn test_rotate_step_is_bounded() {
        let step = 0.08;
        let mut current = -3.0f32;
        while current < 3.0 {
            let mut target = -3.1f32;
            while target < 3.1 {
                let next = rotate_towards(current, target, step);
                assert!(angular_distance(next, current) <= step + 1e-5);
                assert!(next > -PI && next <= PI);
                target += 0.29;
            }
            current += 0.31;
        }
    }

    #[test]
    fn test_rotate_converges_within_bound() {
        let step = 5.0 * 0.016;
        let limit = (PI / step).ceil() as usize;
        let pairs = [(0.0, PI), (2.5, -2.5), (-1.0, 1.7), (3.1, -0.2)];
        for (start, target) in pairs {
            let mut current = start;
            for _ in 0..limit {
                current = rotate_towards(current, target, step);
            }
            assert!(
                angular_distance(current, target) < 1e-4,
                "{start} -> {target} ended at {current}"
            );
        }
    }

    #[test]
    fn test_rotate_with_negative_budget_uses_magnitude() {
        let next = rotate_towards(0.0, 1.0, -0.2);
        assert!((next - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_heading_direction_inverse() {
        for heading in [-2.0f32, -0.3, 0.0, 1.1, 3.0] {
            let back = heading_of(direction_of(heading));
            assert!(angular_distance(back, heading) < 1e-5);
        }
    }
}
