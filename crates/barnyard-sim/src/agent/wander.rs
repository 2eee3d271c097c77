//! Random wandering with boundary reflection
//!
//! Shared by pigs and dogs. The wander angle drifts by a random perturbation
//! every few seconds (or every tick when the interval is zero). When a step
//! would leave the pen the position is clamped to the bound and the angle is
//! mirrored across the violated axis.

use std::f32::consts::PI;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::heading::{direction_of, normalize_angle};
use crate::rng_trait::FarmRng;

/// Square pen animals are confined to, `|x| <= limit` and `|z| <= limit`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub limit: f32,
}

impl Bounds {
    pub fn new(limit: f32) -> Self {
        Self { limit }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x.abs() <= self.limit && point.y.abs() <= self.limit
    }

    pub fn clamp(&self, point: Vec2) -> Vec2 {
        point.clamp(Vec2::splat(-self.limit), Vec2::splat(self.limit))
    }
}

/// Perturbation settings for one species
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WanderParams {
    /// Full width of the uniform angle perturbation
    pub jitter: f32,
    pub interval_min: f32,
    pub interval_max: f32,
}

/// Result of one wander step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WanderStep {
    pub position: Vec2,
    /// Displacement direction scaled by the step distance, recomputed from
    /// the reflected angle when the bound was hit
    pub motion: Vec2,
    pub reflected: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wander {
    /// Direction of travel while wandering
    pub angle: f32,
    /// Seconds until the next perturbation
    pub retarget_in: f32,
}

impl Wander {
    pub fn new(angle: f32) -> Self {
        Self {
            angle: normalize_angle(angle),
            retarget_in: 0.0,
        }
    }

    /// Count down and perturb the angle when due
    pub fn steer<R: FarmRng + ?Sized>(&mut self, dt: f32, params: &WanderParams, rng: &mut R) {
        self.retarget_in -= dt;
        if self.retarget_in <= 0.0 {
            self.angle = normalize_angle(self.angle + rng.gen_centered(params.jitter));
            self.retarget_in = rng.gen_between(params.interval_min, params.interval_max);
        }
    }

    /// Advance `distance` along the wander angle, reflecting off the bounds
    pub fn step(&mut self, from: Vec2, distance: f32, bounds: &Bounds) -> WanderStep {
        let mut position = from + direction_of(self.angle) * distance;
        let mut reflected = false;

        if position.x.abs() > bounds.limit {
            position.x = bounds.limit.copysign(position.x);
            self.angle = normalize_angle(PI - self.angle);
            reflected = true;
        }
        if position.y.abs() > bounds.limit {
            position.y = bounds.limit.copysign(position.y);
            self.angle = normalize_angle(-self.angle);
            reflected = true;
        }

        WanderStep {
            position,
            motion: direction_of(self.angle) * distance,
            reflected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heading::angular_distance;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;

    const PARAMS: WanderParams = WanderParams {
        jitter: 1.5,
        interval_min: 2.0,
        interval_max: 5.0,
    };

    #[test]
    fn test_step_inside_bounds_moves_along_angle() {
        let mut wander = Wander::new(0.0);
        let step = wander.step(Vec2::new(1.0, 1.0), 0.5, &Bounds::new(54.0));
        assert!(!step.reflected);
        assert!((step.position - Vec2::new(1.5, 1.0)).length() < 1e-6);
        assert!((step.motion - Vec2::new(0.5, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_x_overflow_clamps_and_mirrors() {
        let bounds = Bounds::new(54.0);
        let mut wander = Wander::new(0.3);
        let step = wander.step(Vec2::new(54.01, 0.0), 0.04, &bounds);

        assert!(step.reflected);
        assert_eq!(step.position.x, 54.0);
        assert!(angular_distance(wander.angle, PI - 0.3) < 1e-6);
        // Motion now points back inside
        assert!(step.motion.x < 0.0);
    }

    #[test]
    fn test_z_overflow_negates_angle() {
        let bounds = Bounds::new(54.0);
        let mut wander = Wander::new(-1.2);
        let step = wander.step(Vec2::new(0.0, -53.99), 0.05, &bounds);

        assert!(step.reflected);
        assert_eq!(step.position.y, -54.0);
        assert!(angular_distance(wander.angle, 1.2) < 1e-6);
        assert!(step.motion.y > 0.0);
    }

    #[test]
    fn test_corner_overflow_reflects_both_axes() {
        let bounds = Bounds::new(10.0);
        let mut wander = Wander::new(PI / 4.0);
        let step = wander.step(Vec2::new(10.0, 10.0), 1.0, &bounds);

        assert!(bounds.contains(step.position));
        assert!(angular_distance(wander.angle, -3.0 * PI / 4.0) < 1e-5);
    }

    #[test]
    fn test_steer_waits_for_interval() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(3);
        let mut wander = Wander::new(1.0);

        wander.steer(0.016, &PARAMS, &mut rng);
        let first = wander.angle;
        assert!(angular_distance(first, 1.0) < 0.75 + 1e-6);
        assert!((2.0..5.0).contains(&wander.retarget_in));

        // Not due again for at least two seconds
        for _ in 0..100 {
            wander.steer(0.016, &PARAMS, &mut rng);
        }
        assert_eq!(wander.angle, first);
    }

    #[test]
    fn test_zero_interval_drifts_every_tick() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(11);
        let params = WanderParams {
            jitter: 0.2,
            interval_min: 0.0,
            interval_max: 0.0,
        };
        let mut wander = Wander::new(0.0);
        let mut changes = 0;
        for _ in 0..20 {
            let before = wander.angle;
            wander.steer(0.016, &params, &mut rng);
            assert!(angular_distance(before, wander.angle) <= 0.1 + 1e-6);
            if before != wander.angle {
                changes += 1;
            }
        }
        assert!(changes >= 19);
    }
}
