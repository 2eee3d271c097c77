//! Leg cycle and tail wag
//!
//! The gait is presentation driven by wall-clock time, not simulation time,
//! so animals keep trotting at the same visual rate whatever the tick count.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::config::GaitConfig;

/// Leg order: front-left, front-right, back-left, back-right
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Gait {
    /// Vertical offset of each leg
    pub legs: [f32; 4],
    /// Tail yaw in radians
    pub tail: f32,
}

impl Gait {
    /// Recompute the pose for `wall_time` seconds.
    ///
    /// Diagonal pairs (front-left with back-right, front-right with back-left)
    /// move in phase.
    pub fn animate(&mut self, wall_time: f64, config: &GaitConfig) {
        let leg_phase = phase(wall_time, config.cadence as f64);
        let (sin, cos) = leg_phase.sin_cos();
        let amp = config.leg_amplitude;
        self.legs = [sin * amp, cos * amp, cos * amp, sin * amp];

        let tail_phase = phase(wall_time, config.cadence as f64 * config.tail_rate as f64);
        self.tail = tail_phase.sin() * config.tail_amplitude;
    }
}

/// Wrap `time * rate` into `[0, TAU)` before narrowing, to keep precision for
/// epoch-sized timestamps.
fn phase(time: f64, rate: f64) -> f32 {
    (time * rate).rem_euclid(TAU) as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PigConfig;

    #[test]
    fn test_diagonal_pairs_in_phase() {
        let config = PigConfig::default().gait;
        let mut gait = Gait::default();

        for step in 0..50 {
            gait.animate(step as f64 * 0.037, &config);
            assert_eq!(gait.legs[0], gait.legs[3]);
            assert_eq!(gait.legs[1], gait.legs[2]);
            assert!(gait.legs.iter().all(|l| l.abs() <= config.leg_amplitude + 1e-6));
            assert!(gait.tail.abs() <= config.tail_amplitude + 1e-6);
        }
    }

    #[test]
    fn test_epoch_timestamps_stay_bounded() {
        let config = PigConfig::default().gait;
        let mut gait = Gait::default();
        gait.animate(1_760_000_000.123, &config);
        assert!(gait.legs.iter().all(|l| l.is_finite()));
        assert!(gait.legs[0].abs() <= config.leg_amplitude + 1e-6);
    }

    #[test]
    fn test_start_pose() {
        let config = PigConfig::default().gait;
        let mut gait = Gait::default();
        gait.animate(0.0, &config);
        assert_eq!(gait.legs[0], 0.0);
        assert!((gait.legs[1] - config.leg_amplitude).abs() < 1e-6);
        assert_eq!(gait.tail, 0.0);
    }

    #[test]
    fn test_legs_and_tail_use_their_own_phase() {
        let config = PigConfig::default().gait;
        let mut gait = Gait::default();
        // Leg phase 10 * 0.05 = 0.5, tail phase twice that
        gait.animate(0.05, &config);
        assert!((gait.legs[0] - 0.5f32.sin() * 0.1).abs() < 1e-6);
        assert!((gait.legs[1] - 0.5f32.cos() * 0.1).abs() < 1e-6);
        assert!((gait.tail - 1.0f32.sin() * 0.3).abs() < 1e-6);
    }
}
