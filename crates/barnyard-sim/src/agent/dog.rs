//! Dog behavior
//!
//! Dogs have no hunger. They lose happiness slowly, now and then switch
//! between wandering and herding, and while herding trot along the line from
//! a random pig toward the farm center.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::wander::WanderParams;
use super::{Agent, Body, Stride, TickEnv};
use crate::rng_trait::FarmRng;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DogState {
    pub herding: bool,
}

impl DogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn update<R: FarmRng + ?Sized>(
        &mut self,
        body: &mut Body,
        herd: &[Agent],
        env: &mut TickEnv<'_, R>,
    ) -> Stride {
        let config = env.config;
        let cfg = &config.dog;

        body.sadden(cfg.happiness_decay * env.dt);

        if env.rng.check_probability(cfg.herding_toggle_chance) {
            self.herding = !self.herding;
            log::debug!("Dog herding: {}", self.herding);
        }

        if self.herding && !herd.is_empty() {
            let pig = &herd[env.rng.gen_index(herd.len())];
            let direction = (Vec2::ZERO - pig.body.planar()).normalize_or_zero();
            let motion = direction * body.speed * cfg.herd_speed_factor;
            let here = body.planar();
            body.move_to(here + motion, &env.bounds);
            return Stride {
                motion,
                turn_rate: cfg.turn_rate,
            };
        }

        let params = WanderParams {
            jitter: cfg.wander_jitter,
            interval_min: cfg.wander_interval_min,
            interval_max: cfg.wander_interval_max,
        };
        body.wander.steer(env.dt, &params, env.rng);
        let step = body.wander.step(body.planar(), body.speed, &env.bounds);
        body.move_to(step.position, &env.bounds);

        Stride {
            motion: step.motion,
            turn_rate: cfg.turn_rate,
        }
    }
}
