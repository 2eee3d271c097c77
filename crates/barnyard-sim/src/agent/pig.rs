//! Pig behavior
//!
//! Each tick a pig gets hungrier, turns hungry past a threshold and decides
//! between heading for the nearest food and wandering. A pig within eating
//! distance takes the item out of the registry in the same tick, so pigs
//! updated later in the tick can no longer see it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::wander::WanderParams;
use super::{Body, Stride, TickEnv, MAX_LEVEL};
use crate::config::PigConfig;
use crate::food::FoodItem;
use crate::heading::heading_of;
use crate::rng_trait::FarmRng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PigMode {
    Wander,
    Hungry,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PigState {
    /// 0 = just ate, 100 = starving
    pub hunger: f32,
    pub mode: PigMode,
}

impl Default for PigState {
    fn default() -> Self {
        Self::new()
    }
}

impl PigState {
    pub fn new() -> Self {
        Self {
            hunger: 0.0,
            mode: PigMode::Wander,
        }
    }

    pub fn is_hungry(&self) -> bool {
        self.mode == PigMode::Hungry
    }

    pub(crate) fn update<R: FarmRng + ?Sized>(
        &mut self,
        body: &mut Body,
        env: &mut TickEnv<'_, R>,
    ) -> (Stride, Option<FoodItem>) {
        let config = env.config;
        let cfg = &config.pig;
        let dt = env.dt;

        self.hunger = (self.hunger + cfg.hunger_rate * dt).clamp(0.0, MAX_LEVEL);
        if self.hunger > cfg.happiness_decay_threshold {
            body.sadden(cfg.happiness_decay * dt);
        }
        if self.hunger > cfg.hungry_threshold {
            self.mode = PigMode::Hungry;
        }

        let nearest = env
            .food
            .nearest(body.planar())
            .map(|(item, distance)| (*item, distance));
        if let Some((target, distance)) = nearest {
            if self.wants_food(distance, cfg, env.rng) {
                return self.seek(body, target, distance, env);
            }
        }

        let params = WanderParams {
            jitter: cfg.wander_jitter,
            interval_min: cfg.wander_interval_min,
            interval_max: cfg.wander_interval_max,
        };
        body.wander.steer(dt, &params, env.rng);
        let step = body.wander.step(body.planar(), body.speed, &env.bounds);
        body.move_to(step.position, &env.bounds);

        (
            Stride {
                motion: step.motion,
                turn_rate: cfg.wander_turn_rate,
            },
            None,
        )
    }

    /// Hungry, or food close by, or a random whim
    fn wants_food<R: FarmRng + ?Sized>(&self, distance: f32, cfg: &PigConfig, rng: &mut R) -> bool {
        self.is_hungry() || distance < cfg.awareness_radius || rng.check_probability(cfg.forage_chance)
    }

    fn seek<R: FarmRng + ?Sized>(
        &mut self,
        body: &mut Body,
        target: FoodItem,
        distance: f32,
        env: &mut TickEnv<'_, R>,
    ) -> (Stride, Option<FoodItem>) {
        let config = env.config;
        let cfg = &config.pig;
        let here = body.planar();
        let direction = (target.planar() - here).normalize_or_zero();
        let motion = direction * body.speed * cfg.seek_speed_factor;

        body.move_to(here + motion, &env.bounds);
        if motion != Vec2::ZERO {
            body.wander.angle = heading_of(direction);
        }

        let meal = if distance < cfg.eat_distance {
            env.food.remove(target.id)
        } else {
            None
        };
        if let Some(item) = meal {
            self.hunger = 0.0;
            self.mode = PigMode::Wander;
            body.cheer(cfg.meal_happiness);
            log::debug!(
                "Pig ate {} at ({:.1}, {:.1}), happiness {:.0}",
                item.id,
                item.position.x,
                item.position.z,
                body.happiness
            );
        }

        (
            Stride {
                motion,
                turn_rate: cfg.seek_turn_rate,
            },
            meal,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::{Agent, Bounds};
    use crate::config::FarmConfig;
    use crate::food::FoodRegistry;
    use crate::terrain::Terrain;
    use crate::types::{AgentId, Species};
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;

    struct Fixture {
        config: FarmConfig,
        terrain: Terrain,
        food: FoodRegistry,
        rng: Xoshiro256StarStar,
    }

    impl Fixture {
        fn new() -> Self {
            let mut config = FarmConfig::default();
            config.pig.forage_chance = 0.0;
            Self {
                config,
                terrain: Terrain::default(),
                food: FoodRegistry::new(),
                rng: Xoshiro256StarStar::seed_from_u64(21),
            }
        }

        fn pig_at(&mut self, x: f32, z: f32) -> Agent {
            Agent::spawn(
                AgentId(0),
                Species::Pig,
                Vec2::new(x, z),
                &self.config,
                &self.terrain,
                &mut self.rng,
            )
        }

        fn tick(&mut self, pig: &mut Agent) -> Option<FoodItem> {
            let mut env = TickEnv {
                dt: self.config.clock.step,
                wall_time: 0.0,
                terrain: &self.terrain,
                bounds: Bounds::new(self.config.farm.bound()),
                config: &self.config,
                food: &mut self.food,
                rng: &mut self.rng,
            };
            pig.update(&mut env, &[])
        }
    }

    #[test]
    fn test_hunger_grows_and_triggers_hungry() {
        let mut fx = Fixture::new();
        let mut pig = fx.pig_at(0.0, 0.0);
        pig.pig_mut().unwrap().hunger = 49.999;

        fx.tick(&mut pig);
        let state = pig.pig().unwrap();
        assert!(state.hunger > 50.0);
        assert!(state.is_hungry());
    }

    #[test]
    fn test_content_pig_keeps_happiness() {
        let mut fx = Fixture::new();
        let mut pig = fx.pig_at(0.0, 0.0);
        pig.body.happiness = 70.0;
        fx.tick(&mut pig);
        assert_eq!(pig.body.happiness, 70.0);
    }

    #[test]
    fn test_eats_food_underfoot() {
        let mut fx = Fixture::new();
        let mut pig = fx.pig_at(0.0, 0.0);
        pig.body.happiness = 50.0;
        pig.pig_mut().unwrap().hunger = 10.0;
        fx.food.drop(Vec2::ZERO, &fx.terrain, 0.3);

        let meal = fx.tick(&mut pig);
        assert!(meal.is_some());
        assert!(fx.food.is_empty());
        assert_eq!(pig.pig().unwrap().hunger, 0.0);
        assert_eq!(pig.body.happiness, 90.0);
        assert_eq!(pig.pig().unwrap().mode, PigMode::Wander);
    }

    #[test]
    fn test_walks_toward_nearby_food_faster_than_wandering() {
        let mut fx = Fixture::new();
        let mut pig = fx.pig_at(0.0, 0.0);
        fx.food.drop(Vec2::new(5.0, 0.0), &fx.terrain, 0.3);

        let speed = pig.body.speed;
        let meal = fx.tick(&mut pig);
        assert!(meal.is_none());
        assert!((pig.body.position.x - speed * 1.5).abs() < 1e-5);
        assert!(pig.body.position.z.abs() < 1e-6);
        assert_eq!(fx.food.len(), 1);
    }

    #[test]
    fn test_hungry_pig_seeks_distant_food() {
        let mut fx = Fixture::new();
        let mut pig = fx.pig_at(0.0, 0.0);
        pig.pig_mut().unwrap().hunger = 80.0;
        fx.food.drop(Vec2::new(-30.0, 0.0), &fx.terrain, 0.3);

        fx.tick(&mut pig);
        assert!(pig.body.position.x < 0.0);
        assert!(pig.body.position.z.abs() < 1e-6);
    }

    #[test]
    fn test_content_pig_ignores_distant_food() {
        let mut fx = Fixture::new();
        let mut pig = fx.pig_at(0.0, 0.0);
        pig.body.wander.angle = std::f32::consts::FRAC_PI_2;
        pig.body.wander.retarget_in = 10.0;
        fx.food.drop(Vec2::new(-30.0, 0.0), &fx.terrain, 0.3);

        fx.tick(&mut pig);
        // Wandered along +z instead of heading for the food along -x
        assert!(pig.body.position.z > 0.0);
        assert!(pig.body.position.x.abs() < 1e-5);
    }

    #[test]
    fn test_random_whim_sends_pig_foraging() {
        let mut fx = Fixture::new();
        fx.config.pig.forage_chance = 1.0;
        let mut pig = fx.pig_at(0.0, 0.0);
        fx.food.drop(Vec2::new(0.0, -30.0), &fx.terrain, 0.3);

        fx.tick(&mut pig);
        assert!(pig.body.position.z < 0.0);
    }

    #[test]
    fn test_seek_turns_at_fast_rate() {
        let mut fx = Fixture::new();
        let mut pig = fx.pig_at(0.0, 0.0);
        pig.body.heading = 0.0;
        fx.food.drop(Vec2::new(-3.0, 0.0), &fx.terrain, 0.3);

        fx.tick(&mut pig);
        let budget = 7.0 * fx.config.clock.step;
        assert!((pig.body.heading.abs() - budget).abs() < 1e-5);
    }
}
