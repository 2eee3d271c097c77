//! Farm animals
//!
//! Every animal shares a [`Body`] (position, heading, speed, happiness,
//! wandering and gait) and carries its species-specific state in
//! [`SpeciesState`]. One call to [`Agent::update`] runs the species decision
//! step, then turns toward the resulting motion, re-seats the body on the
//! terrain and advances the gait.

pub mod dog;
pub mod gait;
pub mod pig;
pub mod wander;

use std::f32::consts::{FRAC_PI_2, TAU};

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::config::FarmConfig;
use crate::food::{FoodItem, FoodRegistry};
use crate::heading::{heading_of, normalize_angle, rotate_towards};
use crate::interaction::VisualPart;
use crate::notice::Notice;
use crate::presentation::{Flourish, Pose};
use crate::rng_trait::FarmRng;
use crate::terrain::Terrain;
use crate::types::{planar, AgentId, Species};

pub use dog::DogState;
pub use gait::Gait;
pub use pig::{PigMode, PigState};
pub use wander::{Bounds, Wander, WanderParams, WanderStep};

/// Upper limit of happiness and hunger
pub const MAX_LEVEL: f32 = 100.0;

/// Everything one animal needs to read or mutate during a tick
pub struct TickEnv<'a, R: FarmRng + ?Sized> {
    /// Fixed logical step in seconds
    pub dt: f32,
    /// Wall-clock seconds, drives the gait only
    pub wall_time: f64,
    pub terrain: &'a Terrain,
    pub bounds: Bounds,
    pub config: &'a FarmConfig,
    pub food: &'a mut FoodRegistry,
    pub rng: &'a mut R,
}

/// Displacement chosen by a species step and how fast to face it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stride {
    pub motion: Vec2,
    /// Turn budget in radians per second
    pub turn_rate: f32,
}

/// Shared physical state of an animal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// `y` is always terrain height plus `rest_height`
    pub position: Vec3,
    /// Facing, in `(-PI, PI]`
    pub heading: f32,
    /// Distance covered per tick at walking pace
    pub speed: f32,
    pub happiness: f32,
    pub rest_height: f32,
    pub wander: Wander,
    pub gait: Gait,
}

impl Body {
    pub fn new(point: Vec2, speed: f32, rest_height: f32, wander_angle: f32, terrain: &Terrain) -> Self {
        let wander = Wander::new(wander_angle);
        Self {
            position: terrain.place(point, rest_height),
            heading: wander.angle,
            speed,
            happiness: MAX_LEVEL,
            rest_height,
            wander,
            gait: Gait::default(),
        }
    }

    /// Ground-plane position
    pub fn planar(&self) -> Vec2 {
        planar(self.position)
    }

    /// Move to a planar point, clamped to the bounds. Height is fixed up by [`Body::settle`].
    pub fn move_to(&mut self, point: Vec2, bounds: &Bounds) {
        let point = bounds.clamp(point);
        self.position.x = point.x;
        self.position.z = point.y;
    }

    /// Turn toward a planar direction by at most `max_step` radians
    pub fn turn_towards(&mut self, direction: Vec2, max_step: f32) {
        if direction == Vec2::ZERO {
            return;
        }
        self.heading = rotate_towards(self.heading, heading_of(direction), max_step);
    }

    /// Re-derive height from the terrain
    pub fn settle(&mut self, terrain: &Terrain) {
        self.position.y = terrain.height_at(self.planar()) + self.rest_height;
    }

    pub fn cheer(&mut self, amount: f32) {
        self.happiness = (self.happiness + amount).clamp(0.0, MAX_LEVEL);
    }

    pub fn sadden(&mut self, amount: f32) {
        self.happiness = (self.happiness - amount).clamp(0.0, MAX_LEVEL);
    }
}

/// Species payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SpeciesState {
    Pig(PigState),
    Dog(DogState),
}

/// What petting an animal produced
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PetResponse {
    pub notice: Notice,
    pub flourish: Flourish,
}

/// Placement handed to the renderer every frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentTransform {
    pub id: AgentId,
    pub species: Species,
    /// Includes the presentation lift
    pub position: Vec3,
    pub heading: f32,
    /// Rotation about +y for a model facing +x
    pub yaw: f32,
    pub scale: f32,
    pub legs: [f32; 4],
    pub tail: f32,
    pub happiness: f32,
}

/// A single farm animal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub id: AgentId,
    pub body: Body,
    pub state: SpeciesState,
    pub parts: Vec<VisualPart>,
}

impl Agent {
    /// Create an animal standing at `point` with randomized speed and wander angle
    pub fn spawn<R: FarmRng + ?Sized>(
        id: AgentId,
        species: Species,
        point: Vec2,
        config: &FarmConfig,
        terrain: &Terrain,
        rng: &mut R,
    ) -> Self {
        let (speed_min, speed_max, rest_height) = match species {
            Species::Pig => (config.pig.speed_min, config.pig.speed_max, config.pig.rest_height),
            Species::Dog => (config.dog.speed_min, config.dog.speed_max, config.dog.rest_height),
        };
        let speed = rng.gen_between(speed_min, speed_max);
        let wander_angle = rng.gen_f32() * TAU;
        let body = Body::new(point, speed, rest_height, wander_angle, terrain);
        let state = match species {
            Species::Pig => SpeciesState::Pig(PigState::new()),
            Species::Dog => SpeciesState::Dog(DogState::new()),
        };

        Self {
            id,
            body,
            state,
            parts: Vec::new(),
        }
    }

    pub fn species(&self) -> Species {
        match self.state {
            SpeciesState::Pig(_) => Species::Pig,
            SpeciesState::Dog(_) => Species::Dog,
        }
    }

    pub fn pig(&self) -> Option<&PigState> {
        match &self.state {
            SpeciesState::Pig(pig) => Some(pig),
            SpeciesState::Dog(_) => None,
        }
    }

    pub fn pig_mut(&mut self) -> Option<&mut PigState> {
        match &mut self.state {
            SpeciesState::Pig(pig) => Some(pig),
            SpeciesState::Dog(_) => None,
        }
    }

    pub fn dog(&self) -> Option<&DogState> {
        match &self.state {
            SpeciesState::Dog(dog) => Some(dog),
            SpeciesState::Pig(_) => None,
        }
    }

    pub fn dog_mut(&mut self) -> Option<&mut DogState> {
        match &mut self.state {
            SpeciesState::Dog(dog) => Some(dog),
            SpeciesState::Pig(_) => None,
        }
    }

    /// Run one tick. `herd` is the pig roster, consulted by herding dogs.
    ///
    /// Returns the food item this animal ate, if any.
    pub fn update<R: FarmRng + ?Sized>(
        &mut self,
        env: &mut TickEnv<'_, R>,
        herd: &[Agent],
    ) -> Option<FoodItem> {
        let config = env.config;
        let start = self.body.planar();
        let (stride, meal, gait) = match &mut self.state {
            SpeciesState::Pig(pig) => {
                let (stride, meal) = pig.update(&mut self.body, env);
                (stride, meal, &config.pig.gait)
            }
            SpeciesState::Dog(dog) => {
                let stride = dog.update(&mut self.body, herd, env);
                (stride, None, &config.dog.gait)
            }
        };

        // Only turn when the body actually moved; a clamped step against the
        // bound leaves the heading alone
        if self.body.planar() != start {
            self.body
                .turn_towards(stride.motion, stride.turn_rate * env.dt);
        }
        self.body.settle(env.terrain);
        self.body.gait.animate(env.wall_time, gait);

        log::trace!(
            "{} at ({:.2}, {:.2}) heading {:.2} happiness {:.1}",
            self.id,
            self.body.position.x,
            self.body.position.z,
            self.body.heading,
            self.body.happiness
        );

        meal
    }

    /// Respond to a pat: happiness boost plus a species flourish
    pub fn pet(&mut self, config: &FarmConfig) -> PetResponse {
        let presentation = &config.presentation;
        match self.state {
            SpeciesState::Pig(_) => {
                self.body.cheer(config.pig.pet_happiness);
                PetResponse {
                    notice: Notice::Oink,
                    flourish: Flourish::Jump {
                        height: presentation.jump_height,
                        duration: presentation.jump_duration,
                    },
                }
            }
            SpeciesState::Dog(_) => {
                self.body.cheer(config.dog.pet_happiness);
                PetResponse {
                    notice: Notice::Woof,
                    flourish: Flourish::Bark {
                        scale: presentation.bark_scale,
                        duration: presentation.bark_duration,
                    },
                }
            }
        }
    }

    /// Renderer placement with the presentation pose applied
    pub fn transform(&self, pose: Pose) -> AgentTransform {
        let mut position = self.body.position;
        position.y += pose.lift;
        AgentTransform {
            id: self.id,
            species: self.species(),
            position,
            heading: self.body.heading,
            yaw: normalize_angle(FRAC_PI_2 - self.body.heading),
            scale: pose.scale,
            legs: self.body.gait.legs,
            tail: self.body.gait.tail,
            happiness: self.body.happiness,
        }
    }
}
