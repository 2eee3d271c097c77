//! Simulation context
//!
//! [`Farm`] owns every roster, the food registry, the clock and the RNG, and
//! is the only thing a host talks to. One call to [`Farm::step`] runs all
//! pigs, then all dogs, in roster order. Presentation effects advance
//! separately on the host's frame delta.

use glam::Vec2;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;
use serde::{Deserialize, Serialize};

use crate::agent::{Agent, AgentTransform, Bounds, TickEnv};
use crate::clock::{ClockTick, SimulationClock};
use crate::config::FarmConfig;
use crate::error::FarmError;
use crate::food::{FoodItem, FoodRegistry};
use crate::interaction::HitIndex;
use crate::notice::{FarmEvent, FarmStats, Notice};
use crate::presentation::Presentation;
use crate::rng_trait::FarmRng;
use crate::scenery::SceneryLayout;
use crate::terrain::{Terrain, TerrainGrid};
use crate::types::{AgentId, FoodId, PartId, Species};

/// Outcome of petting an animal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PetReport {
    pub agent: AgentId,
    pub species: Species,
    pub notice: Notice,
    /// Happiness after the pat
    pub happiness: f32,
}

pub struct Farm {
    config: FarmConfig,
    terrain: Terrain,
    bounds: Bounds,
    clock: SimulationClock,
    rng: Xoshiro256StarStar,
    pigs: Vec<Agent>,
    dogs: Vec<Agent>,
    food: FoodRegistry,
    hits: HitIndex,
    presentation: Presentation,
    scenery: SceneryLayout,
    events: Vec<FarmEvent>,
    next_agent: u32,
}

impl Farm {
    /// Build an empty farm from a validated config
    pub fn new(config: FarmConfig, seed: u64) -> Result<Self, FarmError> {
        config.validate()?;
        Ok(Self::build(config, seed))
    }

    /// Empty farm with the compiled defaults
    pub fn with_seed(seed: u64) -> Self {
        Self::build(FarmConfig::default(), seed)
    }

    fn build(config: FarmConfig, seed: u64) -> Self {
        let terrain = Terrain::from_config(&config.terrain);
        let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
        let scenery = SceneryLayout::generate(&terrain, config.farm.size, &mut rng);

        log::info!(
            "Farm created: size {}, bound {:.1}, step {}s, seed {}",
            config.farm.size,
            config.farm.bound(),
            config.clock.step,
            seed
        );

        Self {
            bounds: Bounds::new(config.farm.bound()),
            clock: SimulationClock::from_config(&config.clock),
            terrain,
            rng,
            pigs: Vec::new(),
            dogs: Vec::new(),
            food: FoodRegistry::new(),
            hits: HitIndex::new(),
            presentation: Presentation::new().with_easing(config.presentation.easing),
            scenery,
            events: Vec::new(),
            next_agent: 0,
            config,
        }
    }

    /// Seed the configured starting herd
    pub fn populate_default(&mut self) {
        for _ in 0..self.config.farm.initial_pigs {
            self.add_pig(None);
        }
        for _ in 0..self.config.farm.initial_dogs {
            self.add_dog(None);
        }
    }

    /// Spawn a pig at `point`, or at a random spot near the center
    pub fn add_pig(&mut self, point: Option<Vec2>) -> AgentId {
        self.spawn(Species::Pig, point)
    }

    pub fn add_dog(&mut self, point: Option<Vec2>) -> AgentId {
        self.spawn(Species::Dog, point)
    }

    fn spawn(&mut self, species: Species, point: Option<Vec2>) -> AgentId {
        let point = self.pick_point(point, self.config.farm.spawn_spread);
        let id = AgentId(self.next_agent);
        self.next_agent += 1;

        let mut agent = Agent::spawn(id, species, point, &self.config, &self.terrain, &mut self.rng);
        agent.parts = self.hits.register(id, species);

        let notice = match species {
            Species::Pig => {
                self.pigs.push(agent);
                Notice::NewPig
            }
            Species::Dog => {
                self.dogs.push(agent);
                Notice::NewDog
            }
        };

        log::info!(
            "Spawned {} {} at ({:.1}, {:.1}). Herd: {} pigs, {} dogs",
            species,
            id,
            point.x,
            point.y,
            self.pigs.len(),
            self.dogs.len()
        );

        self.announce(notice);
        self.push_stats();
        id
    }

    /// Put food on the ground at `point`, or at a random spot
    pub fn drop_food(&mut self, point: Option<Vec2>) -> FoodId {
        let point = self.pick_point(point, self.config.farm.food_spread);
        let id = self.food.drop(point, &self.terrain, self.config.farm.food_lift);

        log::info!(
            "Dropped {} at ({:.1}, {:.1}). Food on farm: {}",
            id,
            point.x,
            point.y,
            self.food.len()
        );

        self.announce(Notice::FoodDropped);
        self.push_stats();
        id
    }

    fn pick_point(&mut self, point: Option<Vec2>, spread: f32) -> Vec2 {
        let point = point.unwrap_or_else(|| {
            let x = self.rng.gen_centered(spread);
            let z = self.rng.gen_centered(spread);
            Vec2::new(x, z)
        });
        self.bounds.clamp(point)
    }

    /// Run one fixed simulation tick. `wall_time` (seconds) drives leg and tail cycles only.
    pub fn step(&mut self, wall_time: f64) -> ClockTick {
        let tick = self.clock.advance();
        let mut meals: Vec<(AgentId, FoodItem)> = Vec::new();

        let mut env = TickEnv {
            dt: tick.dt,
            wall_time,
            terrain: &self.terrain,
            bounds: self.bounds,
            config: &self.config,
            food: &mut self.food,
            rng: &mut self.rng,
        };

        for pig in self.pigs.iter_mut() {
            if let Some(item) = pig.update(&mut env, &[]) {
                meals.push((pig.id, item));
            }
        }
        for dog in self.dogs.iter_mut() {
            dog.update(&mut env, &self.pigs);
        }

        for (agent, item) in &meals {
            self.events.push(FarmEvent::Ate {
                agent: *agent,
                food: item.id,
            });
            self.announce(Notice::Yummy);
        }
        if !meals.is_empty() || tick.refresh_stats {
            self.push_stats();
        }

        tick
    }

    /// Advance flourishes and the banner by a wall-clock delta in seconds
    pub fn advance_presentation(&mut self, dt: f32) {
        self.presentation.advance(dt);
    }

    /// Pet the animal with the given id
    pub fn pet_agent(&mut self, id: AgentId) -> Result<PetReport, FarmError> {
        let Some(agent) = self
            .pigs
            .iter_mut()
            .chain(self.dogs.iter_mut())
            .find(|agent| agent.id == id)
        else {
            log::warn!("Pet request for unknown {}", id);
            return Err(FarmError::AgentNotFound { id });
        };

        let response = agent.pet(&self.config);
        let report = PetReport {
            agent: id,
            species: agent.species(),
            notice: response.notice,
            happiness: agent.body.happiness,
        };
        log::debug!(
            "Petted {} {}, happiness {:.0}",
            report.species,
            id,
            report.happiness
        );

        self.presentation.schedule(id, response.flourish);
        self.events.push(FarmEvent::Petted { agent: id });
        self.announce(response.notice);
        self.push_stats();
        Ok(report)
    }

    /// Pet the owner of a hit visual part. Parts owned by nobody are ignored.
    pub fn pet_part(&mut self, part: PartId) -> Option<PetReport> {
        let owner = self.hits.owner(part)?;
        self.pet_agent(owner).ok()
    }

    /// Pet the owner of the first owned part in hit order, nearest first
    pub fn pet_first_hit(&mut self, hits: &[PartId]) -> Option<PetReport> {
        let owner = self.hits.first_owner(hits)?;
        self.pet_agent(owner).ok()
    }

    /// Show a notice on the banner and queue it for the host
    pub fn announce(&mut self, notice: Notice) {
        self.presentation
            .show(notice, self.config.presentation.message_duration);
        self.events.push(FarmEvent::Notice(notice));
    }

    fn push_stats(&mut self) {
        let stats = self.stats();
        self.events.push(FarmEvent::Stats(stats));
    }

    pub fn stats(&self) -> FarmStats {
        FarmStats::collect(&self.pigs, &self.dogs, self.food.len())
    }

    /// Renderer placements for every animal, pigs first
    pub fn transforms(&self) -> Vec<AgentTransform> {
        self.pigs
            .iter()
            .chain(&self.dogs)
            .map(|agent| agent.transform(self.presentation.pose(agent.id)))
            .collect()
    }

    /// Take every event queued since the last drain
    pub fn drain_events(&mut self) -> Vec<FarmEvent> {
        std::mem::take(&mut self.events)
    }

    /// Banner currently showing
    pub fn message(&self) -> Option<Notice> {
        self.presentation.message()
    }

    /// Ground mesh samples for the renderer
    pub fn terrain_grid(&self) -> TerrainGrid {
        TerrainGrid::sample(
            &self.terrain,
            self.config.farm.size,
            self.config.terrain.grid_segments,
        )
    }

    pub fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.pigs.iter().chain(&self.dogs).find(|agent| agent.id == id)
    }

    pub fn agent_mut(&mut self, id: AgentId) -> Option<&mut Agent> {
        self.pigs
            .iter_mut()
            .chain(self.dogs.iter_mut())
            .find(|agent| agent.id == id)
    }

    pub fn pigs(&self) -> &[Agent] {
        &self.pigs
    }

    pub fn dogs(&self) -> &[Agent] {
        &self.dogs
    }

    pub fn food(&self) -> &FoodRegistry {
        &self.food
    }

    pub fn terrain(&self) -> &Terrain {
        &self.terrain
    }

    pub fn config(&self) -> &FarmConfig {
        &self.config
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn scenery(&self) -> &SceneryLayout {
        &self.scenery
    }

    pub fn hit_index(&self) -> &HitIndex {
        &self.hits
    }

    pub fn presentation(&self) -> &Presentation {
        &self.presentation
    }
}
