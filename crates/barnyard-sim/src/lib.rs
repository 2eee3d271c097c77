//! Barnyard farm simulation core
//!
//! This crate implements:
//! - A sine/cosine terrain height field shared by every placement
//! - Pig and dog agents: wandering, foraging, herding, petting
//! - A food registry consumed at most once per item
//! - A fixed-step clock driving all agents in roster order
//! - An interaction bridge from visual parts back to their animal
//! - Fire-and-forget presentation flourishes that always return to rest

pub mod agent;
pub mod clock;
pub mod config;
pub mod error;
pub mod farm;
pub mod food;
pub mod heading;
pub mod interaction;
pub mod notice;
pub mod presentation;
pub mod rng_trait;
pub mod scenery;
pub mod terrain;
pub mod types;

// Re-export main types for convenience
pub use agent::{Agent, AgentTransform, Body, DogState, PigMode, PigState, SpeciesState};
pub use clock::{ClockTick, SimulationClock};
pub use config::FarmConfig;
pub use error::FarmError;
pub use farm::{Farm, PetReport};
pub use food::{FoodItem, FoodRegistry};
pub use interaction::{HitIndex, PartKind, VisualPart};
pub use notice::{FarmEvent, FarmStats, Notice};
pub use presentation::{EaseType, Flourish, Pose, Presentation};
pub use rng_trait::FarmRng;
pub use scenery::SceneryLayout;
pub use terrain::{Terrain, TerrainGrid};
pub use types::{AgentId, FoodId, PartId, Species};
