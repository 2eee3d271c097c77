//! Identifiers and small shared types
//!
//! Ids are handed out by counters owned by the farm rather than a global
//! atomic, so two farms built from the same seed produce the same ids.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Identifier of a spawned animal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AgentId(pub u32);

/// Identifier of a single visual part (mesh) belonging to an animal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PartId(pub u32);

/// Identifier of a food item in the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FoodId(pub u32);

impl std::fmt::Display for AgentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Agent({})", self.0)
    }
}

impl std::fmt::Display for PartId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Part({})", self.0)
    }
}

impl std::fmt::Display for FoodId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Food({})", self.0)
    }
}

/// Animal species living on the farm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    Pig,
    Dog,
}

impl std::fmt::Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pig => write!(f, "pig"),
            Self::Dog => write!(f, "dog"),
        }
    }
}

/// Project a 3D point onto the ground plane.
///
/// Planar coordinates are `(x, z)` stored in a `Vec2` as `(x, y)`.
#[inline]
pub fn planar(point: Vec3) -> Vec2 {
    Vec2::new(point.x, point.z)
}
