//! Static scenery placement
//!
//! Generated once at setup. Only positions and colours are produced here; the
//! external renderer owns the meshes. Every placement sits on the terrain.

use std::f32::consts::TAU;

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::rng_trait::FarmRng;
use crate::terrain::Terrain;

pub const BARN_POSITION: Vec2 = Vec2::new(-20.0, -15.0);
pub const POND_POSITION: Vec2 = Vec2::new(15.0, 10.0);
pub const POND_RADIUS: f32 = 6.0;
pub const TREE_COUNT: usize = 8;
pub const FLOWER_COUNT: usize = 20;
pub const FENCE_POSTS: usize = 20;
/// Rails sit slightly inside the post ring
pub const RAIL_INSET: f32 = 0.95;
pub const PETAL_COLORS: [u32; 5] = [0xFFEB3B, 0xFF5722, 0xE91E63, 0x9C27B0, 0xFFFFFF];

/// Square spreads relative to the farm half-size
const TREE_SPREAD: f32 = 1.5;
const FLOWER_SPREAD: f32 = 1.3;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Flower {
    pub position: Vec3,
    pub petal_color: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FencePost {
    pub position: Vec3,
    pub rail: Vec3,
    /// Rotation of the rail about +y
    pub rail_yaw: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneryLayout {
    pub barn: Vec3,
    pub pond: Vec3,
    pub pond_radius: f32,
    pub trees: Vec<Vec3>,
    pub flowers: Vec<Flower>,
    pub fence: Vec<FencePost>,
}

impl SceneryLayout {
    /// Lay out the farm for a square of half-size `size`
    pub fn generate<R: FarmRng + ?Sized>(terrain: &Terrain, size: f32, rng: &mut R) -> Self {
        let trees = (0..TREE_COUNT)
            .map(|_| {
                let point = scatter(rng, size * TREE_SPREAD);
                terrain.place(point, 0.0)
            })
            .collect();

        let flowers = (0..FLOWER_COUNT)
            .map(|_| {
                let point = scatter(rng, size * FLOWER_SPREAD);
                Flower {
                    position: terrain.place(point, 0.0),
                    petal_color: PETAL_COLORS[rng.gen_index(PETAL_COLORS.len())],
                }
            })
            .collect();

        let fence = (0..FENCE_POSTS)
            .map(|i| {
                let angle = i as f32 / FENCE_POSTS as f32 * TAU;
                let point = Vec2::new(angle.cos(), angle.sin()) * size;
                FencePost {
                    position: terrain.place(point, 0.0),
                    rail: terrain.place(point * RAIL_INSET, 0.0),
                    rail_yaw: -angle,
                }
            })
            .collect();

        let layout = Self {
            barn: terrain.place(BARN_POSITION, 0.0),
            pond: terrain.place(POND_POSITION, 0.0),
            pond_radius: POND_RADIUS,
            trees,
            flowers,
            fence,
        };
        log::debug!(
            "Scenery: {} trees, {} flowers, {} fence posts",
            layout.trees.len(),
            layout.flowers.len(),
            layout.fence.len()
        );
        layout
    }
}

fn scatter<R: FarmRng + ?Sized>(rng: &mut R, spread: f32) -> Vec2 {
    let x = rng.gen_centered(spread);
    let z = rng.gen_centered(spread);
    Vec2::new(x, z)
}
