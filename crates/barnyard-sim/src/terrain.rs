//! Ground height field
//!
//! The farm floor is a gentle sine/cosine undulation. The same function feeds
//! the ground mesh (sampled once on a grid) and runtime placement of animals
//! and food, so everything rests exactly on the rendered surface.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::config::TerrainConfig;

/// Deterministic height function `sin(x*f) * cos(z*f) * A`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Terrain {
    pub frequency: f32,
    pub amplitude: f32,
}

impl Terrain {
    pub fn new(frequency: f32, amplitude: f32) -> Self {
        Self {
            frequency,
            amplitude,
        }
    }

    pub fn from_config(config: &TerrainConfig) -> Self {
        Self::new(config.frequency, config.amplitude)
    }

    /// Ground elevation at `(x, z)`
    #[inline]
    pub fn height(&self, x: f32, z: f32) -> f32 {
        (x * self.frequency).sin() * (z * self.frequency).cos() * self.amplitude
    }

    /// Ground elevation under a planar point
    #[inline]
    pub fn height_at(&self, point: Vec2) -> f32 {
        self.height(point.x, point.y)
    }

    /// Place a planar point on the ground, lifted by `offset`
    pub fn place(&self, point: Vec2, offset: f32) -> Vec3 {
        Vec3::new(point.x, self.height_at(point) + offset, point.y)
    }
}

impl Default for Terrain {
    fn default() -> Self {
        Self::from_config(&TerrainConfig::default())
    }
}

/// Height samples over the square farm, for the external mesh builder.
///
/// Vertices are row-major, rows running along +z from `-half_size` to
/// `+half_size`, each row running along +x.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerrainGrid {
    pub segments: u32,
    pub half_size: f32,
    pub vertices: Vec<Vec3>,
}

impl TerrainGrid {
    pub fn sample(terrain: &Terrain, half_size: f32, segments: u32) -> Self {
        let segments = segments.max(1);
        let per_side = segments + 1;
        let cell = half_size * 2.0 / segments as f32;

        let mut vertices = Vec::with_capacity((per_side * per_side) as usize);
        for row in 0..per_side {
            let z = -half_size + row as f32 * cell;
            for col in 0..per_side {
                let x = -half_size + col as f32 * cell;
                vertices.push(Vec3::new(x, terrain.height(x, z), z));
            }
        }

        log::debug!(
            "Sampled terrain grid: {} vertices over +/-{:.1}",
            vertices.len(),
            half_size
        );

        Self {
            segments,
            half_size,
            vertices,
        }
    }

    /// Vertices per side
    pub fn per_side(&self) -> u32 {
        self.segments + 1
    }

    pub fn vertex(&self, col: u32, row: u32) -> Option<Vec3> {
        let per_side = self.per_side();
        if col >= per_side || row >= per_side {
            return None;
        }
        self.vertices.get((row * per_side + col) as usize).copied()
    }

    /// Triangle list indices, two counter-clockwise triangles per cell seen from +y
    pub fn indices(&self) -> Vec<u32> {
        let per_side = self.per_side();
        let mut indices = Vec::with_capacity((self.segments * self.segments * 6) as usize);
        for row in 0..self.segments {
            for col in 0..self.segments {
                let a = row * per_side + col;
                let b = a + 1;
                let c = a + per_side;
                let d = c + 1;
                indices.extend_from_slice(&[a, c, b, b, c, d]);
            }
        }
        indices
    }
}
