//! Application state and frame loop
//!
//! [`Diorama`] glues the simulation to the outside world: one simulation tick
//! per rendered frame, presentation effects on the real frame delta, pointer
//! gestures routed to the camera and taps routed to the interaction bridge.

use anyhow::{Context, Result};
use glam::Vec3;
use serde::Serialize;

use barnyard_sim::{AgentTransform, Farm, FarmConfig, FarmStats, PartId, PetReport};

use crate::camera::{CameraConfig, OrbitCamera};
use crate::daylight::{Daylight, Palette};

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, Serialize)]
pub struct FrameSnapshot {
    pub transforms: Vec<AgentTransform>,
    pub stats: FarmStats,
    pub message: Option<&'static str>,
    pub eye: Vec3,
    pub palette: Palette,
}

pub struct Diorama {
    farm: Farm,
    camera: OrbitCamera,
    daylight: Daylight,
    /// Wall-clock seconds since start, drives leg and tail cycles
    wall_time: f64,
}

impl Diorama {
    pub fn new(farm: FarmConfig, camera: CameraConfig, seed: u64) -> Result<Self> {
        let farm = Farm::new(farm, seed).context("Failed to create farm")?;
        Ok(Self {
            farm,
            camera: OrbitCamera::new(camera),
            daylight: Daylight::new(),
            wall_time: 0.0,
        })
    }

    /// Advance one rendered frame that took `dt` wall-clock seconds
    pub fn frame(&mut self, dt: f32) {
        self.wall_time += dt.max(0.0) as f64;
        self.farm.step(self.wall_time);
        self.farm.advance_presentation(dt);
    }

    /// Pointer tap resolved by the renderer to visual parts, nearest first
    pub fn tap(&mut self, hits: &[PartId]) -> Option<PetReport> {
        self.farm.pet_first_hit(hits)
    }

    pub fn toggle_daylight(&mut self) {
        let notice = self.daylight.toggle();
        self.farm.announce(notice);
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            transforms: self.farm.transforms(),
            stats: self.farm.stats(),
            message: self.farm.message().map(|notice| notice.text()),
            eye: self.camera.eye(),
            palette: self.daylight.palette(),
        }
    }

    pub fn farm(&self) -> &Farm {
        &self.farm
    }

    pub fn farm_mut(&mut self) -> &mut Farm {
        &mut self.farm
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut OrbitCamera {
        &mut self.camera
    }

    pub fn daylight(&self) -> &Daylight {
        &self.daylight
    }
}
