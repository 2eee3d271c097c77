//! Orbit camera rig around the farm center.
//!
//! Pointer input only ever changes the three camera scalars. Each gesture is
//! a plain last-write-wins update, so overlapping inputs are harmless.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Orbit limits and gesture sensitivities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraConfig {
    pub initial_angle: f32,
    pub initial_height: f32,
    pub initial_distance: f32,
    pub min_height: f32,
    pub max_height: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    /// Radians per pixel of horizontal drag
    pub drag_angle_speed: f32,
    /// Height units per pixel of vertical drag
    pub drag_height_speed: f32,
    /// Distance units per wheel delta unit
    pub wheel_speed: f32,
    /// Distance per pixel of finger separation
    pub pinch_factor: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            initial_angle: 0.0,
            initial_height: 30.0,
            initial_distance: 40.0,
            min_height: 10.0,
            max_height: 60.0,
            min_distance: 20.0,
            max_distance: 80.0,
            drag_angle_speed: 0.005,
            drag_height_speed: 0.1,
            wheel_speed: 0.05,
            pinch_factor: 0.15,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    angle: f32,
    height: f32,
    distance: f32,
    config: CameraConfig,
}

impl OrbitCamera {
    pub fn new(config: CameraConfig) -> Self {
        Self {
            angle: config.initial_angle,
            height: config.initial_height.clamp(config.min_height, config.max_height),
            distance: config
                .initial_distance
                .clamp(config.min_distance, config.max_distance),
            config,
        }
    }

    /// Pointer drag by `(dx, dy)` pixels
    pub fn drag(&mut self, dx: f32, dy: f32) {
        self.angle -= dx * self.config.drag_angle_speed;
        self.height = (self.height - dy * self.config.drag_height_speed)
            .clamp(self.config.min_height, self.config.max_height);
    }

    /// Mouse wheel, positive delta zooms out
    pub fn wheel(&mut self, delta: f32) {
        self.set_distance(self.distance + delta * self.config.wheel_speed);
    }

    /// Two-finger gesture with the current separation in pixels
    pub fn pinch(&mut self, separation: f32) {
        self.set_distance(separation * self.config.pinch_factor);
    }

    fn set_distance(&mut self, distance: f32) {
        self.distance = distance.clamp(self.config.min_distance, self.config.max_distance);
    }

    /// Eye position, always looking at the origin
    pub fn eye(&self) -> Vec3 {
        Vec3::new(
            self.angle.sin() * self.distance,
            self.height,
            self.angle.cos() * self.distance,
        )
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(CameraConfig::default())
    }
}
