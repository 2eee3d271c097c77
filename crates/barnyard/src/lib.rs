//! # Barnyard - a cozy 3D farm diorama
//!
//! Pigs wander and forage, dogs herd, and every animal can be petted. The
//! simulation lives in `barnyard-sim`; this crate wires it to a camera, a
//! day/night palette and the browser or a headless native runner.

pub mod app;
pub mod camera;
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
pub mod daylight;

// Re-export the simulation core for convenience
pub use barnyard_sim as sim;

pub use app::{Diorama, FrameSnapshot};

// WASM entry point
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    // Set up panic hook for better error messages in the browser console
    console_error_panic_hook::set_once();

    // Initialize logging for WASM; a second start keeps the first logger
    console_log::init_with_level(log::Level::Info).ok();

    log::info!("Barnyard WASM module initialized");
}

#[cfg(target_arch = "wasm32")]
fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// JS-facing handle around a [`Diorama`]
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub struct FarmHandle {
    diorama: Diorama,
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl FarmHandle {
    /// Create a farm with the default herd. A missing seed picks a random one.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: Option<f64>) -> Result<FarmHandle, JsValue> {
        let seed = seed.map(|s| s as u64).unwrap_or_else(rand::random);
        let mut diorama = Diorama::new(
            sim::FarmConfig::default(),
            camera::CameraConfig::default(),
            seed,
        )
        .map_err(|e| JsValue::from_str(&format!("Failed to create farm: {:#}", e)))?;
        diorama.farm_mut().populate_default();
        log::info!("Starting Barnyard (WASM), seed {}", seed);
        Ok(Self { diorama })
    }

    #[wasm_bindgen(js_name = addPig)]
    pub fn add_pig(&mut self, x: Option<f32>, z: Option<f32>) -> u32 {
        self.diorama.farm_mut().add_pig(point(x, z)).0
    }

    #[wasm_bindgen(js_name = addDog)]
    pub fn add_dog(&mut self, x: Option<f32>, z: Option<f32>) -> u32 {
        self.diorama.farm_mut().add_dog(point(x, z)).0
    }

    #[wasm_bindgen(js_name = dropFood)]
    pub fn drop_food(&mut self, x: Option<f32>, z: Option<f32>) -> u32 {
        self.diorama.farm_mut().drop_food(point(x, z)).0
    }

    /// Advance one frame; `dt` is the wall-clock frame time in seconds
    pub fn frame(&mut self, dt: f32) {
        self.diorama.frame(dt);
    }

    /// Hit-tested part ids, nearest first. Returns whether an animal was petted.
    pub fn tap(&mut self, hits: Vec<u32>) -> bool {
        let hits: Vec<sim::PartId> = hits.into_iter().map(sim::PartId).collect();
        self.diorama.tap(&hits).is_some()
    }

    pub fn drag(&mut self, dx: f32, dy: f32) {
        self.diorama.camera_mut().drag(dx, dy);
    }

    pub fn wheel(&mut self, delta: f32) {
        self.diorama.camera_mut().wheel(delta);
    }

    pub fn pinch(&mut self, separation: f32) {
        self.diorama.camera_mut().pinch(separation);
    }

    #[wasm_bindgen(js_name = toggleDaylight)]
    pub fn toggle_daylight(&mut self) {
        self.diorama.toggle_daylight();
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        to_js(&self.diorama.snapshot())
    }

    /// Events queued since the last call
    #[wasm_bindgen(js_name = drainEvents)]
    pub fn drain_events(&mut self) -> Result<JsValue, JsValue> {
        to_js(&self.diorama.farm_mut().drain_events())
    }

    /// Part ids per animal, for tagging meshes
    pub fn parts(&self, agent: u32) -> Result<JsValue, JsValue> {
        let parts = self
            .diorama
            .farm()
            .agent(sim::AgentId(agent))
            .map(|agent| agent.parts.clone())
            .unwrap_or_default();
        to_js(&parts)
    }

    pub fn food(&self) -> Result<JsValue, JsValue> {
        let items: Vec<sim::FoodItem> = self.diorama.farm().food().iter().copied().collect();
        to_js(&items)
    }

    pub fn scenery(&self) -> Result<JsValue, JsValue> {
        to_js(self.diorama.farm().scenery())
    }

    #[wasm_bindgen(js_name = terrainGrid)]
    pub fn terrain_grid(&self) -> Result<JsValue, JsValue> {
        to_js(&self.diorama.farm().terrain_grid())
    }
}

#[cfg(target_arch = "wasm32")]
fn point(x: Option<f32>, z: Option<f32>) -> Option<glam::Vec2> {
    Some(glam::Vec2::new(x?, z?))
}
