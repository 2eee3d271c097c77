//! Application configuration with layered loading
//!
//! Configuration is loaded from multiple sources (lowest to highest priority):
//! 1. Compiled defaults
//! 2. `barnyard.ron` file (if exists)
//! 3. Environment variables prefixed with `BARNYARD_`
//!
//! Example environment variable: `BARNYARD_FARM__PIG__HUNGER_RATE=1.0`

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use barnyard_sim::FarmConfig;

use crate::camera::CameraConfig;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub farm: FarmConfig,

    #[serde(default)]
    pub camera: CameraConfig,

    #[serde(default)]
    pub headless: HeadlessConfig,
}

/// Settings for the native headless runner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadlessConfig {
    /// Ticks to simulate
    pub ticks: u64,
    /// RNG seed, random when absent
    pub seed: Option<u64>,
    /// Food drops spread evenly over the run
    pub food_drops: u32,
    /// Wall-clock seconds assumed per frame for gait and presentation
    pub frame_time: f32,
}

impl Default for HeadlessConfig {
    fn default() -> Self {
        Self {
            ticks: 3600,
            seed: None,
            food_drops: 5,
            frame_time: 1.0 / 60.0,
        }
    }
}

impl AppConfig {
    /// Load configuration with layered priority:
    /// 1. Compiled defaults (lowest priority)
    /// 2. `barnyard.ron` file (if exists)
    /// 3. Environment variables prefixed with `BARNYARD_` (highest priority)
    pub fn load() -> Result<Self> {
        Self::load_from("barnyard")
    }

    pub fn load_from(file: &str) -> Result<Self> {
        let defaults =
            Config::try_from(&AppConfig::default()).context("Failed to encode default configuration")?;

        let builder = Config::builder()
            // Layer 1: Compiled defaults
            .add_source(defaults)
            // Layer 2: Config file (optional, won't error if missing)
            .add_source(
                File::with_name(file)
                    .format(config::FileFormat::Ron)
                    .required(false),
            )
            // Layer 3: Environment variables (BARNYARD_FARM__CLOCK__STEP, etc.)
            .add_source(
                Environment::with_prefix("BARNYARD")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build().context("Failed to build configuration")?;

        let app: AppConfig = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;
        app.farm
            .validate()
            .context("Invalid farm configuration")?;

        log::info!("Configuration loaded (file: {}.ron, optional)", file);
        Ok(app)
    }
}
