//! Simulation tunables - serializable parameters for the farm
//!
//! `Default` holds the compiled constants. Presets can be stored as RON and
//! loaded with [`FarmConfig::from_ron`], which validates before returning.

use serde::{Deserialize, Serialize};

use crate::error::FarmError;
use crate::presentation::EaseType;

/// Complete farm simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FarmConfig {
    #[serde(default)]
    pub terrain: TerrainConfig,

    #[serde(default)]
    pub farm: FieldConfig,

    #[serde(default)]
    pub clock: ClockConfig,

    #[serde(default)]
    pub pig: PigConfig,

    #[serde(default)]
    pub dog: DogConfig,

    #[serde(default)]
    pub presentation: PresentationConfig,
}

/// Ground height field parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerrainConfig {
    /// Spatial frequency of the sine/cosine undulation
    pub frequency: f32,
    /// Peak height of the undulation
    pub amplitude: f32,
    /// Grid cells per side when sampling the ground mesh
    pub grid_segments: u32,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            frequency: 0.1,
            amplitude: 1.5,
            grid_segments: 50,
        }
    }
}

/// Farm extents and spawn spreads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Half the side length of the square farm (the fence radius)
    pub size: f32,
    /// Fraction of `size` animals may roam on either axis
    pub bound_ratio: f32,
    /// Side of the centered square random spawns land in
    pub spawn_spread: f32,
    /// Side of the centered square random food drops land in
    pub food_spread: f32,
    /// Height of a food item's center above the ground
    pub food_lift: f32,
    /// Pigs seeded by `Farm::populate_default`
    pub initial_pigs: usize,
    /// Dogs seeded by `Farm::populate_default`
    pub initial_dogs: usize,
}

impl FieldConfig {
    /// Largest absolute x or z an animal may occupy
    pub fn bound(&self) -> f32 {
        self.size * self.bound_ratio
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            size: 60.0,
            bound_ratio: 0.9,
            spawn_spread: 30.0,
            food_spread: 40.0,
            food_lift: 0.3,
            initial_pigs: 5,
            initial_dogs: 2,
        }
    }
}

/// Fixed-step clock settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClockConfig {
    /// Logical step in seconds, independent of frame timing
    pub step: f32,
    /// Simulated seconds between statistics refreshes
    pub stats_interval: f32,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            step: 0.016,
            stats_interval: 0.5,
        }
    }
}

/// Leg and tail oscillation constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaitConfig {
    /// Phase advance per wall-clock second
    pub cadence: f32,
    /// Vertical leg swing
    pub leg_amplitude: f32,
    /// Tail wag frequency relative to the leg phase
    pub tail_rate: f32,
    /// Tail wag angle in radians
    pub tail_amplitude: f32,
}

/// Pig tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PigConfig {
    /// Per-tick travel distance range (randomized once per pig)
    pub speed_min: f32,
    pub speed_max: f32,
    /// Body center height above the ground
    pub rest_height: f32,
    /// Hunger gained per second
    pub hunger_rate: f32,
    /// Happiness lost per second while hunger is above the threshold
    pub happiness_decay: f32,
    pub happiness_decay_threshold: f32,
    /// Hunger above which the pig turns hungry
    pub hungry_threshold: f32,
    /// Food closer than this is noticed even when not hungry
    pub awareness_radius: f32,
    /// Per-tick chance of foraging without being hungry or near food
    pub forage_chance: f32,
    /// Food closer than this gets eaten
    pub eat_distance: f32,
    /// Speed multiplier while heading for food
    pub seek_speed_factor: f32,
    /// Turn budget in radians per second
    pub wander_turn_rate: f32,
    pub seek_turn_rate: f32,
    /// Full width of the random wander angle perturbation
    pub wander_jitter: f32,
    /// Seconds between wander perturbations
    pub wander_interval_min: f32,
    pub wander_interval_max: f32,
    pub meal_happiness: f32,
    pub pet_happiness: f32,
    pub gait: GaitConfig,
}

impl Default for PigConfig {
    fn default() -> Self {
        Self {
            speed_min: 0.03,
            speed_max: 0.05,
            rest_height: 0.6,
            hunger_rate: 0.5,
            happiness_decay: 1.0,
            happiness_decay_threshold: 25.0,
            hungry_threshold: 50.0,
            awareness_radius: 8.0,
            forage_chance: 0.01,
            eat_distance: 1.0,
            seek_speed_factor: 1.5,
            wander_turn_rate: 5.0,
            seek_turn_rate: 7.0,
            wander_jitter: 1.5,
            wander_interval_min: 2.0,
            wander_interval_max: 5.0,
            meal_happiness: 40.0,
            pet_happiness: 10.0,
            gait: GaitConfig {
                cadence: 10.0,
                leg_amplitude: 0.1,
                tail_rate: 2.0,
                tail_amplitude: 0.3,
            },
        }
    }
}

/// Dog tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DogConfig {
    pub speed_min: f32,
    pub speed_max: f32,
    pub rest_height: f32,
    /// Happiness lost per second, unconditionally
    pub happiness_decay: f32,
    /// Per-tick chance of switching between wandering and herding
    pub herding_toggle_chance: f32,
    /// Speed multiplier while herding
    pub herd_speed_factor: f32,
    pub turn_rate: f32,
    pub wander_jitter: f32,
    /// Zero interval means the wander angle drifts every tick
    pub wander_interval_min: f32,
    pub wander_interval_max: f32,
    pub pet_happiness: f32,
    pub gait: GaitConfig,
}

impl Default for DogConfig {
    fn default() -> Self {
        Self {
            speed_min: 0.04,
            speed_max: 0.06,
            rest_height: 0.5,
            happiness_decay: 0.2,
            herding_toggle_chance: 0.01,
            herd_speed_factor: 0.5,
            turn_rate: 8.0,
            wander_jitter: 0.2,
            wander_interval_min: 0.0,
            wander_interval_max: 0.0,
            pet_happiness: 10.0,
            gait: GaitConfig {
                cadence: 12.0,
                leg_amplitude: 0.15,
                tail_rate: 3.0,
                tail_amplitude: 0.5,
            },
        }
    }
}

/// Wall-clock durations of transient effects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresentationConfig {
    /// Seconds a notice stays on the banner
    pub message_duration: f32,
    pub jump_height: f32,
    pub jump_duration: f32,
    /// Scale multiplier applied while barking
    pub bark_scale: f32,
    pub bark_duration: f32,
    /// Easing applied to flourish progress
    #[serde(default)]
    pub easing: EaseType,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            message_duration: 1.5,
            jump_height: 0.5,
            jump_duration: 0.5,
            bark_scale: 1.1,
            bark_duration: 0.2,
            easing: EaseType::Linear,
        }
    }
}

impl FarmConfig {
    /// Parse a RON preset and validate it
    pub fn from_ron(source: &str) -> Result<Self, FarmError> {
        let config: FarmConfig = ron::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty RON
    pub fn to_ron(&self) -> Result<String, FarmError> {
        Ok(ron::ser::to_string_pretty(
            self,
            ron::ser::PrettyConfig::default(),
        )?)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), FarmError> {
        positive("terrain.frequency", self.terrain.frequency)?;
        non_negative("terrain.amplitude", self.terrain.amplitude)?;
        if self.terrain.grid_segments == 0 {
            return Err(invalid("terrain.grid_segments", "must be at least 1"));
        }

        positive("farm.size", self.farm.size)?;
        if !(self.farm.bound_ratio > 0.0 && self.farm.bound_ratio <= 1.0) {
            return Err(invalid("farm.bound_ratio", "must be in (0, 1]"));
        }
        non_negative("farm.spawn_spread", self.farm.spawn_spread)?;
        non_negative("farm.food_spread", self.farm.food_spread)?;

        positive("clock.step", self.clock.step)?;
        positive("clock.stats_interval", self.clock.stats_interval)?;

        let pig = &self.pig;
        speed_range("pig.speed", pig.speed_min, pig.speed_max)?;
        interval("pig.wander_interval", pig.wander_interval_min, pig.wander_interval_max)?;
        probability("pig.forage_chance", pig.forage_chance)?;
        non_negative("pig.hunger_rate", pig.hunger_rate)?;
        non_negative("pig.happiness_decay", pig.happiness_decay)?;
        positive("pig.eat_distance", pig.eat_distance)?;
        positive("pig.wander_turn_rate", pig.wander_turn_rate)?;
        positive("pig.seek_turn_rate", pig.seek_turn_rate)?;
        non_negative("pig.awareness_radius", pig.awareness_radius)?;
        non_negative("pig.seek_speed_factor", pig.seek_speed_factor)?;
        non_negative("pig.meal_happiness", pig.meal_happiness)?;
        non_negative("pig.pet_happiness", pig.pet_happiness)?;

        let dog = &self.dog;
        speed_range("dog.speed", dog.speed_min, dog.speed_max)?;
        interval("dog.wander_interval", dog.wander_interval_min, dog.wander_interval_max)?;
        probability("dog.herding_toggle_chance", dog.herding_toggle_chance)?;
        non_negative("dog.happiness_decay", dog.happiness_decay)?;
        positive("dog.turn_rate", dog.turn_rate)?;
        non_negative("dog.herd_speed_factor", dog.herd_speed_factor)?;
        non_negative("dog.pet_happiness", dog.pet_happiness)?;

        let presentation = &self.presentation;
        positive("presentation.message_duration", presentation.message_duration)?;
        positive("presentation.jump_duration", presentation.jump_duration)?;
        positive("presentation.bark_duration", presentation.bark_duration)?;
        positive("presentation.bark_scale", presentation.bark_scale)?;
        non_negative("presentation.jump_height", presentation.jump_height)?;

        Ok(())
    }
}

fn invalid(field: &'static str, reason: &str) -> FarmError {
    FarmError::InvalidConfig {
        field,
        reason: reason.to_string(),
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), FarmError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(invalid(field, &format!("must be positive, got {value}")))
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), FarmError> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(invalid(field, &format!("must not be negative, got {value}")))
    }
}

fn probability(field: &'static str, value: f32) -> Result<(), FarmError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(invalid(field, &format!("must be within [0, 1], got {value}")))
    }
}

fn speed_range(field: &'static str, min: f32, max: f32) -> Result<(), FarmError> {
    positive(field, min)?;
    if max < min {
        return Err(invalid(field, &format!("max {max} is below min {min}")));
    }
    Ok(())
}

fn interval(field: &'static str, min: f32, max: f32) -> Result<(), FarmError> {
    non_negative(field, min)?;
    if max < min {
        return Err(invalid(field, &format!("max {max} is below min {min}")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FarmConfig::default();
        assert_eq!(config.farm.size, 60.0);
        assert_eq!(config.terrain.frequency, 0.1);
        assert_eq!(config.clock.step, 0.016);
        assert_eq!(config.pig.hungry_threshold, 50.0);
        assert_eq!(config.presentation.message_duration, 1.5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bound_is_ninety_percent_of_size() {
        let config = FarmConfig::default();
        assert!((config.farm.bound() - 54.0).abs() < 1e-4);
    }

    #[test]
    fn test_ron_round_trip_keeps_values() {
        let mut config = FarmConfig::default();
        config.pig.awareness_radius = 3.5;
        config.dog.herding_toggle_chance = 0.0;

        let text = config.to_ron().expect("serialize");
        let parsed = FarmConfig::from_ron(&text).expect("parse");
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_ron_uses_defaults() {
        let parsed = FarmConfig::from_ron("(farm: (size: 40.0, bound_ratio: 0.5, spawn_spread: 10.0, food_spread: 10.0, food_lift: 0.3, initial_pigs: 1, initial_dogs: 0))")
            .expect("parse");
        assert_eq!(parsed.farm.size, 40.0);
        assert_eq!(parsed.pig, PigConfig::default());
    }

    #[test]
    fn test_rejects_zero_step() {
        let mut config = FarmConfig::default();
        config.clock.step = 0.0;
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            FarmError::InvalidConfig {
                field: "clock.step",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_inverted_speed_range() {
        let mut config = FarmConfig::default();
        config.dog.speed_max = 0.01;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_probability() {
        let mut config = FarmConfig::default();
        config.pig.forage_chance = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_ron_is_parse_error() {
        let err = FarmConfig::from_ron("(terrain: oops)").unwrap_err();
        assert!(matches!(err, FarmError::ConfigParse(_)));
    }

    #[test]
    fn test_rejects_negative_factors_and_rewards() {
        let cases: [(&str, fn(&mut FarmConfig)); 8] = [
            ("pig.awareness_radius", |c| c.pig.awareness_radius = -1.0),
            ("pig.seek_speed_factor", |c| c.pig.seek_speed_factor = -1.5),
            ("pig.meal_happiness", |c| c.pig.meal_happiness = -40.0),
            ("pig.pet_happiness", |c| c.pig.pet_happiness = -10.0),
            ("dog.herd_speed_factor", |c| c.dog.herd_speed_factor = -0.5),
            ("dog.pet_happiness", |c| c.dog.pet_happiness = -10.0),
            ("presentation.jump_height", |c| c.presentation.jump_height = -0.5),
            ("pig.awareness_radius", |c| c.pig.awareness_radius = f32::NAN),
        ];
        for (field, corrupt) in cases {
            let mut config = FarmConfig::default();
            corrupt(&mut config);
            match config.validate() {
                Err(FarmError::InvalidConfig { field: got, .. }) => assert_eq!(got, field),
                other => panic!("expected {field} to be rejected, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_negative_preset_is_rejected_on_load() {
        let err = FarmConfig::from_ron("(dog: (speed_min: 0.04, speed_max: 0.06, rest_height: 0.5, happiness_decay: 0.2, herding_toggle_chance: 0.01, herd_speed_factor: -0.5, turn_rate: 8.0, wander_jitter: 0.2, wander_interval_min: 0.0, wander_interval_max: 0.0, pet_happiness: 10.0, gait: (cadence: 12.0, leg_amplitude: 0.15, tail_rate: 3.0, tail_amplitude: 0.5)))")
            .unwrap_err();
        assert!(matches!(
            err,
            FarmError::InvalidConfig {
                field: "dog.herd_speed_factor",
                ..
            }
        ));
    }
}
