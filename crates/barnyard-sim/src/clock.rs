//! Fixed-step simulation clock
//!
//! The logical step never depends on frame timing, so the same command
//! sequence always produces the same trajectories. A slower timer rides on
//! top of the tick count to pace statistics refreshes.

use serde::{Deserialize, Serialize};

use crate::config::ClockConfig;

/// Result of advancing the clock by one tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClockTick {
    /// Zero-based tick number
    pub index: u64,
    pub dt: f32,
    /// Simulated seconds after this tick
    pub elapsed: f64,
    /// The statistics timer fired during this tick
    pub refresh_stats: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationClock {
    dt: f32,
    stats_interval: f32,
    ticks: u64,
    elapsed: f64,
    since_refresh: f32,
}

impl SimulationClock {
    pub fn new(dt: f32, stats_interval: f32) -> Self {
        Self {
            dt,
            stats_interval,
            ticks: 0,
            elapsed: 0.0,
            since_refresh: 0.0,
        }
    }

    pub fn from_config(config: &ClockConfig) -> Self {
        Self::new(config.step, config.stats_interval)
    }

    pub fn advance(&mut self) -> ClockTick {
        let index = self.ticks;
        self.ticks += 1;
        self.elapsed += self.dt as f64;
        self.since_refresh += self.dt;

        let refresh_stats = self.since_refresh >= self.stats_interval;
        if refresh_stats {
            self.since_refresh -= self.stats_interval;
        }

        ClockTick {
            index,
            dt: self.dt,
            elapsed: self.elapsed,
            refresh_stats,
        }
    }

    pub fn dt(&self) -> f32 {
        self.dt
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Simulated seconds since start
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::from_config(&ClockConfig::default())
    }
}
