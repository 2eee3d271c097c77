//! RNG trait abstraction for the farm simulation
//!
//! Lets the simulation run on a seeded `Xoshiro256StarStar` (deterministic
//! tests and replays) or on any other `rand::Rng`.

/// Random number generator trait for farm behavior
pub trait FarmRng {
    /// Generate random f32 in [0.0, 1.0)
    fn gen_f32(&mut self) -> f32;

    /// Check if random value is less than probability threshold
    fn check_probability(&mut self, probability: f32) -> bool {
        self.gen_f32() < probability
    }

    /// Uniform value in `[-spread / 2, spread / 2)`
    fn gen_centered(&mut self, spread: f32) -> f32 {
        (self.gen_f32() - 0.5) * spread
    }

    /// Uniform value in `[min, max)`, or `min` when the range is empty
    fn gen_between(&mut self, min: f32, max: f32) -> f32 {
        if max <= min {
            min
        } else {
            min + self.gen_f32() * (max - min)
        }
    }

    /// Uniform index below `len`; `len` must be non-zero
    fn gen_index(&mut self, len: usize) -> usize {
        let index = (self.gen_f32() * len as f32) as usize;
        index.min(len.saturating_sub(1))
    }
}

impl<T: ?Sized + rand::Rng> FarmRng for T {
    fn gen_f32(&mut self) -> f32 {
        rand::Rng::r#gen(self)
    }
}
