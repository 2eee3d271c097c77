//! Notices and events pushed to the UI surface
//!
//! The core never reads UI state back. Everything the outside world needs to
//! show is queued as a [`FarmEvent`] and drained by the host once per frame.

use serde::{Deserialize, Serialize};

use crate::agent::{Agent, MAX_LEVEL};
use crate::types::{AgentId, FoodId};

/// Short banner texts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Notice {
    NewPig,
    NewDog,
    FoodDropped,
    Yummy,
    Oink,
    Woof,
    Morning,
    NightTime,
}

impl Notice {
    pub fn text(&self) -> &'static str {
        match self {
            Notice::NewPig => "🐷 New piggy!",
            Notice::NewDog => "🐕 New puppy!",
            Notice::FoodDropped => "🌾 Food dropped!",
            Notice::Yummy => "🐷 Yummy!",
            Notice::Oink => "🐷 Oink! ❤️",
            Notice::Woof => "🐕 Woof! ❤️",
            Notice::Morning => "☀️ Morning!",
            Notice::NightTime => "🌙 Night time!",
        }
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}

/// Counters shown on the stats panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FarmStats {
    pub pigs: usize,
    pub dogs: usize,
    pub food: usize,
    /// Mean happiness of all animals in whole percent, 100 on an empty farm
    pub average_happiness: u32,
}

impl FarmStats {
    pub fn collect(pigs: &[Agent], dogs: &[Agent], food: usize) -> Self {
        let count = pigs.len() + dogs.len();
        let average_happiness = if count == 0 {
            MAX_LEVEL as u32
        } else {
            let total: f32 = pigs
                .iter()
                .chain(dogs)
                .map(|agent| agent.body.happiness)
                .sum();
            (total / count as f32).round() as u32
        };

        Self {
            pigs: pigs.len(),
            dogs: dogs.len(),
            food,
            average_happiness,
        }
    }
}

/// Something the host should react to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FarmEvent {
    Notice(Notice),
    Ate { agent: AgentId, food: FoodId },
    Petted { agent: AgentId },
    Stats(FarmStats),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FarmConfig;
    use crate::terrain::Terrain;
    use crate::types::Species;
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;

    #[test]
    fn test_notice_texts() {
        assert_eq!(Notice::Yummy.text(), "🐷 Yummy!");
        assert_eq!(Notice::Woof.to_string(), "🐕 Woof! ❤️");
        assert_eq!(Notice::NightTime.text(), "🌙 Night time!");
    }

    #[test]
    fn test_empty_farm_is_fully_happy() {
        let stats = FarmStats::collect(&[], &[], 3);
        assert_eq!(stats.average_happiness, 100);
        assert_eq!(stats.food, 3);
        assert_eq!(stats.pigs + stats.dogs, 0);
    }

    #[test]
    fn test_average_is_rounded() {
        let config = FarmConfig::default();
        let terrain = Terrain::default();
        let mut rng = Xoshiro256StarStar::seed_from_u64(1);
        let mut pig = Agent::spawn(AgentId(0), Species::Pig, Vec2::ZERO, &config, &terrain, &mut rng);
        let mut dog = Agent::spawn(AgentId(1), Species::Dog, Vec2::ZERO, &config, &terrain, &mut rng);
        pig.body.happiness = 50.0;
        dog.body.happiness = 51.2;

        let stats = FarmStats::collect(&[pig], &[dog], 0);
        assert_eq!(stats.pigs, 1);
        assert_eq!(stats.dogs, 1);
        assert_eq!(stats.average_happiness, 51);
    }
}
