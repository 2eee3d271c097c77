//! Day/night palette. Cosmetic only: nothing here reaches the simulation.

use serde::{Deserialize, Serialize};

use barnyard_sim::Notice;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeOfDay {
    #[default]
    Day,
    Night,
}

/// Colours and labels the renderer applies for a time of day
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Palette {
    pub sky: u32,
    pub fog_color: u32,
    pub fog_near: f32,
    pub fog_far: f32,
    pub clock_label: &'static str,
}

impl TimeOfDay {
    pub fn palette(self) -> Palette {
        match self {
            TimeOfDay::Day => Palette {
                sky: 0x87CEEB,
                fog_color: 0x87CEEB,
                fog_near: 40.0,
                fog_far: 100.0,
                clock_label: "☀️ 12:00",
            },
            TimeOfDay::Night => Palette {
                sky: 0x1A237E,
                fog_color: 0x1A237E,
                fog_near: 30.0,
                fog_far: 80.0,
                clock_label: "🌙 21:00",
            },
        }
    }

    /// Banner announcing the switch into this time of day
    pub fn notice(self) -> Notice {
        match self {
            TimeOfDay::Day => Notice::Morning,
            TimeOfDay::Night => Notice::NightTime,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Daylight {
    time: TimeOfDay,
}

impl Daylight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip between day and night. Returns the notice to show.
    pub fn toggle(&mut self) -> Notice {
        self.time = match self.time {
            TimeOfDay::Day => TimeOfDay::Night,
            TimeOfDay::Night => TimeOfDay::Day,
        };
        log::debug!("Time of day: {:?}", self.time);
        self.time.notice()
    }

    pub fn time(&self) -> TimeOfDay {
        self.time
    }

    pub fn palette(&self) -> Palette {
        self.time.palette()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        let mut daylight = Daylight::new();
        assert_eq!(daylight.palette().clock_label, "☀️ 12:00");

        assert_eq!(daylight.toggle(), Notice::NightTime);
        assert_eq!(daylight.palette().sky, 0x1A237E);
        assert_eq!(daylight.palette().fog_far, 80.0);

        assert_eq!(daylight.toggle(), Notice::Morning);
        assert_eq!(daylight.time(), TimeOfDay::Day);
    }
}
