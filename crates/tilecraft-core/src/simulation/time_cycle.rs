//! Day/night cycle - time-of-day counter and derived darkness

use serde::{Deserialize, Serialize};

use crate::config::TimeConfig;

/// Sky color at full daylight (#5555FF)
const DAY_SKY: [u8; 3] = [0x55, 0x55, 0xFF];
/// Sky color at full darkness (#1A1A50)
const NIGHT_SKY: [u8; 3] = [0x1A, 0x1A, 0x50];

/// Coarse position within the day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayPhase {
    Night,
    Dawn,
    Day,
    Dusk,
}

/// Time-of-day counter running over `[0, day_length)`
#[derive(Debug, Clone, PartialEq)]
pub struct TimeCycle {
    time: u32,
    config: TimeConfig,
}

impl TimeCycle {
    pub fn new(config: TimeConfig) -> Self {
        let day_length = config.day_length.max(1);
        Self {
            time: config.start_time % day_length,
            config,
        }
    }

    pub fn time(&self) -> u32 {
        self.time
    }

    pub fn day_length(&self) -> u32 {
        self.config.day_length.max(1)
    }

    /// Advance the counter, wrapping at the end of the day
    pub fn advance(&mut self, delta: u32) {
        let wrapped = (self.time as u64 + delta as u64) % self.day_length() as u64;
        self.time = wrapped as u32;
    }

    /// Advance by the configured per-tick amount
    pub fn tick(&mut self) {
        self.advance(self.config.units_per_tick);
    }

    /// Jump to a time of day (wraps)
    pub fn set_time(&mut self, time: u32) {
        self.time = time % self.day_length();
    }

    pub fn phase(&self) -> DayPhase {
        let c = &self.config;
        let t = self.time;
        if t < c.dawn_start || t >= c.dusk_end {
            DayPhase::Night
        } else if t < c.dawn_end {
            DayPhase::Dawn
        } else if t < c.dusk_start {
            DayPhase::Day
        } else {
            DayPhase::Dusk
        }
    }

    /// Night-time intensity in [0, 1]
    ///
    /// 1.0 through the night, fading linearly to 0.0 over dawn, 0.0 through
    /// the day, and back up to 1.0 over dusk.
    pub fn darkness_level(&self) -> f32 {
        let c = &self.config;
        let t = self.time as f32;
        match self.phase() {
            DayPhase::Night => 1.0,
            DayPhase::Dawn => {
                1.0 - (t - c.dawn_start as f32) / (c.dawn_end - c.dawn_start) as f32
            }
            DayPhase::Day => 0.0,
            DayPhase::Dusk => (t - c.dusk_start as f32) / (c.dusk_end - c.dusk_start) as f32,
        }
    }

    /// True between the middle of dusk and the middle of dawn
    pub fn is_night(&self) -> bool {
        let c = &self.config;
        let dawn_mid = (c.dawn_start + c.dawn_end) / 2;
        let dusk_mid = (c.dusk_start + c.dusk_end) / 2;
        self.time < dawn_mid || self.time >= dusk_mid
    }

    /// Sky color blended between day and night by darkness
    pub fn sky_color(&self) -> [u8; 3] {
        let darkness = self.darkness_level();
        std::array::from_fn(|i| {
            let day = DAY_SKY[i] as f32;
            let night = NIGHT_SKY[i] as f32;
            (day + (night - day) * darkness).round() as u8
        })
    }

    /// Middle of the full-darkness window
    pub fn night_midpoint(&self) -> u32 {
        let c = &self.config;
        let start = c.dusk_end as u64;
        let end = (c.dawn_start + self.day_length()) as u64;
        (((start + end) / 2) % self.day_length() as u64) as u32
    }

    /// Middle of the full-daylight window
    pub fn day_midpoint(&self) -> u32 {
        (self.config.dawn_end + self.config.dusk_start) / 2
    }
}

impl Default for TimeCycle {
    fn default() -> Self {
        Self::new(TimeConfig::default())
    }
}
