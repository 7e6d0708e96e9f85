//! Simulation constants - fixed at startup, serializable to RON

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, SimResult};

/// Physics, body and inventory constants for a simulation session
///
/// All distances are world pixels, all rates are per tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Edge length of one tile in world pixels
    pub tile_size: f32,
    /// Downward acceleration (px/tick²)
    pub gravity: f32,
    /// Maximum falling speed (px/tick)
    pub terminal_velocity: f32,
    /// Horizontal speed while a movement intent is held (px/tick)
    pub move_speed: f32,
    /// Upward velocity applied by a jump (px/tick)
    pub jump_strength: f32,
    /// Player bounding box (width, height) in world pixels
    pub body_size: (f32, f32),
    /// Total inventory slots
    pub inventory_slots: usize,
    /// Leading slots reachable by slot selection
    pub hotbar_slots: usize,
    /// Day/night cycle
    pub time: TimeConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tile_size: 32.0,
            gravity: 0.5,
            terminal_velocity: 10.0,
            move_speed: 5.0,
            jump_strength: 10.0,
            body_size: (32.0, 64.0), // 1x2 tiles
            inventory_slots: 30,
            hotbar_slots: 9,
            time: TimeConfig::default(),
        }
    }
}

impl SimConfig {
    /// Parse a config from RON and validate it
    pub fn from_ron_str(source: &str) -> SimResult<Self> {
        let config: SimConfig = ron::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants the physics step relies on
    pub fn validate(&self) -> SimResult<()> {
        let positive = [
            ("tile_size", self.tile_size),
            ("gravity", self.gravity),
            ("terminal_velocity", self.terminal_velocity),
            ("move_speed", self.move_speed),
            ("jump_strength", self.jump_strength),
            ("body width", self.body_size.0),
            ("body height", self.body_size.1),
        ];
        for (name, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::NonPositive { name, value });
            }
        }

        // Horizontal moves are checked only at the candidate position
        if self.move_speed >= self.tile_size {
            return Err(ConfigError::FasterThanTile {
                name: "move_speed",
                value: self.move_speed,
                tile_size: self.tile_size,
            });
        }

        if self.hotbar_slots == 0 || self.hotbar_slots > self.inventory_slots {
            return Err(ConfigError::InvalidInventory {
                slots: self.inventory_slots,
                hotbar: self.hotbar_slots,
            });
        }

        self.time.validate()
    }
}

/// Day/night cycle timing, in time-of-day units
///
/// The counter runs over `[0, day_length)`. Darkness is 1.0 from `dusk_end`
/// through midnight to `dawn_start`, fades out until `dawn_end`, is 0.0
/// until `dusk_start`, and fades back in until `dusk_end`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeConfig {
    pub day_length: u32,
    /// Units the counter advances per tick
    pub units_per_tick: u32,
    /// Counter value at session start (0 = midnight)
    pub start_time: u32,
    pub dawn_start: u32,
    pub dawn_end: u32,
    pub dusk_start: u32,
    pub dusk_end: u32,
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            day_length: 24000,
            units_per_tick: 10,
            start_time: 0,
            dawn_start: 5000,
            dawn_end: 7000,
            dusk_start: 17000,
            dusk_end: 19000,
        }
    }
}

impl TimeConfig {
    pub fn validate(&self) -> SimResult<()> {
        let ordered = self.dawn_start < self.dawn_end
            && self.dawn_end <= self.dusk_start
            && self.dusk_start < self.dusk_end
            && self.dusk_end <= self.day_length;
        if self.day_length == 0 || !ordered {
            return Err(ConfigError::InvalidTimeWindows {
                day_length: self.day_length,
            });
        }
        Ok(())
    }
}
