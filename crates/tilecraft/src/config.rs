//! Driver configuration with layered loading
//!
//! Configuration is loaded from multiple sources (lowest to highest priority):
//! 1. Compiled defaults
//! 2. `tilecraft.ron` file (if exists), or the file given with `--config`
//! 3. Environment variables prefixed with `TILECRAFT_`
//!
//! Example environment variable: `TILECRAFT_SIM__MOVE_SPEED=4.0`

use std::path::Path;

use anyhow::{Context, Result};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tilecraft_core::{SimConfig, WorldGenConfig};

/// Main driver configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GameConfig {
    #[serde(default)]
    pub sim: SimConfig,

    #[serde(default)]
    pub world: WorldConfig,

    #[serde(default)]
    pub run: RunConfig,
}

/// Which terrain to generate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldConfig {
    pub seed: u64,
    /// Built-in preset: `default`, `flat` or `small`
    pub preset: String,
    /// Width used by the `small` preset
    pub small_width: i32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            preset: "default".to_string(),
            small_width: 64,
        }
    }
}

impl WorldConfig {
    /// Resolve the preset name to a world generation config
    pub fn worldgen(&self) -> Result<WorldGenConfig> {
        match self.preset.to_ascii_lowercase().as_str() {
            "default" => Ok(WorldGenConfig::default()),
            "flat" => Ok(WorldGenConfig::preset_flat()),
            "small" => Ok(WorldGenConfig::preset_small(self.small_width)),
            other => anyhow::bail!(
                "Unknown world preset '{}' (expected default, flat or small)",
                other
            ),
        }
    }
}

/// Fixed-rate loop settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Ticks to simulate before exiting
    pub ticks: u64,
    /// Nominal tick rate; only used to pace `realtime` runs and progress logs
    pub tick_rate_hz: u32,
    /// Sleep between ticks to run at `tick_rate_hz`
    pub realtime: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            ticks: 600,
            tick_rate_hz: 60,
            realtime: false,
        }
    }
}

impl GameConfig {
    /// Load configuration with layered priority:
    /// 1. Compiled defaults (lowest priority)
    /// 2. `path`, or `tilecraft.ron` when no path is given (optional)
    /// 3. Environment variables prefixed with `TILECRAFT_` (highest priority)
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => File::from(path).format(FileFormat::Ron).required(true),
            None => File::with_name("tilecraft")
                .format(FileFormat::Ron)
                .required(false),
        };

        let builder = Config::builder()
            // Layer 1: Compiled defaults
            .set_default("world.seed", 42_u64)?
            .set_default("world.preset", "default")?
            .set_default("world.small_width", 64_i64)?
            .set_default("run.ticks", 600_u64)?
            .set_default("run.tick_rate_hz", 60_i64)?
            .set_default("run.realtime", false)?
            // Layer 2: Config file
            .add_source(file)
            // Layer 3: Environment variables (TILECRAFT_RUN__TICKS, etc.)
            .add_source(
                Environment::with_prefix("TILECRAFT")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build().context("Failed to build configuration")?;

        let config: GameConfig = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;
        config
            .sim
            .validate()
            .context("Invalid simulation constants")?;
        Ok(config)
    }
}
