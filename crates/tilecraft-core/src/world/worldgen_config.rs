//! World generation configuration - serializable parameters for terrain generation
//!
//! Captures everything `Terrain::generate` needs apart from the seed, so
//! presets can be stored as RON and the same preset with a different seed
//! yields a different world.

use serde::{Deserialize, Serialize};
use tilecraft_blocks::BlockId;

use crate::error::{ConfigError, SimResult};

/// Chunk width used to size the default world
pub const CHUNK_SIZE: i32 = 16;

/// Complete world generation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldGenConfig {
    /// Display name for this configuration
    pub name: String,

    /// World width in tiles
    pub width: i32,

    /// World height in tiles (row 0 is the bottom)
    pub height: i32,

    /// Surface height curve
    pub terrain: TerrainParams,

    /// Ore generation (per-ore settings, evaluated in order)
    pub ores: Vec<OreConfig>,

    /// Tree placement
    pub trees: TreeConfig,
}

/// Surface curve and layer depths
///
/// `surface(x) = floor(surface_base + sin(x * sine_frequency) * sine_amplitude + jitter01(x) * jitter)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainParams {
    /// Baseline surface row
    pub surface_base: f32,
    /// Amplitude of the rolling sine term, in rows
    pub sine_amplitude: f32,
    /// Angular frequency of the sine term, per column
    pub sine_frequency: f32,
    /// Upper bound of the noise term, in rows
    pub jitter: f32,
    /// Frequency of the jitter noise layer
    pub jitter_frequency: f32,
    /// Offset added to the world seed for the jitter noise layer
    pub jitter_seed_offset: i32,
    /// Rows of dirt directly below the grass row
    pub dirt_depth: i32,
    /// Rows of bedrock at the bottom of the world
    pub bedrock_rows: i32,
}

/// Individual ore generation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OreConfig {
    /// Block ID for this ore
    pub block_id: u16,
    /// Display name
    pub name: String,
    /// Chance that a single stone tile becomes this ore
    pub probability: f32,
    /// Shallowest depth below the surface where this ore appears
    pub min_depth: i32,
}

/// Tree placement configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    pub enabled: bool,
    /// A tree grows every `spacing` columns
    pub spacing: i32,
    /// Column of the first tree
    pub offset: i32,
    /// Trunk rows below the surface row
    pub trunk_below: i32,
    /// Trunk rows above the surface row
    pub trunk_above: i32,
    /// Add a leaf canopy above the trunk
    pub canopy: bool,
}

impl Default for WorldGenConfig {
    fn default() -> Self {
        Self {
            name: "Default".to_string(),
            width: CHUNK_SIZE * 100,
            height: CHUNK_SIZE * 5,
            terrain: TerrainParams::default(),
            ores: default_ore_configs(),
            trees: TreeConfig::default(),
        }
    }
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            surface_base: 48.0,
            sine_amplitude: 3.0,
            sine_frequency: 0.1,
            jitter: 2.0,
            jitter_frequency: 0.05,
            jitter_seed_offset: 2,
            dirt_depth: 4,
            bedrock_rows: 1,
        }
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            spacing: 8,
            offset: 3,
            trunk_below: 1,
            trunk_above: 2,
            canopy: true,
        }
    }
}

fn default_ore_configs() -> Vec<OreConfig> {
    vec![
        OreConfig {
            block_id: BlockId::COAL_ORE,
            name: "Coal".to_string(),
            probability: 0.05,
            min_depth: 0,
        },
        OreConfig {
            block_id: BlockId::DIAMOND_ORE,
            name: "Diamond".to_string(),
            probability: 0.005,
            min_depth: 20,
        },
    ]
}

impl WorldGenConfig {
    /// Parse a preset from RON and validate it
    pub fn from_ron_str(source: &str) -> SimResult<Self> {
        let config: WorldGenConfig = ron::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Lowest and highest surface row the curve can produce
    pub fn surface_bounds(&self) -> (i32, i32) {
        let t = &self.terrain;
        let low = (t.surface_base - t.sine_amplitude.abs()).floor() as i32;
        let high = (t.surface_base + t.sine_amplitude.abs() + t.jitter.abs()).floor() as i32;
        (low, high)
    }

    /// Rows a tree can reach above the surface
    fn tree_headroom(&self) -> i32 {
        if !self.trees.enabled {
            return 0;
        }
        self.trees.trunk_above + if self.trees.canopy { 2 } else { 0 }
    }

    /// Reject configurations that would clip the generated structure
    pub fn validate(&self) -> SimResult<()> {
        let tiles = self.width as i64 * self.height as i64;
        if self.width <= 0 || self.height <= 0 || tiles > i32::MAX as i64 {
            return Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }

        let (low, high) = self.surface_bounds();
        let floor = self.terrain.bedrock_rows + self.terrain.dirt_depth;
        if low <= floor || high + self.tree_headroom() >= self.height {
            return Err(ConfigError::SurfaceOutOfRange {
                min: low,
                max: high,
                height: self.height,
            });
        }

        if self.trees.enabled && self.trees.spacing <= 0 {
            return Err(ConfigError::NonPositive {
                name: "tree spacing",
                value: self.trees.spacing as f32,
            });
        }

        for ore in &self.ores {
            if !(0.0..=1.0).contains(&ore.probability) {
                return Err(ConfigError::InvalidProbability {
                    block_id: ore.block_id,
                    probability: ore.probability,
                });
            }
        }

        Ok(())
    }

    /// Flat world: no rolling hills, no jitter
    pub fn preset_flat() -> Self {
        Self {
            name: "Flat World".to_string(),
            terrain: TerrainParams {
                sine_amplitude: 0.0,
                jitter: 0.0,
                ..TerrainParams::default()
            },
            ..Self::default()
        }
    }

    /// Small world for tests and quick previews
    pub fn preset_small(width: i32) -> Self {
        Self {
            name: "Small".to_string(),
            width,
            height: 32,
            terrain: TerrainParams {
                surface_base: 20.0,
                ..TerrainParams::default()
            },
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WorldGenConfig::default();
        assert_eq!(config.name, "Default");
        assert_eq!(config.width, 1600);
        assert_eq!(config.height, 80);
        assert_eq!(config.terrain.dirt_depth, 4);
        assert_eq!(config.ores.len(), 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_surface_bounds() {
        let config = WorldGenConfig::default();
        assert_eq!(config.surface_bounds(), (45, 53));

        let flat = WorldGenConfig::preset_flat();
        assert_eq!(flat.surface_bounds(), (48, 48));
    }

    #[test]
    fn test_presets_are_valid() {
        assert!(WorldGenConfig::preset_flat().validate().is_ok());
        assert!(WorldGenConfig::preset_small(10).validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_width() {
        let config = WorldGenConfig {
            width: 0,
            ..WorldGenConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_rejects_oversized_world() {
        let config = WorldGenConfig {
            width: 100_000,
            height: 100_000,
            ..WorldGenConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidDimensions {
                width: 100_000,
                height: 100_000
            })
        ));

        // Largest accepted grid still indexes within i32
        let config = WorldGenConfig {
            width: i32::MAX / 80,
            ..WorldGenConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_surface_above_world() {
        let config = WorldGenConfig {
            height: 50,
            ..WorldGenConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SurfaceOutOfRange { .. })
        ));
    }

    #[test]
    fn test_rejects_surface_in_bedrock() {
        let mut config = WorldGenConfig::default();
        config.terrain.surface_base = 4.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SurfaceOutOfRange { .. })
        ));
    }

    #[test]
    fn test_rejects_bad_probability() {
        let mut config = WorldGenConfig::default();
        config.ores[0].probability = 1.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidProbability { block_id, .. }) if block_id == BlockId::COAL_ORE
        ));
    }

    #[test]
    fn test_ron_serialization() {
        let config = WorldGenConfig::preset_flat();
        let serialized = ron::to_string(&config).expect("Failed to serialize");
        let deserialized =
            WorldGenConfig::from_ron_str(&serialized).expect("Failed to deserialize");
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_ron_partial_preset() {
        let config = WorldGenConfig::from_ron_str("(name: \"Narrow\", width: 64)")
            .expect("Failed to parse preset");
        assert_eq!(config.name, "Narrow");
        assert_eq!(config.width, 64);
        assert_eq!(config.height, 80);
        assert_eq!(config.ores.len(), 2);
    }
}
