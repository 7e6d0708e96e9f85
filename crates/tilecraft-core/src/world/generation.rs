use fastnoise_lite::{FastNoiseLite, NoiseType};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;
use tilecraft_blocks::BlockId;

use crate::world::rng_trait::WorldRng;
use crate::world::worldgen_config::WorldGenConfig;

/// Mixed into the world seed for the ore stream, so ore draws never share
/// state with anything structural
const ORE_STREAM: u64 = 0x9E37_79B9_7F4A_7C15;

/// Fold a 64-bit world seed into the 32-bit seed the noise takes
///
/// Both halves contribute, so seeds differing only in their high bits still
/// shape different surfaces.
pub fn noise_seed(seed: u64) -> i32 {
    (seed ^ (seed >> 32)) as u32 as i32
}

/// Raw output of a generation pass: row-major block ids plus the surface row
/// of every column
pub struct GeneratedTiles {
    pub tiles: Vec<u16>,
    pub surface: Vec<i32>,
}

/// Terrain generator: sine-based height field with a seeded noise jitter,
/// layered columns, Bernoulli ore draws and periodic trees
///
/// Everything structural (surface, layers, trees) is a pure function of the
/// seed and config. Ores come from a separately seeded stream.
pub struct TerrainGenerator {
    pub seed: u64,

    config: WorldGenConfig,

    // Bounded randomness term of the surface curve
    jitter_noise: FastNoiseLite,
}

impl TerrainGenerator {
    /// Create a generator with the default configuration
    pub fn new(seed: u64) -> Self {
        Self::from_config(seed, WorldGenConfig::default())
    }

    pub fn from_config(seed: u64, config: WorldGenConfig) -> Self {
        let jitter_seed = noise_seed(seed).wrapping_add(config.terrain.jitter_seed_offset);
        let mut jitter_noise = FastNoiseLite::with_seed(jitter_seed);
        jitter_noise.set_noise_type(Some(NoiseType::OpenSimplex2));
        jitter_noise.set_frequency(Some(config.terrain.jitter_frequency));

        Self {
            seed,
            config,
            jitter_noise,
        }
    }

    pub fn config(&self) -> &WorldGenConfig {
        &self.config
    }

    /// Noise sample at column x mapped into [0, 1]
    fn jitter01(&self, x: i32) -> f32 {
        let n = self.jitter_noise.get_noise_2d(x as f32, 0.0);
        ((n + 1.0) * 0.5).clamp(0.0, 1.0)
    }

    /// Surface (grass) row of column x
    pub fn surface_height(&self, x: i32) -> i32 {
        let t = &self.config.terrain;
        let curve = t.surface_base
            + (x as f32 * t.sine_frequency).sin() * t.sine_amplitude
            + self.jitter01(x) * t.jitter;
        let max_row = (self.config.height - 1).max(0);
        (curve.floor() as i32).clamp(t.bedrock_rows.clamp(0, max_row), max_row)
    }

    /// Layer block at (x, y) before ores and trees are applied
    pub fn layer_block(&self, y: i32, surface: i32) -> u16 {
        if y < self.config.terrain.bedrock_rows {
            return BlockId::BEDROCK;
        }

        let depth = surface - y;
        if depth < 0 {
            BlockId::AIR
        } else if depth == 0 {
            BlockId::GRASS
        } else if depth <= self.config.terrain.dirt_depth {
            BlockId::DIRT
        } else {
            BlockId::STONE
        }
    }

    /// Whether column x carries a tree trunk
    pub fn is_tree_column(&self, x: i32) -> bool {
        let trees = &self.config.trees;
        trees.enabled
            && trees.spacing > 0
            && x >= trees.offset
            && (x - trees.offset) % trees.spacing == 0
    }

    /// Generate every tile of the configured world
    pub fn generate(&self) -> GeneratedTiles {
        let width = self.config.width.max(0);
        let height = self.config.height.max(0);
        let mut tiles = vec![BlockId::AIR; (width * height) as usize];
        let index = |x: i32, y: i32| (y * width + x) as usize;

        let surface: Vec<i32> = (0..width).map(|x| self.surface_height(x)).collect();

        // Step 1: layered columns, top to bottom
        for x in 0..width {
            for y in (0..height).rev() {
                tiles[index(x, y)] = self.layer_block(y, surface[x as usize]);
            }
        }

        // Step 2: ores, on their own stream
        let mut ore_rng = Xoshiro256StarStar::seed_from_u64(self.seed ^ ORE_STREAM);
        let ore_count = self.place_ores(&mut tiles, &surface, width, height, &mut ore_rng);

        // Step 3: trees overwrite the layer rule for their rows
        let mut tree_count = 0;
        for x in 0..width {
            if self.is_tree_column(x) {
                self.place_tree(&mut tiles, x, surface[x as usize], width, height);
                tree_count += 1;
            }
        }

        log::info!(
            "Generated {}x{} terrain (seed {}): {} ore tiles, {} trees",
            width,
            height,
            self.seed,
            ore_count,
            tree_count
        );

        GeneratedTiles { tiles, surface }
    }

    /// Convert stone tiles to ore with independent per-tile draws
    ///
    /// Later ores in the config list override earlier ones on the same tile.
    fn place_ores(
        &self,
        tiles: &mut [u16],
        surface: &[i32],
        width: i32,
        height: i32,
        rng: &mut impl WorldRng,
    ) -> usize {
        let mut placed = 0;
        for x in 0..width {
            for y in (0..height).rev() {
                let i = (y * width + x) as usize;
                if tiles[i] != BlockId::STONE {
                    continue;
                }

                let depth = surface[x as usize] - y;
                if let Some(block) = rng.pick_ore(&self.config.ores, depth) {
                    tiles[i] = block;
                    placed += 1;
                }
            }
        }
        placed
    }

    /// Trunk straddling the surface, plus an optional leaf canopy in open air
    fn place_tree(&self, tiles: &mut [u16], x: i32, surface: i32, width: i32, height: i32) {
        let trees = &self.config.trees;
        let in_bounds = |tx: i32, ty: i32| tx >= 0 && tx < width && ty >= 0 && ty < height;
        let bedrock_rows = self.config.terrain.bedrock_rows;

        let top = surface + trees.trunk_above;
        for y in (surface - trees.trunk_below)..=top {
            if in_bounds(x, y) && y >= bedrock_rows {
                tiles[(y * width + x) as usize] = BlockId::WOOD;
            }
        }

        if trees.canopy {
            let canopy = [(x - 1, top + 1), (x, top + 1), (x + 1, top + 1), (x, top + 2)];
            for (cx, cy) in canopy {
                if in_bounds(cx, cy) && tiles[(cy * width + cx) as usize] == BlockId::AIR {
                    tiles[(cy * width + cx) as usize] = BlockId::LEAVES;
                }
            }
        }
    }
}
