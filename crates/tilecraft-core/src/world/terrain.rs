//! Tile grid - owns block ids for every generated tile

use glam::Vec2;
use tilecraft_blocks::{BlockId, BlockState, Blocks};

use crate::error::SimResult;
use crate::world::collision::tile_span;
use crate::world::generation::TerrainGenerator;
use crate::world::sketch;
use crate::world::worldgen_config::WorldGenConfig;

/// The generated tile world
///
/// Row 0 is the bottom of the world and rows increase upward. Reads outside
/// `[0, width) × [0, height)` yield air and writes there are ignored.
#[derive(Clone, Debug)]
pub struct Terrain {
    config: WorldGenConfig,
    seed: u64,
    blocks: Blocks,
    width: i32,
    height: i32,
    /// Row-major block ids, `tiles[y * width + x]`
    tiles: Vec<u16>,
    /// Surface row per column as generated
    surface: Vec<i32>,
}

impl Terrain {
    /// Validate the config and generate a fully populated terrain
    pub fn generate(config: WorldGenConfig, seed: u64) -> SimResult<Self> {
        config.validate()?;

        let mut terrain = Self {
            width: config.width,
            height: config.height,
            config,
            seed,
            blocks: Blocks::new(),
            tiles: Vec::new(),
            surface: Vec::new(),
        };
        terrain.regenerate(seed);
        Ok(terrain)
    }

    /// Rebuild every tile in place from a new seed, keeping the config
    pub fn regenerate(&mut self, seed: u64) {
        let generator = TerrainGenerator::from_config(seed, self.config.clone());
        let generated = generator.generate();

        self.seed = seed;
        self.width = self.config.width;
        self.height = self.config.height;
        self.tiles = generated.tiles;
        self.surface = generated.surface;
    }

    /// Build a terrain from an ASCII sketch, top row first
    ///
    /// Glyphs follow [`sketch::glyph`]; unknown glyphs become air and short
    /// rows are padded with air. The recorded surface of each column is its
    /// highest solid row (0 for columns with none).
    pub fn from_sketch(rows: &[&str]) -> Self {
        let height = rows.len() as i32;
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0) as i32;
        let mut tiles = vec![BlockId::AIR; (width * height) as usize];

        for (i, row) in rows.iter().enumerate() {
            let y = height - 1 - i as i32;
            for (x, glyph) in row.chars().enumerate() {
                let block = sketch::block_for_glyph(glyph).unwrap_or(BlockId::AIR);
                tiles[(y * width + x as i32) as usize] = block;
            }
        }

        let mut terrain = Self {
            config: WorldGenConfig {
                name: "Sketch".to_string(),
                width,
                height,
                ..WorldGenConfig::default()
            },
            seed: 0,
            blocks: Blocks::new(),
            width,
            height,
            tiles,
            surface: Vec::new(),
        };
        terrain.surface = (0..width)
            .map(|x| terrain.highest_solid(x).unwrap_or(0))
            .collect();
        terrain
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &WorldGenConfig {
        &self.config
    }

    /// Block table tile states are derived from
    pub fn blocks(&self) -> &Blocks {
        &self.blocks
    }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        self.in_bounds(x, y).then(|| (y * self.width + x) as usize)
    }

    /// Surface row of column x as generated (None outside the world)
    pub fn surface_height(&self, x: i32) -> Option<i32> {
        if x < 0 {
            return None;
        }
        self.surface.get(x as usize).copied()
    }

    /// Raw block id at (x, y), air outside bounds
    pub fn block_id(&self, x: i32, y: i32) -> u16 {
        self.index(x, y)
            .map(|i| self.tiles[i])
            .unwrap_or(BlockId::AIR)
    }

    /// Tile state at (x, y), air outside bounds
    pub fn get_tile(&self, x: i32, y: i32) -> BlockState {
        self.blocks.state(self.block_id(x, y))
    }

    /// Whether the tile at (x, y) blocks movement
    pub fn is_solid_tile(&self, x: i32, y: i32) -> bool {
        self.get_tile(x, y).is_solid
    }

    /// Overwrite a single tile; writes outside bounds are ignored
    pub fn set_tile(&mut self, x: i32, y: i32, block_id: u16) {
        match self.index(x, y) {
            Some(i) => self.tiles[i] = block_id,
            None => log::trace!("Ignoring out-of-bounds write at ({}, {})", x, y),
        }
    }

    /// Highest solid row of column x
    pub fn highest_solid(&self, x: i32) -> Option<i32> {
        (0..self.height).rev().find(|&y| self.is_solid_tile(x, y))
    }

    /// World position of a body standing on the highest solid tile under it
    ///
    /// The body occupies the columns spanned by `[tile_x * tile_size, tile_x * tile_size + body_width)`.
    pub fn spawn_point(&self, tile_x: i32, body_width: f32, tile_size: f32) -> Vec2 {
        let x = tile_x as f32 * tile_size;
        let ground = tile_span(x, body_width, tile_size)
            .filter_map(|column| self.highest_solid(column))
            .max();

        match ground {
            Some(row) => Vec2::new(x, (row + 1) as f32 * tile_size),
            None => Vec2::new(x, 0.0),
        }
    }

    /// Count tiles holding a given block id
    pub fn count_blocks(&self, block_id: u16) -> usize {
        self.tiles.iter().filter(|&&id| id == block_id).count()
    }
}
