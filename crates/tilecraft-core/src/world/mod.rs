//! World module - tile grid, generation, collision and the systems acting on it

pub mod collision;
pub mod falling_block_system;
pub mod generation;
pub mod mining_system;
pub mod physics_system;
pub mod rng_trait;
pub mod sketch;
pub mod terrain;
pub mod worldgen_config;

pub use collision::{CollisionDetector, tile_span};
pub use falling_block_system::FallingBlockSystem;
pub use generation::{GeneratedTiles, TerrainGenerator};
pub use mining_system::{ActionResult, MiningSystem, RejectReason};
pub use physics_system::{BodyIntent, PhysicsSystem};
pub use rng_trait::WorldRng;
pub use terrain::Terrain;
pub use worldgen_config::{CHUNK_SIZE, OreConfig, TerrainParams, TreeConfig, WorldGenConfig};
