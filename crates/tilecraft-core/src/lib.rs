//! Deterministic tile-world simulation: terrain generation, body physics
//! against the tile grid, the mine/place action and the day/night cycle.

pub mod config;
pub mod entity;
pub mod error;
pub mod simulation;
pub mod world;

pub use config::{SimConfig, TimeConfig};
pub use entity::{Body, BodyId, Facing, InputState, Inventory, MoveIntent, Player, Slot};
pub use error::{ConfigError, SimResult};
pub use simulation::{DayPhase, Simulation, TickReport, TimeCycle};
pub use world::{ActionResult, RejectReason, Terrain, WorldGenConfig};
