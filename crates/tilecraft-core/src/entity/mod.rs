//! Entities: bodies simulated against the grid, the player, and input

pub mod body;
pub mod input;
pub mod inventory;
pub mod player;

pub use body::{Body, BodyId, Facing};
pub use input::{InputState, MoveIntent};
pub use inventory::{Inventory, Slot};
pub use player::Player;
