//! Block and item data for Tilecraft
//!
//! This crate provides the lookup tables the simulation core derives tile
//! behavior from:
//! - Block definitions (BlockId, BlockDef, Blocks)
//! - The flattened per-tile view (BlockState)
//! - Plain items with no block form (ItemId, MAX_STACK)

mod blocks;
mod items;

pub use blocks::{BlockDef, BlockId, BlockState, Blocks};
pub use items::{ItemId, MAX_STACK};
