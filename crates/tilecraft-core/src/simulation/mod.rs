//! Simulation loop - the session aggregate and the day/night cycle

pub mod session;
pub mod time_cycle;

// Re-export the block tables the simulation derives tile state from
pub use tilecraft_blocks::{BlockDef, BlockId, BlockState, Blocks, ItemId, MAX_STACK};

pub use session::{Simulation, TickReport};
pub use time_cycle::{DayPhase, TimeCycle};
