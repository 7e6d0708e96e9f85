//! Configuration errors
//!
//! The simulation itself never fails: out-of-range reads are air, invalid
//! actions come back as typed results. Everything that can go wrong happens
//! before a world exists, while configuration is parsed and validated.

pub type SimResult<T> = Result<T, ConfigError>;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid world dimensions {width}x{height}: must be positive and fit i32 indexing")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("surface band {min}..={max} does not fit a world {height} rows tall")]
    SurfaceOutOfRange { min: i32, max: i32, height: i32 },

    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },

    #[error("{name} ({value}) must be smaller than the tile size ({tile_size})")]
    FasterThanTile {
        name: &'static str,
        value: f32,
        tile_size: f32,
    },

    #[error("inventory needs at least one hotbar slot and no more hotbar slots than slots ({hotbar} of {slots})")]
    InvalidInventory { slots: usize, hotbar: usize },

    #[error("time cycle windows must be increasing within the day length {day_length}")]
    InvalidTimeWindows { day_length: u32 },

    #[error("ore probability for block {block_id} must be within 0..=1, got {probability}")]
    InvalidProbability { block_id: u16, probability: f32 },

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] ron::error::SpannedError),
}
