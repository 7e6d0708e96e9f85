//! Random draws used by terrain generation

use crate::world::worldgen_config::OreConfig;

/// Source of the per-tile ore draws
///
/// Blanket-implemented for every `rand::Rng`, so generation stays generic
/// over the concrete stream.
pub trait WorldRng {
    /// Uniform sample in [0.0, 1.0)
    fn unit_f32(&mut self) -> f32;

    /// Bernoulli draw
    fn check_probability(&mut self, probability: f32) -> bool {
        self.unit_f32() < probability
    }

    /// Ore replacing one stone tile at `depth` below the surface, if any
    ///
    /// Every ore deep enough draws once, in list order; the last success wins.
    /// Ores too shallow for `depth` consume no draw.
    fn pick_ore(&mut self, ores: &[OreConfig], depth: i32) -> Option<u16> {
        let mut picked = None;
        for ore in ores {
            if depth >= ore.min_depth && self.check_probability(ore.probability) {
                picked = Some(ore.block_id);
            }
        }
        picked
    }
}

impl<T: ?Sized + rand::Rng> WorldRng for T {
    fn unit_f32(&mut self) -> f32 {
        rand::Rng::r#gen(self)
    }
}
