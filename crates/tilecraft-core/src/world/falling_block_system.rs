//! Falling block system - loose blocks drop one row per tick

use tilecraft_blocks::BlockId;

use crate::entity::Body;
use crate::world::collision::CollisionDetector;
use crate::world::terrain::Terrain;

/// Falling block system - gravity for blocks flagged `falls`
pub struct FallingBlockSystem;

impl FallingBlockSystem {
    /// Move every unsupported falling block down by one row
    ///
    /// A block falls when the tile below it is inside the world, air, and not
    /// covered by any body. Rows are scanned bottom-up so a block moves at
    /// most once per call while a stacked column still falls together.
    /// Returns the number of blocks moved.
    pub fn update(terrain: &mut Terrain, bodies: &[&Body], tile_size: f32) -> usize {
        let mut moved = 0;

        for y in 1..terrain.height() {
            for x in 0..terrain.width() {
                let block_id = terrain.block_id(x, y);
                if block_id == BlockId::AIR || !terrain.blocks().get(block_id).falls {
                    continue;
                }
                if terrain.block_id(x, y - 1) != BlockId::AIR {
                    continue;
                }

                let blocked = bodies.iter().any(|body| {
                    CollisionDetector::box_covers_tile(
                        body.position,
                        body.size,
                        x,
                        y - 1,
                        tile_size,
                    )
                });
                if blocked {
                    continue;
                }

                terrain.set_tile(x, y - 1, block_id);
                terrain.set_tile(x, y, BlockId::AIR);
                moved += 1;
            }
        }

        if moved > 0 {
            log::trace!("{} falling blocks moved", moved);
        }
        moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    const T: f32 = 32.0;

    #[test]
    fn test_sand_falls_one_row_per_update() {
        let mut terrain = Terrain::from_sketch(&["s", ".", ".", "#"]);

        assert_eq!(FallingBlockSystem::update(&mut terrain, &[], T), 1);
        assert_eq!(terrain.block_id(0, 2), BlockId::SAND);
        assert_eq!(terrain.block_id(0, 3), BlockId::AIR);

        assert_eq!(FallingBlockSystem::update(&mut terrain, &[], T), 1);
        assert_eq!(terrain.block_id(0, 1), BlockId::SAND);

        // Resting on stone
        assert_eq!(FallingBlockSystem::update(&mut terrain, &[], T), 0);
        assert_eq!(terrain.block_id(0, 1), BlockId::SAND);
    }

    #[test]
    fn test_stacked_sand_falls_together() {
        let mut terrain = Terrain::from_sketch(&["s", "s", ".", "#"]);

        assert_eq!(FallingBlockSystem::update(&mut terrain, &[], T), 2);
        assert_eq!(terrain.block_id(0, 1), BlockId::SAND);
        assert_eq!(terrain.block_id(0, 2), BlockId::SAND);
        assert_eq!(terrain.block_id(0, 3), BlockId::AIR);
    }

    #[test]
    fn test_other_blocks_do_not_fall() {
        let mut terrain = Terrain::from_sketch(&["d#w", "...", "###"]);
        assert_eq!(FallingBlockSystem::update(&mut terrain, &[], T), 0);
        assert_eq!(terrain.block_id(0, 2), BlockId::DIRT);
    }

    #[test]
    fn test_sand_does_not_fall_out_of_world() {
        let mut terrain = Terrain::from_sketch(&["s"]);
        assert_eq!(FallingBlockSystem::update(&mut terrain, &[], T), 0);
        assert_eq!(terrain.block_id(0, 0), BlockId::SAND);
    }

    #[test]
    fn test_sand_does_not_fall_into_body() {
        let mut terrain = Terrain::from_sketch(&["s", ".", ".", "#"]);
        let body = Body::new(Vec2::new(0.0, 32.0), Vec2::new(32.0, 64.0));

        assert_eq!(FallingBlockSystem::update(&mut terrain, &[&body], T), 0);
        assert_eq!(terrain.block_id(0, 3), BlockId::SAND);
    }

    #[test]
    fn test_sand_does_not_fall_into_water() {
        let mut terrain = Terrain::from_sketch(&["s", "~"]);
        assert_eq!(FallingBlockSystem::update(&mut terrain, &[], T), 0);
    }
}
