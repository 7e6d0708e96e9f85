//! Mining system - the mine/place action in front of a body

use glam::{IVec2, Vec2};
use tilecraft_blocks::BlockId;

use crate::entity::{Body, Inventory};
use crate::world::collision::CollisionDetector;
use crate::world::terrain::Terrain;

/// Why a placement was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// None of the four orthogonal neighbors is solid
    NoSupport,
    /// The target tile overlaps the acting body or another body
    Occupied,
}

/// Outcome of a single mine/place action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionResult {
    /// Target tile is outside the generated world
    NoTarget,
    /// Tile cleared; `stored` says whether the drop reached slot 0
    Mined { block_id: u16, drop: u16, stored: bool },
    /// The active item was placed as this block id
    Placed(u16),
    Rejected(RejectReason),
    /// Nothing to mine and nothing placeable in hand
    NoOp,
}

impl ActionResult {
    /// Drop item id of a mine action
    pub fn mined_drop(&self) -> Option<u16> {
        match self {
            ActionResult::Mined { drop, .. } => Some(*drop),
            _ => None,
        }
    }
}

/// Mining system - static utility methods for mining and placement
pub struct MiningSystem;

impl MiningSystem {
    /// Tile one tile-width in front of the body, at body-center height
    pub fn target_tile(body: &Body, tile_size: f32) -> IVec2 {
        let center = body.center();
        let point = Vec2::new(center.x + tile_size * body.facing.sign(), center.y);
        (point / tile_size).floor().as_ivec2()
    }

    /// Resolve one action for `body`
    ///
    /// Mineable targets are always cleared. Drops go to slot 0 only (see
    /// [`Inventory::deposit_into_first_slot`]). Air targets take the active
    /// item if it is placeable, the tile has a solid orthogonal neighbor and
    /// no body in `others` (or the actor) covers it.
    pub fn act(
        body: &Body,
        inventory: &mut Inventory,
        terrain: &mut Terrain,
        others: &[Body],
        tile_size: f32,
    ) -> ActionResult {
        let target = Self::target_tile(body, tile_size);
        let (tx, ty) = (target.x, target.y);

        if !terrain.in_bounds(tx, ty) {
            log::debug!("[ACT] No target at ({}, {})", tx, ty);
            return ActionResult::NoTarget;
        }

        let tile = terrain.get_tile(tx, ty);

        if tile.is_mineable {
            terrain.set_tile(tx, ty, BlockId::AIR);

            let drop = tile.drop_item_id;
            let stored = drop != 0 && inventory.deposit_into_first_slot(drop);
            log::debug!(
                "[MINE] Mined {} at ({}, {}), drop {} stored: {}",
                terrain.blocks().name(tile.block_type_id),
                tx,
                ty,
                terrain.blocks().name(drop),
                stored
            );

            return ActionResult::Mined {
                block_id: tile.block_type_id,
                drop,
                stored,
            };
        }

        let item_id = inventory.active_slot().item_id;
        if !tile.is_air() || !terrain.blocks().is_placeable(item_id) {
            return ActionResult::NoOp;
        }

        let supported = [(1, 0), (-1, 0), (0, 1), (0, -1)]
            .iter()
            .any(|(dx, dy)| terrain.is_solid_tile(tx + dx, ty + dy));
        if !supported {
            log::debug!("[PLACE] No support at ({}, {})", tx, ty);
            return ActionResult::Rejected(RejectReason::NoSupport);
        }

        let occupied = std::iter::once(body)
            .chain(others)
            .any(|b| CollisionDetector::box_covers_tile(b.position, b.size, tx, ty, tile_size));
        if occupied {
            log::debug!("[PLACE] Tile ({}, {}) is occupied", tx, ty);
            return ActionResult::Rejected(RejectReason::Occupied);
        }

        let Some(block_id) = inventory.take_one_from_active() else {
            return ActionResult::NoOp;
        };
        terrain.set_tile(tx, ty, block_id);
        log::debug!(
            "[PLACE] Placed {} at ({}, {})",
            terrain.blocks().name(block_id),
            tx,
            ty
        );

        ActionResult::Placed(block_id)
    }
}
