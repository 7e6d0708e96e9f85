//! Collision queries against the tile grid
//!
//! Boxes are half-open: a box at `position` with `size` covers
//! `[x, x + w) × [y, y + h)`, so a body resting exactly on a tile boundary
//! does not touch the row below it.

use std::ops::RangeInclusive;

use glam::Vec2;

use crate::world::terrain::Terrain;

/// Inclusive range of tiles covered by the half-open interval `[start, start + len)`
#[inline]
pub fn tile_span(start: f32, len: f32, tile_size: f32) -> RangeInclusive<i32> {
    let first = (start / tile_size).floor() as i32;
    let last = ((start + len) / tile_size).ceil() as i32 - 1;
    first..=last.max(first)
}

/// Collision detector - solidity probes and swept vertical resolution
pub struct CollisionDetector;

impl CollisionDetector {
    /// Whether the tile containing a world point is solid
    ///
    /// Points outside the generated world are never solid.
    pub fn is_solid(terrain: &Terrain, world_x: f32, world_y: f32, tile_size: f32) -> bool {
        let tx = (world_x / tile_size).floor() as i32;
        let ty = (world_y / tile_size).floor() as i32;
        terrain.is_solid_tile(tx, ty)
    }

    /// Whether any tile spanned by the box is solid
    ///
    /// Covers all four corners plus every tile between them, so a body
    /// taller than one tile is tested on each row it spans.
    pub fn box_hits_solid(terrain: &Terrain, position: Vec2, size: Vec2, tile_size: f32) -> bool {
        let columns = tile_span(position.x, size.x, tile_size);
        tile_span(position.y, size.y, tile_size)
            .any(|ty| columns.clone().any(|tx| terrain.is_solid_tile(tx, ty)))
    }

    /// Whether the box covers the tile (tx, ty)
    pub fn box_covers_tile(position: Vec2, size: Vec2, tx: i32, ty: i32, tile_size: f32) -> bool {
        tile_span(position.x, size.x, tile_size).contains(&tx)
            && tile_span(position.y, size.y, tile_size).contains(&ty)
    }

    /// Resolve a vertical move of `dy` world pixels
    ///
    /// Every row the box would newly enter is checked in order of travel,
    /// so the result does not depend on speed. Returns the snapped `y` of
    /// the first blocking row, or None when the whole move is clear:
    /// - moving down, the box bottom lands on the row's top edge
    /// - moving up, the box top touches the row's bottom edge
    pub fn sweep_vertical(
        terrain: &Terrain,
        position: Vec2,
        size: Vec2,
        dy: f32,
        tile_size: f32,
    ) -> Option<f32> {
        if dy == 0.0 {
            return None;
        }

        let columns = tile_span(position.x, size.x, tile_size);
        let row_blocked = |ty: i32| columns.clone().any(|tx| terrain.is_solid_tile(tx, ty));

        let current = tile_span(position.y, size.y, tile_size);
        let candidate = tile_span(position.y + dy, size.y, tile_size);

        if dy < 0.0 {
            (*candidate.start()..*current.start())
                .rev()
                .find(|&ty| row_blocked(ty))
                .map(|ty| (ty + 1) as f32 * tile_size)
        } else {
            (*current.end() + 1..=*candidate.end())
                .find(|&ty| row_blocked(ty))
                .map(|ty| ty as f32 * tile_size - size.y)
        }
    }
}
