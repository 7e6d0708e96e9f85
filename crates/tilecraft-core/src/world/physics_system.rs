//! Physics system - movement, gravity, jumping, collision for bodies

use glam::Vec2;

use crate::config::SimConfig;
use crate::entity::{Body, MoveIntent};
use crate::world::collision::CollisionDetector;
use crate::world::terrain::Terrain;

/// What a body wants to do this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BodyIntent {
    pub movement: MoveIntent,
    pub jump: bool,
}

/// Physics system - integrates one body per call against the tile grid
pub struct PhysicsSystem;

impl PhysicsSystem {
    /// Advance a body by one tick
    ///
    /// 1. Horizontal: velocity comes straight from the movement intent. The
    ///    move is taken in full or not at all; a blocked move leaves x and
    ///    the velocity untouched.
    /// 2. Vertical: jump (grounded only), gravity, terminal clamp, then a
    ///    swept move that snaps exactly onto the first blocking row.
    pub fn step(body: &mut Body, intent: BodyIntent, terrain: &Terrain, config: &SimConfig) {
        let tile_size = config.tile_size;
        let start = body.position;

        // 1. Horizontal movement
        if let Some(facing) = intent.movement.facing() {
            body.facing = facing;
        }
        body.velocity.x = intent.movement.direction() * config.move_speed;

        if body.velocity.x != 0.0 {
            let candidate = Vec2::new(body.position.x + body.velocity.x, body.position.y);
            if !CollisionDetector::box_hits_solid(terrain, candidate, body.size, tile_size) {
                body.position.x = candidate.x;
            }
        }

        // 2. Vertical movement
        if intent.jump && body.on_ground {
            body.velocity.y = config.jump_strength;
            body.on_ground = false;
            log::debug!("Body jumped at {:?}", body.position);
        }

        body.velocity.y = (body.velocity.y - config.gravity).max(-config.terminal_velocity);
        let dy = body.velocity.y;

        match CollisionDetector::sweep_vertical(terrain, body.position, body.size, dy, tile_size) {
            Some(snapped_y) => {
                body.position.y = snapped_y;
                body.velocity.y = 0.0;
                body.on_ground = dy < 0.0;
            }
            None => {
                body.position.y += dy;
                body.on_ground = false;
            }
        }

        if body.position != start {
            log::trace!(
                "Body: {:?} → {:?} (vel: {:?}, on_ground: {})",
                start,
                body.position,
                body.velocity,
                body.on_ground
            );
        }
    }
}
