use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::{body::Body, inventory::Inventory};
use crate::config::SimConfig;

/// The player entity: a physics body that carries an inventory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub body: Body,
    pub inventory: Inventory,
}

impl Player {
    /// Create a new player at the specified position with an empty inventory
    pub fn new(position: Vec2, config: &SimConfig) -> Self {
        let (width, height) = config.body_size;
        Player {
            body: Body::new(position, Vec2::new(width, height)),
            inventory: Inventory::new(config.inventory_slots, config.hotbar_slots),
        }
    }

    /// Move the player to a new spawn position, at rest
    pub fn respawn(&mut self, position: Vec2) {
        self.body.place_at(position);
        log::debug!("Player respawned at {:?}", position);
    }
}
