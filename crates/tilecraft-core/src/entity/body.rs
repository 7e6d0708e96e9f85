use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Horizontal direction a body looks in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// -1.0 for left, +1.0 for right
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

/// A movable axis-aligned box simulated against the tile grid
///
/// `position` is the bottom-left corner; the box covers
/// `[x, x + size.x) × [y, y + size.y)`. Positive `velocity.y` is upward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub position: Vec2,
    pub size: Vec2,
    pub velocity: Vec2,
    pub on_ground: bool,
    pub facing: Facing,
}

impl Body {
    /// Create a body at rest, airborne until the first physics step
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            size,
            velocity: Vec2::ZERO,
            on_ground: false,
            facing: Facing::default(),
        }
    }

    pub fn center(&self) -> Vec2 {
        self.position + self.size * 0.5
    }

    /// Move to `position` at rest, airborne until the next physics step
    pub fn place_at(&mut self, position: Vec2) {
        self.position = position;
        self.velocity = Vec2::ZERO;
        self.on_ground = false;
    }
}

/// Handle for a non-player body, in spawn order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BodyId(pub usize);
