//! Player input state
//!
//! The only state written from outside the simulation. Movement is
//! level-triggered; jump, action and slot selection are latches that the
//! tick reads and clears exactly once.

use serde::{Deserialize, Serialize};

use super::body::Facing;

/// Horizontal movement intent
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveIntent {
    Left,
    Right,
    #[default]
    None,
}

impl MoveIntent {
    /// -1, 0 or +1
    pub fn direction(self) -> f32 {
        match self {
            MoveIntent::Left => -1.0,
            MoveIntent::Right => 1.0,
            MoveIntent::None => 0.0,
        }
    }

    /// Facing implied by this intent (None keeps the current facing)
    pub fn facing(self) -> Option<Facing> {
        match self {
            MoveIntent::Left => Some(Facing::Left),
            MoveIntent::Right => Some(Facing::Right),
            MoveIntent::None => None,
        }
    }
}

/// Tracks current input state for player control
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    movement: MoveIntent,
    jump: bool,
    action: bool,
    slot_selection: Option<usize>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_movement_intent(&mut self, movement: MoveIntent) {
        self.movement = movement;
    }

    pub fn movement(&self) -> MoveIntent {
        self.movement
    }

    /// Request a jump on the next tick (effective only when grounded)
    pub fn trigger_jump(&mut self) {
        self.jump = true;
    }

    /// Request one mine/place action on the next tick
    pub fn trigger_action(&mut self) {
        self.action = true;
    }

    /// Request a hotbar slot change on the next tick
    pub fn select_slot(&mut self, index: usize) {
        self.slot_selection = Some(index);
    }

    pub fn take_jump(&mut self) -> bool {
        std::mem::take(&mut self.jump)
    }

    pub fn take_action(&mut self) -> bool {
        std::mem::take(&mut self.action)
    }

    pub fn take_slot_selection(&mut self) -> Option<usize> {
        self.slot_selection.take()
    }
}
