//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;
use serde::Serialize;

use crate::movement::{ContactFlags, WallSlidePhase};

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum WallSide {
    Left,
    #[default]
    Right,
}

impl WallSide {
    /// -1 for left, 1 for right.
    pub fn sign(self) -> f32 {
        match self {
            WallSide::Left => -1.0,
            WallSide::Right => 1.0,
        }
    }
}

/// Per-character movement state. Owned by the character entity and only
/// mutated by the logic tick and the velocity resolver.
#[derive(Component, Debug, Clone, PartialEq, Serialize)]
pub struct MovementState {
    /// Horizontal intent in [-1, 1] after wall-jump blending.
    pub horizontal_input: f32,
    pub is_grounded: bool,
    pub is_touching_wall_left: bool,
    pub is_touching_wall_right: bool,
    pub is_wall_sliding: bool,
    pub is_jumping: bool,
    /// External gate, e.g. a cutscene lock. Freezes horizontal input capture.
    pub can_move: bool,
    pub last_wall_direction: WallSide,
    pub facing: Facing,
    pub coyote_time_counter: f32,
    pub jump_buffer_counter: f32,
    pub wall_stick_counter: f32,
    pub wall_jump_control_timer: f32,
}

impl Default for MovementState {
    fn default() -> Self {
        Self {
            horizontal_input: 0.0,
            is_grounded: false,
            is_touching_wall_left: false,
            is_touching_wall_right: false,
            is_wall_sliding: false,
            is_jumping: false,
            can_move: true,
            last_wall_direction: WallSide::default(),
            facing: Facing::default(),
            coyote_time_counter: 0.0,
            jump_buffer_counter: 0.0,
            wall_stick_counter: 0.0,
            wall_jump_control_timer: 0.0,
        }
    }
}

impl MovementState {
    pub fn set_can_move(&mut self, can_move: bool) {
        self.can_move = can_move;
    }

    pub fn contacts(&self) -> ContactFlags {
        ContactFlags {
            grounded: self.is_grounded,
            wall_left: self.is_touching_wall_left,
            wall_right: self.is_touching_wall_right,
        }
    }

    /// Touching a wall on either side while airborne.
    pub fn is_touching_wall(&self) -> bool {
        (self.is_touching_wall_left || self.is_touching_wall_right) && !self.is_grounded
    }

    /// Horizontal intent points into a wall that is currently touched.
    pub fn is_moving_toward_wall(&self) -> bool {
        (self.is_touching_wall_right && self.horizontal_input > 0.0)
            || (self.is_touching_wall_left && self.horizontal_input < 0.0)
    }

    pub fn wall_slide_phase(&self) -> WallSlidePhase {
        if !self.is_wall_sliding {
            WallSlidePhase::Idle
        } else if self.wall_stick_counter > 0.0 {
            WallSlidePhase::Sticking
        } else {
            WallSlidePhase::Sliding
        }
    }
}

/// Input edge buffer for one character.
///
/// The input collaborator latches jump edges here between logic ticks; the
/// logic tick consumes each edge exactly once. `axis` is `None` when no input
/// binding is present, which leaves the previous horizontal intent in place.
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct MovementInput {
    pub axis: Option<Vec2>,
    pub jump_pressed: bool,
    pub jump_released: bool,
}

impl MovementInput {
    pub fn press_jump(&mut self) {
        self.jump_pressed = true;
    }

    pub fn release_jump(&mut self) {
        self.jump_released = true;
    }

    /// Raw horizontal axis clamped to [-1, 1]. Non-finite values read as 0.
    pub fn raw_horizontal(&self) -> Option<f32> {
        self.axis.map(|axis| {
            if axis.x.is_finite() {
                axis.x.clamp(-1.0, 1.0)
            } else {
                0.0
            }
        })
    }

    pub fn take_jump_pressed(&mut self) -> bool {
        std::mem::take(&mut self.jump_pressed)
    }

    pub fn take_jump_released(&mut self) -> bool {
        std::mem::take(&mut self.jump_released)
    }
}
