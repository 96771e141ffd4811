//! Movement domain: immutable tuning resource.

use bevy::prelude::*;

use crate::content::{MovementConfigDef, build_movement_config};

/// Feel parameters for the movement controller. Loaded once at startup and
/// read-only afterwards.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct MovementConfig {
    pub move_speed: f32,
    pub acceleration: f32,
    pub deceleration: f32,
    pub air_acceleration: f32,
    pub air_deceleration: f32,
    pub jump_power: f32,
    pub jump_cut_multiplier: f32,
    pub coyote_time: f32,
    pub jump_buffer_time: f32,
    pub wall_slide_speed: f32,
    pub wall_jump_power: f32,
    /// Unit launch direction off a left-hand wall. `x` is mirrored for walls
    /// on the right.
    pub wall_jump_direction: Vec2,
    pub wall_stick_time: f32,
    pub wall_jump_control_delay: f32,
    pub probes: ProbeLayout,
}

impl Default for MovementConfig {
    fn default() -> Self {
        build_movement_config(&MovementConfigDef::default()).0
    }
}

impl MovementConfig {
    /// Launch velocity of a wall jump pushing in `sign` (-1 left, 1 right).
    pub fn wall_jump_velocity(&self, sign: f32) -> Vec2 {
        Vec2::new(
            self.wall_jump_direction.x * sign * self.wall_jump_power,
            self.wall_jump_direction.y * self.wall_jump_power,
        )
    }
}

/// Where the contact probes sit relative to the character origin.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeLayout {
    pub ground_offset: Option<Vec2>,
    pub ground_size: Vec2,
    pub wall_left_offset: Option<Vec2>,
    pub wall_right_offset: Option<Vec2>,
    pub wall_size: Vec2,
}
