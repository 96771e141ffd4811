//! Data definitions for the movement RON file.
//!
//! These structs mirror the structure of assets/data/movement.ron and are only
//! used for deserialization. Validation turns them into the runtime
//! `MovementConfig` resource.

use serde::{Deserialize, Serialize};

pub const MOVEMENT_SCHEMA_VERSION: u32 = 1;

// ============================================================================
// Movement tuning (movement.ron)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementConfigDef {
    pub schema_version: u32,

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
    /// Not required to be normalized; validation normalizes it.
    pub wall_jump_direction: (f32, f32),
    pub wall_stick_time: f32,
    pub wall_jump_control_delay: f32,

    pub probes: ProbeLayoutDef,
}

impl Default for MovementConfigDef {
    fn default() -> Self {
        Self {
            schema_version: MOVEMENT_SCHEMA_VERSION,
            move_speed: 8.0,
            acceleration: 15.0,
            deceleration: 15.0,
            air_acceleration: 10.0,
            air_deceleration: 8.0,
            jump_power: 15.0,
            jump_cut_multiplier: 0.5,
            coyote_time: 0.15,
            jump_buffer_time: 0.2,
            wall_slide_speed: 2.0,
            wall_jump_power: 12.0,
            wall_jump_direction: (1.0, 1.5),
            wall_stick_time: 0.25,
            wall_jump_control_delay: 0.15,
            probes: ProbeLayoutDef::default(),
        }
    }
}

/// Probe boxes relative to the character origin. An offset of `None` leaves
/// that probe unconfigured, which reads as "no contact".
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ProbeLayoutDef {
    pub ground_offset: Option<(f32, f32)>,
    pub ground_size: (f32, f32),
    pub wall_left_offset: Option<(f32, f32)>,
    pub wall_right_offset: Option<(f32, f32)>,
    pub wall_size: (f32, f32),
}

impl Default for ProbeLayoutDef {
    fn default() -> Self {
        Self {
            ground_offset: Some((0.0, -0.5)),
            ground_size: (0.49, 0.03),
            wall_left_offset: Some((-0.26, 0.0)),
            wall_right_offset: Some((0.26, 0.0)),
            wall_size: (0.03, 0.5),
        }
    }
}
