//! Movement domain: platformer character controller.
//!
//! Two cadences drive each character:
//! - `Update` runs the logic tick (input, contact probes, timers, jumps,
//!   wall slide) at the frame rate.
//! - `FixedUpdate` runs the horizontal velocity resolver ahead of avian's
//!   integration step.

mod actions;
mod bootstrap;
mod components;
#[cfg(feature = "dev-tools")]
mod debug;
mod dev;
mod logic;
mod ports;
mod resolver;
mod resources;
mod sensors;
mod systems;
mod wall_slide;

pub use actions::{jump, wall_jump, wall_jump_sign};
pub use bootstrap::{PLAYER_SIZE, PLAYER_SPAWN};
pub use components::{
    Facing, GameLayer, Ground, MovementInput, MovementState, Player, Wall, WallSide,
};
#[cfg(feature = "dev-tools")]
pub use debug::{ProbeBox, ProbeGizmoSettings, ProbeKind, movement_snapshot, probe_boxes};
pub use logic::{
    JumpKind, StepReport, apply_contacts, apply_jump_cut, capture_input, control_return,
    step_logic, tick_coyote, tick_jump_buffer, try_ground_jump, try_wall_jump, update_facing,
};
pub use ports::{BodyVelocity, OverlapQuery};
pub use resolver::{TARGET_SPEED_DEAD_ZONE, accel_rate, approach, resolve_horizontal};
pub use resources::{MovementConfig, ProbeLayout};
pub use sensors::{ContactFlags, sense_contacts};
pub use wall_slide::{
    WallSlidePhase, WallSlideTransition, can_enter_wall_slide, update_wall_slide,
};

use bevy::prelude::*;

use crate::movement::bootstrap::spawn_player;
use crate::movement::dev::spawn_test_room;
use crate::movement::systems::{
    apply_sprite_facing, read_input, resolve_velocity, step_movement_logic,
};

/// Ordering of the logic-cadence movement systems.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovementSet {
    Input,
    Logic,
    Presentation,
}

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementConfig>()
            .configure_sets(
                Update,
                (
                    MovementSet::Input,
                    MovementSet::Logic,
                    MovementSet::Presentation,
                )
                    .chain(),
            )
            .add_systems(Startup, (spawn_test_room, spawn_player))
            .add_systems(Update, read_input.in_set(MovementSet::Input))
            .add_systems(Update, step_movement_logic.in_set(MovementSet::Logic))
            .add_systems(Update, apply_sprite_facing.in_set(MovementSet::Presentation))
            .add_systems(FixedUpdate, resolve_velocity);

        #[cfg(feature = "dev-tools")]
        app.init_resource::<ProbeGizmoSettings>().add_systems(
            Update,
            (
                debug::toggle_probe_gizmos,
                debug::draw_probe_gizmos
                    .run_if(|settings: Res<ProbeGizmoSettings>| settings.enabled),
                debug::log_movement_snapshot,
            )
                .after(MovementSet::Logic),
        );
    }
}
