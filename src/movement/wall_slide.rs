//! Movement domain: wall stick and wall slide sub-state.
//!
//! `Idle -> Sticking` when an airborne, falling character pushes into a wall.
//! `Sticking` pins vertical velocity at 0 until the stick timer runs out, then
//! `Sliding` holds it at `-wall_slide_speed` while contact and push last.
//! Anything else returns to `Idle`, and only `Idle` can re-enter.

use crate::movement::logic::countdown;
use crate::movement::{BodyVelocity, MovementConfig, MovementState, WallSide};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WallSlidePhase {
    #[default]
    Idle,
    Sticking,
    Sliding,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WallSlideTransition {
    #[default]
    None,
    Entered,
    Exited,
}

/// Airborne, touching a wall, pushing toward it and falling.
pub fn can_enter_wall_slide(state: &MovementState, vertical_velocity: f32) -> bool {
    state.is_touching_wall() && state.is_moving_toward_wall() && vertical_velocity < 0.0
}

pub fn update_wall_slide(
    state: &mut MovementState,
    config: &MovementConfig,
    body: &mut impl BodyVelocity,
    dt: f32,
) -> WallSlideTransition {
    if !state.is_wall_sliding {
        if !can_enter_wall_slide(state, body.velocity().y) {
            return WallSlideTransition::None;
        }

        state.is_wall_sliding = true;
        state.wall_stick_counter = config.wall_stick_time;
        state.last_wall_direction = if state.is_touching_wall_right {
            WallSide::Right
        } else {
            WallSide::Left
        };
        body.set_vertical(0.0);
        return WallSlideTransition::Entered;
    }

    if state.is_grounded {
        exit_wall_slide(state);
        return WallSlideTransition::Exited;
    }

    if state.wall_stick_counter > 0.0 {
        state.wall_stick_counter = countdown(state.wall_stick_counter, dt);
        body.set_vertical(0.0);
    } else if state.is_touching_wall() && state.is_moving_toward_wall() {
        body.set_vertical(-config.wall_slide_speed);
    } else {
        exit_wall_slide(state);
        return WallSlideTransition::Exited;
    }

    WallSlideTransition::None
}

fn exit_wall_slide(state: &mut MovementState) {
    state.is_wall_sliding = false;
    state.wall_stick_counter = 0.0;
}
