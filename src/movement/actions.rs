//! Movement domain: jump and wall-jump actions.

use crate::movement::{BodyVelocity, MovementConfig, MovementState};

/// Ground (or coyote) jump. Horizontal velocity is left alone.
pub fn jump(state: &mut MovementState, config: &MovementConfig, body: &mut impl BodyVelocity) {
    body.set_vertical(config.jump_power);

    state.jump_buffer_counter = 0.0;
    state.coyote_time_counter = 0.0;
    state.is_jumping = true;

    // A jump leaves the wall, so the stick cannot pin this tick's velocity.
    state.is_wall_sliding = false;
    state.wall_stick_counter = 0.0;
}

/// Horizontal sign pushing away from the wall: -1 off a right wall, 1 off a
/// left wall. Falls back to the last wall slid on when contact was lost.
pub fn wall_jump_sign(state: &MovementState) -> f32 {
    if state.is_touching_wall_right {
        -1.0
    } else if state.is_touching_wall_left {
        1.0
    } else {
        -state.last_wall_direction.sign()
    }
}

/// Launch off the wall, overriding the whole velocity. Returns the push sign.
pub fn wall_jump(
    state: &mut MovementState,
    config: &MovementConfig,
    body: &mut impl BodyVelocity,
) -> f32 {
    let sign = wall_jump_sign(state);
    body.set_velocity(config.wall_jump_velocity(sign));

    state.jump_buffer_counter = 0.0;
    state.is_jumping = true;
    state.is_wall_sliding = false;
    state.wall_stick_counter = 0.0;

    // Input starts fully pointed away from the wall and blends back to the
    // player's axis over the control delay.
    state.wall_jump_control_timer = config.wall_jump_control_delay;
    state.horizontal_input = sign;

    sign
}
