//! Movement domain: per-frame logic tick.
//!
//! Stage order matters: each stage reads what the previous one wrote.
//! 1. input capture (with wall-jump control blending)
//! 2. contact sensing
//! 3. coyote timer
//! 4. jump buffer (consumes the press edge)
//! 5. ground / coyote jump
//! 6. wall slide
//! 7. wall jump
//! 8. jump cut (consumes the release edge)
//!
//! Both jump edges are taken by the stage that reads them, so no edge
//! survives the tick.
//!
//! A ground jump in stage 5 zeroes the buffer, so it always wins over a wall
//! jump in the same tick.

use bevy::prelude::*;

use crate::movement::actions::{jump, wall_jump};
use crate::movement::wall_slide::{WallSlideTransition, update_wall_slide};
use crate::movement::{
    BodyVelocity, ContactFlags, Facing, MovementConfig, MovementInput, MovementState,
    OverlapQuery, sense_contacts,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JumpKind {
    Ground,
    /// Carries the horizontal push sign.
    Wall(f32),
}

/// What happened during one logic tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StepReport {
    pub jump: Option<JumpKind>,
    pub jump_cut: bool,
    pub wall_slide: WallSlideTransition,
}

/// Counters only ever count down to zero.
pub(crate) fn countdown(counter: f32, dt: f32) -> f32 {
    (counter - dt).max(0.0)
}

fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() && dt > 0.0 { dt } else { 0.0 }
}

/// Fraction of player control available while the wall-jump delay runs:
/// 0 at the start of the window, 1 once it has elapsed.
pub fn control_return(remaining: f32, delay: f32) -> f32 {
    if delay <= 0.0 {
        return 1.0;
    }
    (1.0 - remaining / delay).clamp(0.0, 1.0)
}

/// Run one logic tick for a single character.
pub fn step_logic(
    state: &mut MovementState,
    config: &MovementConfig,
    input: &mut MovementInput,
    query: &impl OverlapQuery,
    position: Vec2,
    body: &mut impl BodyVelocity,
    dt: f32,
) -> StepReport {
    let dt = sanitize_dt(dt);
    let mut report = StepReport::default();

    capture_input(state, config, input, dt);

    let contacts = sense_contacts(query, position, &config.probes);
    apply_contacts(state, contacts, body.velocity().y);

    tick_coyote(state, config, dt);
    tick_jump_buffer(state, config, input, dt);

    if try_ground_jump(state, config, body) {
        report.jump = Some(JumpKind::Ground);
    }

    report.wall_slide = update_wall_slide(state, config, body, dt);

    if let Some(sign) = try_wall_jump(state, config, body) {
        report.jump = Some(JumpKind::Wall(sign));
    }

    report.jump_cut = apply_jump_cut(state, config, input, body);

    update_facing(state);

    report
}

/// Stage 1. Full control outside the wall-jump window; inside it the current
/// intent is pulled toward the raw axis as control returns.
pub fn capture_input(
    state: &mut MovementState,
    config: &MovementConfig,
    input: &MovementInput,
    dt: f32,
) {
    // A locked character keeps its last intent.
    let raw = input.raw_horizontal().filter(|_| state.can_move);

    if state.wall_jump_control_timer > 0.0 {
        state.wall_jump_control_timer = countdown(state.wall_jump_control_timer, dt);
        let control = control_return(
            state.wall_jump_control_timer,
            config.wall_jump_control_delay,
        );

        if let Some(raw) = raw {
            state.horizontal_input += (raw - state.horizontal_input) * control;
        }
    } else if let Some(raw) = raw {
        state.horizontal_input = raw;
    }
}

/// Stage 2. Landing while not rising ends the jump.
pub fn apply_contacts(state: &mut MovementState, contacts: ContactFlags, vertical_velocity: f32) {
    state.is_grounded = contacts.grounded;
    state.is_touching_wall_left = contacts.wall_left;
    state.is_touching_wall_right = contacts.wall_right;

    if state.is_grounded && vertical_velocity <= 0.0 {
        state.is_jumping = false;
    }
}

/// Stage 3.
pub fn tick_coyote(state: &mut MovementState, config: &MovementConfig, dt: f32) {
    state.coyote_time_counter = if state.is_grounded {
        config.coyote_time
    } else {
        countdown(state.coyote_time_counter, dt)
    };
}

/// Stage 4. A press refills the buffer before this tick's decay.
pub fn tick_jump_buffer(
    state: &mut MovementState,
    config: &MovementConfig,
    input: &mut MovementInput,
    dt: f32,
) {
    if input.take_jump_pressed() {
        state.jump_buffer_counter = config.jump_buffer_time;
    }
    state.jump_buffer_counter = countdown(state.jump_buffer_counter, dt);
}

/// Stage 5.
pub fn try_ground_jump(
    state: &mut MovementState,
    config: &MovementConfig,
    body: &mut impl BodyVelocity,
) -> bool {
    if state.jump_buffer_counter > 0.0 && state.coyote_time_counter > 0.0 && !state.is_jumping {
        jump(state, config, body);
        return true;
    }
    false
}

/// Stage 7. Returns the push sign when a wall jump fires.
pub fn try_wall_jump(
    state: &mut MovementState,
    config: &MovementConfig,
    body: &mut impl BodyVelocity,
) -> Option<f32> {
    if state.jump_buffer_counter > 0.0 && state.is_wall_sliding {
        return Some(wall_jump(state, config, body));
    }
    None
}

/// Stage 8. Releasing jump while rising shortens the jump and spends any
/// remaining coyote time so the cut cannot be followed by a buffered jump.
pub fn apply_jump_cut(
    state: &mut MovementState,
    config: &MovementConfig,
    input: &mut MovementInput,
    body: &mut impl BodyVelocity,
) -> bool {
    if !input.take_jump_released() {
        return false;
    }

    let vy = body.velocity().y;
    if vy > 0.0 && state.is_jumping {
        body.set_vertical(vy * config.jump_cut_multiplier);
        state.coyote_time_counter = 0.0;
        return true;
    }
    false
}

/// Facing follows the sign of horizontal intent and holds at 0.
pub fn update_facing(state: &mut MovementState) {
    if state.horizontal_input > 0.0 {
        state.facing = Facing::Right;
    } else if state.horizontal_input < 0.0 {
        state.facing = Facing::Left;
    }
}
