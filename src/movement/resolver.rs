//! Movement domain: horizontal velocity resolution on the physics tick.
//!
//! Velocity approaches `horizontal_input * move_speed` exponentially:
//! `v += (target - v) * rate * dt`. Vertical velocity belongs to the logic
//! tick and the physics integrator and is never touched here.

use crate::movement::{BodyVelocity, MovementConfig, MovementState};

/// Target speeds below this magnitude count as "no input" and select the
/// deceleration curve.
pub const TARGET_SPEED_DEAD_ZONE: f32 = 0.01;

pub fn accel_rate(config: &MovementConfig, grounded: bool, target_speed: f32) -> f32 {
    let accelerating = target_speed.abs() > TARGET_SPEED_DEAD_ZONE;
    match (grounded, accelerating) {
        (true, true) => config.acceleration,
        (true, false) => config.deceleration,
        (false, true) => config.air_acceleration,
        (false, false) => config.air_deceleration,
    }
}

/// One step of the approach curve. Overshoots only when `rate * dt > 1`.
pub fn approach(current: f32, target: f32, rate: f32, dt: f32) -> f32 {
    current + (target - current) * rate * dt
}

/// Apply the horizontal curve to `body` and return the new horizontal speed.
pub fn resolve_horizontal(
    state: &MovementState,
    config: &MovementConfig,
    body: &mut impl BodyVelocity,
    fixed_dt: f32,
) -> f32 {
    let target_speed = state.horizontal_input * config.move_speed;
    let rate = accel_rate(config, state.is_grounded, target_speed);
    let vx = approach(body.velocity().x, target_speed, rate, fixed_dt);
    body.set_horizontal(vx);
    vx
}
