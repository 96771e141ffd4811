//! Movement domain: logic and physics cadence systems.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    Facing, JumpKind, MovementConfig, MovementInput, MovementState, Player, WallSlideTransition,
    resolve_horizontal, step_logic,
};

/// Variable-rate logic tick: input, sensing, timers, jumps, wall slide.
pub(crate) fn step_movement_logic(
    time: Res<Time>,
    config: Res<MovementConfig>,
    spatial_query: SpatialQuery,
    mut query: Query<
        (
            Entity,
            &Transform,
            &mut MovementState,
            &mut MovementInput,
            &mut LinearVelocity,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();

    for (entity, transform, mut state, mut input, mut velocity) in &mut query {
        let report = step_logic(
            &mut state,
            &config,
            &mut input,
            &spatial_query,
            transform.translation.truncate(),
            &mut *velocity,
            dt,
        );

        match report.jump {
            Some(JumpKind::Ground) => debug!(
                "{}: jump, coyote_left={:.3}, velocity={}",
                entity, state.coyote_time_counter, velocity.0
            ),
            Some(JumpKind::Wall(sign)) => debug!(
                "{}: wall jump, push={}, velocity={}",
                entity, sign, velocity.0
            ),
            None => {}
        }
        if report.jump_cut {
            debug!("{}: jump cut, vy={:.2}", entity, velocity.y);
        }
        match report.wall_slide {
            WallSlideTransition::Entered => debug!(
                "{}: wall slide started on {:?} wall",
                entity, state.last_wall_direction
            ),
            WallSlideTransition::Exited => debug!("{}: wall slide ended", entity),
            WallSlideTransition::None => {}
        }
    }
}

/// Fixed-rate physics tick: horizontal acceleration curve.
pub(crate) fn resolve_velocity(
    time: Res<Time>,
    config: Res<MovementConfig>,
    mut query: Query<(&MovementState, &mut LinearVelocity), With<Player>>,
) {
    let fixed_dt = time.delta_secs();

    for (state, mut velocity) in &mut query {
        resolve_horizontal(state, &config, &mut *velocity, fixed_dt);
    }
}

/// Sprite orientation follows the controller's facing.
pub(crate) fn apply_sprite_facing(
    mut query: Query<(&MovementState, &mut Sprite), (With<Player>, Changed<MovementState>)>,
) {
    for (state, mut sprite) in &mut query {
        let flip = state.facing == Facing::Left;
        if sprite.flip_x != flip {
            sprite.flip_x = flip;
        }
    }
}
