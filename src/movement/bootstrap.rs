//! Movement domain: player bootstrap.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, MovementInput, MovementState, Player};

pub const PLAYER_SIZE: Vec2 = Vec2::new(0.5, 1.0);
pub const PLAYER_SPAWN: Vec2 = Vec2::new(0.0, 1.0);

pub(crate) fn spawn_player(mut commands: Commands) {
    commands.spawn((
        // Identity & Movement
        (Player, MovementState::default(), MovementInput::default()),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_translation(PLAYER_SPAWN.extend(0.0)),
        // Physics: gravity and collision resolution come from avian,
        // the controller only writes velocity
        (
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Wall]),
        ),
    ));

    info!("Spawned player at {}", PLAYER_SPAWN);
}
