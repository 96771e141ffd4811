//! Movement domain: practice room for tuning movement feel.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Ground, Wall};

/// Static block in the practice room.
pub(super) struct Block {
    pub(super) center: Vec2,
    pub(super) size: Vec2,
    pub(super) kind: BlockKind,
}

#[derive(Clone, Copy)]
pub(super) enum BlockKind {
    Floor,
    Platform,
    Wall,
}

impl BlockKind {
    pub(super) fn layer(self) -> GameLayer {
        match self {
            BlockKind::Floor | BlockKind::Platform => GameLayer::Ground,
            BlockKind::Wall => GameLayer::Wall,
        }
    }
}

pub(super) const ROOM: [Block; 8] = [
    Block {
        center: Vec2::new(0.0, -4.0),
        size: Vec2::new(20.0, 1.0),
        kind: BlockKind::Floor,
    },
    // Side walls for wall jumping
    Block {
        center: Vec2::new(-10.5, 1.5),
        size: Vec2::new(1.0, 12.0),
        kind: BlockKind::Wall,
    },
    Block {
        center: Vec2::new(10.5, 1.5),
        size: Vec2::new(1.0, 12.0),
        kind: BlockKind::Wall,
    },
    Block {
        center: Vec2::new(-6.0, -1.0),
        size: Vec2::new(3.5, 0.5),
        kind: BlockKind::Platform,
    },
    Block {
        center: Vec2::new(6.0, 1.0),
        size: Vec2::new(3.5, 0.5),
        kind: BlockKind::Platform,
    },
    Block {
        center: Vec2::new(0.0, 3.5),
        size: Vec2::new(3.0, 0.5),
        kind: BlockKind::Platform,
    },
    // Narrow pillar for wall jump chains
    Block {
        center: Vec2::new(-2.5, -1.5),
        size: Vec2::new(0.75, 4.0),
        kind: BlockKind::Wall,
    },
    // Standable cap flush with the pillar top
    Block {
        center: Vec2::new(-2.5, 0.45),
        size: Vec2::new(0.75, 0.1),
        kind: BlockKind::Platform,
    },
];

pub(crate) fn spawn_test_room(mut commands: Commands) {
    for block in &ROOM {
        let color = match block.kind {
            BlockKind::Floor => Color::srgb(0.4, 0.5, 0.4),
            BlockKind::Platform => Color::srgb(0.5, 0.4, 0.3),
            BlockKind::Wall => Color::srgb(0.3, 0.3, 0.4),
        };

        let mut entity = commands.spawn((
            Sprite {
                color,
                custom_size: Some(block.size),
                ..default()
            },
            Transform::from_translation(block.center.extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(block.size.x, block.size.y),
            CollisionLayers::new(block.kind.layer(), [GameLayer::Player, GameLayer::Default]),
        ));

        match block.kind {
            BlockKind::Floor | BlockKind::Platform => entity.insert(Ground),
            BlockKind::Wall => entity.insert(Wall),
        };
    }

    debug!("Spawned practice room with {} blocks", ROOM.len());
}
