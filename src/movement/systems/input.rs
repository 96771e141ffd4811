//! Movement domain: keyboard sampling into the per-character input buffer.

use bevy::prelude::*;

use crate::movement::{MovementInput, Player};

const JUMP_KEYS: [KeyCode; 2] = [KeyCode::Space, KeyCode::KeyK];

pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut query: Query<&mut MovementInput, With<Player>>,
) {
    // Horizontal axis
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    // Vertical axis is sampled for completeness; the controller ignores it
    let mut y = 0.0;
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        y += 1.0;
    }

    let pressed = keyboard.any_just_pressed(JUMP_KEYS);
    let released = keyboard.any_just_released(JUMP_KEYS);

    for mut input in &mut query {
        input.axis = Some(Vec2::new(x, y));
        // Edges latch until the logic tick takes them
        if pressed {
            input.press_jump();
        }
        if released {
            input.release_jump();
        }
    }
}
