//! Movement domain: input sampling for locomotion and the zoom toggle.

use bevy::prelude::*;

use crate::movement::MovementInput;

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<MovementInput>) {
    // Horizontal axis
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }
    input.axis = x;

    input.jump_held = keyboard.pressed(KeyCode::ArrowUp) || keyboard.pressed(KeyCode::KeyK);
    input.jump_just_pressed =
        keyboard.just_pressed(KeyCode::ArrowUp) || keyboard.just_pressed(KeyCode::KeyK);
    input.jump_just_released =
        keyboard.just_released(KeyCode::ArrowUp) || keyboard.just_released(KeyCode::KeyK);

    input.zoom_just_pressed = keyboard.just_pressed(KeyCode::Space);
}
