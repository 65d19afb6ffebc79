//! Movement domain: keyboard sampling into the control intent.

use bevy::prelude::*;

use crate::movement::components::Direction;
use crate::movement::resources::ControlIntent;

/// Sample the keyboard every render frame. When several direction keys are
/// held the first match wins, in a fixed up/down/left/right order.
pub(crate) fn sample_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut intent: ResMut<ControlIntent>,
) {
    intent.direction = if keyboard.pressed(KeyCode::ArrowUp) || keyboard.pressed(KeyCode::KeyW) {
        Some(Direction::Up)
    } else if keyboard.pressed(KeyCode::ArrowDown) || keyboard.pressed(KeyCode::KeyS) {
        Some(Direction::Down)
    } else if keyboard.pressed(KeyCode::ArrowLeft) || keyboard.pressed(KeyCode::KeyA) {
        Some(Direction::Left)
    } else if keyboard.pressed(KeyCode::ArrowRight) || keyboard.pressed(KeyCode::KeyD) {
        Some(Direction::Right)
    } else {
        None
    };

    if keyboard.just_pressed(KeyCode::Space) {
        intent.place_bomb = true;
    }
}
