//! Sprites domain: render-space mapping and cosmetic feedback systems.
//!
//! Simulation state lives in a y-down pixel space anchored at the arena's
//! top-left corner. Everything here translates that into Bevy's y-up world
//! space and dresses the flat-color quads up enough to read without textures.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::bombs::{Bomb, BombArmedEvent, BombExplodedEvent};
use crate::config::GameTuning;
use crate::core::SessionScoped;
use crate::movement::{Direction, MovementState, PixelPosition, Player};
use crate::sprites::layers::Z_EFFECTS;

const CAMERA_LERP_RATE: f32 = 6.0;
const FLASH_SECONDS: f32 = 0.25;

/// Map a y-down logical pixel coordinate (top-left of a tile-sized square)
/// to the world-space center of that square.
pub(crate) fn logical_to_world(x: f32, y: f32, tile: f32, z: f32) -> Vec3 {
    Vec3::new(x + tile / 2.0, -(y + tile / 2.0), z)
}

/// World-space center of a grid cell.
pub(crate) fn cell_translation(row: usize, col: usize, tile: f32, z: f32) -> Vec3 {
    logical_to_world(col as f32 * tile, row as f32 * tile, tile, z)
}

/// Short-lived quad left behind by an expired bomb. Purely visual.
#[derive(Component, Debug)]
pub struct ExplosionFlash {
    pub age: f32,
}

pub(crate) fn sync_transforms(
    tuning: Res<GameTuning>,
    mut movers: Query<(&PixelPosition, &mut Transform)>,
) {
    let tile = tuning.world.tile_size;
    for (position, mut transform) in &mut movers {
        let z = transform.translation.z;
        transform.translation = logical_to_world(position.x, position.y, tile, z);
    }
}

pub(crate) fn animate_player_sprite(
    mut players: Query<(&MovementState, &mut Sprite), With<Player>>,
) {
    for (state, mut sprite) in &mut players {
        // Walk cycle as a brightness bob, plus a per-facing tint shift.
        let bob = if state.moving {
            match state.walk.frame % 3 {
                0 => 1.0,
                1 => 0.86,
                _ => 0.93,
            }
        } else {
            1.0
        };
        let warm = match state.facing {
            Direction::Up => 0.88,
            Direction::Down => 1.0,
            Direction::Left => 0.94,
            Direction::Right => 0.94,
        };
        sprite.color = Color::srgb(0.92 * bob * warm, 0.95 * bob, 0.98 * bob);
    }
}

pub(crate) fn animate_bomb_sprites(mut bombs: Query<(&Bomb, &mut Sprite)>) {
    let base = Color::srgb(0.16, 0.16, 0.18);
    let hot = Color::srgb(0.85, 0.32, 0.13);
    for (bomb, mut sprite) in &mut bombs {
        let pulse = bomb.fuse.frame as f32 / bomb.fuse.frames as f32;
        let urgency = bomb.fuse_ticks as f32 / bomb.fuse_limit.max(1) as f32;
        sprite.color = base.mix(&hot, 0.4 * pulse + 0.6 * urgency);
    }
}

/// Armed bombs fill more of their tile, matching the moment the cell
/// starts blocking movement.
pub(crate) fn restyle_armed_bombs(
    tuning: Res<GameTuning>,
    mut armed: MessageReader<BombArmedEvent>,
    mut bombs: Query<(&Bomb, &mut Sprite)>,
) {
    let tile = tuning.world.tile_size;
    for event in armed.read() {
        for (bomb, mut sprite) in &mut bombs {
            if bomb.cell == event.cell {
                sprite.custom_size = Some(Vec2::splat(tile * 0.85));
            }
        }
    }
}

pub(crate) fn camera_follow(
    time: Res<Time>,
    players: Query<&Transform, (With<Player>, Without<Camera2d>)>,
    mut cameras: Query<&mut Transform, With<Camera2d>>,
) {
    let Ok(player) = players.single() else {
        return;
    };
    let blend = 1.0 - (-CAMERA_LERP_RATE * time.delta_secs()).exp();
    for mut camera in &mut cameras {
        let target = Vec3::new(
            player.translation.x,
            player.translation.y,
            camera.translation.z,
        );
        camera.translation = camera.translation.lerp(target, blend);
    }
}

pub(crate) fn spawn_explosion_flashes(
    tuning: Res<GameTuning>,
    mut exploded: MessageReader<BombExplodedEvent>,
    mut commands: Commands,
) {
    let tile = tuning.world.tile_size;
    let flash_color = Color::srgb(0.98, 0.75, 0.25);
    for event in exploded.read() {
        let (row, col) = event.cell;
        commands.spawn((
            ExplosionFlash { age: 0.0 },
            SessionScoped,
            Sprite {
                color: flash_color,
                custom_size: Some(Vec2::splat(tile)),
                ..default()
            },
            Transform::from_translation(cell_translation(row, col, tile, Z_EFFECTS)),
        ));
    }
}

pub(crate) fn fade_explosion_flashes(
    time: Res<Time>,
    mut flashes: Query<(Entity, &mut ExplosionFlash, &mut Sprite)>,
    mut commands: Commands,
) {
    let dt = time.delta_secs();
    let flash_color = Color::srgb(0.98, 0.75, 0.25);
    for (entity, mut flash, mut sprite) in &mut flashes {
        flash.age += dt;
        if flash.age >= FLASH_SECONDS {
            commands.entity(entity).despawn();
            continue;
        }
        sprite.color = flash_color.with_alpha(1.0 - flash.age / FLASH_SECONDS);
    }
}
