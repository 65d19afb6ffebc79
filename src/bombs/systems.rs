//! Bombs domain: placement, arming, and fuse systems.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::bombs::components::Bomb;
use crate::bombs::events::{BombArmedEvent, BombExplodedEvent, BombPlacedEvent};
use crate::config::GameTuning;
use crate::core::{SessionScoped, SessionStats};
use crate::level::{GridCell, LevelMatrix, rects_overlap};
use crate::movement::{ControlIntent, PixelPosition, Player};
use crate::sprites::Z_BOMBS;
use crate::sprites::render::cell_translation;

/// Consume a latched bomb request. The request is spent whether or not a
/// bomb appears; failed preconditions reject silently.
pub(crate) fn handle_bomb_requests(
    tuning: Res<GameTuning>,
    mut intent: ResMut<ControlIntent>,
    mut matrix: ResMut<LevelMatrix>,
    mut stats: ResMut<SessionStats>,
    mut placed: MessageWriter<BombPlacedEvent>,
    mut players: Query<(Entity, &PixelPosition, &mut Player)>,
    mut commands: Commands,
) {
    if !intent.place_bomb {
        return;
    }
    intent.place_bomb = false;

    let tile = matrix.tile_size();
    let bomb_color = Color::srgb(0.16, 0.16, 0.18);
    for (owner, position, mut player) in &mut players {
        if !player.can_plant() {
            continue;
        }
        let center = position.center(tile);
        let Some((row, col)) = matrix.cell_of_point(center.x, center.y) else {
            continue;
        };

        let bomb = commands
            .spawn((
                Bomb::new((row, col), owner, &tuning.bombs),
                SessionScoped,
                Sprite {
                    color: bomb_color,
                    custom_size: Some(Vec2::splat(tile * 0.75)),
                    ..default()
                },
                Transform::from_translation(cell_translation(row, col, tile, Z_BOMBS)),
            ))
            .id();

        if !matrix.reserve_for_bomb(row, col, bomb) {
            // Cell occupied: the placement never happened.
            commands.entity(bomb).despawn();
            continue;
        }

        player.bombs_planted += 1;
        stats.bombs_placed += 1;
        placed.write(BombPlacedEvent { cell: (row, col) });
    }
}

/// Flip each placed bomb's cell to blocking once its owner's hitbox has
/// fully left the tile. One-way: walking back on never unblocks it.
pub(crate) fn arm_bombs(
    tuning: Res<GameTuning>,
    mut matrix: ResMut<LevelMatrix>,
    mut armed: MessageWriter<BombArmedEvent>,
    owners: Query<&PixelPosition, With<Player>>,
    bombs: Query<(Entity, &Bomb)>,
) {
    let tile = matrix.tile_size();
    let inset = tuning.player.hitbox_inset;
    for (entity, bomb) in &bombs {
        let (row, col) = bomb.cell;
        if !matches!(matrix.cell(row, col), Some(GridCell::Bomb { armed: false, .. })) {
            continue;
        }
        // An owner that no longer exists counts as having departed.
        let still_on_top = owners
            .get(bomb.owner)
            .map(|position| rects_overlap(matrix.cell_rect(row, col), position.hitbox(tile, inset)))
            .unwrap_or(false);
        if still_on_top {
            continue;
        }
        if matrix.arm_bomb(row, col, entity) {
            armed.write(BombArmedEvent { cell: (row, col) });
        }
    }
}

/// Advance every fuse and expire bombs that have finished their last
/// interval. Expiry releases the matrix cell in the same simulation tick.
pub(crate) fn tick_bombs(
    time: Res<Time>,
    mut matrix: ResMut<LevelMatrix>,
    mut stats: ResMut<SessionStats>,
    mut exploded: MessageWriter<BombExplodedEvent>,
    mut bombs: Query<(Entity, &mut Bomb)>,
    mut owners: Query<&mut Player>,
    mut commands: Commands,
) {
    let dt = time.delta_secs();
    for (entity, mut bomb) in &mut bombs {
        bomb.advance_fuse(dt);
        if !bomb.expired() {
            continue;
        }

        let (row, col) = bomb.cell;
        matrix.clear_bomb(row, col, entity);
        if let Ok(mut player) = owners.get_mut(bomb.owner) {
            player.bombs_planted = player.bombs_planted.saturating_sub(1);
        }
        stats.bombs_exploded += 1;
        exploded.write(BombExplodedEvent { cell: (row, col) });
        commands.entity(entity).despawn();
    }
}

/// Turn lifecycle messages into debug logs in one place.
pub(crate) fn log_bomb_events(
    mut placed: MessageReader<BombPlacedEvent>,
    mut armed: MessageReader<BombArmedEvent>,
    mut exploded: MessageReader<BombExplodedEvent>,
) {
    for event in placed.read() {
        debug!("Bomb planted at cell ({}, {})", event.cell.0, event.cell.1);
    }
    for event in armed.read() {
        debug!("Bomb at cell ({}, {}) armed", event.cell.0, event.cell.1);
    }
    for event in exploded.read() {
        debug!("Bomb at cell ({}, {}) expired", event.cell.0, event.cell.1);
    }
}
