//! Level domain: session arena construction and tile entity spawning.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::GameTuning;
use crate::core::{SessionConfig, SessionScoped};
use crate::level::grid::{GridCell, LevelMatrix};
use crate::sprites::render::cell_translation;
use crate::sprites::{Z_FLOOR, Z_WALLS};

/// Build the session's arena: seed the generator, insert the matrix
/// resource, and spawn one quad per wall cell plus a floor backdrop.
pub(crate) fn spawn_level(
    tuning: Res<GameTuning>,
    config: Res<SessionConfig>,
    mut commands: Commands,
) {
    let rows = tuning.world.rows;
    let cols = tuning.world.cols;
    let spawn = (tuning.player.spawn_row, tuning.player.spawn_col);
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);

    let matrix = match LevelMatrix::generate(
        rows,
        cols,
        tuning.world.tile_size,
        spawn,
        tuning.generation.soft_wall_one_in,
        &mut rng,
    ) {
        Ok(matrix) => matrix,
        Err(e) => {
            error!("Level generation failed: {}", e);
            return;
        }
    };

    let soft_walls = matrix
        .iter()
        .filter(|(_, cell)| matches!(cell, GridCell::Wall { destructible: true }))
        .count();
    info!(
        "Generated {}x{} arena with seed {} ({} destructible walls)",
        rows, cols, config.seed, soft_walls
    );

    spawn_tiles(&mut commands, &matrix);
    commands.insert_resource(matrix);
}

fn spawn_tiles(commands: &mut Commands, matrix: &LevelMatrix) {
    let floor_color = Color::srgb(0.12, 0.13, 0.16);
    let hard_wall_color = Color::srgb(0.38, 0.41, 0.48);
    let soft_wall_color = Color::srgb(0.56, 0.42, 0.28);

    let tile = matrix.tile_size();
    let width = matrix.cols() as f32 * tile;
    let height = matrix.rows() as f32 * tile;

    // Floor backdrop spanning the whole arena.
    commands.spawn((
        SessionScoped,
        Sprite {
            color: floor_color,
            custom_size: Some(Vec2::new(width, height)),
            ..default()
        },
        Transform::from_xyz(width / 2.0, -height / 2.0, Z_FLOOR),
    ));

    for ((row, col), cell) in matrix.iter() {
        let GridCell::Wall { destructible } = cell else {
            continue;
        };
        // Destructible walls are drawn a touch smaller so the lattice reads.
        let (color, size) = if destructible {
            (soft_wall_color, tile - 6.0)
        } else {
            (hard_wall_color, tile)
        };
        commands.spawn((
            SessionScoped,
            Sprite {
                color,
                custom_size: Some(Vec2::splat(size)),
                ..default()
            },
            Transform::from_translation(cell_translation(row, col, tile, Z_WALLS)),
        ));
    }
}
