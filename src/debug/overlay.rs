//! Debug info overlay: spawn and per-frame refresh.

use bevy::prelude::*;

use crate::core::{SessionConfig, SessionStats, TickClock};
use crate::debug::{DebugInfoOverlay, DebugState};
use crate::level::LevelMatrix;
use crate::movement::{MovementState, PixelPosition, Player};

pub(crate) fn spawn_info_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new("..."),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(12.0),
            top: Val::Px(12.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ZIndex(500),
    ));
}

pub(crate) fn update_info_overlay(
    debug_state: Res<DebugState>,
    clock: Res<TickClock>,
    config: Res<SessionConfig>,
    stats: Res<SessionStats>,
    matrix: Option<Res<LevelMatrix>>,
    players: Query<(&PixelPosition, &MovementState, &Player)>,
    mut overlay: Query<&mut Text, With<DebugInfoOverlay>>,
) {
    if !debug_state.overlay_visible {
        return;
    }
    let Ok(mut text) = overlay.single_mut() else {
        return;
    };

    let player_line = match players.single() {
        Ok((position, state, player)) => {
            let cell = matrix
                .as_ref()
                .and_then(|m| {
                    let center = position.center(m.tile_size());
                    m.cell_of_point(center.x, center.y)
                })
                .map(|(row, col)| format!("({}, {})", row, col))
                .unwrap_or_else(|| "-".to_string());
            format!(
                "pos ({:.1}, {:.1})  cell {}  facing {:?}\nbombs {}/{} live",
                position.x, position.y, cell, state.facing, player.bombs_planted, player.bomb_limit
            )
        }
        Err(_) => "no player".to_string(),
    };

    **text = format!(
        "tick {}  seed {}\n{}\nplaced {}  expired {}",
        clock.tick, config.seed, player_line, stats.bombs_placed, stats.bombs_exploded
    );
}
