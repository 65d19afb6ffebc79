//! Movement domain: player spawning, input, and grid-collision locomotion.

mod components;
mod resources;
mod systems;


pub use components::{Direction, MovementState, PixelPosition, Player};
pub use resources::ControlIntent;

use bevy::prelude::*;

use crate::config::GameTuning;
use crate::core::{GamePhase, SessionScoped, SimStep};
use crate::movement::systems::{drive_player, sample_input};
use crate::sprites::Z_PLAYER;
use crate::sprites::render::logical_to_world;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ControlIntent>()
            .add_systems(OnEnter(GamePhase::InGame), spawn_player)
            .add_systems(Update, sample_input.run_if(in_state(GamePhase::InGame)))
            .add_systems(FixedUpdate, drive_player.in_set(SimStep::Move));
    }
}

fn spawn_player(tuning: Res<GameTuning>, mut commands: Commands) {
    let tile = tuning.world.tile_size;
    let player_color = Color::srgb(0.92, 0.95, 0.98);
    let position = PixelPosition::from_cell(tuning.player.spawn_row, tuning.player.spawn_col, tile);
    commands.spawn((
        Player::new(tuning.player.bomb_limit),
        position,
        MovementState::new(tuning.player.walk_frames, tuning.player.walk_frame_secs),
        SessionScoped,
        Sprite {
            color: player_color,
            custom_size: Some(Vec2::splat(tile * 0.7)),
            ..default()
        },
        Transform::from_translation(logical_to_world(position.x, position.y, tile, Z_PLAYER)),
    ));
    debug!(
        "Player spawned at cell ({}, {})",
        tuning.player.spawn_row, tuning.player.spawn_col
    );
}
