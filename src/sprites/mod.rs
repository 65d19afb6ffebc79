//! Sprites domain: animation timing, z-layering, and render sync.

pub mod animation;
pub mod layers;
pub mod render;


pub use animation::FrameAnimator;
pub use layers::{Z_BOMBS, Z_EFFECTS, Z_FLOOR, Z_PLAYER, Z_WALLS};

use bevy::prelude::*;

use crate::core::GamePhase;
use crate::sprites::render::{
    animate_bomb_sprites, animate_player_sprite, camera_follow, fade_explosion_flashes,
    restyle_armed_bombs, spawn_explosion_flashes, sync_transforms,
};

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                sync_transforms,
                animate_player_sprite,
                animate_bomb_sprites,
                restyle_armed_bombs,
                camera_follow,
                spawn_explosion_flashes,
                fade_explosion_flashes,
            )
                .run_if(in_state(GamePhase::InGame)),
        );
    }
}
