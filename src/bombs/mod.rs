//! Bombs domain: placement, arming, and fuse-driven expiry.

mod components;
mod events;
mod systems;

#[cfg(test)]
mod tests;

pub use components::Bomb;
pub use events::{BombArmedEvent, BombExplodedEvent, BombPlacedEvent};

use bevy::prelude::*;

use crate::bombs::systems::{arm_bombs, handle_bomb_requests, log_bomb_events, tick_bombs};
use crate::core::{GamePhase, SimStep};

pub struct BombsPlugin;

impl Plugin for BombsPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<BombPlacedEvent>()
            .add_message::<BombArmedEvent>()
            .add_message::<BombExplodedEvent>()
            .add_systems(FixedUpdate, handle_bomb_requests.in_set(SimStep::Plant))
            .add_systems(FixedUpdate, arm_bombs.in_set(SimStep::Arm))
            .add_systems(FixedUpdate, tick_bombs.in_set(SimStep::Fuse))
            .add_systems(Update, log_bomb_events.run_if(in_state(GamePhase::InGame)));
    }
}
