//! Level domain: arena grid, generation, and tile spawning.

mod generator;
mod grid;
mod spawn;


pub use generator::{LevelError, SpawnZone};
pub use grid::{GridCell, LevelMatrix, rects_overlap};

use bevy::prelude::*;

use crate::core::GamePhase;
use crate::level::spawn::spawn_level;

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GamePhase::InGame), spawn_level);
    }
}
