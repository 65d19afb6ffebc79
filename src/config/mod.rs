//! Config domain: tuning data and its RON loader.

mod data;
mod loader;


pub use data::{BombTuning, GameTuning, GenerationTuning, PlayerTuning, WorldTuning};
pub use loader::{TuningLoadError, load_tuning};

use bevy::prelude::*;

use crate::config::loader::apply_tuning_file;

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameTuning>()
            .add_systems(Startup, apply_tuning_file);
    }
}
