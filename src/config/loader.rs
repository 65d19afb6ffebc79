//! Loader for the RON tuning file at startup.

use bevy::prelude::*;
use ron::Options;
use std::fs;

use super::data::GameTuning;

pub(crate) const TUNING_PATH: &str = "assets/data/tuning.ron";

/// Error type for tuning load failures.
#[derive(Debug)]
pub struct TuningLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for TuningLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// RON options with the extensions the tuning file relies on.
pub(crate) fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

pub fn load_tuning(path: &str) -> Result<GameTuning, TuningLoadError> {
    let contents = fs::read_to_string(path).map_err(|e| TuningLoadError {
        file: path.to_string(),
        message: format!("IO error: {}", e),
    })?;

    ron_options().from_str(&contents).map_err(|e| TuningLoadError {
        file: path.to_string(),
        message: format!("Parse error: {}", e),
    })
}

/// Startup system: replace the compiled defaults with the on-disk tuning
/// when the file is present and parses.
pub(crate) fn apply_tuning_file(mut tuning: ResMut<GameTuning>) {
    match load_tuning(TUNING_PATH) {
        Ok(loaded) => {
            info!(
                "Loaded tuning from {} ({}x{} arena, tile {}px)",
                TUNING_PATH, loaded.world.rows, loaded.world.cols, loaded.world.tile_size
            );
            *tuning = loaded;
        }
        Err(e) => {
            warn!("{} - using built-in defaults", e);
        }
    }
}
