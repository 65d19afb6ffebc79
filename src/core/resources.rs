//! Core domain: session-wide resources and the teardown marker.

use bevy::prelude::*;
use rand::Rng;

#[derive(Resource, Debug)]
pub struct SessionConfig {
    /// Seed for the session's level generation. Same seed, same arena.
    pub seed: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: rand::rng().random(),
        }
    }
}

/// Monotonic count of completed simulation ticks this session.
#[derive(Resource, Debug, Default)]
pub struct TickClock {
    pub tick: u64,
}

/// Running totals for logging and the debug overlay.
#[derive(Resource, Debug, Default)]
pub struct SessionStats {
    pub bombs_placed: u32,
    pub bombs_exploded: u32,
}

impl SessionStats {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Marker for every entity that belongs to the current session. Teardown on
/// leaving `GamePhase::InGame` despawns all of them in one query.
#[derive(Component, Debug)]
pub struct SessionScoped;
