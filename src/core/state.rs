//! Core domain: game phases and the fixed simulation step order.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GamePhase {
    /// Transient staging phase; every pass through it starts a fresh session.
    #[default]
    Boot,
    InGame,
}

/// Per-tick simulation order on `FixedUpdate`. The sets run chained, so one
/// tick is always: clock, then bomb placement, then movement, then arming,
/// then fuse advance and expiry.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimStep {
    Clock,
    Plant,
    Move,
    Arm,
    Fuse,
}
