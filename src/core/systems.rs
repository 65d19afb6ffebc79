//! Core domain: session flow systems and setup.

use bevy::prelude::*;

use crate::core::resources::{SessionScoped, SessionStats, TickClock};
use crate::core::state::GamePhase;
use crate::level::LevelMatrix;
use crate::movement::ControlIntent;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Boot is a one-frame staging phase; entering it always falls through to a
/// fresh in-game session.
pub(crate) fn leave_boot(mut phase: ResMut<NextState<GamePhase>>) {
    phase.set(GamePhase::InGame);
}

pub(crate) fn advance_tick_clock(mut clock: ResMut<TickClock>) {
    clock.tick += 1;
}

/// Despawn everything the session spawned and reset per-session state.
pub(crate) fn teardown_session(
    scoped: Query<Entity, With<SessionScoped>>,
    mut stats: ResMut<SessionStats>,
    mut clock: ResMut<TickClock>,
    mut intent: ResMut<ControlIntent>,
    mut commands: Commands,
) {
    let mut despawned = 0;
    for entity in &scoped {
        commands.entity(entity).despawn();
        despawned += 1;
    }
    commands.remove_resource::<LevelMatrix>();
    info!(
        "Session over after {} ticks: {} bombs placed, {} expired ({} entities cleared)",
        clock.tick, stats.bombs_placed, stats.bombs_exploded, despawned
    );
    stats.reset();
    clock.tick = 0;
    *intent = ControlIntent::default();
}
