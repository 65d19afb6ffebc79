//! Debug tooling for fast iteration (feature `dev-tools`).
//!
//! Features:
//! - F1 / backtick info overlay: tick, seed, position, cell, bomb counts
//! - Ctrl+R: restart the session with a fresh seed

mod overlay;

use bevy::prelude::*;
use rand::Rng;

use crate::core::{GamePhase, SessionConfig};
use crate::debug::overlay::{spawn_info_overlay, update_info_overlay};

// ============================================================================
// Debug State Resource
// ============================================================================

/// Resource tracking debug tooling state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether the info overlay is visible
    pub overlay_visible: bool,
}

/// Marker for the info overlay text
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

// ============================================================================
// Systems
// ============================================================================

/// Toggle the info overlay with F1 or backtick
pub(crate) fn toggle_info_overlay(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    existing: Query<Entity, With<DebugInfoOverlay>>,
    mut commands: Commands,
) {
    let toggle = keyboard.just_pressed(KeyCode::F1) || keyboard.just_pressed(KeyCode::Backquote);
    if !toggle {
        return;
    }

    debug_state.overlay_visible = !debug_state.overlay_visible;
    if debug_state.overlay_visible {
        spawn_info_overlay(&mut commands);
    } else {
        for entity in &existing {
            commands.entity(entity).despawn();
        }
    }
}

/// Handle keyboard shortcuts for debug actions
pub(crate) fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    phase: Res<State<GamePhase>>,
    mut config: ResMut<SessionConfig>,
    mut next_phase: ResMut<NextState<GamePhase>>,
) {
    let ctrl =
        keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);

    // Ctrl+R: reroll the seed and bounce through Boot for a fresh session.
    if ctrl && keyboard.just_pressed(KeyCode::KeyR) && *phase.get() == GamePhase::InGame {
        config.seed = rand::rng().random();
        info!("Debug restart requested, next seed {}", config.seed);
        next_phase.set(GamePhase::Boot);
    }
}

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (toggle_info_overlay, handle_debug_hotkeys, update_info_overlay),
        );
    }
}
