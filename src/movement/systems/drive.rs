//! Movement domain: per-tick locomotion against the arena grid.
//!
//! Displacement is resolved one axis at a time: try the axis, test the inset
//! hitbox against every cell it spans, and roll that axis back on contact.
//! A blocked axis never cancels the other one, which is what lets the player
//! slide along walls and into corridor mouths.

use bevy::prelude::*;

use crate::config::GameTuning;
use crate::level::LevelMatrix;
use crate::movement::components::{Direction, MovementState, PixelPosition, Player};
use crate::movement::resources::ControlIntent;

pub(crate) struct StepParams {
    pub speed: f32,
    pub hitbox_inset: f32,
    pub snap_tolerance: f32,
}

/// Nearest lane boundary within tolerance, otherwise the value unchanged.
fn snap_to_lane(v: f32, tile: f32, tolerance: f32) -> f32 {
    let nearest = (v / tile).round() * tile;
    if (v - nearest).abs() <= tolerance {
        nearest
    } else {
        v
    }
}

/// Apply a pixel displacement with per-axis rollback.
///
/// When an axis commits, the cross axis is nudged onto the nearest lane if it
/// is already within the snap tolerance. The snap is cosmetic and is not
/// re-validated against the grid.
pub(crate) fn resolve_axes(
    position: PixelPosition,
    displacement: Vec2,
    matrix: &LevelMatrix,
    hitbox_inset: f32,
    snap_tolerance: f32,
) -> PixelPosition {
    let tile = matrix.tile_size();
    let mut resolved = position;

    if displacement.x != 0.0 {
        let tried = PixelPosition::new(resolved.x + displacement.x, resolved.y);
        if !matrix.rect_blocked(tried.hitbox(tile, hitbox_inset)) {
            resolved = tried;
            resolved.y = snap_to_lane(resolved.y, tile, snap_tolerance);
        }
    }

    if displacement.y != 0.0 {
        let tried = PixelPosition::new(resolved.x, resolved.y + displacement.y);
        if !matrix.rect_blocked(tried.hitbox(tile, hitbox_inset)) {
            resolved = tried;
            resolved.x = snap_to_lane(resolved.x, tile, snap_tolerance);
        }
    }

    resolved
}

/// One simulation tick of player locomotion.
pub(crate) fn advance_player(
    position: &mut PixelPosition,
    state: &mut MovementState,
    player: &Player,
    direction: Option<Direction>,
    matrix: &LevelMatrix,
    params: &StepParams,
    dt: f32,
) {
    if !player.alive {
        state.moving = false;
        return;
    }
    let Some(direction) = direction else {
        state.moving = false;
        return;
    };

    if direction != state.facing {
        state.facing = direction;
        state.walk.reset();
    }
    state.moving = true;

    *position = resolve_axes(
        *position,
        direction.delta() * params.speed,
        matrix,
        params.hitbox_inset,
        params.snap_tolerance,
    );

    // The walk cycle runs whenever movement is attempted, blocked or not.
    state.walk.tick(dt);
}

pub(crate) fn drive_player(
    time: Res<Time>,
    tuning: Res<GameTuning>,
    matrix: Res<LevelMatrix>,
    intent: Res<ControlIntent>,
    mut players: Query<(&mut PixelPosition, &mut MovementState, &Player)>,
) {
    let params = StepParams {
        speed: tuning.player.speed,
        hitbox_inset: tuning.player.hitbox_inset,
        snap_tolerance: tuning.player.snap_tolerance,
    };
    let dt = time.delta_secs();
    for (mut position, mut state, player) in &mut players {
        advance_player(
            &mut position,
            &mut state,
            player,
            intent.direction,
            &matrix,
            &params,
            dt,
        );
    }
}
