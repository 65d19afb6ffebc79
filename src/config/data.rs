//! Data definitions for the tuning file.
//!
//! These structs mirror the structure in assets/data/tuning.ron. Every field
//! carries a compiled default so a partial or missing file still yields a
//! playable configuration.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// All gameplay tunables, grouped by domain.
#[derive(Resource, Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GameTuning {
    pub world: WorldTuning,
    pub player: PlayerTuning,
    pub bombs: BombTuning,
    pub generation: GenerationTuning,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct WorldTuning {
    pub rows: usize,
    pub cols: usize,
    /// Side length of one grid cell, in pixels.
    pub tile_size: f32,
}

impl Default for WorldTuning {
    fn default() -> Self {
        Self {
            rows: 13,
            cols: 15,
            tile_size: 64.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PlayerTuning {
    /// Pixels traveled per simulation tick while a direction is held.
    pub speed: f32,
    /// Collision hitbox shrink on each side, relative to the tile rect.
    pub hitbox_inset: f32,
    /// Cross-axis distance within which the position snaps to the lane.
    pub snap_tolerance: f32,
    pub spawn_row: usize,
    pub spawn_col: usize,
    /// Maximum simultaneously live bombs per player.
    pub bomb_limit: u32,
    pub walk_frames: u32,
    pub walk_frame_secs: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            speed: 3.0,
            hitbox_inset: 10.0,
            snap_tolerance: 4.0,
            spawn_row: 3,
            spawn_col: 2,
            bomb_limit: 1,
            walk_frames: 3,
            walk_frame_secs: 0.05,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BombTuning {
    /// Completed fuse animation intervals before a bomb expires.
    pub fuse_limit: u32,
    pub fuse_frames: u32,
    pub fuse_frame_secs: f32,
}

impl Default for BombTuning {
    fn default() -> Self {
        Self {
            fuse_limit: 12,
            fuse_frames: 3,
            fuse_frame_secs: 0.2,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GenerationTuning {
    /// One in this many eligible cells becomes a destructible wall.
    /// Zero disables destructible fill entirely.
    pub soft_wall_one_in: u32,
}

impl Default for GenerationTuning {
    fn default() -> Self {
        Self { soft_wall_one_in: 4 }
    }
}
