//! Bombs domain: the bomb component state machine.

use bevy::prelude::*;

use crate::config::BombTuning;
use crate::sprites::FrameAnimator;

/// A planted bomb.
///
/// Lifecycle: placed (cell still passable) -> armed (cell blocks, flipped in
/// the matrix once the owner walks off) -> expired (cell released, entity
/// despawned). The fuse counts completed animation intervals, not raw time,
/// so fuse pace and pulse pace can never drift apart.
#[derive(Component, Debug)]
pub struct Bomb {
    pub cell: (usize, usize),
    pub owner: Entity,
    pub fuse_ticks: u32,
    pub fuse_limit: u32,
    pub fuse: FrameAnimator,
}

impl Bomb {
    pub fn new(cell: (usize, usize), owner: Entity, tuning: &BombTuning) -> Self {
        Self {
            cell,
            owner,
            fuse_ticks: 0,
            fuse_limit: tuning.fuse_limit,
            fuse: FrameAnimator::new(tuning.fuse_frames, tuning.fuse_frame_secs),
        }
    }

    /// Advance the fuse by `dt` seconds.
    pub fn advance_fuse(&mut self, dt: f32) {
        self.fuse_ticks += self.fuse.tick(dt);
    }

    pub fn expired(&self) -> bool {
        self.fuse_ticks >= self.fuse_limit
    }
}
