//! Movement domain: player components and pixel-space geometry.

use bevy::prelude::*;

use crate::sprites::FrameAnimator;

#[derive(Component, Debug)]
pub struct Player {
    pub alive: bool,
    pub bomb_limit: u32,
    pub bombs_planted: u32,
}

impl Player {
    pub fn new(bomb_limit: u32) -> Self {
        Self {
            alive: true,
            bomb_limit,
            bombs_planted: 0,
        }
    }

    pub fn can_plant(&self) -> bool {
        self.alive && self.bombs_planted < self.bomb_limit
    }
}

/// Logical position in y-down arena pixels, anchored at the top-left of the
/// player's tile-sized square. Render space is derived from this, never the
/// other way around.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct PixelPosition {
    pub x: f32,
    pub y: f32,
}

impl PixelPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn from_cell(row: usize, col: usize, tile: f32) -> Self {
        Self {
            x: col as f32 * tile,
            y: row as f32 * tile,
        }
    }

    /// Collision hitbox: the tile-sized square shrunk by `inset` on each side.
    pub fn hitbox(&self, tile: f32, inset: f32) -> Rect {
        Rect::new(
            self.x + inset,
            self.y + inset,
            self.x + tile - inset,
            self.y + tile - inset,
        )
    }

    pub fn center(&self, tile: f32) -> Vec2 {
        Vec2::new(self.x + tile / 2.0, self.y + tile / 2.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit step in y-down logical space.
    pub fn delta(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Down => Vec2::new(0.0, 1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Right => Vec2::new(1.0, 0.0),
        }
    }
}

#[derive(Component, Debug)]
pub struct MovementState {
    pub facing: Direction,
    pub moving: bool,
    pub walk: FrameAnimator,
}

impl MovementState {
    pub fn new(walk_frames: u32, walk_frame_secs: f32) -> Self {
        Self {
            facing: Direction::Down,
            moving: false,
            walk: FrameAnimator::new(walk_frames, walk_frame_secs),
        }
    }
}
