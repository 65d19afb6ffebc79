//! Bombs domain: lifecycle notifications.

use bevy::ecs::message::Message;

/// Event fired when a bomb is planted into an empty cell.
#[derive(Debug)]
pub struct BombPlacedEvent {
    pub cell: (usize, usize),
}

impl Message for BombPlacedEvent {}

/// Event fired when a bomb's cell flips to blocking.
#[derive(Debug)]
pub struct BombArmedEvent {
    pub cell: (usize, usize),
}

impl Message for BombArmedEvent {}

/// Event fired when a bomb's fuse runs out and its cell is released.
/// Blast handling hangs off this; today only the cosmetic flash listens.
#[derive(Debug)]
pub struct BombExplodedEvent {
    pub cell: (usize, usize),
}

impl Message for BombExplodedEvent {}
