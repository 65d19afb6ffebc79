//! Bombs domain: tests for fuses, placement, arming, and the lifecycle systems.

use std::time::Duration;

use bevy::ecs::message::Messages;
use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::systems::{arm_bombs, handle_bomb_requests, tick_bombs};
use super::{Bomb, BombArmedEvent, BombExplodedEvent, BombPlacedEvent};
use crate::config::{BombTuning, GameTuning};
use crate::core::SessionStats;
use crate::level::{GridCell, LevelMatrix, rects_overlap};
use crate::movement::{ControlIntent, PixelPosition, Player};

const TILE: f32 = 64.0;
const INSET: f32 = 10.0;

fn open_arena() -> LevelMatrix {
    LevelMatrix::generate(7, 7, TILE, (3, 2), 0, &mut ChaCha8Rng::seed_from_u64(0)).unwrap()
}

fn mint_entity() -> Entity {
    World::new().spawn_empty().id()
}

fn test_bomb(cell: (usize, usize)) -> Bomb {
    Bomb::new(cell, mint_entity(), &BombTuning::default())
}

// -----------------------------------------------------------------------------
// Fuse tests
// -----------------------------------------------------------------------------

#[test]
fn test_new_bomb_has_a_cold_fuse() {
    let bomb = test_bomb((3, 3));
    assert_eq!(bomb.fuse_ticks, 0);
    assert_eq!(bomb.fuse_limit, 12);
    assert!(!bomb.expired());
}

#[test]
fn test_fuse_counts_interval_boundaries_only() {
    let mut bomb = test_bomb((3, 3));
    bomb.advance_fuse(0.19);
    assert_eq!(bomb.fuse_ticks, 0);
    bomb.advance_fuse(0.01);
    assert_eq!(bomb.fuse_ticks, 1);
}

#[test]
fn test_bomb_expires_after_twelve_intervals() {
    let mut bomb = test_bomb((3, 3));
    for _ in 0..11 {
        bomb.advance_fuse(0.2);
    }
    assert!(!bomb.expired());
    bomb.advance_fuse(0.2);
    assert!(bomb.expired());
}

#[test]
fn test_fuse_accumulates_fractional_deltas() {
    let mut bomb = test_bomb((3, 3));
    // 144 simulation ticks at 60 Hz is 2.4s: exactly twelve 0.2s intervals.
    for _ in 0..144 {
        bomb.advance_fuse(1.0 / 60.0);
    }
    assert!(bomb.expired());
}

#[test]
fn test_expiry_is_permanent() {
    let mut bomb = test_bomb((3, 3));
    for _ in 0..20 {
        bomb.advance_fuse(0.2);
    }
    assert!(bomb.expired());
}

// -----------------------------------------------------------------------------
// Placement precondition tests
// -----------------------------------------------------------------------------

#[test]
fn test_plant_allowance_respects_the_limit() {
    let mut player = Player::new(1);
    assert!(player.can_plant());
    player.bombs_planted = 1;
    assert!(!player.can_plant());
    player.bombs_planted = 0;
    player.alive = false;
    assert!(!player.can_plant());
}

#[test]
fn test_expiry_bookkeeping_frees_the_allowance() {
    let mut player = Player::new(1);
    player.bombs_planted = 1;
    player.bombs_planted = player.bombs_planted.saturating_sub(1);
    assert!(player.can_plant());
}

#[test]
fn test_target_cell_is_under_the_hitbox_center() {
    let matrix = open_arena();
    // Mid-stride between two cells: the center decides, not the anchor.
    let position = PixelPosition::new(70.0, 67.0);
    let center = position.center(TILE);
    assert_eq!(matrix.cell_of_point(center.x, center.y), Some((1, 1)));
}

#[test]
fn test_occupied_cell_rejects_placement() {
    let mut matrix = open_arena();
    // Both entities must come from one world so their ids differ.
    let mut world = World::new();
    let first = world.spawn_empty().id();
    let second = world.spawn_empty().id();
    assert!(matrix.reserve_for_bomb(1, 1, first));
    assert!(!matrix.reserve_for_bomb(1, 1, second));
    assert_eq!(
        matrix.cell(1, 1),
        Some(GridCell::Bomb { bomb: first, armed: false })
    );
}

// -----------------------------------------------------------------------------
// Arming tests
// -----------------------------------------------------------------------------

#[test]
fn test_standing_on_the_bomb_keeps_it_passable() {
    let matrix = open_arena();
    // Player still centered on the bomb's cell.
    let position = PixelPosition::from_cell(1, 1, TILE);
    let overlap = rects_overlap(matrix.cell_rect(1, 1), position.hitbox(TILE, INSET));
    assert!(overlap);
}

#[test]
fn test_departed_hitbox_no_longer_overlaps() {
    let matrix = open_arena();
    // One full tile to the right; the inset hitbox has cleared the cell.
    let position = PixelPosition::from_cell(1, 2, TILE);
    let overlap = rects_overlap(matrix.cell_rect(1, 1), position.hitbox(TILE, INSET));
    assert!(!overlap);
}

#[test]
fn test_edge_contact_counts_as_departed() {
    let matrix = open_arena();
    // The hitbox's left edge sits exactly on the cell boundary.
    let position = PixelPosition::new(2.0 * TILE - INSET, TILE);
    let overlap = rects_overlap(matrix.cell_rect(1, 1), position.hitbox(TILE, INSET));
    assert!(!overlap);
}

#[test]
fn test_armed_cell_never_reopens() {
    let mut matrix = open_arena();
    let bomb = mint_entity();
    matrix.reserve_for_bomb(1, 1, bomb);
    assert!(matrix.is_passable(1, 1));
    matrix.arm_bomb(1, 1, bomb);
    assert!(!matrix.is_passable(1, 1));
    // Stepping back onto the tile has no path to un-arm it, and the cell
    // cannot be claimed again while the bomb lives.
    assert!(!matrix.reserve_for_bomb(1, 1, mint_entity()));
    assert!(!matrix.is_passable(1, 1));
}

#[test]
fn test_expired_bomb_releases_its_cell() {
    let mut matrix = open_arena();
    let bomb = mint_entity();
    matrix.reserve_for_bomb(1, 1, bomb);
    matrix.arm_bomb(1, 1, bomb);
    assert!(matrix.clear_bomb(1, 1, bomb));
    assert_eq!(matrix.cell(1, 1), Some(GridCell::Empty));
    assert!(matrix.is_passable(1, 1));
}

// -----------------------------------------------------------------------------
// Lifecycle system tests
// -----------------------------------------------------------------------------

/// Bare world carrying everything the bomb systems read, minus the matrix.
fn lifecycle_world() -> World {
    let mut world = World::new();
    world.init_resource::<Messages<BombPlacedEvent>>();
    world.init_resource::<Messages<BombArmedEvent>>();
    world.init_resource::<Messages<BombExplodedEvent>>();
    world.insert_resource(GameTuning::default());
    world.insert_resource(SessionStats::default());
    world.insert_resource(ControlIntent {
        direction: None,
        place_bomb: true,
    });
    world
}

#[test]
fn test_rejected_placement_still_consumes_the_request() {
    let mut world = lifecycle_world();
    let squatter = world.spawn_empty().id();
    let mut matrix = open_arena();
    assert!(matrix.reserve_for_bomb(1, 1, squatter));
    world.insert_resource(matrix);
    let player = world
        .spawn((PixelPosition::from_cell(1, 1, TILE), Player::new(1)))
        .id();

    world.run_system_once(handle_bomb_requests).unwrap();

    // The latch is spent even though nothing was planted.
    assert!(!world.resource::<ControlIntent>().place_bomb);
    assert_eq!(world.get::<Player>(player).unwrap().bombs_planted, 0);
    assert_eq!(world.resource::<SessionStats>().bombs_placed, 0);
    assert!(world.resource::<Messages<BombPlacedEvent>>().is_empty());
    let mut bombs = world.query::<&Bomb>();
    assert_eq!(bombs.iter(&world).count(), 0);
    assert_eq!(
        world.resource::<LevelMatrix>().cell(1, 1),
        Some(GridCell::Bomb { bomb: squatter, armed: false })
    );
}

#[test]
fn test_expiry_despawns_the_bomb_and_frees_the_allowance() {
    let mut world = lifecycle_world();
    world.insert_resource(open_arena());
    let player = world
        .spawn((PixelPosition::from_cell(1, 1, TILE), Player::new(1)))
        .id();

    world.run_system_once(handle_bomb_requests).unwrap();

    assert_eq!(world.get::<Player>(player).unwrap().bombs_planted, 1);
    assert_eq!(world.resource::<SessionStats>().bombs_placed, 1);
    assert_eq!(world.resource::<Messages<BombPlacedEvent>>().len(), 1);
    // Placed but not armed: the owner can still walk off the cell.
    assert!(world.resource::<LevelMatrix>().is_passable(1, 1));
    let mut bombs = world.query_filtered::<Entity, With<Bomb>>();
    let bomb = bombs.single(&world).unwrap();

    // One tile to the right; the inset hitbox has cleared the bomb's cell.
    *world.get_mut::<PixelPosition>(player).unwrap() = PixelPosition::from_cell(1, 2, TILE);
    world.run_system_once(arm_bombs).unwrap();
    assert!(!world.resource::<LevelMatrix>().is_passable(1, 1));
    assert_eq!(world.resource::<Messages<BombArmedEvent>>().len(), 1);

    // One fuse interval per run, in simulated time.
    world.init_resource::<Time>();
    world.resource_mut::<Time>().advance_by(Duration::from_millis(200));
    for _ in 0..12 {
        world.run_system_once(tick_bombs).unwrap();
    }

    assert!(world.get_entity(bomb).is_err());
    assert_eq!(world.resource::<LevelMatrix>().cell(1, 1), Some(GridCell::Empty));
    assert_eq!(world.get::<Player>(player).unwrap().bombs_planted, 0);
    assert_eq!(world.resource::<SessionStats>().bombs_exploded, 1);
    assert_eq!(world.resource::<Messages<BombExplodedEvent>>().len(), 1);
}
