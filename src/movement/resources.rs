//! Movement domain: latched control intent.

use bevy::prelude::*;

use crate::movement::components::Direction;

/// What the player wants this tick. Written by input sampling on `Update`,
/// consumed by the simulation on `FixedUpdate`. The direction reflects the
/// latest sample; the bomb request stays latched until the simulation
/// consumes it so a tap between ticks is never lost.
#[derive(Resource, Debug, Default)]
pub struct ControlIntent {
    pub direction: Option<Direction>,
    pub place_bomb: bool,
}
