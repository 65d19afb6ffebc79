//! Core domain: game phases, session resources, and the fixed-tick schedule.

mod resources;
mod state;
mod systems;

pub use resources::{SessionConfig, SessionScoped, SessionStats, TickClock};
pub use state::{GamePhase, SimStep};

use bevy::prelude::*;

use crate::core::systems::{advance_tick_clock, leave_boot, setup_camera, teardown_session};
use crate::level::LevelMatrix;

/// Simulation tick rate. Gameplay advances on this fixed clock while
/// input and rendering run every frame.
const SIM_HZ: f64 = 60.0;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GamePhase>()
            .init_resource::<SessionConfig>()
            .init_resource::<TickClock>()
            .init_resource::<SessionStats>()
            .insert_resource(Time::<Fixed>::from_hz(SIM_HZ))
            .configure_sets(
                FixedUpdate,
                (
                    SimStep::Clock,
                    SimStep::Plant,
                    SimStep::Move,
                    SimStep::Arm,
                    SimStep::Fuse,
                )
                    .chain()
                    .run_if(in_state(GamePhase::InGame))
                    .run_if(resource_exists::<LevelMatrix>),
            )
            .add_systems(Startup, setup_camera)
            .add_systems(Update, leave_boot.run_if(in_state(GamePhase::Boot)))
            .add_systems(FixedUpdate, advance_tick_clock.in_set(SimStep::Clock))
            .add_systems(OnExit(GamePhase::InGame), teardown_session);
    }
}
