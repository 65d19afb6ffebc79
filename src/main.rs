mod bombs;
mod config;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod level;
mod movement;
mod sprites;

use bevy::prelude::*;

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Gridblast".to_string(),
            ..default()
        }),
        ..default()
    }))
    .add_plugins((
        core::CorePlugin,
        config::ConfigPlugin,
        level::LevelPlugin,
        movement::MovementPlugin,
        bombs::BombsPlugin,
        sprites::SpritesPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
