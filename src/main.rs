mod audio;
mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod level;
mod movement;

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics ticks per second.
const FIXED_HZ: f64 = 50.0;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Hopper".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .insert_resource(Time::<Fixed>::from_hz(FIXED_HZ))
    .add_plugins((
        core::CorePlugin,
        content::ContentPlugin,
        level::LevelPlugin,
        movement::MovementPlugin,
        audio::AudioCuePlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
