//! Core domain: pause handling and camera setup.

use bevy::prelude::*;

use crate::core::state::GameState;

/// World units are meters; the camera shows 32 px per unit.
const PIXELS_PER_UNIT: f32 = 32.0;

/// Escape toggles pause. Virtual time stops with it, so every system reading
/// `Time` sees a zero delta and the movement controller freezes as-is.
pub(crate) fn toggle_pause(
    keyboard: Res<ButtonInput<KeyCode>>,
    state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
    mut time: ResMut<Time<Virtual>>,
) {
    if !keyboard.just_pressed(KeyCode::Escape) {
        return;
    }

    match state.get() {
        GameState::Playing => {
            time.pause();
            next_state.set(GameState::Paused);
            info!("Game paused");
        }
        GameState::Paused => {
            time.unpause();
            next_state.set(GameState::Playing);
            info!("Game resumed");
        }
    }
}

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Transform::from_xyz(0.0, 4.0, 0.0).with_scale(Vec3::splat(1.0 / PIXELS_PER_UNIT)),
    ));
}
