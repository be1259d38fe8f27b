//! Movement domain: player spawn.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::level::PLAYER_SPAWN;
use crate::movement::{
    ColliderProfile, GameLayer, MovementController, MovementParameters, Player, SpawnAnchor,
};

pub(crate) fn spawn_player(mut commands: Commands, params: Res<MovementParameters>) {
    let transform = Transform::from_translation(PLAYER_SPAWN);
    let profile = ColliderProfile::default();
    let hull = profile.hull().size();

    info!(
        "Spawning player at {:?}: gravity={:.2}, jump_velocity={:.2}, apex_height={:.2}, jumps_allowed={}",
        PLAYER_SPAWN,
        params.gravity,
        params.initial_jump_velocity,
        params.apex_height(),
        params.jumps_allowed
    );

    commands.spawn((
        // Identity & Movement
        (
            Player,
            MovementController::new(params.clone(), SpawnAnchor::from_transform(&transform)),
            profile,
        ),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(hull),
            ..default()
        },
        transform,
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(hull.x, hull.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(0.0), // The controller integrates gravity itself
            Friction::new(0.0),
            CollisionEventsEnabled,
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Sensor]),
        ),
    ));
}
