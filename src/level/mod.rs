//! Level domain: static test room with platforms and a pit.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Ground, KillZone};

/// Where the player appears and returns to after touching a kill zone.
pub const PLAYER_SPAWN: Vec3 = Vec3::new(-12.0, 0.0, 0.0);

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_test_room);
    }
}

fn spawn_block(commands: &mut Commands, center: Vec2, size: Vec2, color: Color) {
    commands.spawn((
        Ground,
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_xyz(center.x, center.y, 0.0),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]),
    ));
}

pub(crate) fn spawn_test_room(mut commands: Commands) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    // Ground, split by a pit between x = 2 and x = 7
    spawn_block(
        &mut commands,
        Vec2::new(-9.0, -3.0),
        Vec2::new(22.0, 2.0),
        ground_color,
    );
    spawn_block(
        &mut commands,
        Vec2::new(13.5, -3.0),
        Vec2::new(13.0, 2.0),
        ground_color,
    );

    // Side walls
    spawn_block(
        &mut commands,
        Vec2::new(-20.5, 6.0),
        Vec2::new(1.0, 20.0),
        wall_color,
    );
    spawn_block(
        &mut commands,
        Vec2::new(20.5, 6.0),
        Vec2::new(1.0, 20.0),
        wall_color,
    );

    // Platform 1 - left side
    spawn_block(
        &mut commands,
        Vec2::new(-8.0, 2.0),
        Vec2::new(5.0, 0.6),
        platform_color,
    );

    // Platform 2 - right side, higher
    spawn_block(
        &mut commands,
        Vec2::new(8.0, 6.0),
        Vec2::new(5.0, 0.6),
        platform_color,
    );

    // Platform 3 - center, highest; low enough to bump heads under it
    spawn_block(
        &mut commands,
        Vec2::new(-1.0, 11.0),
        Vec2::new(4.0, 0.6),
        platform_color,
    );

    // Kill zone below the pit
    commands.spawn((
        KillZone,
        Transform::from_xyz(4.5, -12.0, 0.0),
        Collider::rectangle(60.0, 2.0),
        Sensor,
        CollisionEventsEnabled,
        CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player]),
    ));
}
