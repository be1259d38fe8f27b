//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::probe::ColliderBounds;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Level geometry: floors, platforms, walls and ceilings
    Ground,
    /// Player character
    Player,
    /// Sensors (kill zones) - should not block movement
    Sensor,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for level geometry colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Sensor volume that sends the player back to its spawn anchor
#[derive(Component, Debug)]
pub struct KillZone;

/// Feet and body boxes relative to the entity origin.
///
/// The contact probes are cast from these boxes rather than from fixed world
/// positions, so resizing the character keeps the checks aligned.
#[derive(Component, Debug, Clone, Copy)]
pub struct ColliderProfile {
    pub feet_offset: Vec2,
    pub feet_size: Vec2,
    pub body_offset: Vec2,
    pub body_size: Vec2,
}

impl Default for ColliderProfile {
    fn default() -> Self {
        Self {
            feet_offset: Vec2::new(0.0, -0.75),
            feet_size: Vec2::new(0.8, 0.5),
            body_offset: Vec2::new(0.0, 0.25),
            body_size: Vec2::new(0.9, 1.5),
        }
    }
}

impl ColliderProfile {
    pub fn feet_bounds(&self, origin: Vec2) -> ColliderBounds {
        ColliderBounds::new(origin + self.feet_offset, self.feet_size * 0.5)
    }

    pub fn body_bounds(&self, origin: Vec2) -> ColliderBounds {
        ColliderBounds::new(origin + self.body_offset, self.body_size * 0.5)
    }

    /// Union of feet and body, used for the physical collider.
    pub fn hull(&self) -> ColliderBounds {
        let feet = self.feet_bounds(Vec2::ZERO);
        let body = self.body_bounds(Vec2::ZERO);
        let min = feet.min().min(body.min());
        let max = feet.max().max(body.max());
        ColliderBounds::new((min + max) * 0.5, (max - min) * 0.5)
    }
}
