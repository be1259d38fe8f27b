//! Movement domain: ground and head contact probing.
//!
//! Both checks are thin box casts against level geometry, built from the
//! entity's own feet/body boxes. The ECS side answers the casts with avian2d;
//! tests answer them with fixed booleans.

use bevy::prelude::*;

use crate::movement::MovementParameters;

/// Axis-aligned box in world space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ColliderBounds {
    pub center: Vec2,
    pub half_extents: Vec2,
}

impl ColliderBounds {
    pub fn new(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            center,
            half_extents,
        }
    }

    pub fn min(&self) -> Vec2 {
        self.center - self.half_extents
    }

    pub fn max(&self) -> Vec2 {
        self.center + self.half_extents
    }

    pub fn size(&self) -> Vec2 {
        self.half_extents * 2.0
    }

    /// Bottom-center point, where the feet touch the floor.
    pub fn bottom_center(&self) -> Vec2 {
        Vec2::new(self.center.x, self.min().y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastDirection {
    Up,
    Down,
}

impl CastDirection {
    pub fn as_vec2(self) -> Vec2 {
        match self {
            CastDirection::Up => Vec2::Y,
            CastDirection::Down => Vec2::NEG_Y,
        }
    }
}

/// A box swept from `origin` along `direction` for `distance` units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxCast {
    pub origin: Vec2,
    pub size: Vec2,
    pub direction: CastDirection,
    pub distance: f32,
}

impl BoxCast {
    /// Box covering the whole swept area, for debug drawing.
    pub fn swept_bounds(&self) -> ColliderBounds {
        let end = self.origin + self.direction.as_vec2() * self.distance;
        let half = self.size * 0.5;
        let min = (self.origin - half).min(end - half);
        let max = (self.origin + half).max(end + half);
        ColliderBounds::new((min + max) * 0.5, (max - min) * 0.5)
    }
}

/// Answers box casts against the ground layer.
pub trait CollisionProber {
    fn box_cast(&self, cast: &BoxCast) -> bool;
}

/// Contact flags for a single physics step. Never carried to the next step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContactSample {
    pub grounded: bool,
    pub bumped_head: bool,
}

pub fn ground_cast(feet: &ColliderBounds, params: &MovementParameters) -> BoxCast {
    BoxCast {
        origin: feet.bottom_center(),
        size: Vec2::new(feet.size().x, params.ground_detection_length),
        direction: CastDirection::Down,
        distance: params.ground_detection_length,
    }
}

pub fn head_cast(
    feet: &ColliderBounds,
    body: &ColliderBounds,
    params: &MovementParameters,
) -> BoxCast {
    BoxCast {
        origin: Vec2::new(feet.center.x, body.max().y),
        size: Vec2::new(
            feet.size().x * params.head_width,
            params.head_detection_length,
        ),
        direction: CastDirection::Up,
        distance: params.head_detection_length,
    }
}

pub fn probe_contacts(
    prober: &impl CollisionProber,
    feet: &ColliderBounds,
    body: &ColliderBounds,
    params: &MovementParameters,
) -> ContactSample {
    ContactSample {
        grounded: prober.box_cast(&ground_cast(feet, params)),
        bumped_head: prober.box_cast(&head_cast(feet, body, params)),
    }
}
