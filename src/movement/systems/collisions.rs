//! Movement domain: avian2d-backed contact probes and arc obstruction.

use avian2d::prelude::*;
use bevy::prelude::*;

#[cfg(feature = "dev-tools")]
use crate::movement::ArcObstruction;
use crate::movement::{BoxCast, CollisionProber, GameLayer};

/// Answers the controller's box casts with shape casts against the ground layer.
pub(crate) struct AvianProber<'a, 'w, 's> {
    spatial_query: &'a SpatialQuery<'w, 's>,
    filter: SpatialQueryFilter,
}

impl<'a, 'w, 's> AvianProber<'a, 'w, 's> {
    pub(crate) fn new(spatial_query: &'a SpatialQuery<'w, 's>) -> Self {
        Self {
            spatial_query,
            // Filter to only hit Ground layer entities (not the player, kill zones, etc.)
            filter: SpatialQueryFilter::from_mask(GameLayer::Ground),
        }
    }
}

impl CollisionProber for AvianProber<'_, '_, '_> {
    fn box_cast(&self, cast: &BoxCast) -> bool {
        if cast.size.x <= 0.0 || cast.size.y <= 0.0 {
            return false;
        }

        let Ok(direction) = Dir2::new(cast.direction.as_vec2()) else {
            return false;
        };

        self.spatial_query
            .cast_shape(
                &Collider::rectangle(cast.size.x, cast.size.y),
                cast.origin,
                0.0,
                direction,
                &ShapeCastConfig::from_max_distance(cast.distance),
                &self.filter,
            )
            .is_some()
    }
}

/// Stops predicted arcs at the first piece of level geometry.
#[cfg(feature = "dev-tools")]
pub(crate) struct GroundRayObstruction<'a, 'w, 's> {
    spatial_query: &'a SpatialQuery<'w, 's>,
    filter: SpatialQueryFilter,
}

#[cfg(feature = "dev-tools")]
impl<'a, 'w, 's> GroundRayObstruction<'a, 'w, 's> {
    pub(crate) fn new(spatial_query: &'a SpatialQuery<'w, 's>) -> Self {
        Self {
            spatial_query,
            filter: SpatialQueryFilter::from_mask(GameLayer::Ground),
        }
    }
}

#[cfg(feature = "dev-tools")]
impl ArcObstruction for GroundRayObstruction<'_, '_, '_> {
    fn first_hit(&self, from: Vec2, to: Vec2) -> Option<Vec2> {
        let segment = to - from;
        let length = segment.length();
        let direction = Dir2::new(segment).ok()?;

        self.spatial_query
            .cast_ray(from, direction, length, true, &self.filter)
            .map(|hit| from + *direction * hit.distance)
    }
}
