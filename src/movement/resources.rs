//! Movement domain: tuning and input resources.

use bevy::prelude::*;

/// Read-only tunables for the movement controller.
///
/// Distances are world units (one unit renders as 32 px). `gravity` is signed
/// (negative pulls down) and, together with `initial_jump_velocity`, is derived
/// from `jump_height` and `time_till_apex` by [`MovementParameters::recalculate`].
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct MovementParameters {
    pub max_walk_speed: f32,
    pub max_run_speed: f32,
    pub ground_acceleration: f32,
    pub ground_deceleration: f32,
    pub air_acceleration: f32,
    pub air_deceleration: f32,

    pub jump_height: f32,
    pub jump_height_compensation: f32,
    pub time_till_apex: f32,
    pub gravity_on_release_multiplier: f32,
    pub max_fall_speed: f32,
    /// Total jumps per airtime, ground jump included (1 = no double jump)
    pub jumps_allowed: u32,

    /// Window over which a released jump glides its upward speed down to zero
    pub time_for_upwards_cancel: f32,
    /// Fraction of the ascent (0..1) after which the apex hang begins
    pub apex_threshold: f32,
    pub apex_hang_time: f32,

    pub jump_buffer_time: f32,
    pub coyote_time: f32,

    pub ground_detection_length: f32,
    pub head_detection_length: f32,
    /// Head probe width as a fraction of the feet collider width
    pub head_width: f32,

    // Derived
    pub adjusted_jump_height: f32,
    pub gravity: f32,
    pub initial_jump_velocity: f32,
}

impl Default for MovementParameters {
    fn default() -> Self {
        let mut params = Self {
            max_walk_speed: 12.5,
            max_run_speed: 20.0,
            ground_acceleration: 5.0,
            ground_deceleration: 20.0,
            air_acceleration: 5.0,
            air_deceleration: 5.0,
            jump_height: 6.5,
            jump_height_compensation: 1.054,
            time_till_apex: 0.35,
            gravity_on_release_multiplier: 2.0,
            max_fall_speed: 26.0,
            jumps_allowed: 2,
            time_for_upwards_cancel: 0.027,
            apex_threshold: 0.97,
            apex_hang_time: 0.075,
            jump_buffer_time: 0.125,
            coyote_time: 0.1,
            ground_detection_length: 0.02,
            head_detection_length: 0.02,
            head_width: 0.75,
            adjusted_jump_height: 0.0,
            gravity: 0.0,
            initial_jump_velocity: 0.0,
        };
        params.recalculate();
        params
    }
}

impl MovementParameters {
    /// Derive gravity and launch speed so a jump peaks at the compensated
    /// height after exactly `time_till_apex` seconds.
    pub fn recalculate(&mut self) {
        self.adjusted_jump_height = self.jump_height * self.jump_height_compensation;

        if self.time_till_apex > 0.0 {
            self.gravity = -(2.0 * self.adjusted_jump_height) / self.time_till_apex.powi(2);
            self.initial_jump_velocity = self.gravity.abs() * self.time_till_apex;
        } else {
            self.gravity = 0.0;
            self.initial_jump_velocity = 0.0;
        }
    }

    /// Peak height of a single jump, ignoring the apex hang.
    /// Uses physics formula: h = v² / (2g)
    pub fn apex_height(&self) -> f32 {
        if self.gravity == 0.0 {
            return 0.0;
        }
        self.initial_jump_velocity.powi(2) / (2.0 * self.gravity.abs())
    }

    /// Acceleration/deceleration pair for the given contact state.
    pub fn blend_rates(&self, grounded: bool) -> (f32, f32) {
        if grounded {
            (self.ground_acceleration, self.ground_deceleration)
        } else {
            (self.air_acceleration, self.air_deceleration)
        }
    }
}

/// Input sampled once per rendered frame.
///
/// `jump_pressed` and `jump_released` are edges: true for exactly one frame.
#[derive(Resource, Debug, Default, Clone)]
pub struct MovementInput {
    pub axis: Vec2,
    pub run_held: bool,
    pub jump_pressed: bool,
    pub jump_released: bool,
}
