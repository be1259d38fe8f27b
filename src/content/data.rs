//! Data definitions for the movement RON file.
//!
//! These structs mirror the structure in assets/data/movement.ron and are
//! used for deserialization. Missing fields fall back to the defaults below.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::MovementParameters;

// ============================================================================
// File wrapper (movement.ron)
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MovementConfigFile {
    pub schema_version: u32,
    #[serde(default)]
    pub movement: MovementTuningDef,
    #[serde(default)]
    pub visualization: ArcVisualizationDef,
}

// ============================================================================
// Movement tuning
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct MovementTuningDef {
    // Walk / run
    pub max_walk_speed: f32,
    pub max_run_speed: f32,
    pub ground_acceleration: f32,
    pub ground_deceleration: f32,
    pub air_acceleration: f32,
    pub air_deceleration: f32,

    // Jump
    pub jump_height: f32,
    pub jump_height_compensation: f32,
    pub time_till_apex: f32,
    pub gravity_on_release_multiplier: f32,
    pub max_fall_speed: f32,
    pub jumps_allowed: u32,

    // Jump cut
    pub time_for_upwards_cancel: f32,

    // Apex
    pub apex_threshold: f32,
    pub apex_hang_time: f32,

    // Buffer / coyote
    pub jump_buffer_time: f32,
    pub coyote_time: f32,

    // Contact probes
    pub ground_detection_length: f32,
    pub head_detection_length: f32,
    pub head_width: f32,
}

impl Default for MovementTuningDef {
    fn default() -> Self {
        Self::from(&MovementParameters::default())
    }
}

impl From<&MovementParameters> for MovementTuningDef {
    fn from(params: &MovementParameters) -> Self {
        Self {
            max_walk_speed: params.max_walk_speed,
            max_run_speed: params.max_run_speed,
            ground_acceleration: params.ground_acceleration,
            ground_deceleration: params.ground_deceleration,
            air_acceleration: params.air_acceleration,
            air_deceleration: params.air_deceleration,
            jump_height: params.jump_height,
            jump_height_compensation: params.jump_height_compensation,
            time_till_apex: params.time_till_apex,
            gravity_on_release_multiplier: params.gravity_on_release_multiplier,
            max_fall_speed: params.max_fall_speed,
            jumps_allowed: params.jumps_allowed,
            time_for_upwards_cancel: params.time_for_upwards_cancel,
            apex_threshold: params.apex_threshold,
            apex_hang_time: params.apex_hang_time,
            jump_buffer_time: params.jump_buffer_time,
            coyote_time: params.coyote_time,
            ground_detection_length: params.ground_detection_length,
            head_detection_length: params.head_detection_length,
            head_width: params.head_width,
        }
    }
}

impl MovementTuningDef {
    /// Build runtime parameters, deriving gravity and launch speed.
    pub fn to_parameters(&self) -> MovementParameters {
        let mut params = MovementParameters {
            max_walk_speed: self.max_walk_speed,
            max_run_speed: self.max_run_speed,
            ground_acceleration: self.ground_acceleration,
            ground_deceleration: self.ground_deceleration,
            air_acceleration: self.air_acceleration,
            air_deceleration: self.air_deceleration,
            jump_height: self.jump_height,
            jump_height_compensation: self.jump_height_compensation,
            time_till_apex: self.time_till_apex,
            gravity_on_release_multiplier: self.gravity_on_release_multiplier,
            max_fall_speed: self.max_fall_speed,
            jumps_allowed: self.jumps_allowed,
            time_for_upwards_cancel: self.time_for_upwards_cancel,
            apex_threshold: self.apex_threshold,
            apex_hang_time: self.apex_hang_time,
            jump_buffer_time: self.jump_buffer_time,
            coyote_time: self.coyote_time,
            ground_detection_length: self.ground_detection_length,
            head_detection_length: self.head_detection_length,
            head_width: self.head_width,
            adjusted_jump_height: 0.0,
            gravity: 0.0,
            initial_jump_velocity: 0.0,
        };
        params.recalculate();
        params
    }
}

// ============================================================================
// Jump arc visualization and probe debug drawing
// ============================================================================

#[derive(Resource, Debug, Clone, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct ArcVisualizationDef {
    pub show_walk_arc: bool,
    pub show_run_arc: bool,
    pub stop_on_collision: bool,
    pub draw_right: bool,
    pub arc_resolution: u32,
    pub visualization_steps: u32,
    pub show_ground_box: bool,
    pub show_head_box: bool,
}

impl Default for ArcVisualizationDef {
    fn default() -> Self {
        Self {
            show_walk_arc: false,
            show_run_arc: false,
            stop_on_collision: true,
            draw_right: true,
            arc_resolution: 20,
            visualization_steps: 90,
            show_ground_box: false,
            show_head_box: false,
        }
    }
}
