//! Movement domain: the kinematic controller.
//!
//! The controller is plain data plus two entry points. `advance_frame` runs
//! once per rendered frame (timers, then the jump rules) and
//! `advance_physics` once per fixed step (contact probing, vertical
//! integration, horizontal blending). Neither touches the ECS, so tests drive
//! them directly with scripted inputs.

use bevy::prelude::*;

use crate::movement::events::MovementEventSink;
use crate::movement::kinematics;
use crate::movement::probe::{ColliderBounds, CollisionProber, probe_contacts};
use crate::movement::rules;
use crate::movement::MovementParameters;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn is_right(self) -> bool {
        self == Facing::Right
    }
}

/// Position and rotation captured once at spawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnAnchor {
    pub position: Vec3,
    pub rotation: Quat,
}

impl SpawnAnchor {
    pub fn from_transform(transform: &Transform) -> Self {
        Self {
            position: transform.translation,
            rotation: transform.rotation,
        }
    }
}

/// Mutable kinematic state. Only the controller writes it.
///
/// Countdown timers are never floored: anything `<= 0` means expired.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MovementState {
    /// Blended horizontal velocity
    pub move_velocity: f32,
    pub vertical_velocity: f32,
    pub facing: Facing,

    /// Latest probe results; rewritten every physics step
    pub grounded: bool,
    pub bumped_head: bool,

    pub is_jumping: bool,
    pub is_fast_falling: bool,
    pub is_falling: bool,
    pub jumps_used: u32,

    pub is_past_apex_threshold: bool,
    pub time_past_apex_threshold: f32,

    pub fast_fall_time: f32,
    pub fast_fall_release_speed: f32,

    pub jump_buffer_timer: f32,
    pub jump_released_during_buffer: bool,

    pub coyote_timer: f32,
}

/// Jump button edges for one frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    pub jump_pressed: bool,
    pub jump_released: bool,
}

/// Everything one physics step needs from the outside world.
#[derive(Debug, Clone, Copy)]
pub struct PhysicsStep {
    pub axis: Vec2,
    pub run_held: bool,
    /// False whenever the game is not in its playing state
    pub playing: bool,
    /// Velocity currently on the rigid body
    pub body_velocity: Vec2,
    pub feet: ColliderBounds,
    pub body: ColliderBounds,
}

#[derive(Component, Debug, Clone)]
pub struct MovementController {
    params: MovementParameters,
    state: MovementState,
    anchor: SpawnAnchor,
}

impl MovementController {
    pub fn new(params: MovementParameters, anchor: SpawnAnchor) -> Self {
        Self {
            params,
            state: MovementState::default(),
            anchor,
        }
    }

    pub fn params(&self) -> &MovementParameters {
        &self.params
    }

    pub fn state(&self) -> &MovementState {
        &self.state
    }

    pub fn anchor(&self) -> SpawnAnchor {
        self.anchor
    }

    pub fn vertical_velocity(&self) -> f32 {
        self.state.vertical_velocity
    }

    pub fn facing(&self) -> Facing {
        self.state.facing
    }

    /// Variable-rate tick: decay timers, then run the jump rules.
    pub fn advance_frame(
        &mut self,
        dt: f32,
        input: &FrameInput,
        events: &mut impl MovementEventSink,
    ) {
        self.count_timers(dt);
        rules::evaluate(&mut self.state, &self.params, input, events);
    }

    /// Fixed-rate tick. Returns the velocity to commit to the rigid body.
    pub fn advance_physics(
        &mut self,
        dt: f32,
        step: &PhysicsStep,
        prober: &impl CollisionProber,
        events: &mut impl MovementEventSink,
    ) -> Vec2 {
        if !step.playing {
            return Vec2::new(0.0, step.body_velocity.y);
        }

        let contacts = probe_contacts(prober, &step.feet, &step.body, &self.params);
        if contacts.grounded != self.state.grounded {
            debug!(
                "Ground contact changed: grounded={}, vertical_velocity={:.2}",
                contacts.grounded, self.state.vertical_velocity
            );
        }
        self.state.grounded = contacts.grounded;
        self.state.bumped_head = contacts.bumped_head;

        kinematics::integrate_vertical(&mut self.state, &self.params, dt, events);
        kinematics::blend_horizontal(
            &mut self.state,
            &self.params,
            dt,
            step.axis,
            step.run_held,
        );

        Vec2::new(self.state.move_velocity, self.state.vertical_velocity)
    }

    /// Put every jump, fall and timer field back to its spawn value and hand
    /// back the anchor for the caller's transform.
    ///
    /// The blended horizontal velocity survives; facing snaps back to right.
    pub fn respawn(&mut self) -> SpawnAnchor {
        self.state = MovementState {
            move_velocity: self.state.move_velocity,
            ..default()
        };
        self.anchor
    }

    fn count_timers(&mut self, dt: f32) {
        self.state.jump_buffer_timer -= dt;

        if self.state.grounded {
            self.state.coyote_timer = self.params.coyote_time;
        } else {
            self.state.coyote_timer -= dt;
        }
    }
}
