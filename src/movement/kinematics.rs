//! Movement domain: vertical integration and horizontal blending.

use bevy::prelude::*;

use crate::movement::controller::{Facing, MovementState};
use crate::movement::events::{MovementEvent, MovementEventSink};
use crate::movement::MovementParameters;

/// Vertical velocity written on landing; matches the physics world gravity.
pub const WORLD_GRAVITY: f32 = -9.81;

/// Nudge applied when the apex hang ends so descent starts deterministically.
pub const APEX_EXIT_VELOCITY: f32 = -0.01;

/// Upward speed cap.
pub const MAX_RISE_SPEED: f32 = 50.0;

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t.clamp(0.0, 1.0)
}

/// Position of `value` between `from` and `to` in 0..1.
/// `None` when the range is empty.
fn inverse_lerp(from: f32, to: f32, value: f32) -> Option<f32> {
    let span = to - from;
    if span == 0.0 {
        return None;
    }
    Some(((value - from) / span).clamp(0.0, 1.0))
}

/// Start a glide from `release_speed` down to zero over the upward-cancel
/// window, after which release gravity takes over.
pub(crate) fn begin_fast_fall(
    state: &mut MovementState,
    release_speed: f32,
    events: &mut dyn MovementEventSink,
) {
    state.is_fast_falling = true;
    state.fast_fall_release_speed = release_speed;
    state.fast_fall_time = 0.0;
    debug!("Fast fall from {:.2}", release_speed);
    events.emit(MovementEvent::FastFallStarted);
}

/// Enter fast-fall with the glide already spent: release gravity applies from
/// the next step and the current vertical velocity is left as is.
pub(crate) fn begin_fast_fall_past_window(
    state: &mut MovementState,
    params: &MovementParameters,
    events: &mut dyn MovementEventSink,
) {
    state.is_fast_falling = true;
    state.fast_fall_release_speed = 0.0;
    state.fast_fall_time = params.time_for_upwards_cancel;
    debug!("Fast fall past glide at {:.2}", state.vertical_velocity);
    events.emit(MovementEvent::FastFallStarted);
}

pub(crate) fn integrate_vertical(
    state: &mut MovementState,
    params: &MovementParameters,
    dt: f32,
    events: &mut dyn MovementEventSink,
) {
    // An empty step integrates nothing, apex hang entry included
    if dt <= 0.0 {
        return;
    }

    let gravity = params.gravity;
    let release_gravity = params.gravity * params.gravity_on_release_multiplier;

    if state.is_jumping {
        if state.bumped_head && !state.is_fast_falling {
            if state.vertical_velocity > 0.0 {
                begin_fast_fall(state, 0.0, events);
            } else {
                begin_fast_fall_past_window(state, params, events);
            }
        }

        if state.vertical_velocity >= 0.0 {
            let apex_progress =
                inverse_lerp(params.initial_jump_velocity, 0.0, state.vertical_velocity);

            match apex_progress {
                Some(progress) if progress > params.apex_threshold => {
                    if !state.is_past_apex_threshold {
                        state.is_past_apex_threshold = true;
                        state.time_past_apex_threshold = 0.0;
                    }

                    state.time_past_apex_threshold += dt;
                    state.vertical_velocity =
                        if state.time_past_apex_threshold < params.apex_hang_time {
                            0.0
                        } else {
                            APEX_EXIT_VELOCITY
                        };
                }
                _ => {
                    state.vertical_velocity += gravity * dt;
                    state.is_past_apex_threshold = false;
                }
            }
        } else if !state.is_fast_falling {
            state.vertical_velocity += release_gravity * dt;
        } else {
            state.is_falling = true;
        }
    }

    if state.is_fast_falling {
        state.fast_fall_time += dt;

        if state.fast_fall_time >= params.time_for_upwards_cancel {
            state.vertical_velocity += release_gravity * dt;
        } else if let Some(fraction) =
            inverse_lerp(0.0, params.time_for_upwards_cancel, state.fast_fall_time)
        {
            state.vertical_velocity = lerp(state.fast_fall_release_speed, 0.0, fraction);
        }
    }

    // Walked off a ledge without jumping
    if !state.grounded && !state.is_jumping {
        state.is_falling = true;
        state.vertical_velocity += gravity * dt;
    }

    state.vertical_velocity = state
        .vertical_velocity
        .clamp(-params.max_fall_speed, MAX_RISE_SPEED);
}

pub(crate) fn blend_horizontal(
    state: &mut MovementState,
    params: &MovementParameters,
    dt: f32,
    axis: Vec2,
    run_held: bool,
) {
    let (acceleration, deceleration) = params.blend_rates(state.grounded);

    if axis != Vec2::ZERO {
        turn_check(state, axis.x);

        let top_speed = if run_held {
            params.max_run_speed
        } else {
            params.max_walk_speed
        };
        let target = axis.x * top_speed;
        state.move_velocity = lerp(state.move_velocity, target, acceleration * dt);
    } else {
        state.move_velocity = lerp(state.move_velocity, 0.0, deceleration * dt);
    }
}

fn turn_check(state: &mut MovementState, input_x: f32) {
    match state.facing {
        Facing::Right if input_x < 0.0 => state.facing = Facing::Left,
        Facing::Left if input_x > 0.0 => state.facing = Facing::Right,
        _ => {}
    }
}
