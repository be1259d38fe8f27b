//! Movement domain: closed-form jump arc prediction for debug drawing.
//!
//! Each sample is computed directly from elapsed simulated time in three
//! phases (rise, apex hang, fall) using the same gravity, launch speed and
//! hang time as the controller, so the drawn arc lines up with real jumps.

use bevy::prelude::*;

use crate::movement::MovementParameters;

/// Finds the first ground hit on the segment `from -> to`.
pub trait ArcObstruction {
    fn first_hit(&self, from: Vec2, to: Vec2) -> Option<Vec2>;
}

#[derive(Debug, Clone, Copy)]
pub struct ArcRequest {
    /// Feet bottom-center at launch
    pub start: Vec2,
    pub horizontal_speed: f32,
    pub draw_right: bool,
    /// Samples per `2 * time_till_apex` of simulated time
    pub arc_resolution: u32,
    pub steps: u32,
}

/// Displacement from the launch point after `time` seconds.
pub fn arc_displacement(params: &MovementParameters, speed: f32, time: f32) -> Vec2 {
    let gravity = Vec2::new(0.0, params.gravity);
    let launch = Vec2::new(speed, params.initial_jump_velocity);
    let rise_time = params.time_till_apex;
    let hang_time = params.apex_hang_time.max(0.0);

    if time < rise_time {
        return launch * time + 0.5 * gravity * time * time;
    }

    let apex = launch * rise_time + 0.5 * gravity * rise_time * rise_time;
    if time < rise_time + hang_time {
        return apex + Vec2::new(speed, 0.0) * (time - rise_time);
    }

    let fall_time = time - (rise_time + hang_time);
    apex + Vec2::new(speed, 0.0) * hang_time
        + Vec2::new(speed, 0.0) * fall_time
        + 0.5 * gravity * fall_time * fall_time
}

/// Predict the jump arc as a polyline beginning at `request.start`.
///
/// The polyline holds `steps` points when unobstructed; with an obstruction it
/// ends at the first hit point.
pub fn predict_arc(
    request: &ArcRequest,
    params: &MovementParameters,
    obstruction: Option<&dyn ArcObstruction>,
) -> Vec<Vec2> {
    let mut points = vec![request.start];
    if request.arc_resolution == 0 {
        return points;
    }

    let speed = if request.draw_right {
        request.horizontal_speed
    } else {
        -request.horizontal_speed
    };
    let time_step = 2.0 * params.time_till_apex / request.arc_resolution as f32;
    let mut previous = request.start;

    for i in 1..request.steps {
        let time = i as f32 * time_step;
        let point = request.start + arc_displacement(params, speed, time);

        if let Some(hit) = obstruction.and_then(|o| o.first_hit(previous, point)) {
            points.push(hit);
            break;
        }

        points.push(point);
        previous = point;
    }

    points
}
