//! Debug domain: hotkeys, gizmo drawing and the info overlay.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::debug::state::DebugState;
use crate::debug::ui::{DebugInfoOverlay, spawn_debug_info_overlay};
use crate::movement::{
    ArcObstruction, ArcRequest, AvianProber, BoxCast, ColliderBounds, ColliderProfile,
    CollisionProber, FastFallCue, GroundRayObstruction, MovementController, Player, ground_cast,
    head_cast, predict_arc,
};

const HIT_COLOR: Color = Color::srgb(0.2, 0.9, 0.2);
const MISS_COLOR: Color = Color::srgb(0.9, 0.2, 0.2);
const WALK_ARC_COLOR: Color = Color::WHITE;
const RUN_ARC_COLOR: Color = Color::srgb(1.0, 0.0, 0.0);

/// F1 probe boxes, F2 walk arc, F3 run arc, F4 info overlay
pub(crate) fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
) {
    if keyboard.just_pressed(KeyCode::F1) {
        debug_state.toggle_probe_boxes();
        info!(
            "[DEBUG] Probe boxes: ground={}, head={}",
            debug_state.show_ground_box, debug_state.show_head_box
        );
    }
    if keyboard.just_pressed(KeyCode::F2) {
        debug_state.show_walk_arc = !debug_state.show_walk_arc;
        info!("[DEBUG] Walk arc: {}", debug_state.show_walk_arc);
    }
    if keyboard.just_pressed(KeyCode::F3) {
        debug_state.show_run_arc = !debug_state.show_run_arc;
        info!("[DEBUG] Run arc: {}", debug_state.show_run_arc);
    }
    if keyboard.just_pressed(KeyCode::F4) {
        debug_state.show_info = !debug_state.show_info;
        info!("[DEBUG] Info overlay: {}", debug_state.show_info);
    }
}

pub(crate) fn count_fast_falls(
    mut cues: MessageReader<FastFallCue>,
    mut debug_state: ResMut<DebugState>,
) {
    let count = cues.read().count() as u32;
    if count > 0 {
        debug_state.fast_falls += count;
    }
}

fn draw_bounds(gizmos: &mut Gizmos, bounds: &ColliderBounds, color: Color) {
    let min = bounds.min();
    let max = bounds.max();
    gizmos.line_2d(Vec2::new(min.x, min.y), Vec2::new(max.x, min.y), color);
    gizmos.line_2d(Vec2::new(max.x, min.y), Vec2::new(max.x, max.y), color);
    gizmos.line_2d(Vec2::new(max.x, max.y), Vec2::new(min.x, max.y), color);
    gizmos.line_2d(Vec2::new(min.x, max.y), Vec2::new(min.x, min.y), color);
}

fn draw_cast(gizmos: &mut Gizmos, prober: &impl CollisionProber, cast: &BoxCast) {
    let color = if prober.box_cast(cast) {
        HIT_COLOR
    } else {
        MISS_COLOR
    };
    draw_bounds(gizmos, &cast.swept_bounds(), color);
}

/// Green when the cast hits ground, red otherwise.
pub(crate) fn draw_probe_boxes(
    mut gizmos: Gizmos,
    debug_state: Res<DebugState>,
    spatial_query: SpatialQuery,
    query: Query<(&Transform, &ColliderProfile, &MovementController), With<Player>>,
) {
    if !debug_state.show_ground_box && !debug_state.show_head_box {
        return;
    }

    let prober = AvianProber::new(&spatial_query);

    for (transform, profile, controller) in &query {
        let origin = transform.translation.truncate();
        let feet = profile.feet_bounds(origin);
        let body = profile.body_bounds(origin);

        if debug_state.show_ground_box {
            draw_cast(&mut gizmos, &prober, &ground_cast(&feet, controller.params()));
        }
        if debug_state.show_head_box {
            draw_cast(
                &mut gizmos,
                &prober,
                &head_cast(&feet, &body, controller.params()),
            );
        }
    }
}

/// Predicted walk (white) and run (red) arcs from the player's feet.
pub(crate) fn draw_jump_arcs(
    mut gizmos: Gizmos,
    debug_state: Res<DebugState>,
    spatial_query: SpatialQuery,
    query: Query<(&Transform, &ColliderProfile, &MovementController), With<Player>>,
) {
    if !debug_state.show_walk_arc && !debug_state.show_run_arc {
        return;
    }

    let ray_obstruction = GroundRayObstruction::new(&spatial_query);
    let obstruction: Option<&dyn ArcObstruction> = if debug_state.stop_on_collision {
        Some(&ray_obstruction)
    } else {
        None
    };

    for (transform, profile, controller) in &query {
        let params = controller.params();
        let start = profile
            .feet_bounds(transform.translation.truncate())
            .bottom_center();

        let arcs = [
            (debug_state.show_walk_arc, params.max_walk_speed, WALK_ARC_COLOR),
            (debug_state.show_run_arc, params.max_run_speed, RUN_ARC_COLOR),
        ];

        for (enabled, speed, color) in arcs {
            if !enabled {
                continue;
            }

            let request = ArcRequest {
                start,
                horizontal_speed: speed,
                draw_right: debug_state.draw_right,
                arc_resolution: debug_state.arc_resolution,
                steps: debug_state.visualization_steps,
            };
            gizmos.linestrip_2d(predict_arc(&request, params, obstruction), color);
        }
    }
}

pub(crate) fn update_debug_info_overlay(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    player_query: Query<(&Transform, &MovementController), With<Player>>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        // Cleanup overlay if it exists
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
        return;
    }

    // Ensure overlay exists
    if existing_overlay.is_empty() {
        spawn_debug_info_overlay(&mut commands);
        return;
    }

    if let (Some((transform, controller)), Ok(mut text)) =
        (player_query.iter().next(), overlay_query.single_mut())
    {
        let pos = transform.translation;
        let state = controller.state();
        **text = format!(
            "Pos: ({:.2}, {:.2})\nVel: ({:.2}, {:.2})\nFacing: {:?}\nGrounded: {}  Head: {}\nJumping: {}  Falling: {}  Fast-fall: {}\nJumps used: {}/{}\nFast falls: {}",
            pos.x,
            pos.y,
            state.move_velocity,
            controller.vertical_velocity(),
            state.facing,
            state.grounded,
            state.bumped_head,
            state.is_jumping,
            state.is_falling,
            state.is_fast_falling,
            state.jumps_used,
            controller.params().jumps_allowed,
            debug_state.fast_falls
        );
    }
}
