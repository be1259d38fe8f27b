//! Movement domain: systems driving the controller's frame and physics ticks.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::core::GameState;
use crate::movement::{
    AvianProber, ColliderProfile, FastFallCue, FrameInput, JumpCue, MovementController,
    MovementEvent, MovementInput, PhysicsStep, Player,
};

fn forward_events(
    entity: Entity,
    events: Vec<MovementEvent>,
    jump_cues: &mut MessageWriter<JumpCue>,
    fast_fall_cues: &mut MessageWriter<FastFallCue>,
) {
    for event in events {
        match event {
            MovementEvent::Jumped { double } => {
                jump_cues.write(JumpCue { entity, double });
            }
            MovementEvent::FastFallStarted => {
                fast_fall_cues.write(FastFallCue { entity });
            }
        }
    }
}

/// Per-frame tick: timers and jump rules.
pub(crate) fn advance_movement_frames(
    time: Res<Time>,
    input: Res<MovementInput>,
    mut jump_cues: MessageWriter<JumpCue>,
    mut fast_fall_cues: MessageWriter<FastFallCue>,
    mut query: Query<(Entity, &mut MovementController), With<Player>>,
) {
    let dt = time.delta_secs();
    let frame_input = FrameInput {
        jump_pressed: input.jump_pressed,
        jump_released: input.jump_released,
    };

    for (entity, mut controller) in &mut query {
        let mut events = Vec::new();
        controller.advance_frame(dt, &frame_input, &mut events);
        forward_events(entity, events, &mut jump_cues, &mut fast_fall_cues);
    }
}

/// Fixed-step tick: probe contacts, integrate, commit velocity.
pub(crate) fn advance_movement_physics(
    time: Res<Time>,
    input: Res<MovementInput>,
    game_state: Res<State<GameState>>,
    spatial_query: SpatialQuery,
    mut jump_cues: MessageWriter<JumpCue>,
    mut fast_fall_cues: MessageWriter<FastFallCue>,
    mut query: Query<
        (
            Entity,
            &Transform,
            &ColliderProfile,
            &mut MovementController,
            &mut LinearVelocity,
            &mut Sprite,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();
    let playing = *game_state.get() == GameState::Playing;
    let prober = AvianProber::new(&spatial_query);

    for (entity, transform, profile, mut controller, mut velocity, mut sprite) in &mut query {
        let origin = transform.translation.truncate();
        let step = PhysicsStep {
            axis: input.axis,
            run_held: input.run_held,
            playing,
            body_velocity: velocity.0,
            feet: profile.feet_bounds(origin),
            body: profile.body_bounds(origin),
        };

        let mut events = Vec::new();
        velocity.0 = controller.advance_physics(dt, &step, &prober, &mut events);
        forward_events(entity, events, &mut jump_cues, &mut fast_fall_cues);

        let flip = !controller.facing().is_right();
        if sprite.flip_x != flip {
            sprite.flip_x = flip;
        }
    }
}
