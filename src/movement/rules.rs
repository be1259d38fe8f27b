//! Movement domain: ordered jump transition rules.
//!
//! Rules run top to bottom every frame. Several can fire in the same frame
//! (a press, a ground jump and an immediate fast-fall, say), so this is a
//! guarded list rather than a single-state enum. Rules sharing a
//! [`RuleGroup`] behave like an if/else-if chain: the first match wins.

use bevy::prelude::*;

use crate::movement::controller::{FrameInput, MovementState};
use crate::movement::events::{MovementEvent, MovementEventSink};
use crate::movement::kinematics::{
    WORLD_GRAVITY, begin_fast_fall, begin_fast_fall_past_window,
};
use crate::movement::MovementParameters;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RuleGroup {
    Initiate,
}

impl RuleGroup {
    const COUNT: usize = 1;

    fn index(self) -> usize {
        match self {
            RuleGroup::Initiate => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Exclusivity {
    Independent,
    FirstOf(RuleGroup),
}

type Guard = fn(&MovementState, &MovementParameters, &FrameInput) -> bool;
type Apply = fn(&mut MovementState, &MovementParameters, &mut dyn MovementEventSink);

pub(crate) struct JumpRule {
    pub name: &'static str,
    pub exclusivity: Exclusivity,
    guard: Guard,
    apply: Apply,
}

pub(crate) const JUMP_RULES: [JumpRule; 6] = [
    JumpRule {
        name: "press",
        exclusivity: Exclusivity::Independent,
        guard: |_, _, input| input.jump_pressed,
        apply: buffer_press,
    },
    JumpRule {
        name: "release",
        exclusivity: Exclusivity::Independent,
        guard: |_, _, input| input.jump_released,
        apply: handle_release,
    },
    JumpRule {
        name: "ground_jump",
        exclusivity: Exclusivity::FirstOf(RuleGroup::Initiate),
        guard: |state, _, _| {
            state.jump_buffer_timer > 0.0
                && !state.is_jumping
                && (state.grounded || state.coyote_timer > 0.0)
        },
        apply: ground_jump,
    },
    JumpRule {
        name: "air_jump",
        exclusivity: Exclusivity::FirstOf(RuleGroup::Initiate),
        guard: |state, params, _| {
            state.jump_buffer_timer > 0.0
                && state.is_jumping
                && state.jumps_used < params.jumps_allowed
        },
        apply: air_jump,
    },
    JumpRule {
        name: "late_air_jump",
        exclusivity: Exclusivity::FirstOf(RuleGroup::Initiate),
        guard: |state, params, _| {
            state.jump_buffer_timer > 0.0
                && state.is_falling
                && state.jumps_used < params.jumps_allowed.saturating_sub(1)
        },
        apply: late_air_jump,
    },
    JumpRule {
        name: "land",
        exclusivity: Exclusivity::Independent,
        guard: |state, _, _| {
            (state.is_jumping || state.is_falling)
                && state.grounded
                && state.vertical_velocity <= 0.0
        },
        apply: land,
    },
];

/// Run every rule against the current state. Returns how many fired.
pub(crate) fn evaluate(
    state: &mut MovementState,
    params: &MovementParameters,
    input: &FrameInput,
    events: &mut dyn MovementEventSink,
) -> usize {
    let mut group_fired = [false; RuleGroup::COUNT];
    let mut fired = 0;

    for rule in &JUMP_RULES {
        if let Exclusivity::FirstOf(group) = rule.exclusivity {
            if group_fired[group.index()] {
                continue;
            }
        }

        if !(rule.guard)(&*state, params, input) {
            continue;
        }

        trace!("Jump rule fired: {}", rule.name);
        (rule.apply)(state, params, events);
        fired += 1;

        if let Exclusivity::FirstOf(group) = rule.exclusivity {
            group_fired[group.index()] = true;
        }
    }

    fired
}

fn buffer_press(
    state: &mut MovementState,
    params: &MovementParameters,
    _events: &mut dyn MovementEventSink,
) {
    state.jump_buffer_timer = params.jump_buffer_time;
    state.jump_released_during_buffer = false;
}

fn handle_release(
    state: &mut MovementState,
    params: &MovementParameters,
    events: &mut dyn MovementEventSink,
) {
    if state.jump_buffer_timer > 0.0 {
        state.jump_released_during_buffer = true;
    }

    if !state.is_jumping || state.vertical_velocity <= 0.0 {
        return;
    }

    if state.is_past_apex_threshold {
        // Released during the hang: drop straight into release gravity
        state.is_past_apex_threshold = false;
        state.vertical_velocity = 0.0;
        begin_fast_fall_past_window(state, params, events);
    } else {
        let release_speed = state.vertical_velocity;
        begin_fast_fall(state, release_speed, events);
    }
}

fn ground_jump(
    state: &mut MovementState,
    params: &MovementParameters,
    events: &mut dyn MovementEventSink,
) {
    initiate_jump(state, params, 1, events);

    // Tapped and released before the jump could start: short hop
    if state.jump_released_during_buffer {
        let release_speed = state.vertical_velocity;
        begin_fast_fall(state, release_speed, events);
    }
}

fn air_jump(
    state: &mut MovementState,
    params: &MovementParameters,
    events: &mut dyn MovementEventSink,
) {
    state.is_fast_falling = false;
    initiate_jump(state, params, 1, events);
}

/// Walked off a ledge and let coyote time lapse: the missed ground jump is
/// charged too, and the jump starts already cut.
fn late_air_jump(
    state: &mut MovementState,
    params: &MovementParameters,
    events: &mut dyn MovementEventSink,
) {
    initiate_jump(state, params, 2, events);
    let release_speed = state.vertical_velocity;
    begin_fast_fall(state, release_speed, events);
}

fn land(
    state: &mut MovementState,
    _params: &MovementParameters,
    _events: &mut dyn MovementEventSink,
) {
    debug!(
        "Landed: jumps_used={}, vertical_velocity={:.2}",
        state.jumps_used, state.vertical_velocity
    );

    state.is_jumping = false;
    state.is_falling = false;
    state.is_fast_falling = false;
    state.fast_fall_time = 0.0;
    state.fast_fall_release_speed = 0.0;
    state.is_past_apex_threshold = false;
    state.time_past_apex_threshold = 0.0;
    state.jumps_used = 0;

    // Keeps the feet pressed into the ground probe on the next step
    state.vertical_velocity = WORLD_GRAVITY;
}

fn initiate_jump(
    state: &mut MovementState,
    params: &MovementParameters,
    units: u32,
    events: &mut dyn MovementEventSink,
) {
    state.is_jumping = true;
    state.jump_buffer_timer = 0.0;
    state.jumps_used += units;
    state.vertical_velocity = params.initial_jump_velocity;

    let double = state.jumps_used > 1;
    debug!(
        "Jump: jumps_used={}/{}, double={}",
        state.jumps_used, params.jumps_allowed, double
    );
    events.emit(MovementEvent::Jumped { double });
}
