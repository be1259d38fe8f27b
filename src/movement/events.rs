//! Movement domain: notifications emitted by the controller.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// One-shot side effects produced inside a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementEvent {
    /// A jump unit was consumed; `double` once more than one unit is spent
    Jumped { double: bool },
    FastFallStarted,
}

/// Receives controller notifications synchronously, in emission order.
pub trait MovementEventSink {
    fn emit(&mut self, event: MovementEvent);
}

impl MovementEventSink for Vec<MovementEvent> {
    fn emit(&mut self, event: MovementEvent) {
        self.push(event);
    }
}

/// Event fired when the player jumps, consumed by the audio cue dispatcher
#[derive(Debug)]
pub struct JumpCue {
    pub entity: Entity,
    pub double: bool,
}

impl Message for JumpCue {}

/// Event fired when a jump is cut short and the player starts fast-falling
#[derive(Debug)]
pub struct FastFallCue {
    pub entity: Entity,
}

impl Message for FastFallCue {}

/// Event asking for an entity to be put back at its spawn anchor
#[derive(Debug)]
pub struct RespawnRequest {
    pub entity: Entity,
}

impl Message for RespawnRequest {}
