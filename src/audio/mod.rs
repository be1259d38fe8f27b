//! Audio domain: dispatches movement cues to sound effects.
//!
//! Clip playback is not wired up yet; cues are resolved to their effect name
//! and logged so the hook points stay exercised.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::movement::JumpCue;

pub struct AudioCuePlugin;

impl Plugin for AudioCuePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, dispatch_jump_cues);
    }
}

/// Sound effect name for a jump.
pub fn jump_sfx(double: bool) -> &'static str {
    if double { "double_jump" } else { "jump" }
}

fn dispatch_jump_cues(mut cues: MessageReader<JumpCue>) {
    for cue in cues.read() {
        debug!("SFX '{}' for {:?}", jump_sfx(cue.double), cue.entity);
    }
}

#[cfg(test)]
mod tests {
    use super::jump_sfx;

    #[test]
    fn test_jump_sfx_distinguishes_double_jump() {
        assert_eq!(jump_sfx(false), "jump");
        assert_eq!(jump_sfx(true), "double_jump");
    }
}
