//! Movement domain: platformer locomotion, jumping and respawn.

mod bootstrap;
mod components;
mod controller;
mod events;
mod kinematics;
mod probe;
mod resources;
mod rules;
mod systems;
mod trajectory;

pub use components::{ColliderProfile, GameLayer, Ground, KillZone, Player};
pub use controller::{FrameInput, MovementController, PhysicsStep, SpawnAnchor};
pub use events::{FastFallCue, JumpCue, MovementEvent, RespawnRequest};
pub use probe::{BoxCast, ColliderBounds, CollisionProber, ground_cast, head_cast};
pub use resources::{MovementInput, MovementParameters};
pub use trajectory::{ArcObstruction, ArcRequest, predict_arc};

pub(crate) use systems::AvianProber;
#[cfg(feature = "dev-tools")]
pub(crate) use systems::GroundRayObstruction;

use bevy::prelude::*;

use crate::movement::bootstrap::spawn_player;
use crate::movement::systems::{
    advance_movement_frames, advance_movement_physics, apply_respawns, detect_kill_zones,
    read_input,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementParameters>()
            .init_resource::<MovementInput>()
            .add_message::<JumpCue>()
            .add_message::<FastFallCue>()
            .add_message::<RespawnRequest>()
            .add_systems(Startup, spawn_player)
            .add_systems(Update, (read_input, advance_movement_frames).chain())
            .add_systems(FixedUpdate, advance_movement_physics)
            .add_systems(Update, (detect_kill_zones, apply_respawns).chain());
    }
}
