//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;
pub(crate) mod respawn;

pub(crate) use collisions::AvianProber;
#[cfg(feature = "dev-tools")]
pub(crate) use collisions::GroundRayObstruction;
pub(crate) use input::read_input;
pub(crate) use movement::{advance_movement_frames, advance_movement_physics};
pub(crate) use respawn::{apply_respawns, detect_kill_zones};
