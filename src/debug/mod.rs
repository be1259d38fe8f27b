//! Debug tooling for tuning movement feel (dev-tools feature).
//!
//! Features:
//! - Ground/head probe boxes, colored by hit
//! - Predicted walk and run jump arcs
//! - Info overlay with velocity and jump state

mod state;
mod systems;
mod ui;

use bevy::prelude::*;

use crate::content::ArcVisualizationDef;
use crate::debug::state::DebugState;
use crate::debug::systems::{
    count_fast_falls, draw_jump_arcs, draw_probe_boxes, handle_debug_hotkeys,
    update_debug_info_overlay,
};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        let state = app
            .world()
            .get_resource::<ArcVisualizationDef>()
            .map(DebugState::from_visualization)
            .unwrap_or_else(|| DebugState::from_visualization(&ArcVisualizationDef::default()));

        app.insert_resource(state).add_systems(
            Update,
            (
                handle_debug_hotkeys,
                count_fast_falls,
                draw_probe_boxes,
                draw_jump_arcs,
                update_debug_info_overlay,
            )
                .chain(),
        );
    }
}
