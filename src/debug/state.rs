//! Debug domain: toggles for probe boxes, jump arcs and the info overlay.

use bevy::prelude::*;

use crate::content::ArcVisualizationDef;

/// Resource tracking debug drawing state
#[derive(Resource, Debug, Clone)]
pub struct DebugState {
    pub show_ground_box: bool,
    pub show_head_box: bool,
    pub show_walk_arc: bool,
    pub show_run_arc: bool,
    pub show_info: bool,
    pub stop_on_collision: bool,
    pub draw_right: bool,
    pub arc_resolution: u32,
    pub visualization_steps: u32,
    /// Fast-fall cues seen since startup
    pub fast_falls: u32,
}

impl DebugState {
    pub fn from_visualization(def: &ArcVisualizationDef) -> Self {
        Self {
            show_ground_box: def.show_ground_box,
            show_head_box: def.show_head_box,
            show_walk_arc: def.show_walk_arc,
            show_run_arc: def.show_run_arc,
            show_info: false,
            stop_on_collision: def.stop_on_collision,
            draw_right: def.draw_right,
            arc_resolution: def.arc_resolution,
            visualization_steps: def.visualization_steps,
            fast_falls: 0,
        }
    }

    /// Flip both probe boxes together; turns both on if either was off.
    pub fn toggle_probe_boxes(&mut self) {
        let on = !(self.show_ground_box && self.show_head_box);
        self.show_ground_box = on;
        self.show_head_box = on;
    }
}
