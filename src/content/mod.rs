//! Content domain: movement tuning loaded from RON at startup.

mod data;
mod loader;
mod validation;

pub use data::{ArcVisualizationDef, MovementTuningDef};

use crate::content::loader::load_movement_config;
use crate::content::validation::validate_movement_config;

use bevy::prelude::*;
use std::path::Path;

use crate::movement::MovementParameters;

const DATA_DIR: &str = "assets/data";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<MovementTuningDef>()
            .register_type::<ArcVisualizationDef>();

        let (params, visualization) = load_or_default(Path::new(DATA_DIR));
        app.insert_resource(params).insert_resource(visualization);
    }
}

/// Load and validate the movement file, falling back to built-in defaults
/// when it is missing, malformed, or rejected by validation.
pub fn load_or_default(base_path: &Path) -> (MovementParameters, ArcVisualizationDef) {
    let config = match load_movement_config(base_path) {
        Ok(config) => config,
        Err(e) => {
            warn!("{}; using default movement tuning", e);
            return (MovementParameters::default(), ArcVisualizationDef::default());
        }
    };

    let errors = validate_movement_config(&config);
    if !errors.is_empty() {
        for e in &errors {
            error!("Movement config rejected: {}", e);
        }
        warn!(
            "{} movement config error(s); using default movement tuning",
            errors.len()
        );
        return (MovementParameters::default(), ArcVisualizationDef::default());
    }

    let params = config.movement.to_parameters();
    info!(
        "Loaded movement config (schema {}): gravity={:.3}, initial_jump_velocity={:.3}, jumps_allowed={}",
        config.schema_version, params.gravity, params.initial_jump_velocity, params.jumps_allowed
    );

    (params, config.visualization)
}
