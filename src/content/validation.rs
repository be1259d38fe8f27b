//! Validation for movement tuning values.
//!
//! A parameter set that fails here is rejected at startup; the controller
//! itself never sees it.

use super::data::{ArcVisualizationDef, MovementConfigFile, MovementTuningDef};

/// A validation error with context about what failed.
#[derive(Debug)]
pub struct ValidationError {
    pub section: &'static str,
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}: {}", self.section, self.field, self.message)
    }
}

/// Helper macro for checking a value is finite and not negative
macro_rules! check_non_negative {
    ($errors:expr, $section:expr, $def:expr, $($field:ident),+ $(,)?) => {
        $(
            let value = $def.$field;
            if !value.is_finite() || value < 0.0 {
                $errors.push(ValidationError {
                    section: $section,
                    field: stringify!($field),
                    message: format!("must be a non-negative number, got {}", value),
                });
            }
        )+
    };
}

fn validate_tuning(def: &MovementTuningDef, errors: &mut Vec<ValidationError>) {
    check_non_negative!(
        errors,
        "movement",
        def,
        max_walk_speed,
        max_run_speed,
        ground_acceleration,
        ground_deceleration,
        air_acceleration,
        air_deceleration,
        jump_height,
        jump_height_compensation,
        gravity_on_release_multiplier,
        max_fall_speed,
        time_for_upwards_cancel,
        apex_threshold,
        apex_hang_time,
        jump_buffer_time,
        coyote_time,
        ground_detection_length,
        head_detection_length,
        head_width,
    );

    if def.jumps_allowed < 1 {
        errors.push(ValidationError {
            section: "movement",
            field: "jumps_allowed",
            message: "at least one jump must be allowed".to_string(),
        });
    }

    if !def.time_till_apex.is_finite() || def.time_till_apex <= 0.0 {
        errors.push(ValidationError {
            section: "movement",
            field: "time_till_apex",
            message: format!("must be greater than zero, got {}", def.time_till_apex),
        });
    }

    if def.head_width > 1.0 {
        errors.push(ValidationError {
            section: "movement",
            field: "head_width",
            message: format!("is a fraction of the feet width (0..1), got {}", def.head_width),
        });
    }

    if def.apex_threshold > 1.0 {
        errors.push(ValidationError {
            section: "movement",
            field: "apex_threshold",
            message: format!("is a fraction of the ascent (0..1), got {}", def.apex_threshold),
        });
    }
}

fn validate_visualization(def: &ArcVisualizationDef, errors: &mut Vec<ValidationError>) {
    if def.arc_resolution == 0 {
        errors.push(ValidationError {
            section: "visualization",
            field: "arc_resolution",
            message: "must be at least 1".to_string(),
        });
    }
}

/// Validate a whole config file.
/// Returns a list of validation errors, empty if the file is usable.
pub fn validate_movement_config(config: &MovementConfigFile) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    validate_tuning(&config.movement, &mut errors);
    validate_visualization(&config.visualization, &mut errors);
    errors
}
