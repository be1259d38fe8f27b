//! Loader for the movement RON file at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::MovementConfigFile;

pub const MOVEMENT_FILE: &str = "movement.ron";

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse movement config text. `file_name` is only used for error context.
pub fn parse_movement_config(
    contents: &str,
    file_name: &str,
) -> Result<MovementConfigFile, ContentLoadError> {
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file_name.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Load assets/data/movement.ron (or the same file under `base_path`).
pub fn load_movement_config(base_path: &Path) -> Result<MovementConfigFile, ContentLoadError> {
    let path = base_path.join(MOVEMENT_FILE);
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(&path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_movement_config(&contents, &file_name)
}
