//! Loader for the movement RON file at startup.

use bevy::prelude::*;
use ron::Options;
use std::fs;
use std::path::Path;

use super::data::MovementConfigDef;
use super::validation::{build_movement_config, check_overshoot};
use crate::movement::MovementConfig;

/// Error type for config loading failures.
#[derive(Debug)]
pub struct ConfigLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse movement tuning from RON text. `file` is only used for error context.
pub fn parse_movement_config(
    file: &str,
    contents: &str,
) -> Result<MovementConfigDef, ConfigLoadError> {
    ron_options()
        .from_str(contents)
        .map_err(|e| ConfigLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Load movement tuning from a RON file.
pub fn load_movement_config(path: &Path) -> Result<MovementConfigDef, ConfigLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ConfigLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_movement_config(&file_name, &contents)
}

/// Load, sanitize and check movement tuning. Never fails: a missing or broken
/// file falls back to the built-in defaults.
pub fn load_movement_config_or_default(path: &Path, fixed_dt: f32) -> MovementConfig {
    let def = match load_movement_config(path) {
        Ok(def) => {
            info!("Loaded movement config from {}", path.display());
            def
        }
        Err(e) => {
            warn!("{}; using default movement config", e);
            MovementConfigDef::default()
        }
    };

    let (config, mut issues) = build_movement_config(&def);
    issues.extend(check_overshoot(&config, fixed_dt));
    for issue in &issues {
        warn!("{}", issue);
    }

    config
}
