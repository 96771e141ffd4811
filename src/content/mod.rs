//! Content domain: data-driven movement tuning loaded from RON.

mod data;
mod loader;
#[cfg(test)]
mod tests;
mod validation;

pub use data::{MOVEMENT_SCHEMA_VERSION, MovementConfigDef, ProbeLayoutDef};
pub use loader::{
    ConfigLoadError, load_movement_config, load_movement_config_or_default,
    parse_movement_config,
};
pub use validation::{ConfigIssue, build_movement_config, check_overshoot};

use bevy::prelude::*;
use std::path::Path;

pub const MOVEMENT_CONFIG_PATH: &str = "assets/data/movement.ron";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        let fixed_dt = app
            .world()
            .get_resource::<Time<Fixed>>()
            .map(|time| time.timestep().as_secs_f32())
            .unwrap_or_else(|| Time::<Fixed>::default().timestep().as_secs_f32());

        let config = load_movement_config_or_default(Path::new(MOVEMENT_CONFIG_PATH), fixed_dt);
        app.insert_resource(config);
    }
}
