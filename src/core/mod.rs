//! Core domain: camera and world setup.

use avian2d::prelude::*;
use bevy::prelude::*;

/// World units are meters; this many screen pixels per meter.
pub const PIXELS_PER_METER: f32 = 48.0;

/// Gravity scaled up from earth's for a snappier arc.
pub const WORLD_GRAVITY: f32 = 9.81 * 4.0;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Gravity(Vec2::NEG_Y * WORLD_GRAVITY))
            .insert_resource(ClearColor(Color::srgb(0.08, 0.08, 0.1)))
            .add_systems(Startup, setup_camera);
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scale: 1.0 / PIXELS_PER_METER,
            ..OrthographicProjection::default_2d()
        }),
    ));
}
