//! Movement domain: the two physics-world contracts the controller relies on.
//!
//! The controller never talks to avian directly. It asks "does this box
//! overlap that layer?" and reads or writes a body velocity. Avian implements
//! both in `systems::collisions`; tests use plain stand-ins.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::GameLayer;

/// Synchronous box-overlap query against the physics world.
pub trait OverlapQuery {
    /// True if an axis-aligned box of `size` centered at `center` overlaps any
    /// collider on `layer`.
    fn overlaps_box(&self, center: Vec2, size: Vec2, layer: GameLayer) -> bool;
}

/// Read and write access to a rigid-body velocity.
pub trait BodyVelocity {
    fn velocity(&self) -> Vec2;

    fn set_velocity(&mut self, velocity: Vec2);

    fn set_vertical(&mut self, vy: f32) {
        let v = self.velocity();
        self.set_velocity(Vec2::new(v.x, vy));
    }

    fn set_horizontal(&mut self, vx: f32) {
        let v = self.velocity();
        self.set_velocity(Vec2::new(vx, v.y));
    }
}

impl BodyVelocity for LinearVelocity {
    fn velocity(&self) -> Vec2 {
        self.0
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.0 = velocity;
    }
}

impl BodyVelocity for Vec2 {
    fn velocity(&self) -> Vec2 {
        *self
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        *self = velocity;
    }
}
