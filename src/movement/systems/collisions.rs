//! Movement domain: avian-backed box overlap probes.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, OverlapQuery};

impl OverlapQuery for SpatialQuery<'_, '_> {
    fn overlaps_box(&self, center: Vec2, size: Vec2, layer: GameLayer) -> bool {
        // Filter to only hit colliders that are members of the probed layer
        let filter = SpatialQueryFilter::from_mask(layer);
        let probe = Collider::rectangle(size.x, size.y);

        !self
            .shape_intersections(&probe, center, 0.0, &filter)
            .is_empty()
    }
}
