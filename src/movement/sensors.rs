//! Movement domain: ground and wall contact probes.

use bevy::prelude::*;

use crate::movement::{GameLayer, OverlapQuery, ProbeLayout};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContactFlags {
    pub grounded: bool,
    pub wall_left: bool,
    pub wall_right: bool,
}

/// Run the three contact probes around `position`.
/// An unconfigured probe reports no contact and is never queried.
pub fn sense_contacts(
    query: &impl OverlapQuery,
    position: Vec2,
    probes: &ProbeLayout,
) -> ContactFlags {
    let probe = |offset: Option<Vec2>, size: Vec2, layer: GameLayer| {
        offset.is_some_and(|offset| query.overlaps_box(position + offset, size, layer))
    };

    ContactFlags {
        grounded: probe(probes.ground_offset, probes.ground_size, GameLayer::Ground),
        wall_left: probe(probes.wall_left_offset, probes.wall_size, GameLayer::Wall),
        wall_right: probe(probes.wall_right_offset, probes.wall_size, GameLayer::Wall),
    }
}
