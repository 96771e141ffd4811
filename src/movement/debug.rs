//! Movement domain: debug-only probe visualization and state snapshots.
//!
//! - F3 toggles probe box gizmos (green = contact, red = clear)
//! - F4 logs the player's movement state as JSON

use bevy::prelude::*;

use crate::movement::{ContactFlags, MovementConfig, MovementState, Player, ProbeLayout};

const CONTACT_COLOR: Color = Color::srgb(0.2, 0.9, 0.3);
const CLEAR_COLOR: Color = Color::srgb(0.9, 0.2, 0.2);

#[derive(Resource, Debug)]
pub struct ProbeGizmoSettings {
    pub enabled: bool,
}

impl Default for ProbeGizmoSettings {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeKind {
    Ground,
    WallLeft,
    WallRight,
}

/// World-space geometry of one configured probe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeBox {
    pub kind: ProbeKind,
    pub center: Vec2,
    pub size: Vec2,
    pub in_contact: bool,
}

/// Boxes for every configured probe around `position`. Unconfigured probes
/// have nothing to draw and are skipped.
pub fn probe_boxes(position: Vec2, layout: &ProbeLayout, contacts: ContactFlags) -> Vec<ProbeBox> {
    [
        (
            ProbeKind::Ground,
            layout.ground_offset,
            layout.ground_size,
            contacts.grounded,
        ),
        (
            ProbeKind::WallLeft,
            layout.wall_left_offset,
            layout.wall_size,
            contacts.wall_left,
        ),
        (
            ProbeKind::WallRight,
            layout.wall_right_offset,
            layout.wall_size,
            contacts.wall_right,
        ),
    ]
    .into_iter()
    .filter_map(|(kind, offset, size, in_contact)| {
        offset.map(|offset| ProbeBox {
            kind,
            center: position + offset,
            size,
            in_contact,
        })
    })
    .collect()
}

/// Serialize a movement state for logging.
pub fn movement_snapshot(state: &MovementState) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(state)
}

pub(crate) fn toggle_probe_gizmos(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut settings: ResMut<ProbeGizmoSettings>,
) {
    if keyboard.just_pressed(KeyCode::F3) {
        settings.enabled = !settings.enabled;
        info!("Probe gizmos: {}", settings.enabled);
    }
}

pub(crate) fn draw_probe_gizmos(
    mut gizmos: Gizmos,
    config: Res<MovementConfig>,
    query: Query<(&Transform, &MovementState), With<Player>>,
) {
    for (transform, state) in &query {
        let position = transform.translation.truncate();
        for probe in probe_boxes(position, &config.probes, state.contacts()) {
            let color = if probe.in_contact {
                CONTACT_COLOR
            } else {
                CLEAR_COLOR
            };
            gizmos.rect_2d(Isometry2d::from_translation(probe.center), probe.size, color);
        }
    }
}

pub(crate) fn log_movement_snapshot(
    keyboard: Res<ButtonInput<KeyCode>>,
    query: Query<(Entity, &MovementState), With<Player>>,
) {
    if !keyboard.just_pressed(KeyCode::F4) {
        return;
    }

    for (entity, state) in &query {
        match movement_snapshot(state) {
            Ok(json) => info!("{} movement state:\n{}", entity, json),
            Err(e) => error!("Failed to serialize movement state for {}: {}", entity, e),
        }
    }
}
