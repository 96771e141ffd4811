//! Validation and sanitation of movement tuning.
//!
//! Bad values are never fatal: each one is replaced by a neutral value and
//! reported as a `ConfigIssue` so the loader can log it.

use bevy::prelude::*;

use super::data::{MOVEMENT_SCHEMA_VERSION, MovementConfigDef, ProbeLayoutDef};
use crate::movement::{MovementConfig, ProbeLayout};

/// A single adjustment made while building the runtime config.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigIssue {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "movement config field '{}': {}", self.field, self.message)
    }
}

/// Helper macro for clamping a tunable to be finite and non-negative
macro_rules! non_negative {
    ($issues:expr, $def:expr, $field:ident) => {{
        let value = $def.$field;
        if !value.is_finite() || value < 0.0 {
            $issues.push(ConfigIssue {
                field: stringify!($field),
                message: format!("{} is not a non-negative number, using 0", value),
            });
            0.0
        } else {
            value
        }
    }};
}

/// Build the runtime config from its file representation.
/// Returns the config plus every adjustment that was made.
pub fn build_movement_config(def: &MovementConfigDef) -> (MovementConfig, Vec<ConfigIssue>) {
    let mut issues = Vec::new();

    if def.schema_version != MOVEMENT_SCHEMA_VERSION {
        issues.push(ConfigIssue {
            field: "schema_version",
            message: format!(
                "expected {}, found {}; reading anyway",
                MOVEMENT_SCHEMA_VERSION, def.schema_version
            ),
        });
    }

    let jump_cut_multiplier = {
        let value = def.jump_cut_multiplier;
        if !value.is_finite() {
            issues.push(ConfigIssue {
                field: "jump_cut_multiplier",
                message: format!("{} is not a number, using 1 (no cut)", value),
            });
            1.0
        } else if !(0.0..=1.0).contains(&value) {
            let clamped = value.clamp(0.0, 1.0);
            issues.push(ConfigIssue {
                field: "jump_cut_multiplier",
                message: format!("{} is outside [0, 1], clamped to {}", value, clamped),
            });
            clamped
        } else {
            value
        }
    };

    let wall_jump_direction = normalize_wall_jump_direction(def.wall_jump_direction, &mut issues);

    let config = MovementConfig {
        move_speed: non_negative!(issues, def, move_speed),
        acceleration: non_negative!(issues, def, acceleration),
        deceleration: non_negative!(issues, def, deceleration),
        air_acceleration: non_negative!(issues, def, air_acceleration),
        air_deceleration: non_negative!(issues, def, air_deceleration),
        jump_power: non_negative!(issues, def, jump_power),
        jump_cut_multiplier,
        coyote_time: non_negative!(issues, def, coyote_time),
        jump_buffer_time: non_negative!(issues, def, jump_buffer_time),
        wall_slide_speed: non_negative!(issues, def, wall_slide_speed),
        wall_jump_power: non_negative!(issues, def, wall_jump_power),
        wall_jump_direction,
        wall_stick_time: non_negative!(issues, def, wall_stick_time),
        wall_jump_control_delay: non_negative!(issues, def, wall_jump_control_delay),
        probes: build_probe_layout(&def.probes, &mut issues),
    };

    (config, issues)
}

fn normalize_wall_jump_direction(raw: (f32, f32), issues: &mut Vec<ConfigIssue>) -> Vec2 {
    let fallback = MovementConfigDef::default().wall_jump_direction;
    let direction = Vec2::new(raw.0, raw.1);

    match direction.try_normalize() {
        Some(unit) => unit,
        None => {
            issues.push(ConfigIssue {
                field: "wall_jump_direction",
                message: format!(
                    "({}, {}) cannot be normalized, using ({}, {})",
                    raw.0, raw.1, fallback.0, fallback.1
                ),
            });
            Vec2::new(fallback.0, fallback.1).normalize()
        }
    }
}

fn build_probe_layout(def: &ProbeLayoutDef, issues: &mut Vec<ConfigIssue>) -> ProbeLayout {
    let offset = |value: Option<(f32, f32)>| value.map(|(x, y)| Vec2::new(x, y));

    ProbeLayout {
        ground_offset: offset(def.ground_offset),
        ground_size: probe_size("probes.ground_size", def.ground_size, issues),
        wall_left_offset: offset(def.wall_left_offset),
        wall_right_offset: offset(def.wall_right_offset),
        wall_size: probe_size("probes.wall_size", def.wall_size, issues),
    }
}

fn probe_size(field: &'static str, raw: (f32, f32), issues: &mut Vec<ConfigIssue>) -> Vec2 {
    let size = Vec2::new(raw.0, raw.1);
    if size.is_finite() && size.x >= 0.0 && size.y >= 0.0 {
        return size;
    }

    let fixed = Vec2::new(finite_or_zero(raw.0).abs(), finite_or_zero(raw.1).abs());
    issues.push(ConfigIssue {
        field,
        message: format!("({}, {}) is not a valid box size, using {}", raw.0, raw.1, fixed),
    });
    fixed
}

fn finite_or_zero(value: f32) -> f32 {
    if value.is_finite() { value } else { 0.0 }
}

/// Report acceleration curves that overshoot their target in one physics tick.
/// The resolver still runs them; this only flags the tuning.
pub fn check_overshoot(config: &MovementConfig, fixed_dt: f32) -> Vec<ConfigIssue> {
    [
        ("acceleration", config.acceleration),
        ("deceleration", config.deceleration),
        ("air_acceleration", config.air_acceleration),
        ("air_deceleration", config.air_deceleration),
    ]
    .into_iter()
    .filter(|(_, rate)| rate * fixed_dt > 1.0)
    .map(|(field, rate)| ConfigIssue {
        field,
        message: format!(
            "rate {} x fixed step {:.4}s = {:.3} > 1, horizontal speed will overshoot",
            rate,
            fixed_dt,
            rate * fixed_dt
        ),
    })
    .collect()
}
