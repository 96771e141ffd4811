//! Content domain: tests for movement config loading and sanitation.

use bevy::prelude::Vec2;
use std::path::Path;

use super::{
    MovementConfigDef, build_movement_config, check_overshoot, load_movement_config,
    load_movement_config_or_default, parse_movement_config,
};
use crate::movement::MovementConfig;

const FIXED_DT: f32 = 1.0 / 64.0;

// -----------------------------------------------------------------------------
// Parsing
// -----------------------------------------------------------------------------

#[test]
fn test_shipped_config_matches_defaults() {
    let contents = include_str!("../../assets/data/movement.ron");
    let def = parse_movement_config("movement.ron", contents).expect("shipped config parses");
    assert_eq!(def, MovementConfigDef::default());
}

#[test]
fn test_missing_fields_fall_back_to_defaults() {
    let def = parse_movement_config("partial.ron", "(move_speed: 4.0, coyote_time: 0.1)")
        .expect("partial config parses");

    assert_eq!(def.move_speed, 4.0);
    assert_eq!(def.coyote_time, 0.1);
    assert_eq!(def.jump_power, MovementConfigDef::default().jump_power);
    assert_eq!(def.probes, MovementConfigDef::default().probes);
}

#[test]
fn test_probe_offset_can_be_left_unconfigured() {
    let def = parse_movement_config(
        "probes.ron",
        "(probes: (ground_offset: None, wall_left_offset: (-0.4, 0.1)))",
    )
    .expect("probe config parses");

    assert!(def.probes.ground_offset.is_none());
    assert_eq!(def.probes.wall_left_offset, Some((-0.4, 0.1)));

    let (config, issues) = build_movement_config(&def);
    assert!(issues.is_empty());
    assert!(config.probes.ground_offset.is_none());
    assert_eq!(config.probes.wall_left_offset, Some(Vec2::new(-0.4, 0.1)));
}

#[test]
fn test_malformed_config_reports_file_and_parse_error() {
    let err = parse_movement_config("broken.ron", "(move_speed: fast)").unwrap_err();
    assert_eq!(err.file, "broken.ron");
    assert!(err.message.starts_with("Parse error"));
    assert!(err.to_string().contains("broken.ron"));
}

#[test]
fn test_missing_file_is_an_io_error() {
    let path = Path::new("assets/data/does_not_exist.ron");
    let err = load_movement_config(path).unwrap_err();
    assert!(err.message.starts_with("IO error"));
}

#[test]
fn test_missing_file_falls_back_to_default_config() {
    let path = Path::new("assets/data/does_not_exist.ron");
    let config = load_movement_config_or_default(path, FIXED_DT);
    assert_eq!(config, MovementConfig::default());
}

// -----------------------------------------------------------------------------
// Sanitation
// -----------------------------------------------------------------------------

#[test]
fn test_defaults_build_without_issues() {
    let (_, issues) = build_movement_config(&MovementConfigDef::default());
    assert!(issues.is_empty(), "unexpected issues: {:?}", issues);
}

#[test]
fn test_wall_jump_direction_is_normalized() {
    let config = MovementConfig::default();
    let dir = config.wall_jump_direction;

    assert!((dir.length() - 1.0).abs() < 1e-5);
    // (1, 1.5) keeps its slope after normalization
    assert!((dir.y / dir.x - 1.5).abs() < 1e-5);
}

#[test]
fn test_zero_wall_jump_direction_uses_fallback() {
    let def = MovementConfigDef {
        wall_jump_direction: (0.0, 0.0),
        ..Default::default()
    };
    let (config, issues) = build_movement_config(&def);

    assert_eq!(config.wall_jump_direction, MovementConfig::default().wall_jump_direction);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].field, "wall_jump_direction");
}

#[test]
fn test_negative_tunables_clamp_to_zero() {
    let def = MovementConfigDef {
        coyote_time: -0.1,
        wall_slide_speed: f32::NAN,
        ..Default::default()
    };
    let (config, issues) = build_movement_config(&def);

    assert_eq!(config.coyote_time, 0.0);
    assert_eq!(config.wall_slide_speed, 0.0);
    let fields: Vec<_> = issues.iter().map(|issue| issue.field).collect();
    assert_eq!(fields, vec!["coyote_time", "wall_slide_speed"]);
}

#[test]
fn test_jump_cut_multiplier_is_clamped() {
    let def = MovementConfigDef {
        jump_cut_multiplier: 1.5,
        ..Default::default()
    };
    let (config, issues) = build_movement_config(&def);

    assert_eq!(config.jump_cut_multiplier, 1.0);
    assert_eq!(issues[0].field, "jump_cut_multiplier");
}

#[test]
fn test_negative_probe_size_is_flipped() {
    let mut def = MovementConfigDef::default();
    def.probes.wall_size = (-0.03, 0.5);
    let (config, issues) = build_movement_config(&def);

    assert_eq!(config.probes.wall_size, Vec2::new(0.03, 0.5));
    assert_eq!(issues[0].field, "probes.wall_size");
}

#[test]
fn test_schema_mismatch_is_reported_but_read() {
    let def = MovementConfigDef {
        schema_version: 99,
        move_speed: 5.0,
        ..Default::default()
    };
    let (config, issues) = build_movement_config(&def);

    assert_eq!(config.move_speed, 5.0);
    assert_eq!(issues[0].field, "schema_version");
}

// -----------------------------------------------------------------------------
// Overshoot check
// -----------------------------------------------------------------------------

#[test]
fn test_default_rates_do_not_overshoot() {
    assert!(check_overshoot(&MovementConfig::default(), FIXED_DT).is_empty());
}

#[test]
fn test_overshooting_rate_is_flagged() {
    let config = MovementConfig {
        acceleration: 100.0,
        ..MovementConfig::default()
    };
    let issues = check_overshoot(&config, 1.0 / 50.0);

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].field, "acceleration");
}
