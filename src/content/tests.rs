//! Content domain: tests for tuning parsing and validation.

use std::path::Path;

use super::{GameplayTuning, TUNING_PATH, load_tuning, parse_tuning, validate_tuning};

#[test]
fn test_defaults_match_original_constants() {
    let tuning = GameplayTuning::default();
    let m = &tuning.movement;
    assert_eq!(m.gravity, 0.5);
    assert_eq!(m.max_fall, 10.0);
    assert_eq!(m.ground_accel, 0.5);
    assert_eq!(m.air_accel, 0.25);
    assert_eq!(m.max_speed, 10.0);
    assert_eq!(m.friction, 0.75);
    assert_eq!(m.jump_impulse, 12.5);
    assert_eq!(tuning.tiles.tile_size, 64.0);
    assert_eq!(tuning.trail.frame_offset, 15);
    assert_eq!(tuning.trail.max_lives, 5);
    assert_eq!(tuning.trail.start_lives, 3);
    assert_eq!(tuning.animation.frame_ticks, 5);
    assert_eq!(tuning.animation.second_ticks, 60);
    assert!(validate_tuning(&tuning).is_empty());
}

#[test]
fn test_empty_tuning_uses_defaults() {
    let tuning = parse_tuning("()", "inline").unwrap();
    assert_eq!(tuning, GameplayTuning::default());
}

#[test]
fn test_partial_override_keeps_other_defaults() {
    let tuning = parse_tuning(
        "(movement: (gravity: 0.75, max_speed: 6.0), trail: (frame_offset: 8))",
        "inline",
    )
    .unwrap();

    assert_eq!(tuning.movement.gravity, 0.75);
    assert_eq!(tuning.movement.max_speed, 6.0);
    assert_eq!(tuning.movement.jump_impulse, 12.5);
    assert_eq!(tuning.trail.frame_offset, 8);
    assert_eq!(tuning.trail.max_lives, 5);
}

#[test]
fn test_parse_error_names_file() {
    let err = parse_tuning("(movement: (gravity: \"heavy\"))", "tuning.ron").unwrap_err();
    assert_eq!(err.file, "tuning.ron");
    assert!(err.message.starts_with("Parse error"));
    assert!(err.to_string().starts_with("Failed to load tuning.ron"));
}

#[test]
fn test_invalid_values_are_rejected() {
    let err = parse_tuning(
        "(trail: (frame_offset: 0, start_lives: 6, max_lives: 5), tiles: (tile_size: 0.0))",
        "inline",
    )
    .unwrap_err();

    assert!(err.message.contains("trail.frame_offset"));
    assert!(err.message.contains("trail.start_lives"));
    assert!(err.message.contains("tiles.tile_size"));
}

#[test]
fn test_validation_reports_each_problem() {
    let mut tuning = GameplayTuning::default();
    tuning.movement.body_width = 0.0;
    tuning.animation.frame_ticks = 0;

    let errors = validate_tuning(&tuning);
    assert_eq!(errors.len(), 2);
    assert!(errors.iter().any(|e| e.field == "movement.body_width/body_height"));
}

#[test]
fn test_out_of_range_movement_is_rejected() {
    for (source, field) in [
        ("(movement: (friction: -0.75))", "movement.friction"),
        ("(movement: (gravity: 0.0))", "movement.gravity"),
        ("(movement: (gravity: -0.5))", "movement.gravity"),
        ("(movement: (max_fall: 0.0))", "movement.max_fall"),
        ("(movement: (ground_accel: -0.5))", "movement.ground_accel/air_accel"),
        ("(movement: (air_accel: -0.25))", "movement.ground_accel/air_accel"),
        ("(movement: (jump_impulse: -12.5))", "movement.jump_impulse"),
    ] {
        let err = parse_tuning(source, "inline").unwrap_err();
        assert!(err.message.contains(field), "{source}: {}", err.message);
    }
}

#[test]
fn test_non_finite_values_are_rejected() {
    let mut tuning = GameplayTuning::default();
    tuning.movement.gravity = f32::NAN;
    tuning.movement.max_speed = f32::INFINITY;
    tuning.trail.duckling_width = f32::NAN;
    tuning.tiles.tile_size = f32::INFINITY;

    let errors = validate_tuning(&tuning);
    let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
    assert!(fields.contains(&"movement.gravity"));
    assert!(fields.contains(&"movement.max_speed"));
    assert!(fields.contains(&"trail.duckling_width"));
    assert!(fields.contains(&"tiles.tile_size"));
    assert!(
        errors
            .iter()
            .any(|e| e.field == "movement.max_speed" && e.reason.starts_with("must be finite"))
    );
}

#[test]
fn test_missing_file_is_io_error() {
    let err = load_tuning(Path::new("does/not/exist.ron")).unwrap_err();
    assert!(err.message.starts_with("IO error"));
}

#[test]
fn test_shipped_tuning_file_parses() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(TUNING_PATH);
    let tuning = load_tuning(&path).unwrap();
    assert!(validate_tuning(&tuning).is_empty());
}
