//! Validation for tuning values that would break the simulation.

use super::data::GameplayTuning;

/// A validation error naming the offending field.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.field, self.reason)
    }
}

/// Helper macro for checking a condition on a field
macro_rules! check {
    ($errors:expr, $cond:expr, $field:expr, $($reason:tt)+) => {
        if !$cond {
            $errors.push(ValidationError {
                field: $field,
                reason: format!($($reason)+),
            });
        }
    };
}

/// Validate tuning values.
/// Returns a list of validation errors, empty if everything is usable.
pub fn validate_tuning(tuning: &GameplayTuning) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let movement = &tuning.movement;
    let trail = &tuning.trail;

    let floats = [
        ("movement.gravity", movement.gravity),
        ("movement.max_fall", movement.max_fall),
        ("movement.ground_accel", movement.ground_accel),
        ("movement.air_accel", movement.air_accel),
        ("movement.max_speed", movement.max_speed),
        ("movement.friction", movement.friction),
        ("movement.jump_impulse", movement.jump_impulse),
        ("movement.body_width", movement.body_width),
        ("movement.body_height", movement.body_height),
        ("trail.duckling_width", trail.duckling_width),
        ("trail.duckling_height", trail.duckling_height),
        ("tiles.tile_size", tuning.tiles.tile_size),
    ];
    for (field, value) in floats {
        check!(errors, value.is_finite(), field, "must be finite, got {}", value);
    }

    check!(
        errors,
        tuning.tiles.tile_size > 0.0,
        "tiles.tile_size",
        "must be positive, got {}",
        tuning.tiles.tile_size
    );
    check!(
        errors,
        trail.frame_offset >= 1,
        "trail.frame_offset",
        "must be at least 1"
    );
    check!(
        errors,
        trail.start_lives <= trail.max_lives,
        "trail.start_lives",
        "({}) exceeds trail.max_lives ({})",
        trail.start_lives,
        trail.max_lives
    );
    check!(
        errors,
        movement.gravity > 0.0,
        "movement.gravity",
        "must be positive, got {}",
        movement.gravity
    );
    check!(
        errors,
        movement.max_fall > 0.0,
        "movement.max_fall",
        "must be positive, got {}",
        movement.max_fall
    );
    check!(
        errors,
        movement.ground_accel >= 0.0 && movement.air_accel >= 0.0,
        "movement.ground_accel/air_accel",
        "must not be negative"
    );
    check!(
        errors,
        movement.friction >= 0.0,
        "movement.friction",
        "must not be negative, got {}",
        movement.friction
    );
    check!(
        errors,
        movement.jump_impulse >= 0.0,
        "movement.jump_impulse",
        "must not be negative, got {}",
        movement.jump_impulse
    );
    check!(
        errors,
        movement.max_speed >= 0.0,
        "movement.max_speed",
        "must not be negative"
    );
    check!(
        errors,
        movement.body_width > 0.0 && movement.body_height > 0.0,
        "movement.body_width/body_height",
        "must be positive"
    );
    check!(
        errors,
        trail.duckling_width > 0.0 && trail.duckling_height > 0.0,
        "trail.duckling_width/duckling_height",
        "must be positive"
    );
    check!(
        errors,
        tuning.animation.frame_ticks >= 1 && tuning.animation.second_ticks >= 1,
        "animation.frame_ticks/second_ticks",
        "must be at least 1"
    );

    errors
}
