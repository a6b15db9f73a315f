//! Movement domain: per-tick acceleration and velocity update.

use bevy::prelude::*;

use crate::movement::{KinematicBody, MovementInput, MovementState, MovementTuning, Player};

/// Advance `body`'s acceleration and velocity by one tick.
///
/// Position is left alone; `integrate_and_collide` moves the body afterwards.
pub(crate) fn step_body(
    body: &mut KinematicBody,
    on_ground: bool,
    input: &MovementInput,
    tuning: &MovementTuning,
) {
    body.acceleration.y = tuning.gravity;
    let direction = input.horizontal();

    if on_ground {
        body.acceleration.x = if direction != 0.0 {
            direction * tuning.ground_accel
        } else {
            friction_accel(body.velocity.x, tuning.friction)
        };

        if input.up {
            body.velocity.y = -tuning.jump_impulse;
        }
    } else {
        body.acceleration.x = direction * tuning.air_accel;
        body.velocity.y += body.acceleration.y;
    }

    body.velocity.x =
        (body.velocity.x + body.acceleration.x).clamp(-tuning.max_speed, tuning.max_speed);
    body.velocity.y = body.velocity.y.min(tuning.max_fall);
}

/// Deceleration toward zero that never carries the velocity past zero.
fn friction_accel(vx: f32, friction: f32) -> f32 {
    if vx > 0.0 {
        (-vx).max(-friction)
    } else if vx < 0.0 {
        (-vx).min(friction)
    } else {
        0.0
    }
}

pub(crate) fn apply_movement(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&MovementState, &mut KinematicBody), With<Player>>,
) {
    for (state, mut body) in &mut query {
        let launching = state.on_ground && input.up;
        step_body(&mut body, state.on_ground, &input, &tuning);

        if launching {
            debug!("Jump from ({:.1}, {:.1})", body.position.x, body.position.y);
        }
    }
}
