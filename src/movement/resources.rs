//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Per-tick physics constants. Velocities are pixels per tick.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementTuning {
    pub gravity: f32,
    /// Downward speed cap. Upward speed is never capped.
    pub max_fall: f32,
    pub ground_accel: f32,
    /// Horizontal control while airborne.
    pub air_accel: f32,
    pub max_speed: f32,
    /// Deceleration applied on the ground with no horizontal input.
    pub friction: f32,
    pub jump_impulse: f32,
    pub body_width: f32,
    pub body_height: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            gravity: 0.5,
            max_fall: 10.0,
            ground_accel: 0.5,
            air_accel: 0.25,
            max_speed: 10.0,
            friction: 0.75,
            jump_impulse: 12.5,
            body_width: 48.0,
            body_height: 48.0,
        }
    }
}

impl MovementTuning {
    pub fn body_size(&self) -> Vec2 {
        Vec2::new(self.body_width, self.body_height)
    }

    /// Apex height of a standing jump, in pixels.
    ///
    /// The launch tick is not pulled by gravity, and each later tick rises by
    /// the current speed before gravity is added. The body rises for
    /// `n = ceil(jump / gravity)` ticks, covering `n * jump - gravity * n * (n - 1) / 2`.
    pub fn jump_height(&self) -> f32 {
        if !self.gravity.is_finite() || self.gravity <= 0.0 {
            return f32::INFINITY;
        }
        if self.jump_impulse.is_nan() || self.jump_impulse <= 0.0 {
            return 0.0;
        }
        if self.jump_impulse.is_infinite() {
            return f32::INFINITY;
        }

        let jump = self.jump_impulse as f64;
        let gravity = self.gravity as f64;
        let ticks = (jump / gravity).ceil();
        (ticks * jump - gravity * ticks * (ticks - 1.0) / 2.0) as f32
    }
}

#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MovementInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
}

impl MovementInput {
    /// -1, 0 or +1; holding both directions cancels out.
    pub fn horizontal(&self) -> f32 {
        match (self.left, self.right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }
}
