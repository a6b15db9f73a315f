//! Movement domain: components for the avatar's kinematic state.

use bevy::prelude::*;

#[derive(Component, Debug)]
pub struct Player;

/// Position, velocity and acceleration in level space (pixels, y down).
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct KinematicBody {
    /// Top-left corner of the bounding rectangle.
    pub position: Vec2,
    pub velocity: Vec2,
    /// `y` holds gravity permanently; `x` is recomputed every tick.
    pub acceleration: Vec2,
    pub size: Vec2,
}

impl KinematicBody {
    pub fn new(position: Vec2, size: Vec2, gravity: f32) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            acceleration: Vec2::new(0.0, gravity),
            size,
        }
    }

    /// Bounding rectangle in level pixels.
    pub fn rect(&self) -> Rect {
        Rect::from_corners(self.position, self.position + self.size)
    }
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovementState {
    pub on_ground: bool,
    pub facing: Facing,
}

impl Default for MovementState {
    fn default() -> Self {
        Self {
            on_ground: false,
            facing: Facing::Right,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}
