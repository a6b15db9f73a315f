//! Animation state selection for the avatar.
//!
//! The six variants are a pure function of ground contact, the sign of the
//! horizontal velocity and the facing carried over from the previous tick.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::movement::Facing;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationState {
    StandLeft,
    StandRight,
    WalkLeft,
    WalkRight,
    JumpLeft,
    JumpRight,
}

impl AnimationState {
    pub const ALL: [AnimationState; 6] = [
        AnimationState::StandLeft,
        AnimationState::StandRight,
        AnimationState::WalkLeft,
        AnimationState::WalkRight,
        AnimationState::JumpLeft,
        AnimationState::JumpRight,
    ];

    /// Position in [`AnimationState::ALL`].
    pub fn index(self) -> usize {
        match self {
            AnimationState::StandLeft => 0,
            AnimationState::StandRight => 1,
            AnimationState::WalkLeft => 2,
            AnimationState::WalkRight => 3,
            AnimationState::JumpLeft => 4,
            AnimationState::JumpRight => 5,
        }
    }

    pub fn facing(self) -> Facing {
        match self {
            AnimationState::StandLeft | AnimationState::WalkLeft | AnimationState::JumpLeft => {
                Facing::Left
            }
            _ => Facing::Right,
        }
    }
}

/// Pick the facing and animation for this tick.
///
/// Facing only changes on a strictly positive or negative velocity.
pub fn select_animation(on_ground: bool, vx: f32, facing: Facing) -> (Facing, AnimationState) {
    let facing = if vx > 0.0 {
        Facing::Right
    } else if vx < 0.0 {
        Facing::Left
    } else {
        facing
    };

    let state = match (on_ground, vx == 0.0, facing) {
        (true, false, Facing::Right) => AnimationState::WalkRight,
        (true, false, Facing::Left) => AnimationState::WalkLeft,
        (true, true, Facing::Right) => AnimationState::StandRight,
        (true, true, Facing::Left) => AnimationState::StandLeft,
        (false, _, Facing::Right) => AnimationState::JumpRight,
        (false, _, Facing::Left) => AnimationState::JumpLeft,
    };

    (facing, state)
}

/// Message fired when the avatar's animation changes.
#[derive(Debug)]
pub struct AnimationStateChanged {
    pub entity: Entity,
    pub from: AnimationState,
    pub to: AnimationState,
}

impl Message for AnimationStateChanged {}
