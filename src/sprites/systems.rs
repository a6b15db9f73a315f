//! Animation systems: stepping clips, choosing the active one, and drawing it.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::movement::{Facing, KinematicBody, MovementState, Player};
use crate::sprites::animation::{AnimationState, AnimationStateChanged, select_animation};
use crate::sprites::clips::{ActiveVisual, DuckAnimator};

pub(crate) fn advance_animations(mut query: Query<&mut DuckAnimator>) {
    for mut animator in &mut query {
        animator.advance();
    }
}

pub(crate) fn select_animations(
    mut query: Query<
        (Entity, &KinematicBody, &mut MovementState, &mut DuckAnimator),
        With<Player>,
    >,
    mut changed: MessageWriter<AnimationStateChanged>,
) {
    for (entity, body, mut state, mut animator) in &mut query {
        let (facing, next) = select_animation(state.on_ground, body.velocity.x, state.facing);
        state.facing = facing;

        if animator.state != next {
            changed.write(AnimationStateChanged {
                entity,
                from: animator.state,
                to: next,
            });
            animator.state = next;
        }
    }
}

pub(crate) fn log_animation_changes(mut changed: MessageReader<AnimationStateChanged>) {
    for message in changed.read() {
        debug!(
            "Animation {:?} -> {:?} on {:?}",
            message.from, message.to, message.entity
        );
    }
}

/// Flat tint per animation; stands in for the duck images.
pub(crate) fn animation_tint(state: AnimationState) -> Color {
    match state {
        AnimationState::StandLeft | AnimationState::StandRight => Color::srgb(0.95, 0.95, 0.9),
        AnimationState::WalkLeft | AnimationState::WalkRight => Color::srgb(0.95, 0.9, 0.7),
        AnimationState::JumpLeft | AnimationState::JumpRight => Color::srgb(0.85, 0.9, 1.0),
    }
}

pub(crate) fn sync_avatar_sprite(
    mut query: Query<(&DuckAnimator, &mut Sprite, &mut ActiveVisual), With<Player>>,
) {
    for (animator, mut sprite, mut visual) in &mut query {
        sprite.color = animation_tint(animator.state);
        sprite.flip_x = animator.state.facing() == Facing::Left;
        if let Some(name) = animator.current_visual() {
            visual.0 = name;
        }
    }
}
