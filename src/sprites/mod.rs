//! Sprites module for the avatar's animations.
//!
//! This module handles:
//! - Tick-driven frame sequences and the duck's frame tables
//! - The stand/walk/jump state machine
//! - Draw order for level sprites

pub mod animation;
pub mod clips;
pub mod layers;
pub mod sequence;
mod systems;


use bevy::prelude::*;

pub use animation::*;
pub use clips::*;
pub use layers::*;
pub use sequence::*;

pub(crate) use systems::{advance_animations, select_animations};

use crate::core::GameState;
use crate::sprites::systems::{log_animation_changes, sync_avatar_sprite};

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AnimationTuning>()
            .add_message::<AnimationStateChanged>()
            .add_systems(
                Update,
                (log_animation_changes, sync_avatar_sprite).run_if(in_state(GameState::Playing)),
            );
    }
}
