//! Core domain: game state definitions for the level flow.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    /// Tuning and the level map are being loaded.
    #[default]
    Boot,
    Playing,
    /// The map could not be loaded; nothing ticks but the app stays up.
    LevelUnavailable,
}
