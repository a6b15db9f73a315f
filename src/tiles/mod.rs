//! Tiles domain: level map loading, collision queries and tile rendering.

mod error;
mod grid;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use error::TileMapError;
pub use grid::{TileGrid, level_to_world, load_tile_grid};
pub use resources::TileTuning;

use bevy::prelude::*;

use crate::content::load_gameplay_tuning;
use crate::core::GameState;
use crate::tiles::systems::{load_level, show_level_unavailable, spawn_level_sprites};

pub struct TilesPlugin;

impl Plugin for TilesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TileTuning>()
            .init_resource::<TileGrid>()
            .add_systems(Startup, load_level.after(load_gameplay_tuning))
            .add_systems(OnEnter(GameState::Playing), spawn_level_sprites)
            .add_systems(OnEnter(GameState::LevelUnavailable), show_level_unavailable);
    }
}
