//! Tiles domain: tuning for the tile grid.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::grid::DEFAULT_TILE_SIZE;

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TileTuning {
    /// Edge length of one square tile, in pixels.
    pub tile_size: f32,
}

impl Default for TileTuning {
    fn default() -> Self {
        Self {
            tile_size: DEFAULT_TILE_SIZE,
        }
    }
}
