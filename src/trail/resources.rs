//! Trail domain: tuning for lives and duckling spacing.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TrailTuning {
    /// Ticks between one duckling and the next.
    pub frame_offset: usize,
    pub max_lives: u32,
    pub start_lives: u32,
    pub duckling_width: f32,
    pub duckling_height: f32,
}

impl Default for TrailTuning {
    fn default() -> Self {
        Self {
            frame_offset: 15,
            max_lives: 5,
            start_lives: 3,
            duckling_width: 24.0,
            duckling_height: 24.0,
        }
    }
}

impl TrailTuning {
    pub fn duckling_size(&self) -> Vec2 {
        Vec2::new(self.duckling_width, self.duckling_height)
    }
}
