//! Content domain: gameplay tuning loaded from RON.

mod data;
mod loader;
mod validation;

#[cfg(test)]
mod tests;

pub use data::GameplayTuning;
pub use loader::{ContentLoadError, load_tuning, parse_tuning};
pub use validation::{ValidationError, validate_tuning};

use bevy::prelude::*;
use std::path::Path;

pub const TUNING_PATH: &str = "assets/data/tuning.ron";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_gameplay_tuning);
    }
}

/// Load tuning from disk and publish each section as its own resource.
pub fn load_gameplay_tuning(mut commands: Commands) {
    let tuning = match load_tuning(Path::new(TUNING_PATH)) {
        Ok(tuning) => {
            info!(
                "Loaded gameplay tuning: max_speed={}, jump={} (apex ~{:.0}px), frame_offset={}, lives={}/{}",
                tuning.movement.max_speed,
                tuning.movement.jump_impulse,
                tuning.movement.jump_height(),
                tuning.trail.frame_offset,
                tuning.trail.start_lives,
                tuning.trail.max_lives
            );
            tuning
        }
        Err(e) => {
            warn!("{}; using default tuning", e);
            GameplayTuning::default()
        }
    };

    commands.insert_resource(tuning.movement);
    commands.insert_resource(tuning.trail);
    commands.insert_resource(tuning.tiles);
    commands.insert_resource(tuning.animation);
}
