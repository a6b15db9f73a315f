//! Core domain: level flow states, pausing, fixed tick rate and camera.

mod resources;
mod state;
mod systems;


pub use resources::{GameplayPaused, LevelSelection, gameplay_active};
pub use state::GameState;

use bevy::prelude::*;

use crate::core::systems::{camera_follow, setup_camera, toggle_pause};

/// Gameplay ticks per second.
pub const TICK_HZ: f64 = 60.0;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<GameplayPaused>()
            .insert_resource(LevelSelection::from_args(std::env::args_os()))
            .insert_resource(Time::<Fixed>::from_hz(TICK_HZ))
            .add_systems(Startup, setup_camera)
            .add_systems(
                Update,
                (toggle_pause, camera_follow).run_if(in_state(GameState::Playing)),
            );
    }
}
