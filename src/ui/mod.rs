//! UI domain: heads-up display.

mod hud_lives;

pub use hud_lives::LivesHud;

use bevy::prelude::*;

use crate::core::GameState;
use crate::ui::hud_lives::{spawn_lives_hud, update_lives_hud};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Playing), spawn_lives_hud)
            .add_systems(
                Update,
                update_lives_hud.run_if(in_state(GameState::Playing)),
            );
    }
}

#[cfg(test)]
mod tests;
