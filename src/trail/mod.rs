//! Trail domain: lives and the line of ducklings that follows the avatar.

mod cascade;
mod components;
mod resources;
mod ring;
mod systems;


pub use components::{DucklingSprite, Lives};
pub use resources::TrailTuning;
pub use ring::DelayRing;
pub use cascade::{DucklingSnapshot, DucklingTrail, duckling_anchor};

pub(crate) use systems::record_leader;

use bevy::prelude::*;

use crate::core::GameState;
use crate::trail::systems::{spawn_duckling_sprites, sync_duckling_sprites};

pub struct TrailPlugin;

impl Plugin for TrailPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TrailTuning>()
            .add_systems(OnEnter(GameState::Playing), spawn_duckling_sprites)
            .add_systems(
                Update,
                sync_duckling_sprites.run_if(in_state(GameState::Playing)),
            );
    }
}
