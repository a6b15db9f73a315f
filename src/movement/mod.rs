//! Movement domain: avatar kinematics, tile collision response and spawning.

mod components;
mod resources;
mod spawn;
mod systems;


pub use components::*;
pub use resources::*;

use bevy::prelude::*;

use crate::core::{GameState, gameplay_active};
use crate::movement::spawn::{spawn_player, sync_player_transform};
use crate::movement::systems::{apply_movement, read_input, resolve_tile_collisions};
use crate::sprites::{advance_animations, select_animations};
use crate::trail::record_leader;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_systems(OnEnter(GameState::Playing), spawn_player)
            // One game tick: input, clip step, velocity, animation choice,
            // trail snapshot, then position and collisions.
            .add_systems(
                FixedUpdate,
                (
                    read_input,
                    advance_animations,
                    apply_movement,
                    select_animations,
                    record_leader,
                    resolve_tile_collisions,
                )
                    .chain()
                    .run_if(in_state(GameState::Playing).and(gameplay_active)),
            )
            .add_systems(
                Update,
                sync_player_transform.run_if(in_state(GameState::Playing)),
            );
    }
}
