//! Developer tools for fast iteration (`dev-tools` feature).
//!
//! Features:
//! - `=` / `-` add or remove a life
//! - `F1` toggles the avatar's and ducklings' rectangles
//! - `F2` logs the image names the avatar and ducklings are showing

use bevy::prelude::*;

use crate::core::GameState;
use crate::movement::{KinematicBody, MovementState, Player};
use crate::sprites::ActiveVisual;
use crate::tiles::level_to_world;
use crate::trail::{DucklingSprite, DucklingTrail, Lives, TrailTuning};

/// Resource tracking debug mode state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether to draw the avatar's collision rectangle
    pub show_bounds: bool,
}

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (handle_debug_keys, log_visuals, draw_player_bounds)
                .run_if(in_state(GameState::Playing)),
        );
    }
}

fn handle_debug_keys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    mut query: Query<&mut Lives, With<Player>>,
) {
    if keyboard.just_pressed(KeyCode::F1) {
        debug_state.show_bounds = !debug_state.show_bounds;
        info!("Debug bounds: {}", debug_state.show_bounds);
    }

    let Ok(mut lives) = query.single_mut() else {
        return;
    };
    if keyboard.just_pressed(KeyCode::Equal) {
        lives.gain();
        info!("Debug: lives now {}", lives.current);
    }
    if keyboard.just_pressed(KeyCode::Minus) {
        lives.lose();
        info!("Debug: lives now {}", lives.current);
    }
}

fn log_visuals(
    keyboard: Res<ButtonInput<KeyCode>>,
    player: Query<&ActiveVisual, With<Player>>,
    ducklings: Query<(&DucklingSprite, &ActiveVisual, &Visibility), Without<Player>>,
) {
    if !keyboard.just_pressed(KeyCode::F2) {
        return;
    }

    if let Ok(visual) = player.single() {
        info!("Debug: avatar shows {}", visual.0);
    }
    for (duckling, visual, visibility) in &ducklings {
        if *visibility != Visibility::Hidden {
            info!("Debug: duckling {} shows {}", duckling.slot, visual.0);
        }
    }
}

fn draw_player_bounds(
    debug_state: Res<DebugState>,
    trail_tuning: Res<TrailTuning>,
    query: Query<(&KinematicBody, &MovementState, &DucklingTrail, &Lives), With<Player>>,
    mut gizmos: Gizmos,
) {
    if !debug_state.show_bounds {
        return;
    }

    let duckling_size = trail_tuning.duckling_size();
    for (body, state, trail, lives) in &query {
        for snapshot in trail.visible(lives.current as usize) {
            let center = level_to_world(snapshot.position, duckling_size, 0.0).truncate();
            gizmos.rect_2d(
                Isometry2d::from_translation(center),
                duckling_size,
                Color::srgb(0.9, 0.8, 0.2),
            );
        }

        let center = level_to_world(body.position, body.size, 0.0).truncate();
        let color = if state.on_ground {
            Color::srgb(0.2, 0.9, 0.3)
        } else {
            Color::srgb(0.9, 0.3, 0.2)
        };
        gizmos.rect_2d(Isometry2d::from_translation(center), body.size, color);
    }
}
