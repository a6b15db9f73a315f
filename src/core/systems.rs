//! Core domain: camera and pause systems.

use bevy::prelude::*;

use crate::core::resources::GameplayPaused;
use crate::movement::Player;

const MENU_PAUSE_SOURCE: &str = "menu";

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

pub(crate) fn toggle_pause(keyboard: Res<ButtonInput<KeyCode>>, mut paused: ResMut<GameplayPaused>) {
    if keyboard.just_pressed(KeyCode::Escape) {
        let now_paused = paused.toggle(MENU_PAUSE_SOURCE);
        info!("Gameplay {}", if now_paused { "paused" } else { "resumed" });
    }
}

pub(crate) fn camera_follow(
    player_query: Query<&Transform, (With<Player>, Without<Camera2d>)>,
    mut camera_query: Query<&mut Transform, (With<Camera2d>, Without<Player>)>,
) {
    let Ok(player) = player_query.single() else {
        return;
    };
    let Ok(mut camera) = camera_query.single_mut() else {
        return;
    };

    camera.translation.x = player.translation.x;
    camera.translation.y = player.translation.y;
}
