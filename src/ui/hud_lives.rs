//! UI domain: remaining-lives counter.

use bevy::prelude::*;

use crate::movement::Player;
use crate::trail::Lives;

pub(crate) const LIVES_HUD_PADDING: f32 = 16.0;

/// Marker for the lives counter text
#[derive(Component)]
pub struct LivesHud;

pub(crate) fn lives_label(lives: &Lives) -> String {
    format!("Ducklings: {}/{}", lives.current, lives.max)
}

pub(crate) fn spawn_lives_hud(mut commands: Commands) {
    commands.spawn((
        LivesHud,
        Text::new(""),
        TextColor(Color::srgb(0.95, 0.9, 0.4)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(LIVES_HUD_PADDING),
            top: Val::Px(LIVES_HUD_PADDING),
            ..default()
        },
    ));
}

pub(crate) fn update_lives_hud(
    player_query: Query<&Lives, (With<Player>, Changed<Lives>)>,
    mut hud_query: Query<(&mut Text, &mut TextColor), With<LivesHud>>,
) {
    let Ok(lives) = player_query.single() else {
        return;
    };

    for (mut text, mut color) in &mut hud_query {
        text.0 = lives_label(lives);
        color.0 = if lives.is_out() {
            Color::srgb(0.9, 0.25, 0.2)
        } else {
            Color::srgb(0.95, 0.9, 0.4)
        };
    }
}
