//! Movement domain: avatar spawn and transform sync.

use bevy::prelude::*;

use crate::movement::{KinematicBody, MovementState, MovementTuning, Player};
use crate::sprites::{ActiveVisual, AnimationTuning, DuckAnimator, SpriteLayer};
use crate::tiles::{TileGrid, level_to_world};
use crate::trail::{DucklingSnapshot, DucklingTrail, Lives, TrailTuning, duckling_anchor};

/// Top-left of a body of `size` standing centred on the floor of tile `spawn`.
pub(crate) fn spawn_position(grid: &TileGrid, spawn: IVec2, size: Vec2) -> Vec2 {
    let tile = grid.tile_size();
    Vec2::new(
        grid.tiles_to_pixels(spawn.x) + (tile - size.x) / 2.0,
        grid.tiles_to_pixels(spawn.y) + tile - size.y,
    )
}

pub(crate) fn spawn_player(
    mut commands: Commands,
    grid: Res<TileGrid>,
    tuning: Res<MovementTuning>,
    trail_tuning: Res<TrailTuning>,
    animation_tuning: Res<AnimationTuning>,
    existing_player: Query<Entity, With<Player>>,
) {
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }
    let Some(spawn) = grid.spawn() else {
        warn!("Level has no spawn point, not spawning player");
        return;
    };

    let size = tuning.body_size();
    let position = spawn_position(&grid, spawn, size);
    let body = KinematicBody::new(position, size, tuning.gravity);
    let trail = DucklingTrail::new(
        trail_tuning.max_lives as usize,
        trail_tuning.frame_offset,
        DucklingSnapshot {
            position: duckling_anchor(position, size, trail_tuning.duckling_size()),
            frame: 0,
        },
    );

    info!(
        "Spawning player at tile {:?} (pixel {:?}), lives={}/{}, trail of {} slots every {} ticks",
        spawn,
        position,
        trail_tuning.start_lives,
        trail_tuning.max_lives,
        trail.slots(),
        trail.frame_offset()
    );

    let animator = DuckAnimator::new(&animation_tuning);
    let visual = ActiveVisual(animator.current_visual().unwrap_or_default());

    commands.spawn((
        (Player, MovementState::default(), body),
        (animator, visual),
        (
            trail,
            Lives::new(trail_tuning.start_lives, trail_tuning.max_lives),
        ),
        Sprite {
            color: Color::srgb(0.95, 0.95, 0.9),
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(level_to_world(
            position,
            size,
            SpriteLayer::Avatar.z_index(),
        )),
    ));
}

pub(crate) fn sync_player_transform(
    mut query: Query<(&KinematicBody, &mut Transform), With<Player>>,
) {
    let z = SpriteLayer::Avatar.z_index();
    for (body, mut transform) in &mut query {
        transform.translation = level_to_world(body.position, body.size, z);
    }
}
