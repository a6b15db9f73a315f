//! Trail domain: feeding the delay line and drawing ducklings.

use bevy::prelude::*;

use crate::movement::{KinematicBody, Player};
use crate::sprites::{ActiveVisual, DuckAnimator, SpriteLayer};
use crate::tiles::level_to_world;
use crate::trail::components::{DucklingSprite, Lives};
use crate::trail::resources::TrailTuning;
use crate::trail::cascade::{DucklingSnapshot, DucklingTrail, duckling_anchor};

pub(crate) fn record_leader(
    tuning: Res<TrailTuning>,
    mut query: Query<(&KinematicBody, &DuckAnimator, &mut DucklingTrail), With<Player>>,
) {
    let duckling_size = tuning.duckling_size();

    for (body, animator, mut trail) in &mut query {
        trail.advance(DucklingSnapshot {
            position: duckling_anchor(body.position, body.size, duckling_size),
            frame: animator.duckling.current_index(),
        });
    }
}

pub(crate) fn spawn_duckling_sprites(
    mut commands: Commands,
    tuning: Res<TrailTuning>,
    existing: Query<Entity, With<DucklingSprite>>,
) {
    if !existing.is_empty() {
        return;
    }

    for slot in 0..tuning.max_lives as usize {
        commands.spawn((
            DucklingSprite { slot },
            Sprite {
                color: duckling_tint(0),
                custom_size: Some(tuning.duckling_size()),
                ..default()
            },
            Transform::default(),
            Visibility::Hidden,
            ActiveVisual::default(),
        ));
    }
}

/// Slight shade change per duckling frame; stands in for the duckling images.
pub(crate) fn duckling_tint(frame: usize) -> Color {
    let lightness = 0.55 + 0.05 * (frame % 4) as f32;
    Color::hsl(52.0, 0.9, lightness)
}

pub(crate) fn sync_duckling_sprites(
    tuning: Res<TrailTuning>,
    leader: Query<(&DucklingTrail, &DuckAnimator, &Lives), With<Player>>,
    mut sprites: Query<
        (
            &DucklingSprite,
            &mut Sprite,
            &mut Transform,
            &mut Visibility,
            &mut ActiveVisual,
        ),
        Without<Player>,
    >,
) {
    let Ok((trail, animator, lives)) = leader.single() else {
        return;
    };
    let size = tuning.duckling_size();
    let z = SpriteLayer::Duckling.z_index();

    for (duckling, mut sprite, mut transform, mut visibility, mut visual) in &mut sprites {
        let front = trail.visible(lives.current as usize).nth(duckling.slot);

        match front {
            Some(snapshot) => {
                sprite.color = duckling_tint(snapshot.frame);
                if let Some(name) = animator.duckling.visual_at(snapshot.frame) {
                    visual.0 = name;
                }
                transform.translation = level_to_world(snapshot.position, size, z);
                *visibility = Visibility::Inherited;
            }
            None => *visibility = Visibility::Hidden,
        }
    }
}
