//! Movement domain: position integration and tile collision response.

use bevy::prelude::*;

use crate::movement::{KinematicBody, MovementState, Player};
use crate::tiles::TileGrid;

/// Move `body` by its velocity, one axis at a time, stopping flush against
/// any tile (or the grid boundary) it runs into. Returns the new grounded flag.
pub(crate) fn integrate_and_collide(body: &mut KinematicBody, grid: &TileGrid) -> bool {
    let tile_size = grid.tile_size();
    let mut landed = false;

    if body.velocity.x != 0.0 {
        body.position.x += body.velocity.x;
        if let Some(tile) = grid.check_collision(body.rect()) {
            body.position.x = if body.velocity.x > 0.0 {
                grid.tiles_to_pixels(tile.x) - body.size.x
            } else {
                grid.tiles_to_pixels(tile.x) + tile_size
            };
            body.velocity.x = 0.0;
        }
    }

    if body.velocity.y != 0.0 {
        body.position.y += body.velocity.y;
        if let Some(tile) = grid.check_collision(body.rect()) {
            if body.velocity.y > 0.0 {
                body.position.y = grid.tiles_to_pixels(tile.y) - body.size.y;
                landed = true;
            } else {
                body.position.y = grid.tiles_to_pixels(tile.y) + tile_size;
            }
            body.velocity.y = 0.0;
        }
    }

    landed || standing_on_tile(body, grid)
}

/// One-pixel probe under the body's feet.
fn standing_on_tile(body: &KinematicBody, grid: &TileGrid) -> bool {
    let mut probe = body.rect();
    probe.min.y = probe.max.y;
    probe.max.y += 1.0;
    grid.check_collision(probe).is_some()
}

pub(crate) fn resolve_tile_collisions(
    grid: Res<TileGrid>,
    mut query: Query<(&mut KinematicBody, &mut MovementState), With<Player>>,
) {
    for (mut body, mut state) in &mut query {
        let was_on_ground = state.on_ground;
        state.on_ground = integrate_and_collide(&mut body, &grid);

        if state.on_ground && !was_on_ground {
            debug!("Landed at ({:.1}, {:.1})", body.position.x, body.position.y);
        } else if !state.on_ground && was_on_ground {
            debug!("Left ground at ({:.1}, {:.1})", body.position.x, body.position.y);
        }
    }
}
