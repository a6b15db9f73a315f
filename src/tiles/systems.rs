//! Tiles domain: level loading and tile sprite spawning.

use bevy::prelude::*;

use crate::core::{GameState, LevelSelection};
use crate::sprites::SpriteLayer;
use crate::tiles::grid::{TileGrid, level_to_world, load_tile_grid};
use crate::tiles::resources::TileTuning;


/// Marker for everything spawned to draw the level.
#[derive(Component, Debug)]
pub struct LevelTile;

/// Marker for the "level unavailable" notice.
#[derive(Component, Debug)]
pub struct LevelUnavailableNotice;

pub(crate) fn load_level(
    mut commands: Commands,
    selection: Res<LevelSelection>,
    tuning: Res<TileTuning>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    match load_tile_grid(&selection.path, tuning.tile_size) {
        Ok(grid) => {
            info!(
                "Loaded level {:?}: {}x{} tiles, spawn={:?}, trash bins={}, trash pieces={:?}",
                selection.path,
                grid.width(),
                grid.height(),
                grid.spawn(),
                grid.trash_bin_count(),
                (0..grid.trash_category_count())
                    .map(|category| grid.trash_pieces(category).len())
                    .collect::<Vec<_>>()
            );
            commands.insert_resource(grid);
            next_state.set(GameState::Playing);
        }
        Err(e) => {
            error!("Level {:?} is unplayable: {}", selection.path, e);
            commands.insert_resource(TileGrid::default());
            next_state.set(GameState::LevelUnavailable);
        }
    }
}

/// Palette index to a flat colour; tile images are not part of this game.
pub(crate) fn palette_color(index: u8) -> Color {
    let hue = (index as f32 * 47.0) % 360.0;
    Color::hsl(hue, 0.35, 0.45)
}

pub(crate) fn spawn_level_sprites(mut commands: Commands, grid: Res<TileGrid>) {
    let tile = Vec2::splat(grid.tile_size());
    let marker = tile * 0.4;
    let z = SpriteLayer::Tile.z_index();

    for (coord, index) in grid.solid_tiles() {
        let top_left = Vec2::new(grid.tiles_to_pixels(coord.x), grid.tiles_to_pixels(coord.y));
        commands.spawn((
            LevelTile,
            Sprite {
                color: palette_color(index),
                custom_size: Some(tile),
                ..default()
            },
            Transform::from_translation(level_to_world(top_left, tile, z)),
        ));
    }

    let bins = (0..grid.trash_bin_count()).filter_map(|index| grid.trash_bin(index));
    for coord in bins {
        spawn_site_marker(&mut commands, &grid, coord, marker, Color::srgb(0.2, 0.3, 0.8));
    }

    for category in 0..grid.trash_category_count() {
        for &coord in grid.trash_pieces(category) {
            spawn_site_marker(&mut commands, &grid, coord, marker, Color::srgb(0.6, 0.5, 0.2));
        }
    }
}

fn spawn_site_marker(
    commands: &mut Commands,
    grid: &TileGrid,
    coord: IVec2,
    size: Vec2,
    color: Color,
) {
    let tile = Vec2::splat(grid.tile_size());
    // Sit on the tile floor, centred horizontally.
    let top_left = Vec2::new(
        grid.tiles_to_pixels(coord.x) + (tile.x - size.x) / 2.0,
        grid.tiles_to_pixels(coord.y) + tile.y - size.y,
    );
    let z = SpriteLayer::Site.z_index();
    commands.spawn((
        LevelTile,
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(level_to_world(top_left, size, z)),
    ));
}

pub(crate) fn show_level_unavailable(mut commands: Commands, selection: Res<LevelSelection>) {
    commands.spawn((
        LevelUnavailableNotice,
        Text::new(format!(
            "Level {} could not be loaded. See the log for details.",
            selection.path.display()
        )),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(16.0),
            top: Val::Px(16.0),
            ..default()
        },
    ));
}
