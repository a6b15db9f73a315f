//! Tiles domain: the tile grid, its map parser and collision queries.
//!
//! Level space is measured in pixels with y growing downward, matching the
//! map text where row 0 is the top line.

use bevy::prelude::*;
use std::fs;
use std::path::Path;

use super::error::TileMapError;

pub const DEFAULT_TILE_SIZE: f32 = 64.0;
pub const TRASH_CATEGORY_COUNT: usize = 4;
pub const TRASH_BIN_SLOTS: usize = 26;

const COMMENT_PREFIX: char = '#';
const SPAWN_MARKER: char = '*';

/// Read-only grid of tile palette indices plus the special sites found in the map.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct TileGrid {
    width: usize,
    height: usize,
    tile_size: f32,
    /// Column-major: `cells[x * height + y]`.
    cells: Vec<Option<u8>>,
    spawn: Option<IVec2>,
    trash_bins: [Option<IVec2>; TRASH_BIN_SLOTS],
    trash_pieces: [Vec<IVec2>; TRASH_CATEGORY_COUNT],
}

impl Default for TileGrid {
    /// The degenerate zero-extent grid left behind when a map fails to load.
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            tile_size: DEFAULT_TILE_SIZE,
            cells: Vec::new(),
            spawn: None,
            trash_bins: [None; TRASH_BIN_SLOTS],
            trash_pieces: Default::default(),
        }
    }
}

impl TileGrid {
    /// Parse map text into a grid.
    ///
    /// Lines starting with `#` are dropped. The width is the longest
    /// remaining line and the height is the number of remaining lines.
    pub fn parse(text: &str, tile_size: f32) -> Result<Self, TileMapError> {
        let lines: Vec<&str> = text
            .lines()
            .filter(|line| !line.starts_with(COMMENT_PREFIX))
            .collect();
        let width = lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        let height = lines.len();

        let mut grid = Self {
            width,
            height,
            tile_size,
            cells: vec![None; width * height],
            ..default()
        };

        for (y, line) in lines.iter().enumerate() {
            for (x, ch) in line.chars().enumerate() {
                grid.place(ch, x, y)?;
            }
        }

        if grid.spawn.is_none() {
            return Err(TileMapError::MissingSpawn);
        }
        grid.check_trash_bins_contiguous()?;

        Ok(grid)
    }

    fn place(&mut self, ch: char, x: usize, y: usize) -> Result<(), TileMapError> {
        let coord = IVec2::new(x as i32, y as i32);
        match ch {
            'A'..='Z' => {
                let index = x * self.height + y;
                self.cells[index] = Some(ch as u8 - b'A');
            }
            'a'..='z' => {
                let slot = &mut self.trash_bins[(ch as u8 - b'a') as usize];
                if slot.is_some() {
                    return Err(TileMapError::DuplicateTrashBin { letter: ch, x, y });
                }
                *slot = Some(coord);
            }
            '1'..='9' => {
                let category = (ch as u8 - b'1') as usize;
                let Some(pieces) = self.trash_pieces.get_mut(category) else {
                    return Err(TileMapError::TrashCategoryOutOfRange { digit: ch, x, y });
                };
                pieces.push(coord);
            }
            // Last marker wins.
            SPAWN_MARKER => self.spawn = Some(coord),
            _ => {}
        }
        Ok(())
    }

    fn check_trash_bins_contiguous(&self) -> Result<(), TileMapError> {
        let count = self.trash_bin_count();
        if self.trash_bins[count..].iter().any(Option::is_some) {
            return Err(TileMapError::TrashBinGap {
                missing: (b'a' + count as u8) as char,
            });
        }
        Ok(())
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    pub fn spawn(&self) -> Option<IVec2> {
        self.spawn
    }

    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Palette index of the tile at `(x, y)`, or `None` when empty or out of bounds.
    pub fn tile_index(&self, x: i32, y: i32) -> Option<u8> {
        if !self.in_bounds(x, y) {
            return None;
        }
        self.cells[x as usize * self.height + y as usize]
    }

    /// Iterate every solid cell as `(coord, palette index)`.
    pub fn solid_tiles(&self) -> impl Iterator<Item = (IVec2, u8)> + '_ {
        (0..self.width as i32).flat_map(move |x| {
            (0..self.height as i32)
                .filter_map(move |y| self.tile_index(x, y).map(|index| (IVec2::new(x, y), index)))
        })
    }

    pub fn trash_bin(&self, index: usize) -> Option<IVec2> {
        self.trash_bins.get(index).copied().flatten()
    }

    /// Number of trash-bin sites; bins always occupy slots `0..count`.
    pub fn trash_bin_count(&self) -> usize {
        self.trash_bins.iter().take_while(|slot| slot.is_some()).count()
    }

    pub fn trash_pieces(&self, category: usize) -> &[IVec2] {
        self.trash_pieces
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn trash_category_count(&self) -> usize {
        TRASH_CATEGORY_COUNT
    }

    pub fn pixels_to_tiles(&self, pixels: f32) -> i32 {
        (pixels / self.tile_size).floor() as i32
    }

    pub fn tiles_to_pixels(&self, tiles: i32) -> f32 {
        tiles as f32 * self.tile_size
    }

    /// First tile overlapped by `rect` that is solid or outside the grid.
    ///
    /// The span is scanned with x in the outer loop and y in the inner loop,
    /// and the first hit in that order is returned. The max edges are pulled
    /// in by one pixel so a rectangle flush against a tile does not touch it.
    pub fn check_collision(&self, rect: Rect) -> Option<IVec2> {
        let from_x = self.pixels_to_tiles(rect.min.x);
        let from_y = self.pixels_to_tiles(rect.min.y);
        let to_x = self.pixels_to_tiles(rect.max.x - 1.0);
        let to_y = self.pixels_to_tiles(rect.max.y - 1.0);

        for x in from_x..=to_x {
            for y in from_y..=to_y {
                if !self.in_bounds(x, y) || self.tile_index(x, y).is_some() {
                    return Some(IVec2::new(x, y));
                }
            }
        }

        None
    }
}

/// Read a map file and parse it.
pub fn load_tile_grid(path: &Path, tile_size: f32) -> Result<TileGrid, TileMapError> {
    let contents = fs::read_to_string(path).map_err(|e| TileMapError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    TileGrid::parse(&contents, tile_size)
}

/// World transform for a level-space rectangle at `top_left` with `size`.
///
/// Bevy's y axis points up, so level y is negated and the sprite is centred.
pub fn level_to_world(top_left: Vec2, size: Vec2, z: f32) -> Vec3 {
    Vec3::new(
        top_left.x + size.x / 2.0,
        -(top_left.y + size.y / 2.0),
        z,
    )
}
