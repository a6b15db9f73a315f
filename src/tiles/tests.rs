//! Tiles domain: tests for map parsing and tile collision queries.

use bevy::prelude::{IVec2, Rect, Vec2, Vec3};

use super::grid::{DEFAULT_TILE_SIZE, TRASH_CATEGORY_COUNT};
use super::{TileGrid, TileMapError, level_to_world, load_tile_grid};

const TS: f32 = DEFAULT_TILE_SIZE;

fn parse(text: &str) -> TileGrid {
    TileGrid::parse(text, TS).expect("map should parse")
}

/// Pixel rectangle covering tiles `from..=to` exactly.
fn tile_rect(from: (i32, i32), to: (i32, i32)) -> Rect {
    Rect::new(
        from.0 as f32 * TS,
        from.1 as f32 * TS,
        (to.0 + 1) as f32 * TS,
        (to.1 + 1) as f32 * TS,
    )
}

// -----------------------------------------------------------------------------
// Parsing
// -----------------------------------------------------------------------------

#[test]
fn test_parse_small_map() {
    let grid = parse("AB*\n1a ");

    assert_eq!(grid.width(), 3);
    assert_eq!(grid.height(), 2);
    assert_eq!(grid.tile_index(0, 0), Some(0));
    assert_eq!(grid.tile_index(1, 0), Some(1));
    assert_eq!(grid.tile_index(2, 0), None);
    assert_eq!(grid.spawn(), Some(IVec2::new(2, 0)));
    assert_eq!(grid.trash_pieces(0), &[IVec2::new(0, 1)]);
    assert_eq!(grid.trash_bin_count(), 1);
    assert_eq!(grid.trash_bin(0), Some(IVec2::new(1, 1)));
    // Sites are not solid.
    assert_eq!(grid.tile_index(0, 1), None);
    assert_eq!(grid.tile_index(1, 1), None);
}

#[test]
fn test_comment_lines_are_skipped() {
    let grid = parse("# header that is much longer than any row\nA*\n# trailing\nZZ");

    assert_eq!(grid.width(), 2);
    assert_eq!(grid.height(), 2);
    assert_eq!(grid.tile_index(0, 0), Some(0));
    assert_eq!(grid.tile_index(0, 1), Some(25));
}

#[test]
fn test_width_is_longest_line_and_short_rows_are_empty() {
    let grid = parse("*\nAAAA\nB");

    assert_eq!(grid.width(), 4);
    assert_eq!(grid.height(), 3);
    assert_eq!(grid.tile_index(3, 0), None);
    assert_eq!(grid.tile_index(3, 1), Some(0));
    assert_eq!(grid.tile_index(1, 2), None);
}

#[test]
fn test_last_spawn_marker_wins() {
    let grid = parse("* *\n  *");
    assert_eq!(grid.spawn(), Some(IVec2::new(2, 1)));
}

#[test]
fn test_unknown_characters_are_empty() {
    let grid = parse("*.-~\n@ !?");
    assert_eq!(grid.solid_tiles().count(), 0);
}

#[test]
fn test_trash_pieces_grouped_by_category() {
    let grid = parse("*1234\n4321");

    for category in 0..TRASH_CATEGORY_COUNT {
        assert_eq!(grid.trash_pieces(category).len(), 2);
    }
    assert_eq!(
        grid.trash_pieces(3),
        &[IVec2::new(4, 0), IVec2::new(0, 1)]
    );
    assert!(grid.trash_pieces(9).is_empty());
}

#[test]
fn test_trash_bins_accept_any_order_when_contiguous() {
    let grid = parse("c*b\na  ");

    assert_eq!(grid.trash_bin_count(), 3);
    assert_eq!(grid.trash_bin(0), Some(IVec2::new(0, 1)));
    assert_eq!(grid.trash_bin(1), Some(IVec2::new(2, 0)));
    assert_eq!(grid.trash_bin(2), Some(IVec2::new(0, 0)));
    assert_eq!(grid.trash_bin(3), None);
}

#[test]
fn test_trash_bin_gap_is_rejected() {
    let err = TileGrid::parse("a*c", TS).unwrap_err();
    assert_eq!(err, TileMapError::TrashBinGap { missing: 'b' });
}

#[test]
fn test_duplicate_trash_bin_is_rejected() {
    let err = TileGrid::parse("a*\n a", TS).unwrap_err();
    assert_eq!(
        err,
        TileMapError::DuplicateTrashBin {
            letter: 'a',
            x: 1,
            y: 1
        }
    );
}

#[test]
fn test_trash_category_out_of_range_is_rejected() {
    let err = TileGrid::parse("*5", TS).unwrap_err();
    assert_eq!(
        err,
        TileMapError::TrashCategoryOutOfRange {
            digit: '5',
            x: 1,
            y: 0
        }
    );
}

#[test]
fn test_missing_spawn_is_rejected() {
    let err = TileGrid::parse("AAA\nB a", TS).unwrap_err();
    assert_eq!(err, TileMapError::MissingSpawn);
    assert!(err.to_string().contains("spawn"));
}

#[test]
fn test_missing_file_reports_io_error() {
    let err = load_tile_grid(std::path::Path::new("no/such/map.txt"), TS).unwrap_err();
    match err {
        TileMapError::Io { path, .. } => assert!(path.contains("map.txt")),
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn test_default_grid_is_degenerate() {
    let grid = TileGrid::default();
    assert_eq!((grid.width(), grid.height()), (0, 0));
    assert_eq!(grid.spawn(), None);
    assert_eq!(grid.tile_index(0, 0), None);
    // Every query on an empty grid is blocked by the boundary.
    assert_eq!(
        grid.check_collision(tile_rect((0, 0), (0, 0))),
        Some(IVec2::new(0, 0))
    );
}

// -----------------------------------------------------------------------------
// Collision
// -----------------------------------------------------------------------------

#[test]
fn test_empty_interior_has_no_collision() {
    let grid = parse("AAAAA\nA * A\nA   A\nAAAAA");

    assert_eq!(grid.check_collision(tile_rect((1, 1), (3, 2))), None);
    // Partial-tile rectangle inside one tile.
    assert_eq!(
        grid.check_collision(Rect::new(70.0, 70.0, 100.0, 120.0)),
        None
    );
}

#[test]
fn test_flush_rectangle_does_not_touch_neighbour() {
    let grid = parse("*A");
    // Right edge exactly on the solid tile's left edge.
    assert_eq!(grid.check_collision(Rect::new(0.0, 0.0, TS, TS)), None);
    assert_eq!(
        grid.check_collision(Rect::new(0.0, 0.0, TS + 1.0, TS)),
        Some(IVec2::new(1, 0))
    );
}

#[test]
fn test_solid_hit_returns_first_in_x_then_y_order() {
    let grid = parse("*  \n  A\n A ");
    // Span covers (1..=2, 1..=2); scan visits (1,1), (1,2) before (2,1).
    assert_eq!(
        grid.check_collision(tile_rect((1, 1), (2, 2))),
        Some(IVec2::new(1, 2))
    );
}

#[test]
fn test_out_of_bounds_is_blocked() {
    let grid = parse("*  \n   ");

    // Left of the grid.
    assert_eq!(
        grid.check_collision(Rect::new(-10.0, 0.0, 20.0, 20.0)),
        Some(IVec2::new(-1, 0))
    );
    // Above the grid: x=0 column scanned first, y=-1 first within it.
    assert_eq!(
        grid.check_collision(Rect::new(0.0, -5.0, 20.0, 20.0)),
        Some(IVec2::new(0, -1))
    );
    // Below the bottom row.
    assert_eq!(
        grid.check_collision(Rect::new(TS, TS, TS + 10.0, 2.0 * TS + 5.0)),
        Some(IVec2::new(1, 2))
    );
    // Right of the grid.
    assert_eq!(
        grid.check_collision(tile_rect((2, 0), (3, 0))),
        Some(IVec2::new(3, 0))
    );
}

#[test]
fn test_out_of_bounds_precedes_later_solid_in_scan_order() {
    let grid = parse("*A\n  ");
    // x=-1 column is visited before the solid tile at (1,0).
    assert_eq!(
        grid.check_collision(Rect::new(-1.0, 0.0, 2.0 * TS, TS)),
        Some(IVec2::new(-1, 0))
    );
}

#[test]
fn test_pixel_tile_conversion_floors() {
    let grid = parse("*");
    assert_eq!(grid.pixels_to_tiles(0.0), 0);
    assert_eq!(grid.pixels_to_tiles(63.9), 0);
    assert_eq!(grid.pixels_to_tiles(64.0), 1);
    assert_eq!(grid.pixels_to_tiles(-0.5), -1);
    assert_eq!(grid.tiles_to_pixels(3), 192.0);
}

#[test]
fn test_custom_tile_size() {
    let grid = TileGrid::parse("* A", 16.0).unwrap();
    assert_eq!(grid.tile_size(), 16.0);
    assert_eq!(
        grid.check_collision(Rect::new(20.0, 0.0, 40.0, 16.0)),
        Some(IVec2::new(2, 0))
    );
}

#[test]
fn test_level_to_world_flips_y_and_centres() {
    let world = level_to_world(Vec2::new(64.0, 128.0), Vec2::new(32.0, 48.0), 1.0);
    assert_eq!(world, Vec3::new(80.0, -152.0, 1.0));
}

#[test]
fn test_shipped_level_parses() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/maps/level1.txt");
    let grid = load_tile_grid(&path, TS).unwrap();

    assert_eq!(grid.width(), 40);
    assert_eq!(grid.height(), 11);
    assert_eq!(grid.spawn(), Some(IVec2::new(2, 9)));
    assert_eq!(grid.trash_bin_count(), 4);
    for category in 0..TRASH_CATEGORY_COUNT {
        assert!(!grid.trash_pieces(category).is_empty());
    }
}
