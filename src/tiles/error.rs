//! Tiles domain: errors raised while reading or parsing a level map.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileMapError {
    /// The map file could not be read.
    Io { path: String, message: String },
    /// No `*` spawn marker anywhere in the map.
    MissingSpawn,
    /// A trash-piece digit outside `1`-`4`.
    TrashCategoryOutOfRange { digit: char, x: usize, y: usize },
    /// The same trash-bin letter appears twice.
    DuplicateTrashBin { letter: char, x: usize, y: usize },
    /// Trash-bin letters must run from `a` without holes.
    TrashBinGap { missing: char },
}

impl fmt::Display for TileMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, message } => write!(f, "Failed to read map {}: {}", path, message),
            Self::MissingSpawn => write!(f, "Map has no player spawn ('*')"),
            Self::TrashCategoryOutOfRange { digit, x, y } => write!(
                f,
                "Trash piece '{}' at ({}, {}) is outside categories 1-4",
                digit, x, y
            ),
            Self::DuplicateTrashBin { letter, x, y } => write!(
                f,
                "Trash bin '{}' at ({}, {}) was already placed",
                letter, x, y
            ),
            Self::TrashBinGap { missing } => write!(
                f,
                "Trash bin '{}' is missing but a later bin letter is present",
                missing
            ),
        }
    }
}

impl std::error::Error for TileMapError {}
