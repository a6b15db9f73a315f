//! Core domain: shared resources for level selection and pausing.

use bevy::prelude::*;
use std::collections::HashSet;
use std::ffi::OsString;
use std::path::PathBuf;

pub const DEFAULT_LEVEL_PATH: &str = "assets/maps/level1.txt";

/// Resource tracking if gameplay should be paused.
/// Gameplay is paused if any source is active.
#[derive(Resource, Debug, Default)]
pub struct GameplayPaused {
    pub sources: HashSet<String>,
}

impl GameplayPaused {
    pub fn is_paused(&self) -> bool {
        !self.sources.is_empty()
    }

    /// Flip a single source on or off, returning whether it is now active.
    pub fn toggle(&mut self, source: impl Into<String>) -> bool {
        let source = source.into();
        if self.sources.remove(&source) {
            false
        } else {
            self.sources.insert(source);
            true
        }
    }
}

/// Run condition: returns true only when gameplay is not paused
pub fn gameplay_active(paused: Res<GameplayPaused>) -> bool {
    !paused.is_paused()
}

/// Which map file the level is built from.
#[derive(Resource, Debug, Clone)]
pub struct LevelSelection {
    pub path: PathBuf,
}

impl Default for LevelSelection {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_LEVEL_PATH),
        }
    }
}

impl LevelSelection {
    /// Use the first command-line argument as the map path when present.
    /// Arguments are taken as raw OS strings, so non-UTF-8 paths are kept.
    pub fn from_args(mut args: impl Iterator<Item = OsString>) -> Self {
        match args.nth(1) {
            Some(path) => Self {
                path: PathBuf::from(path),
            },
            None => Self::default(),
        }
    }
}
