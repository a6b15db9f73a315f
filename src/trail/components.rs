//! Trail domain: lives and duckling sprite markers.

use bevy::prelude::*;

/// Remaining lives; one duckling follows the avatar per life.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lives {
    pub current: u32,
    pub max: u32,
}

impl Lives {
    pub fn new(start: u32, max: u32) -> Self {
        Self {
            current: start.min(max),
            max,
        }
    }

    pub fn gain(&mut self) {
        self.current = (self.current + 1).min(self.max);
    }

    pub fn lose(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    pub fn is_out(&self) -> bool {
        self.current == 0
    }
}

/// Sprite drawing the front snapshot of one life slot.
#[derive(Component, Debug)]
pub struct DucklingSprite {
    pub slot: usize,
}
