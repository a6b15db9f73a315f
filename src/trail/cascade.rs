//! The delay-line cascade that trails ducklings behind the avatar.
//!
//! One ring per life slot. Each tick a fresh snapshot enters ring 0 and the
//! snapshot it pushes out feeds ring 1, and so on down the chain, so slot
//! `i` shows the leader as it was `(i + 1) * frame_offset` ticks ago.

use bevy::prelude::*;

use super::ring::DelayRing;

/// Where a duckling is drawn and which duckling frame it shows.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DucklingSnapshot {
    pub position: Vec2,
    pub frame: usize,
}

#[derive(Component, Debug, Clone)]
pub struct DucklingTrail {
    rings: Vec<DelayRing<DucklingSnapshot>>,
    frame_offset: usize,
}

impl DucklingTrail {
    /// Build `slots` rings, each pre-filled with `frame_offset` copies of `initial`.
    pub fn new(slots: usize, frame_offset: usize, initial: DucklingSnapshot) -> Self {
        let rings = (0..slots)
            .map(|_| {
                let mut ring = DelayRing::with_capacity(frame_offset + 1);
                for _ in 0..frame_offset {
                    ring.push(initial);
                }
                ring
            })
            .collect();

        Self {
            rings,
            frame_offset,
        }
    }

    pub fn slots(&self) -> usize {
        self.rings.len()
    }

    pub fn frame_offset(&self) -> usize {
        self.frame_offset
    }

    /// Feed the leader's snapshot for this tick through the chain.
    pub fn advance(&mut self, leader: DucklingSnapshot) {
        let mut incoming = leader;
        for ring in &mut self.rings {
            ring.push(incoming);
            match ring.pop() {
                Some(oldest) => incoming = oldest,
                None => break,
            }
        }
    }

    /// The snapshot slot `slot` is currently showing.
    pub fn front(&self, slot: usize) -> Option<DucklingSnapshot> {
        self.rings.get(slot).and_then(|ring| ring.front().copied())
    }

    /// Front snapshots for the first `lives` slots.
    pub fn visible(&self, lives: usize) -> impl Iterator<Item = DucklingSnapshot> + '_ {
        self.rings
            .iter()
            .take(lives)
            .filter_map(|ring| ring.front().copied())
    }
}

/// Top-left of a duckling standing at the avatar's feet, centred under it.
pub fn duckling_anchor(avatar_position: Vec2, avatar_size: Vec2, duckling_size: Vec2) -> Vec2 {
    Vec2::new(
        avatar_position.x + (avatar_size.x - duckling_size.x) / 2.0,
        avatar_position.y + avatar_size.y - duckling_size.y,
    )
}
