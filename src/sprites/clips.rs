//! Frame tables for the duck and its ducklings.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::animation::AnimationState;
use super::sequence::{Frame, FrameSequence};

/// Tick lengths the frame tables are written in.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AnimationTuning {
    /// One short animation frame.
    pub frame_ticks: u32,
    /// One second of game time.
    pub second_ticks: u32,
}

impl Default for AnimationTuning {
    fn default() -> Self {
        Self {
            frame_ticks: 5,
            second_ticks: 60,
        }
    }
}

/// Standing: long rests broken by blinks, then a shake.
fn stand_clip(
    tuning: &AnimationTuning,
    rest: &'static str,
    blink: &'static str,
    shake: [&'static str; 3],
) -> FrameSequence {
    let rest_ticks = 2 * tuning.second_ticks;
    let mut frames = Vec::with_capacity(12);
    for _ in 0..4 {
        frames.push(Frame::new(rest, rest_ticks));
        frames.push(Frame::new(blink, tuning.frame_ticks));
    }
    frames.push(Frame::new(rest, rest_ticks));
    frames.extend(
        shake
            .into_iter()
            .map(|visual| Frame::new(visual, 3 * tuning.frame_ticks)),
    );
    FrameSequence::new(frames, true)
}

fn even_clip(tuning: &AnimationTuning, visuals: &[&'static str]) -> FrameSequence {
    let frames = visuals
        .iter()
        .map(|&visual| Frame::new(visual, tuning.frame_ticks))
        .collect();
    FrameSequence::new(frames, true)
}

pub fn clip_for(state: AnimationState, tuning: &AnimationTuning) -> FrameSequence {
    match state {
        AnimationState::StandLeft => stand_clip(
            tuning,
            "patoParadoIzq1.png",
            "patoParadoIzq6.png",
            ["patoParadoIzq2.png", "patoParadoIzq3.png", "patoParadoIzq4.png"],
        ),
        AnimationState::StandRight => stand_clip(
            tuning,
            "patoParadoDer1.png",
            "patoParadoDer6.png",
            ["patoParadoDer2.png", "patoParadoDer3.png", "patoParadoDer4.png"],
        ),
        AnimationState::WalkLeft => even_clip(
            tuning,
            &[
                "patoCaminaIzq1.png",
                "patoCaminaIzq2.png",
                "patoCaminaIzq3.png",
                "patoCaminaIzq4.png",
                "patoCaminaIzq5.png",
                "patoCaminaIzq6.png",
                "patoCaminaIzq7.png",
                "patoCaminaIzq8.png",
            ],
        ),
        AnimationState::WalkRight => even_clip(
            tuning,
            &[
                "patoCaminaDer1.png",
                "patoCaminaDer2.png",
                "patoCaminaDer3.png",
                "patoCaminaDer4.png",
                "patoCaminaDer5.png",
                "patoCaminaDer6.png",
                "patoCaminaDer7.png",
                "patoCaminaDer8.png",
            ],
        ),
        AnimationState::JumpLeft => {
            even_clip(tuning, &["patoSaltoIzq1.png", "patoSaltoIzq2.png"])
        }
        AnimationState::JumpRight => {
            even_clip(tuning, &["patoSaltoDer1.png", "patoSaltoDer2.png"])
        }
    }
}

pub fn duckling_clip(tuning: &AnimationTuning) -> FrameSequence {
    even_clip(
        tuning,
        &["patito1.png", "patito2.png", "patito3.png", "patito4.png"],
    )
}

/// Name of the image a sprite would show this frame.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActiveVisual(pub &'static str);

/// The avatar's animation set. Each clip keeps its own progress; only the
/// active one advances.
#[derive(Component, Debug, Clone)]
pub struct DuckAnimator {
    clips: [FrameSequence; 6],
    pub state: AnimationState,
    /// Always running; the trail samples its frame index.
    pub duckling: FrameSequence,
}

impl DuckAnimator {
    pub fn new(tuning: &AnimationTuning) -> Self {
        Self {
            clips: AnimationState::ALL.map(|state| clip_for(state, tuning)),
            state: AnimationState::WalkRight,
            duckling: duckling_clip(tuning),
        }
    }

    pub fn current(&self) -> &FrameSequence {
        &self.clips[self.state.index()]
    }

    pub fn current_visual(&self) -> Option<&'static str> {
        self.current().current_visual()
    }

    /// Step the active clip and the duckling clip by one tick.
    pub fn advance(&mut self) {
        self.clips[self.state.index()].advance();
        self.duckling.advance();
    }
}
