//! Data definitions for the gameplay tuning file.

use serde::{Deserialize, Serialize};

use crate::movement::MovementTuning;
use crate::sprites::AnimationTuning;
use crate::tiles::TileTuning;
use crate::trail::TrailTuning;

/// Root of `tuning.ron`. Any section or field left out keeps its default.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GameplayTuning {
    pub movement: MovementTuning,
    pub trail: TrailTuning,
    pub tiles: TileTuning,
    pub animation: AnimationTuning,
}
