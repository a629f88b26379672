//! Battle tiers for the card-battle mode.
//!
//! Coarser than the aura scale and tuned for match balance. The cut points are
//! kept in their own table so balance passes never move aura boundaries.

use super::bands::ThresholdBands;
use crate::error::Result;
use crate::models::InfluenceScore;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Interior cut points between D / C / B / A / S
pub const DEFAULT_BATTLE_CUT_POINTS: [f64; 4] = [40.0, 55.0, 70.0, 85.0];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BattleTier {
    D = 1,
    C = 2,
    B = 3,
    A = 4,
    S = 5,
}

impl BattleTier {
    pub const ALL: [BattleTier; 5] = [
        BattleTier::D,
        BattleTier::C,
        BattleTier::B,
        BattleTier::A,
        BattleTier::S,
    ];

    pub fn level(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            BattleTier::D => "D",
            BattleTier::C => "C",
            BattleTier::B => "B",
            BattleTier::A => "A",
            BattleTier::S => "S",
        }
    }

    pub fn bands(cut_points: &[f64]) -> Result<ThresholdBands<BattleTier>> {
        ThresholdBands::from_cut_points("battle", 0.0, 100.0, cut_points, &Self::ALL)
    }

    /// Tier of an individual from their derived influence total
    pub fn for_influence(score: &InfluenceScore) -> Self {
        to_battle_tier(score.total_score())
    }
}

impl fmt::Display for BattleTier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub static BATTLE_BANDS: Lazy<ThresholdBands<BattleTier>> = Lazy::new(|| {
    BattleTier::bands(&DEFAULT_BATTLE_CUT_POINTS).expect("default battle cut points are valid")
});

/// Battle tier for a summed influence score (clamped when out of range)
pub fn to_battle_tier(total_influence: f64) -> BattleTier {
    BATTLE_BANDS.classify(total_influence)
}
