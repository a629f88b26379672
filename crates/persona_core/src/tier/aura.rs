//! Aura tiers: 9 qualitative levels over a 0-100 influence score.
//!
//! Classification is absolute. Two individuals with the same score get the
//! same aura no matter who else is in the archive.

use super::bands::ThresholdBands;
use crate::error::Result;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Interior cut points between the 9 aura tiers
pub const DEFAULT_AURA_CUT_POINTS: [f64; 8] = [20.0, 35.0, 45.0, 55.0, 65.0, 75.0, 85.0, 95.0];

/// Aura tier (1 = lowest, 9 = highest)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AuraTier {
    Faint = 1,
    Dim = 2,
    Glimmering = 3,
    Steady = 4,
    Bright = 5,
    Radiant = 6,
    Brilliant = 7,
    Blazing = 8,
    Transcendent = 9,
}

impl AuraTier {
    pub const ALL: [AuraTier; 9] = [
        AuraTier::Faint,
        AuraTier::Dim,
        AuraTier::Glimmering,
        AuraTier::Steady,
        AuraTier::Bright,
        AuraTier::Radiant,
        AuraTier::Brilliant,
        AuraTier::Blazing,
        AuraTier::Transcendent,
    ];

    pub fn level(self) -> u8 {
        self as u8
    }

    pub fn from_level(level: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.level() == level)
    }

    pub fn name(self) -> &'static str {
        match self {
            AuraTier::Faint => "Faint",
            AuraTier::Dim => "Dim",
            AuraTier::Glimmering => "Glimmering",
            AuraTier::Steady => "Steady",
            AuraTier::Bright => "Bright",
            AuraTier::Radiant => "Radiant",
            AuraTier::Brilliant => "Brilliant",
            AuraTier::Blazing => "Blazing",
            AuraTier::Transcendent => "Transcendent",
        }
    }

    /// Score range of this tier in the default table
    pub fn range(self) -> (f64, f64) {
        // every label is present in the default table
        AURA_BANDS.range_of(self).unwrap_or((0.0, 100.0))
    }

    /// Build an aura table with custom cut points
    pub fn bands(cut_points: &[f64]) -> Result<ThresholdBands<AuraTier>> {
        ThresholdBands::from_cut_points("aura", 0.0, 100.0, cut_points, &Self::ALL)
    }
}

impl fmt::Display for AuraTier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.level())
    }
}

/// Default aura table
pub static AURA_BANDS: Lazy<ThresholdBands<AuraTier>> = Lazy::new(|| {
    AuraTier::bands(&DEFAULT_AURA_CUT_POINTS).expect("default aura cut points are valid")
});

/// Aura tier for a 0-100 influence score (clamped when out of range)
pub fn classify(score: f64) -> AuraTier {
    AURA_BANDS.classify(score)
}
