//! Tier classification: one generic threshold-band classifier, two scales.

pub mod aura;
pub mod bands;
pub mod battle;

pub use aura::{classify, AuraTier, AURA_BANDS, DEFAULT_AURA_CUT_POINTS};
pub use bands::{Band, ThresholdBands};
pub use battle::{to_battle_tier, BattleTier, BATTLE_BANDS, DEFAULT_BATTLE_CUT_POINTS};
