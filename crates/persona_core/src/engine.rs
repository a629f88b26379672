//! Configured engine facade
//!
//! Bundles the two tier tables, the anchor book and the configured defaults so
//! callers holding a custom [`EngineConfig`] do not have to thread it through
//! every call. Immutable after construction; share it freely across threads.

use crate::anchor::{AbilityAxis, AnchorBook, ReferenceAnchor, DEFAULT_ANCHORS};
use crate::config::EngineConfig;
use crate::error::Result;
use crate::models::{InfluenceScore, PersonaId, PersonaVector};
use crate::ranking::{rank_population_with_precision, RankedEntry, ScoredEntry};
use crate::similarity::{nearest_neighbors, nearest_neighbors_by_id, NeighborLookup, SimilarPersona};
use crate::tier::{AuraTier, BattleTier, ThresholdBands};

#[derive(Debug, Clone)]
pub struct PersonaEngine {
    config: EngineConfig,
    aura: ThresholdBands<AuraTier>,
    battle: ThresholdBands<BattleTier>,
    anchors: AnchorBook,
}

impl PersonaEngine {
    pub fn new(config: EngineConfig) -> Result<Self> {
        let aura = AuraTier::bands(&config.tiers.aura_cut_points)?;
        let battle = BattleTier::bands(&config.tiers.battle_cut_points)?;
        Ok(Self {
            config,
            aura,
            battle,
            anchors: DEFAULT_ANCHORS.clone(),
        })
    }

    /// Replace the built-in anchor tables
    pub fn with_anchors(mut self, anchors: AnchorBook) -> Self {
        self.anchors = anchors;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn aura_bands(&self) -> &ThresholdBands<AuraTier> {
        &self.aura
    }

    pub fn battle_bands(&self) -> &ThresholdBands<BattleTier> {
        &self.battle
    }

    pub fn anchors(&self) -> &AnchorBook {
        &self.anchors
    }

    pub fn classify_aura(&self, score: f64) -> AuraTier {
        self.aura.classify(score)
    }

    pub fn battle_tier(&self, total_influence: f64) -> BattleTier {
        self.battle.classify(total_influence)
    }

    pub fn battle_tier_for(&self, score: &InfluenceScore) -> BattleTier {
        self.battle_tier(score.total_score())
    }

    pub fn rank(&self, scored: &[ScoredEntry], total_override: Option<usize>) -> Vec<RankedEntry> {
        rank_population_with_precision(
            scored,
            total_override,
            self.config.ranking.percentile_decimals,
        )
    }

    /// Nearest neighbors; `k` falls back to the configured default
    pub fn neighbors(
        &self,
        target: &PersonaVector,
        population: &[PersonaVector],
        k: Option<usize>,
    ) -> Vec<SimilarPersona> {
        nearest_neighbors(target, population, k.unwrap_or(self.config.similarity.default_k))
    }

    pub fn neighbors_by_id(
        &self,
        target_id: PersonaId,
        population: &[PersonaVector],
        k: Option<usize>,
    ) -> NeighborLookup {
        nearest_neighbors_by_id(
            target_id,
            population,
            k.unwrap_or(self.config.similarity.default_k),
        )
    }

    pub fn resolve_anchor(&self, axis: AbilityAxis, score: f64) -> Option<&ReferenceAnchor> {
        self.anchors.resolve(axis, score)
    }
}

impl Default for PersonaEngine {
    fn default() -> Self {
        Self {
            config: EngineConfig::default(),
            aura: crate::tier::AURA_BANDS.clone(),
            battle: crate::tier::BATTLE_BANDS.clone(),
            anchors: DEFAULT_ANCHORS.clone(),
        }
    }
}
