//! JSON report builders for the CLI

use crate::loaders::{InfluenceTable, PersonaTable};
use persona_core::{
    count_scored, AbilityAxis, AuraTier, BattleTier, InfluenceDomain, NeighborLookup,
    PersonaEngine, PersonaId, ReferenceAnchor, ScoredEntry,
};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// What a ranking orders by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankingBasis {
    Total,
    Domain(InfluenceDomain),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingRow {
    pub id: PersonaId,
    pub name: Option<String>,
    pub score: f64,
    pub rank: usize,
    pub percentile: f64,
    /// Aura and battle tier always come from the derived influence total
    pub aura: AuraTier,
    pub aura_level: u8,
    pub battle_tier: BattleTier,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingReport {
    pub generated_at: String,
    pub basis: RankingBasis,
    pub population: usize,
    /// Percentile denominator actually used
    pub total: usize,
    pub entries: Vec<RankingRow>,
}

pub fn build_ranking_report(
    engine: &PersonaEngine,
    table: &InfluenceTable,
    basis: RankingBasis,
    exclude_unscored: bool,
) -> RankingReport {
    let scored: Vec<ScoredEntry> = table
        .scores
        .iter()
        .map(|s| {
            let score = match basis {
                RankingBasis::Total => s.total_score(),
                RankingBasis::Domain(domain) => s.domain(domain),
            };
            ScoredEntry::new(s.id, score)
        })
        .collect();

    let total_override = exclude_unscored.then(|| count_scored(&scored));
    let total = total_override.unwrap_or(scored.len());

    let mut influence_totals: FxHashMap<PersonaId, f64> = FxHashMap::default();
    for s in &table.scores {
        influence_totals.entry(s.id).or_insert_with(|| s.total_score());
    }

    let entries = engine
        .rank(&scored, total_override)
        .into_iter()
        .map(|entry| {
            let influence_total = influence_totals.get(&entry.id).copied().unwrap_or(0.0);
            let aura = engine.classify_aura(influence_total);
            RankingRow {
                id: entry.id,
                name: table.name(entry.id).map(str::to_string),
                score: entry.score,
                rank: entry.rank,
                percentile: entry.percentile,
                aura,
                aura_level: aura.level(),
                battle_tier: engine.battle_tier(influence_total),
            }
        })
        .collect();

    RankingReport {
        generated_at: chrono::Utc::now().to_rfc3339(),
        basis,
        population: scored.len(),
        total,
        entries,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NeighborRow {
    pub id: PersonaId,
    pub name: Option<String>,
    pub distance: f64,
    pub similarity_percent: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NeighborReport {
    pub generated_at: String,
    pub target: PersonaId,
    pub target_name: Option<String>,
    pub found: bool,
    pub neighbors: Vec<NeighborRow>,
}

pub fn build_neighbor_report(
    engine: &PersonaEngine,
    table: &PersonaTable,
    target: PersonaId,
    k: Option<usize>,
) -> NeighborReport {
    let lookup = engine.neighbors_by_id(target, &table.personas, k);
    let found = matches!(lookup, NeighborLookup::Found { .. });

    let neighbors = lookup
        .into_neighbors()
        .into_iter()
        .map(|n| NeighborRow {
            id: n.id,
            name: table.name(n.id).map(str::to_string),
            distance: n.distance,
            similarity_percent: n.similarity_percent(),
        })
        .collect();

    NeighborReport {
        generated_at: chrono::Utc::now().to_rfc3339(),
        target,
        target_name: table.name(target).map(str::to_string),
        found,
        neighbors,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierReport {
    pub score: f64,
    pub aura: AuraTier,
    pub aura_level: u8,
    pub aura_range: (f64, f64),
    pub battle_tier: BattleTier,
}

pub fn build_tier_report(engine: &PersonaEngine, score: f64) -> TierReport {
    let aura = engine.classify_aura(score);
    let battle_tier = engine.battle_tier(score);
    TierReport {
        score,
        aura,
        aura_level: aura.level(),
        aura_range: engine.aura_bands().range_of(aura).unwrap_or((0.0, 100.0)),
        battle_tier,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnchorReport {
    pub axis: AbilityAxis,
    pub score: f64,
    /// `None` when the axis has no anchor table
    pub anchor: Option<ReferenceAnchor>,
}

pub fn build_anchor_report(engine: &PersonaEngine, axis: AbilityAxis, score: f64) -> AnchorReport {
    AnchorReport {
        axis,
        score,
        anchor: engine.resolve_anchor(axis, score).cloned(),
    }
}
