//! Rank & percentile calculator
//!
//! Competition ranking: rank = 1 + number of strictly higher scores, so tied
//! scores share a rank and the next distinct score skips ahead
//! (`[95, 80, 80, 40]` → `[1, 2, 2, 4]`).
//!
//! Percentile for rank `r` out of `n`: `(1 - (r - 1) / n) * 100`, clamped to
//! 0..=100 and rounded half away from zero to a fixed number of decimals
//! (1 by default). `n` is the population length unless the caller passes a
//! `total_override`; the engine never decides on its own which members count.

use crate::models::{InfluenceDomain, InfluenceScore, PersonaId};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::debug;

/// Decimals kept on percentiles unless configured otherwise
pub const DEFAULT_PERCENTILE_DECIMALS: u32 = 1;

/// Input to a ranking request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredEntry {
    pub id: PersonaId,
    pub score: f64,
}

impl ScoredEntry {
    pub fn new(id: PersonaId, score: f64) -> Self {
        Self { id, score }
    }
}

/// One ranked member of a population snapshot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub id: PersonaId,
    pub score: f64,
    /// 1-based competition rank
    pub rank: usize,
    pub percentile: f64,
}

/// Percentile of `rank` among `total`. `total == 0` yields 0.
pub fn percentile(rank: usize, total: usize, decimals: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let ahead = rank.saturating_sub(1) as f64;
    let raw = (1.0 - ahead / total as f64) * 100.0;
    round_to(raw.clamp(0.0, 100.0), decimals)
}

fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals.min(12) as i32);
    (value * factor).round() / factor
}

/// Descending by score; NaN sorts after every number
fn descending(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}

fn same_score(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

/// Rank a population snapshot with the default percentile precision
pub fn rank_population(
    scored: &[ScoredEntry],
    total_override: Option<usize>,
) -> Vec<RankedEntry> {
    rank_population_with_precision(scored, total_override, DEFAULT_PERCENTILE_DECIMALS)
}

/// Rank a population snapshot.
///
/// Output is sorted descending by score; equal scores keep input order.
pub fn rank_population_with_precision(
    scored: &[ScoredEntry],
    total_override: Option<usize>,
    decimals: u32,
) -> Vec<RankedEntry> {
    let mut sorted = scored.to_vec();
    sorted.sort_by(|a, b| descending(a.score, b.score));

    let total = total_override.unwrap_or(sorted.len());
    debug!(
        population = sorted.len(),
        total,
        overridden = total_override.is_some(),
        "ranking population"
    );

    let mut ranked = Vec::with_capacity(sorted.len());
    let mut rank = 1;
    for (i, entry) in sorted.iter().enumerate() {
        if i > 0 && !same_score(sorted[i - 1].score, entry.score) {
            rank = i + 1;
        }
        ranked.push(RankedEntry {
            id: entry.id,
            score: entry.score,
            rank,
            percentile: percentile(rank, total, decimals),
        });
    }
    ranked
}

/// Members with a positive score; pass as `total_override` to exclude
/// unscored individuals from the percentile denominator
pub fn count_scored(scored: &[ScoredEntry]) -> usize {
    scored.iter().filter(|e| e.score > 0.0).count()
}

/// Look up one id in a ranked list
pub fn find_rank(ranked: &[RankedEntry], id: PersonaId) -> Option<&RankedEntry> {
    ranked.iter().find(|e| e.id == id)
}

/// Rank individuals by their derived influence total
pub fn rank_influence(
    scores: &[InfluenceScore],
    total_override: Option<usize>,
) -> Vec<RankedEntry> {
    let scored: Vec<ScoredEntry> = scores
        .iter()
        .map(|s| ScoredEntry::new(s.id, s.total_score()))
        .collect();
    rank_population(&scored, total_override)
}

/// Rank individuals by a single influence domain
pub fn rank_by_domain(
    scores: &[InfluenceScore],
    domain: InfluenceDomain,
    total_override: Option<usize>,
) -> Vec<RankedEntry> {
    let scored: Vec<ScoredEntry> = scores
        .iter()
        .map(|s| ScoredEntry::new(s.id, s.domain(domain)))
        .collect();
    rank_population(&scored, total_override)
}
