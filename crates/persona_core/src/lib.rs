//! # persona_core - Persona & Influence Ranking Engine
//!
//! Pure, stateless computations over notable individuals ("personas"):
//!
//! - 16-axis trait vectors and Euclidean nearest-neighbor similarity
//! - Aura tiers (9 levels) and card-battle tiers (5 levels) from absolute score bands
//! - Competition ranking with percentiles over a supplied population
//! - Floor lookup of raw ability scores against labeled historical anchors
//!
//! Nothing here performs I/O except [`EngineConfig::from_yaml_file`]. Every
//! function takes fully materialized inputs and is safe to call from any thread.

// Doc formatting lints - purely cosmetic
#![allow(clippy::doc_lazy_continuation)]
// Trait constructors mirror the 16 persisted columns
#![allow(clippy::too_many_arguments)]

pub mod anchor;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod ranking;
pub mod similarity;
pub mod tier;

pub use anchor::{resolve_anchor, AbilityAxis, AnchorBook, ReferenceAnchor};
pub use config::{EngineConfig, RankingConfig, SimilarityConfig, TierConfig};
pub use engine::PersonaEngine;
pub use error::{EngineError, Result};
pub use models::{
    CapabilityTraits, InfluenceDomain, InfluenceScore, PersonaId, PersonaVector, RawInfluenceRow,
    RawPersonaRow, TendencyTraits, TraitAxis, TraitGroup, VirtueTraits, TRAIT_COUNT,
};
pub use ranking::{
    count_scored, find_rank, percentile, rank_by_domain, rank_influence, rank_population,
    RankedEntry, ScoredEntry,
};
pub use similarity::{
    compare, distance, nearest_neighbors, nearest_neighbors_by_id, similarity_percent,
    NeighborLookup, SimilarPersona, TraitComparison,
};
pub use tier::{classify, to_battle_tier, AuraTier, BattleTier, ThresholdBands};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
