//! Persona CLI Library
//!
//! CSV exports → normalized engine inputs → JSON reports.
//! The engine itself lives in `persona_core`; this crate is the data-access
//! side that feeds it.

pub mod loaders;
pub mod reports;

use anyhow::{Context, Result};
use persona_core::{EngineConfig, PersonaEngine};
use std::path::Path;

pub use loaders::{load_influence_csv, load_personas_csv, InfluenceTable, ParseStats, PersonaTable};
pub use reports::{
    build_anchor_report, build_neighbor_report, build_ranking_report, build_tier_report,
    AnchorReport, NeighborReport, RankingBasis, RankingReport, TierReport,
};

/// Build an engine from an explicit config file, or from
/// `PERSONA_ENGINE_CONFIG` / defaults when none is given
pub fn engine_from_config(config_path: Option<&Path>) -> Result<PersonaEngine> {
    let config = match config_path {
        Some(path) => EngineConfig::from_yaml_file(path)
            .with_context(|| format!("Failed to load engine config: {}", path.display()))?,
        None => EngineConfig::from_env_or_default(),
    };
    PersonaEngine::new(config).context("Invalid engine config")
}
