//! Engine configuration
//!
//! Tunable defaults and tier cut points. The built-in values reproduce the
//! standard aura and battle tables; a YAML file can retune either scale
//! independently.
//!
//! ```rust
//! use persona_core::EngineConfig;
//!
//! let config = EngineConfig::default();
//! assert_eq!(config.similarity.default_k, 5);
//!
//! let yaml = "tiers:\n  battle_cut_points: [30, 50, 65, 80]\n";
//! let tuned = EngineConfig::from_yaml_str(yaml).unwrap();
//! assert_eq!(tuned.tiers.battle_cut_points, vec![30.0, 50.0, 65.0, 80.0]);
//! ```
//!
//! ## Environment Variables
//!
//! - `PERSONA_ENGINE_CONFIG`: path to a YAML config file

use crate::error::Result;
use crate::ranking::DEFAULT_PERCENTILE_DECIMALS;
use crate::tier::{AuraTier, BattleTier, DEFAULT_AURA_CUT_POINTS, DEFAULT_BATTLE_CUT_POINTS};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use tracing::{info, warn};

/// Env var holding the config file path
pub const CONFIG_PATH_ENV: &str = "PERSONA_ENGINE_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EngineConfig {
    pub similarity: SimilarityConfig,
    pub ranking: RankingConfig,
    pub tiers: TierConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimilarityConfig {
    /// Neighbors returned when the caller does not ask for a count
    pub default_k: usize,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self { default_k: 5 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// Decimals kept when rounding percentiles
    pub percentile_decimals: u32,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            percentile_decimals: DEFAULT_PERCENTILE_DECIMALS,
        }
    }
}

/// Interior cut points of both tier scales (lowest tier first)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierConfig {
    pub aura_cut_points: Vec<f64>,
    pub battle_cut_points: Vec<f64>,
}

impl Default for TierConfig {
    fn default() -> Self {
        Self {
            aura_cut_points: DEFAULT_AURA_CUT_POINTS.to_vec(),
            battle_cut_points: DEFAULT_BATTLE_CUT_POINTS.to_vec(),
        }
    }
}

impl EngineConfig {
    /// Parse and validate a YAML document. Missing sections keep defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: EngineConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&yaml)?;
        info!(path = %path.display(), "loaded engine config");
        Ok(config)
    }

    /// Load from `PERSONA_ENGINE_CONFIG` or use the defaults.
    ///
    /// A file that cannot be read or is invalid is logged and ignored.
    pub fn from_env_or_default() -> Self {
        match env::var(CONFIG_PATH_ENV) {
            Ok(path) if !path.trim().is_empty() => {
                match Self::from_yaml_file(Path::new(path.trim())) {
                    Ok(config) => config,
                    Err(err) => {
                        warn!(path = %path, error = %err, "ignoring engine config; using defaults");
                        Self::default()
                    }
                }
            }
            _ => Self::default(),
        }
    }

    /// Check that both cut-point lists form valid tables
    pub fn validate(&self) -> Result<()> {
        AuraTier::bands(&self.tiers.aura_cut_points)?;
        BattleTier::bands(&self.tiers.battle_cut_points)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_is_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.ranking.percentile_decimals, 1);
        assert_eq!(config.tiers.aura_cut_points.len(), 8);
        assert_eq!(config.tiers.battle_cut_points.len(), 4);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = EngineConfig::from_yaml_str("ranking:\n  percentile_decimals: 2\n").unwrap();
        assert_eq!(config.ranking.percentile_decimals, 2);
        assert_eq!(config.similarity, SimilarityConfig::default());
        assert_eq!(config.tiers, TierConfig::default());
    }

    #[test]
    fn test_invalid_cut_points_rejected() {
        let result = EngineConfig::from_yaml_str("tiers:\n  battle_cut_points: [50, 40, 70, 85]\n");
        assert!(matches!(result, Err(EngineError::InvalidBands { .. })));

        let result = EngineConfig::from_yaml_str("tiers:\n  aura_cut_points: [10, 20]\n");
        assert!(matches!(result, Err(EngineError::InvalidBands { .. })));
    }

    #[test]
    fn test_malformed_yaml_is_parse_error() {
        let result = EngineConfig::from_yaml_str("similarity: [not, a, map]");
        assert!(matches!(result, Err(EngineError::ConfigParse(_))));
    }

    #[test]
    fn test_load_from_file() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "similarity:\n  default_k: 12")?;

        let config = EngineConfig::from_yaml_file(file.path())?;
        assert_eq!(config.similarity.default_k, 12);
        Ok(())
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = EngineConfig::from_yaml_file(Path::new("/nonexistent/persona_engine.yaml"));
        assert!(matches!(result, Err(EngineError::Io(_))));
    }

    #[test]
    fn test_env_with_bad_path_falls_back_to_default() {
        env::set_var(CONFIG_PATH_ENV, "/nonexistent/persona_engine.yaml");
        let config = EngineConfig::from_env_or_default();
        env::remove_var(CONFIG_PATH_ENV);
        assert_eq!(config, EngineConfig::default());
    }
}
