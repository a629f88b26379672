use thiserror::Error;

/// Errors raised by the fallible edges of the engine.
///
/// The ranking, similarity, tier and anchor operations themselves never fail;
/// only configuration loading and band-table construction do.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    #[error("Invalid band table '{table}': {reason}")]
    InvalidBands { table: String, reason: String },

    #[error("Unknown ability axis: {0}")]
    UnknownAxis(String),

    #[error("Unknown influence domain: {0}")]
    UnknownDomain(String),
}

impl EngineError {
    pub(crate) fn invalid_bands(table: &str, reason: impl Into<String>) -> Self {
        EngineError::InvalidBands {
            table: table.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
