use crate::search::heuristics::HeuristicName;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Tunable search options, usually read from a TOML file such as
///
/// ```toml
/// heuristic = "euclidean"
/// ids-initial-depth = 1
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct SearchConfig {
    /// Heuristic used by GBFS, A*, IDA* and the multi-goal planner.
    #[serde(default)]
    pub heuristic: HeuristicName,
    /// Depth bound of the first iterative deepening round.
    #[serde(default = "default_ids_initial_depth")]
    pub ids_initial_depth: usize,
}

fn default_ids_initial_depth() -> usize {
    0
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            heuristic: HeuristicName::default(),
            ids_initial_depth: default_ids_initial_depth(),
        }
    }
}

impl SearchConfig {
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }
}
