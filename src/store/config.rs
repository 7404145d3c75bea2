//! Store configuration

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants;

/// Tunables for a `NodeGraphStore`. Missing fields fall back to the defaults
/// in `constants`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Title given to nodes created with `add_node`
    pub new_node_title: String,
    /// Appended to a copied node's title
    pub copy_suffix: String,
    /// Copy offset per step, on both axes
    pub copy_offset_step: f32,
    pub initial_zoom: f32,
    /// Committed mutations kept in history; 0 disables history
    pub history_limit: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            new_node_title: constants::node::DEFAULT_NEW_NODE_TITLE.to_string(),
            copy_suffix: constants::node::DEFAULT_COPY_SUFFIX.to_string(),
            copy_offset_step: constants::node::DEFAULT_COPY_OFFSET_STEP,
            initial_zoom: constants::view::DEFAULT_ZOOM,
            history_limit: constants::store::DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl StoreConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(ConfigError::Parse)
    }

    /// Reads a JSON config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(serde_json::Error),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config {}: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid config: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = StoreConfig::from_json_str(r#"{ "copy_offset_step": 20.0 }"#).unwrap();

        assert_eq!(config.copy_offset_step, 20.0);
        assert_eq!(config.new_node_title, "New node");
        assert_eq!(config.copy_suffix, " - copy");
        assert_eq!(config.initial_zoom, 1.0);
    }

    #[test]
    fn test_invalid_config() {
        let err = StoreConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = StoreConfig::load(Path::new("/nonexistent/nodegrid.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("nodegrid.json"));
    }
}
