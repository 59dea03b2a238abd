//! Rules configuration.
//!
//! Loads tunable game parameters from JSON. Missing fields fall back to the
//! standard rules.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Fences each player starts with under the standard rules.
pub const DEFAULT_FENCES_PER_PLAYER: u8 = 10;

/// Errors that can occur while loading a rules configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse rules config JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Tunable rules parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    pub fences_per_player: u8,
}

impl Default for RulesConfig {
    fn default() -> Self {
        RulesConfig {
            fences_per_player: DEFAULT_FENCES_PER_PLAYER,
        }
    }
}

/// Loads a rules configuration from a JSON file at the given path.
pub fn load_config(path: &Path) -> Result<RulesConfig, ConfigError> {
    let data = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_config_from_str(&data)
}

/// Loads a rules configuration from a JSON string.
pub fn load_config_from_str(json: &str) -> Result<RulesConfig, ConfigError> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_standard_rules() {
        assert_eq!(RulesConfig::default().fences_per_player, 10);
    }

    #[test]
    fn empty_object_uses_defaults() {
        let config = load_config_from_str("{}").unwrap();
        assert_eq!(config, RulesConfig::default());
    }

    #[test]
    fn explicit_fence_count() {
        let config = load_config_from_str(r#"{"fences_per_player": 3}"#).unwrap();
        assert_eq!(config.fences_per_player, 3);
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = load_config_from_str(r#"{"fences_per_player": -1}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("failed to parse rules config JSON"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_config(Path::new("/nonexistent/quoridor-rules.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn load_from_file() {
        let path = std::env::temp_dir().join(format!("quoridor-rules-{}.json", std::process::id()));
        fs::write(&path, r#"{"fences_per_player": 5}"#).unwrap();
        let config = load_config(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(config.fences_per_player, 5);
    }
}
