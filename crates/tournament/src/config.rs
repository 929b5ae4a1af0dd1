//! Tournament configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Default database file, relative to the working directory
pub const DEFAULT_DATABASE: &str = "tournament.db";

/// Tournament configuration, usually read from a TOML file:
///
/// ```toml
/// database = "data/tournament.db"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentConfig {
    /// Path of the SQLite database holding players and matches
    pub database: PathBuf,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            database: PathBuf::from(DEFAULT_DATABASE),
        }
    }
}

impl TournamentConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_database() {
        let config = TournamentConfig::default();
        assert_eq!(config.database, PathBuf::from("tournament.db"));
    }

    #[test]
    fn test_parse_database_path() {
        let config = TournamentConfig::from_toml("database = \"data/swiss.db\"").unwrap();
        assert_eq!(config.database, PathBuf::from("data/swiss.db"));
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let config = TournamentConfig::from_toml("").unwrap();
        assert_eq!(config, TournamentConfig::default());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TournamentConfig::from_toml("database = ").unwrap_err();
        assert!(matches!(err, crate::TournamentError::Config(_)));
    }
}
