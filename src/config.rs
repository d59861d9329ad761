//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::state::ResultsMode;

/// User configuration for the TUI.
///
/// Stores UI preferences only; form contents are never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Base URL of the HotelHelper service
    pub server_url: Option<String>,
    /// Preferred results rendering: "map" or "list"
    pub results_view: Option<String>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "hotelhelper", "hotelhelper-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    /// Preferred results mode; defaults to the map variant
    pub fn results_mode(&self) -> ResultsMode {
        match self.results_view.as_deref() {
            Some("list") => ResultsMode::List,
            _ => ResultsMode::Map,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.server_url.is_none());
        assert!(config.results_view.is_none());
    }

    #[test]
    fn test_serialization() {
        let config = TuiConfig {
            server_url: Some("http://localhost:5000".to_string()),
            results_view: Some("list".to_string()),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.server_url, Some("http://localhost:5000".to_string()));
        assert_eq!(parsed.results_view, Some("list".to_string()));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let json = "{}";
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert!(parsed.server_url.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"server_url": "http://x", "unknown_field": "value"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.server_url, Some("http://x".to_string()));
    }

    #[test]
    fn test_results_mode_defaults_to_map() {
        assert_eq!(TuiConfig::default().results_mode(), ResultsMode::Map);
    }

    #[test]
    fn test_results_mode_list() {
        let config = TuiConfig {
            results_view: Some("list".to_string()),
            ..Default::default()
        };
        assert_eq!(config.results_mode(), ResultsMode::List);
    }

    #[test]
    fn test_results_mode_unknown_value_falls_back_to_map() {
        let config = TuiConfig {
            results_view: Some("globe".to_string()),
            ..Default::default()
        };
        assert_eq!(config.results_mode(), ResultsMode::Map);
    }

    #[test]
    fn test_load_returns_default_when_no_file() {
        let result = TuiConfig::load();
        assert!(result.is_ok());
    }
}
