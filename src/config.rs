//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::gateway::DEFAULT_WEB_APP_URL;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Web-app URL the reports are posted to
    pub web_app_url: Option<String>,
    /// Branch preselected when the form opens
    pub default_branch: Option<String>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "expense", "expense-tui")
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

    /// Resolve the submission URL: environment variable first, then the
    /// config file, then the built-in deployment.
    pub fn resolve_web_app_url(&self) -> String {
        std::env::var("EXPENSE_SHEETS_URL")
            .ok()
            .or_else(|| self.web_app_url.clone())
            .unwrap_or_else(|| DEFAULT_WEB_APP_URL.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.web_app_url.is_none());
        assert!(config.default_branch.is_none());
    }

    #[test]
    fn test_serialization() {
        let config = TuiConfig {
            web_app_url: Some("https://example.com/exec".to_string()),
            default_branch: Some("Mumbai".to_string()),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.web_app_url.as_deref(), Some("https://example.com/exec"));
        assert_eq!(parsed.default_branch.as_deref(), Some("Mumbai"));
    }

    #[test]
    fn test_config_file_url_wins_over_default() {
        let config = TuiConfig {
            web_app_url: Some("https://example.com/exec".to_string()),
            default_branch: None,
        };
        // Assumes EXPENSE_SHEETS_URL is not set in the test environment
        if std::env::var("EXPENSE_SHEETS_URL").is_err() {
            assert_eq!(config.resolve_web_app_url(), "https://example.com/exec");
        }
    }
}
