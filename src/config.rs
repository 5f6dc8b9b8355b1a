// Application configuration.
// JSON file under the platform config directory. Every field has a
// default; a missing file is the normal first-run case.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::state::{Orientation, UnregisterPolicy};

/// Runtime configuration for the tab demo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Whether tab navigation wraps past either end.
    pub wrap: bool,
    /// Whether a tab switch must be confirmed before it commits.
    pub manual: bool,
    /// Axis the arrow keys navigate along.
    pub orientation: Orientation,
    /// Tab selected (and focused) at startup.
    pub initial_tab: Option<String>,
    /// Snap focus back to the selection when the dialog is cancelled.
    pub revert_focus_on_cancel: bool,
    /// What happens to focus/selection pointers when their tab closes.
    pub unregister_policy: UnregisterPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wrap: true,
            manual: true,
            orientation: Orientation::Horizontal,
            initial_tab: Some("tab1".to_string()),
            revert_focus_on_cancel: false,
            unregister_policy: UnregisterPolicy::Keep,
        }
    }
}

impl Config {
    /// Load from the platform config path. No platform directory means
    /// nothing to read, so defaults apply.
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from a specific file; defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents)?;
        Ok(config)
    }
}

/// Base config directory (~/.config/tabgate on Linux).
pub fn config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "tabgate").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Path to the config file.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.json"))
}

/// Path to the log file. Lives under the data directory since stdout
/// belongs to the terminal UI.
pub fn log_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "tabgate").map(|dirs| dirs.data_dir().join("tabgate.log"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.wrap);
        assert!(config.manual);
        assert_eq!(config.orientation, Orientation::Horizontal);
        assert_eq!(config.initial_tab.as_deref(), Some("tab1"));
        assert!(!config.revert_focus_on_cancel);
        assert_eq!(config.unregister_policy, UnregisterPolicy::Keep);
    }

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.json");

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(
            &path,
            r#"{
                "wrap": false,
                "manual": false,
                "orientation": "vertical",
                "initial_tab": "tab2",
                "revert_focus_on_cancel": true,
                "unregister_policy": "reassign"
            }"#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(!config.wrap);
        assert!(!config.manual);
        assert_eq!(config.orientation, Orientation::Vertical);
        assert_eq!(config.initial_tab.as_deref(), Some("tab2"));
        assert!(config.revert_focus_on_cancel);
        assert_eq!(config.unregister_policy, UnregisterPolicy::Reassign);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, r#"{"wrap": false}"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(!config.wrap);
        assert!(config.manual);
        assert_eq!(config.unregister_policy, UnregisterPolicy::Keep);
    }

    #[test]
    fn test_malformed_file_errors() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_config_paths() {
        let config_p = config_path().unwrap();
        assert!(config_p.ends_with("tabgate/config.json"));

        let log_p = log_path().unwrap();
        assert!(log_p.ends_with("tabgate/tabgate.log"));
    }
}
