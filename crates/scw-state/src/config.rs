//! # Wizard Configuration
//!
//! Loaded from YAML. Every key is optional; an empty file yields the
//! defaults.
//!
//! ```yaml
//! reopen_policy: reopen_on_edit   # or keep_complete (default)
//! store:
//!   path: ./wizard.json           # omit for an in-memory store
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::store::{FormStore, JsonFileStore, MemoryStore};

/// What happens to a completed block when one of its fields is edited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReopenPolicy {
    /// The block stays complete until the host reopens it explicitly.
    #[default]
    KeepComplete,
    /// Any edit to a completed block moves it back to in-progress.
    ReopenOnEdit,
}

/// Where the wizard record is persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// JSON file holding the record. `None` keeps it in memory.
    pub path: Option<PathBuf>,
}

impl StoreConfig {
    /// Open the configured store.
    pub fn open(&self) -> Box<dyn FormStore> {
        match &self.path {
            Some(path) => Box::new(JsonFileStore::new(path)),
            None => Box::new(MemoryStore::new()),
        }
    }
}

/// Top-level wizard configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WizardConfig {
    /// What an edit to a completed block does to its status.
    pub reopen_policy: ReopenPolicy,
    /// Where the record is persisted.
    pub store: StoreConfig,
}

impl WizardConfig {
    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Parse configuration from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, serde_yaml::Error> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config = WizardConfig::from_yaml_str("").unwrap();
        assert_eq!(config, WizardConfig::default());
        assert_eq!(config.reopen_policy, ReopenPolicy::KeepComplete);
        assert!(config.store.path.is_none());
    }

    #[test]
    fn test_parses_all_keys() {
        let yaml = "reopen_policy: reopen_on_edit\nstore:\n  path: /tmp/wizard.json\n";
        let config = WizardConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.reopen_policy, ReopenPolicy::ReopenOnEdit);
        assert_eq!(config.store.path, Some(PathBuf::from("/tmp/wizard.json")));
    }

    #[test]
    fn test_rejects_unknown_keys_and_policies() {
        assert!(WizardConfig::from_yaml_str("reopen: true\n").is_err());
        assert!(WizardConfig::from_yaml_str("reopen_policy: sometimes\n").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wizard.yaml");
        std::fs::write(&path, "reopen_policy: reopen_on_edit\n").unwrap();
        let config = WizardConfig::load(&path).unwrap();
        assert_eq!(config.reopen_policy, ReopenPolicy::ReopenOnEdit);
    }

    #[test]
    fn test_load_missing_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = WizardConfig::load(&dir.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("nope.yaml"));
    }

    #[test]
    fn test_open_store_without_path_is_in_memory() {
        let mut store = StoreConfig::default().open();
        assert!(store.load().unwrap().is_empty());
        assert!(store.save(&scw_core::FormRecord::new()).is_ok());
    }
}
