//! Configuration management
//!
//! Reads `settings.json` from the tally directory:
//! ```json
//! {
//!   "app": { "adminName": "Ethan Ryoo", "dataFile": "tally.json" }
//! }
//! ```
//! Fields the core does not manage are preserved on save.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::result::{Error, Result};

const DEFAULT_ADMIN_NAME: &str = "Ethan Ryoo";
const DEFAULT_DATA_FILE: &str = "tally.json";

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    app: AppSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppSettings {
    #[serde(default = "default_admin_name")]
    admin_name: String,
    #[serde(default = "default_data_file")]
    data_file: String,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            admin_name: default_admin_name(),
            data_file: default_data_file(),
            other: HashMap::new(),
        }
    }
}

fn default_admin_name() -> String {
    DEFAULT_ADMIN_NAME.to_string()
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

/// Tally configuration (simplified view of settings)
#[derive(Debug, Clone)]
pub struct Config {
    /// Canonical name of the designated administrator
    pub admin_name: String,
    /// Data file name inside the tally directory
    pub data_file: String,
    // Keep the raw settings for preservation when saving
    _raw_settings: SettingsFile,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            admin_name: default_admin_name(),
            data_file: default_data_file(),
            _raw_settings: SettingsFile::default(),
        }
    }
}

impl Config {
    /// Load config from the tally directory.
    ///
    /// The administrator name can be overridden with the TALLY_ADMIN
    /// environment variable (for testing and deployment scripts).
    pub fn load(tally_dir: &Path) -> Result<Self> {
        let settings_path = tally_dir.join("settings.json");

        let raw: SettingsFile = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)
                .map_err(|e| Error::storage(format!("failed to read settings: {e}")))?;
            serde_json::from_str(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        let admin_name = std::env::var("TALLY_ADMIN").unwrap_or_else(|_| raw.app.admin_name.clone());

        Ok(Self {
            admin_name,
            data_file: raw.app.data_file.clone(),
            _raw_settings: raw,
        })
    }

    /// Save config to the tally directory, preserving settings the core
    /// doesn't manage
    pub fn save(&self, tally_dir: &Path) -> Result<()> {
        let settings_path = tally_dir.join("settings.json");

        let mut settings = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)
                .map_err(|e| Error::storage(format!("failed to read settings: {e}")))?;
            serde_json::from_str::<SettingsFile>(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        settings.app.admin_name = self.admin_name.clone();
        settings.app.data_file = self.data_file.clone();

        let content = serde_json::to_string_pretty(&settings)
            .map_err(|e| Error::storage(format!("failed to serialize settings: {e}")))?;
        std::fs::write(&settings_path, content)
            .map_err(|e| Error::storage(format!("failed to write settings: {e}")))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_without_settings_file() {
        let dir = tempdir().unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.admin_name, "Ethan Ryoo");
        assert_eq!(config.data_file, "tally.json");
    }

    #[test]
    fn test_load_reads_settings() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("settings.json"),
            r#"{"app":{"adminName":"Jane Doe","dataFile":"ledger.json"}}"#,
        )
        .unwrap();

        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.admin_name, "Jane Doe");
        assert_eq!(config.data_file, "ledger.json");
    }

    #[test]
    fn test_save_preserves_unmanaged_fields() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("settings.json"),
            r#"{"app":{"adminName":"Jane Doe","theme":"sepia"}}"#,
        )
        .unwrap();

        let config = Config::load(dir.path()).unwrap();
        config.save(dir.path()).unwrap();

        let content = std::fs::read_to_string(dir.path().join("settings.json")).unwrap();
        assert!(content.contains("sepia"));
        assert!(content.contains("Jane Doe"));
    }
}
