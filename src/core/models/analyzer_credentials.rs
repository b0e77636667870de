use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::global_constants;

/// The three values the remote analysis call is authenticated with. Read once
/// at startup from the user config directory; a missing or unreadable file is
/// not a startup error, it only surfaces later as a failed analysis call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalyzerCredentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub region: String,
}

impl Default for AnalyzerCredentials {
    fn default() -> Self {
        Self {
            access_key_id: String::new(),
            secret_access_key: String::new(),
            region: global_constants::DEFAULT_ANALYZER_REGION.to_string(),
        }
    }
}

impl AnalyzerCredentials {
    pub fn load() -> Self {
        let credentials_path = match Self::get_credentials_file_path() {
            Ok(path) => path,
            Err(e) => {
                log::warn!(
                    "[CREDENTIALS] Could not resolve credentials path: {}, using defaults",
                    e
                );
                return Self::default();
            }
        };

        if !credentials_path.exists() {
            log::warn!(
                "[CREDENTIALS] No credentials file at {:?}, writing empty template",
                credentials_path
            );
            let defaults = Self::default();
            if let Err(e) = defaults.save_to_path(&credentials_path) {
                log::warn!("[CREDENTIALS] Failed to write template: {}", e);
            }
            return defaults;
        }

        match Self::load_from_path(&credentials_path) {
            Ok(credentials) => {
                log::info!(
                    "[CREDENTIALS] Loaded credentials from {:?} (region: {})",
                    credentials_path,
                    credentials.region
                );
                credentials
            }
            Err(e) => {
                log::warn!(
                    "[CREDENTIALS] Failed to load credentials: {}, using defaults",
                    e
                );
                Self::default()
            }
        }
    }

    pub fn load_from_path(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let credentials: AnalyzerCredentials = serde_json::from_str(&contents)?;
        Ok(credentials)
    }

    pub fn save_to_path(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn get_credentials_file_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join(global_constants::CONFIG_DIR_NAME);

        Ok(config_dir.join(global_constants::CREDENTIALS_FILE_NAME))
    }
}
