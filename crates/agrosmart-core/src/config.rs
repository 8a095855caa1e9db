//! Application configuration management.
//!
//! This module handles loading and saving the client configuration: API base
//! address, where the session is stored, and how authentication failures
//! are handled.
//!
//! Configuration is stored at `~/.config/agrosmart/config.json`. The
//! `AGROSMART_API_URL` environment variable overrides the base address.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::client::REQUEST_TIMEOUT_SECS;
use crate::api::RefreshPolicy;
use crate::auth::{FileStore, KeyringStore, MemoryStore, SessionStore};

/// Application name used for config/data directory paths
const APP_NAME: &str = "agrosmart";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Session file name in the data directory
const SESSION_FILE: &str = "session.json";

/// Environment variable overriding `api_base_url`
pub const API_URL_ENV: &str = "AGROSMART_API_URL";

const DEFAULT_API_BASE_URL: &str = "https://sound-musical-seagull.ngrok-free.app";

/// Where session credentials are kept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StorageBackend {
    /// JSON file in the user data directory
    #[default]
    File,
    /// OS keychain
    Keyring,
    /// Nothing persisted; the session ends with the process
    Memory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_base_url: String,
    pub storage: StorageBackend,
    pub refresh_policy: RefreshPolicy,
    pub request_timeout_secs: u64,
    pub default_farm_id: Option<i64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            storage: StorageBackend::default(),
            refresh_policy: RefreshPolicy::default(),
            request_timeout_secs: REQUEST_TIMEOUT_SECS,
            default_farm_id: None,
        }
    }
}

impl Config {
    /// Load from the default location, then apply environment overrides.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::config_path()?)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from `path`, falling back to defaults when the file is missing.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                debug!(url = %url, "API base URL overridden from environment");
                self.api_base_url = url.trim().to_string();
            }
        }
    }

    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    pub fn session_path() -> Result<PathBuf> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find data directory"))?;
        Ok(data_dir.join(APP_NAME).join(SESSION_FILE))
    }

    /// Open the session store selected by `storage`.
    pub fn open_session_store(&self) -> Result<SessionStore> {
        let store = match self.storage {
            StorageBackend::File => SessionStore::new(FileStore::open(Self::session_path()?)?),
            StorageBackend::Keyring => SessionStore::new(KeyringStore::new()),
            StorageBackend::Memory => SessionStore::new(MemoryStore::new()),
        };
        Ok(store)
    }
}
