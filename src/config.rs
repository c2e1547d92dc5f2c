//! Configuration handling for the TUI

use crate::api::{DEFAULT_API_PREFIX, DEFAULT_BASE_URL};
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Environment variable overriding the service address
pub const BASE_URL_ENV: &str = "CUSTOMER_API_URL";
/// Environment variable overriding the resource prefix
pub const API_PREFIX_ENV: &str = "CUSTOMER_API_PREFIX";
/// Log file name inside [`ClientConfig::log_dir`]
pub const LOG_FILE_NAME: &str = "customer-tui.log";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ClientConfig {
    /// Customers service address
    pub base_url: Option<String>,
    /// Path prefix of the REST resources, e.g. "/api"
    pub api_prefix: Option<String>,
}

impl ClientConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "customers", "customer-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Get the directory the log file is written to
    pub fn log_dir() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: ClientConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration, writing the defaults out on first run so the
    /// file is there to edit
    pub fn load_or_create() -> Result<Self> {
        if Self::config_path().is_some_and(|path| !path.exists()) {
            let config = Self {
                base_url: Some(DEFAULT_BASE_URL.to_string()),
                api_prefix: Some(DEFAULT_API_PREFIX.to_string()),
            };
            config.save()?;
            return Ok(config);
        }
        Self::load()
    }

    /// Save configuration to file
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

    /// Apply overrides from the environment
    pub fn with_env(self) -> Self {
        self.with_overrides(
            std::env::var(BASE_URL_ENV).ok(),
            std::env::var(API_PREFIX_ENV).ok(),
        )
    }

    fn with_overrides(mut self, base_url: Option<String>, api_prefix: Option<String>) -> Self {
        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            self.base_url = Some(url);
        }
        if let Some(prefix) = api_prefix {
            self.api_prefix = Some(prefix);
        }
        self
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn api_prefix(&self) -> &str {
        self.api_prefix.as_deref().unwrap_or(DEFAULT_API_PREFIX)
    }
}
