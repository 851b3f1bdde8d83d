//! # Configuration State
//!
//! Stores application configuration resolved at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command line flags (`--db`, `--admin`, `--fps`, `--storage-key`)
//! 2. Environment variables (`STOCKSCAN_*`)
//! 3. Config file (`--config stockscan.toml`)
//! 4. Defaults (this file)
//!
//! ## Config File
//! ```toml
//! db_path = "/var/lib/stockscan/stockscan.db"
//! admin_names = ["Cody Eckhardt", "Ada Lovelace"]
//! scanner_fps = 10
//! storage_key = "inventory"
//! ```
//!
//! Configuration is read-only after startup.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use stockscan_core::{AdminAllowList, DEFAULT_ADMIN_NAMES, INVENTORY_STORAGE_KEY};

use crate::cli::Cli;
use crate::error::{AppError, AppResult};
use crate::scanner::{ScannerConfig, DEFAULT_SCANNER_FPS};

/// Database file path override.
pub const ENV_DB_PATH: &str = "STOCKSCAN_DB_PATH";
/// Comma-separated admin names.
pub const ENV_ADMIN_NAMES: &str = "STOCKSCAN_ADMIN_NAMES";
/// Scanner decode rate.
pub const ENV_SCANNER_FPS: &str = "STOCKSCAN_SCANNER_FPS";
/// Snapshot storage key.
pub const ENV_STORAGE_KEY: &str = "STOCKSCAN_STORAGE_KEY";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigState {
    /// Database file. `None` means the platform data directory.
    pub db_path: Option<PathBuf>,

    /// Names granted admin access (raw, normalized by the allow-list)
    pub admin_names: Vec<String>,

    /// Scanner decode rate
    pub scanner_fps: u32,

    /// Key the inventory snapshot is stored under
    pub storage_key: String,
}

/// Shape of the optional TOML config file. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub db_path: Option<PathBuf>,
    pub admin_names: Option<Vec<String>>,
    pub scanner_fps: Option<u32>,
    pub storage_key: Option<String>,
}

impl FileConfig {
    /// Reads and parses a config file.
    pub fn load(path: &Path) -> AppResult<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| AppError::config_file(path, e))?;

        toml::from_str::<FileConfig>(&content).map_err(|e| AppError::config_file(path, e))
    }
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Database: platform data directory
    /// - Admins: the built-in allow-list
    /// - Scanner: 10 fps
    /// - Storage key: "inventory"
    fn default() -> Self {
        ConfigState {
            db_path: None,
            admin_names: DEFAULT_ADMIN_NAMES.iter().map(|s| s.to_string()).collect(),
            scanner_fps: DEFAULT_SCANNER_FPS,
            storage_key: INVENTORY_STORAGE_KEY.to_string(),
        }
    }
}

impl ConfigState {
    /// Resolves configuration from every source.
    ///
    /// ## Returns
    /// * `Ok(ConfigState)` - Merged and validated
    /// * `Err(ConfigError)` - Unreadable config file, or an invalid value
    pub fn resolve(cli: &Cli) -> AppResult<Self> {
        ConfigState::resolve_with(cli, |key| std::env::var(key).ok())
    }

    /// [`resolve`](Self::resolve) with an explicit environment lookup.
    pub fn resolve_with<F>(cli: &Cli, env: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(path) = &cli.config {
            config.apply_file(FileConfig::load(path)?);
        }
        config.apply_env(env)?;
        config.apply_cli(cli);

        config.validate()?;
        Ok(config)
    }

    /// Overlays values from a config file.
    pub fn apply_file(&mut self, file: FileConfig) {
        if let Some(path) = file.db_path {
            self.db_path = Some(path);
        }
        if let Some(names) = file.admin_names {
            self.admin_names = names;
        }
        if let Some(fps) = file.scanner_fps {
            self.scanner_fps = fps;
        }
        if let Some(key) = file.storage_key {
            self.storage_key = key;
        }
    }

    /// Overlays values from environment variables.
    ///
    /// ## Environment Variables
    /// - `STOCKSCAN_DB_PATH`: database file
    /// - `STOCKSCAN_ADMIN_NAMES`: comma-separated admin names
    /// - `STOCKSCAN_SCANNER_FPS`: decode rate (integer)
    /// - `STOCKSCAN_STORAGE_KEY`: snapshot key
    pub fn apply_env<F>(&mut self, env: F) -> AppResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = env(ENV_DB_PATH) {
            self.db_path = Some(PathBuf::from(path));
        }

        if let Some(names) = env(ENV_ADMIN_NAMES) {
            self.admin_names = names
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect();
        }

        if let Some(fps) = env(ENV_SCANNER_FPS) {
            self.scanner_fps = fps.trim().parse().map_err(|_| {
                AppError::config(format!("{} must be an integer, got '{}'", ENV_SCANNER_FPS, fps))
            })?;
        }

        if let Some(key) = env(ENV_STORAGE_KEY) {
            self.storage_key = key;
        }

        Ok(())
    }

    /// Overlays values given on the command line.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(path) = &cli.db {
            self.db_path = Some(path.clone());
        }
        if !cli.admins.is_empty() {
            self.admin_names = cli.admins.clone();
        }
        if let Some(fps) = cli.fps {
            self.scanner_fps = fps;
        }
        if let Some(key) = &cli.storage_key {
            self.storage_key = key.clone();
        }
    }

    /// Checks the merged values.
    pub fn validate(&self) -> AppResult<()> {
        ScannerConfig::new(self.scanner_fps)?;

        if self.storage_key.trim().is_empty() {
            return Err(AppError::config("storage key must not be empty"));
        }

        Ok(())
    }

    /// Builds the admin allow-list.
    pub fn allow_list(&self) -> AdminAllowList {
        AdminAllowList::new(&self.admin_names)
    }

    /// Scanner settings.
    pub fn scanner(&self) -> AppResult<ScannerConfig> {
        ScannerConfig::new(self.scanner_fps)
    }

    /// Database file, falling back to the platform data directory.
    pub fn database_path(&self) -> AppResult<PathBuf> {
        match &self.db_path {
            Some(path) => Ok(path.clone()),
            None => crate::default_database_path(),
        }
    }
}
