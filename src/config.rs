//! Configuration system using TOML files.
//!
//! Config is stored in the OS-standard config directory:
//! - Windows: %APPDATA%\tailwatch\config.toml
//! - macOS: ~/Library/Application Support/tailwatch/config.toml
//! - Linux: ~/.config/tailwatch/config.toml
//!
//! The config file is human-readable and editable. Settings are loaded once
//! at startup; every field has a sensible default so a missing or partial
//! file still yields a runnable service.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Receiver feed settings
    pub feed: FeedConfig,

    /// Presence tracking settings
    pub tracker: TrackerSettings,

    /// Registration lookup settings
    pub lookup: LookupConfig,

    /// Storage settings
    pub storage: StorageConfig,
}

/// Where snapshots come from and how often to poll.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Feed mode: "http" or "file"
    pub mode: String,

    /// Receiver snapshot URL (http mode)
    pub url: String,

    /// Snapshot file path (file mode), e.g. /run/dump1090-fa/aircraft.json
    pub path: Option<PathBuf>,

    /// Seconds between polls
    pub interval_seconds: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            mode: "http".to_string(),
            url: "http://localhost:8080/data/aircraft.json".to_string(),
            path: None,
            interval_seconds: 10,
        }
    }
}

/// Presence state machine windows.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerSettings {
    /// Seconds of absence before a session is evicted
    pub eviction_window_secs: i64,

    /// Seconds before startup within which prior visits resume their session
    pub recovery_window_secs: i64,
}

impl Default for TrackerSettings {
    fn default() -> Self {
        Self {
            eviction_window_secs: 600,
            recovery_window_secs: 1800,
        }
    }
}

/// Registration lookup and refresher settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    /// Seconds between refresher passes over unresolved sessions
    pub refresh_interval_secs: u64,

    /// Maximum lookups issued per refresher pass
    pub batch_size: usize,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            refresh_interval_secs: 60,
            batch_size: 20,
        }
    }
}

/// Storage settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory for the database file (default: current directory)
    pub data_dir: Option<PathBuf>,
}

impl Config {
    /// Path to the database file, honoring `storage.data_dir`.
    pub fn db_path(&self) -> PathBuf {
        match &self.storage.data_dir {
            Some(dir) => dir.join(crate::db::DEFAULT_DB_NAME),
            None => PathBuf::from(crate::db::DEFAULT_DB_NAME),
        }
    }
}

// ============================================================================
// Config File Operations
// ============================================================================

/// Get the config directory path
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("tailwatch"))
}

/// Get the full path to the config file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load configuration from disk
///
/// Returns default config if file doesn't exist or can't be parsed.
/// Logs warnings but doesn't fail - we always return a usable config.
pub fn load() -> Config {
    let Some(path) = config_path() else {
        tracing::warn!("Could not determine config directory, using defaults");
        return Config::default();
    };

    if !path.exists() {
        tracing::info!("No config file found at {:?}, using defaults", path);
        return Config::default();
    }

    match std::fs::read_to_string(&path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => {
                tracing::info!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                tracing::error!("Failed to parse config file {:?}: {}", path, e);
                tracing::warn!("Using default configuration");
                Config::default()
            }
        },
        Err(e) => {
            tracing::error!("Failed to read config file {:?}: {}", path, e);
            Config::default()
        }
    }
}

/// Save configuration to disk
///
/// Creates the config directory if it doesn't exist.
pub fn save(config: &Config) -> Result<(), ConfigError> {
    let dir = config_dir().ok_or(ConfigError::NoConfigDir)?;
    let path = dir.join("config.toml");

    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::CreateDir(dir.clone(), e))?;

    let contents = toml::to_string_pretty(config).map_err(ConfigError::Serialize)?;

    // Write atomically (write to temp, then rename)
    let temp_path = path.with_extension("toml.tmp");
    std::fs::write(&temp_path, &contents).map_err(|e| ConfigError::Write(temp_path.clone(), e))?;
    std::fs::rename(&temp_path, &path)
        .map_err(|e| ConfigError::Rename(temp_path, path.clone(), e))?;

    tracing::info!("Saved config to {:?}", path);
    Ok(())
}

// ============================================================================
// Error Types
// ============================================================================

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to create config directory {0}: {1}")]
    CreateDir(PathBuf, std::io::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(toml::ser::Error),

    #[error("Failed to write config to {0}: {1}")]
    Write(PathBuf, std::io::Error),

    #[error("Failed to rename temp file {0} to {1}: {2}")]
    Rename(PathBuf, PathBuf, std::io::Error),
}

// ============================================================================
// Tests
// ============================================================================
