//! Plugin configuration (`tpatools.json5`).
//!
//! Read with `serde_json5` so hand-edited files may carry comments and
//! trailing commas; written back as plain pretty JSON, which is valid JSON5.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tpatools_utils::locks::SyncRwLock;

use crate::storage::{StateStore, StorageError};

/// Name of the config document inside the store.
pub const CONFIG_FILE: &str = "tpatools.json5";

/// Length of one server tick in milliseconds.
pub const TICK_MILLIS: u64 = 50;

/// Runtime-adjustable settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TpaConfig {
    /// Minimum delay between two requests from the same sender, in milliseconds.
    pub cooldown_ms: u64,
    /// How long a request stays pending, in ticks.
    pub timeout_ticks: u64,
    /// Active language, `en_us` or `zh_cn`.
    pub language: String,
    /// Homes a single player may own.
    pub max_homes: usize,
    /// Verbose logging.
    pub debug: bool,
}

impl Default for TpaConfig {
    fn default() -> Self {
        Self {
            cooldown_ms: 3000,
            timeout_ticks: 600,
            language: "zh_cn".to_string(),
            max_homes: 2,
            debug: false,
        }
    }
}

impl TpaConfig {
    /// The cooldown window in milliseconds.
    #[must_use]
    pub const fn cooldown_window(&self) -> u64 {
        self.cooldown_ms
    }

    /// The timeout window in milliseconds.
    #[must_use]
    pub const fn timeout_window_ms(&self) -> u64 {
        self.timeout_ticks.saturating_mul(TICK_MILLIS)
    }

    /// Applies the debug flag to the global log level.
    pub fn apply_log_level(&self) {
        log::set_max_level(if self.debug {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        });
    }

    /// Loads the config, writing defaults when the document does not exist.
    pub fn load(store: &dyn StateStore) -> Result<Self, ConfigError> {
        let Some(contents) = store.load(CONFIG_FILE)? else {
            log::info!("No {CONFIG_FILE} found, writing defaults");
            let config = Self::default();
            config.save(store)?;
            return Ok(config);
        };
        let config: Self = serde_json5::from_str(&contents)?;
        log::info!("Loaded {CONFIG_FILE}");
        Ok(config)
    }

    /// Writes the config document.
    pub fn save(&self, store: &dyn StateStore) -> Result<(), ConfigError> {
        let contents = serde_json::to_string_pretty(self)?;
        store.save(CONFIG_FILE, &contents)?;
        Ok(())
    }
}

/// The config shared between components; edits take effect on the next operation.
pub type SharedConfig = Arc<SyncRwLock<TpaConfig>>;

/// Wraps a config for sharing.
#[must_use]
pub fn shared(config: TpaConfig) -> SharedConfig {
    Arc::new(SyncRwLock::new(config))
}

/// An error while loading or saving the config.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The store failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
    /// The file is not valid JSON5 for [`TpaConfig`].
    #[error("Invalid {CONFIG_FILE}: {0}")]
    Parse(#[from] serde_json5::Error),
    /// The config could not be serialized.
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn defaults_match_documented_values() {
        let config = TpaConfig::default();
        assert_eq!(config.cooldown_window(), 3000);
        assert_eq!(config.timeout_window_ms(), 30_000);
        assert_eq!(config.language, "zh_cn");
        assert_eq!(config.max_homes, 2);
        assert!(!config.debug);
    }

    #[test]
    fn missing_file_writes_defaults() {
        let store = MemoryStore::new();
        let config = TpaConfig::load(&store).expect("load");
        assert_eq!(config, TpaConfig::default());
        assert!(store.load(CONFIG_FILE).expect("memory").is_some());
    }

    #[test]
    fn json5_with_comments_and_missing_fields() {
        let store = MemoryStore::new();
        store
            .save(
                CONFIG_FILE,
                "{\n  // five seconds\n  cooldown_ms: 5000,\n  language: 'en_us',\n}",
            )
            .expect("memory");
        let config = TpaConfig::load(&store).expect("load");
        assert_eq!(config.cooldown_ms, 5000);
        assert_eq!(config.language, "en_us");
        assert_eq!(config.timeout_ticks, 600);
    }

    #[test]
    fn broken_file_is_an_error() {
        let store = MemoryStore::new();
        store.save(CONFIG_FILE, "{ cooldown_ms: }").expect("memory");
        assert!(matches!(
            TpaConfig::load(&store),
            Err(ConfigError::Parse(_))
        ));
    }
}
