//! Persistent string-keyed store and the key layout the tracker writes to it.
//!
//! Keys (stable, shared with existing installs):
//! - `pokerSeries`: JSON array of series.
//! - `pokerPlayers_<seriesId>`: JSON array of players for that series.
//! - `pokerPlayers`: legacy flat player array, present only before migration.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Key holding the series registry.
pub const SERIES_KEY: &str = "pokerSeries";

/// Pre-series key holding a flat player array.
pub const LEGACY_PLAYERS_KEY: &str = "pokerPlayers";

/// Key holding the players of one series.
pub fn players_key(series_id: &str) -> String {
    format!("{}_{}", LEGACY_PLAYERS_KEY, series_id)
}

/// Errors raised when writing to a store.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StoreError {
    /// The store has no room left for this value.
    QuotaExceeded { key: String },
    /// The backing medium rejected the write.
    Write { key: String, reason: String },
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::QuotaExceeded { key } => write!(f, "storage quota exceeded writing '{}'", key),
            StoreError::Write { key, reason } => write!(f, "failed to write '{}': {}", key, reason),
        }
    }
}

impl std::error::Error for StoreError {}

/// A string-keyed persistent map, in the shape of browser local storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn put(&mut self, key: &str, value: String) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// Read and decode a JSON slot. Missing or unparseable slots are `None`.
pub fn read_json<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Ignoring corrupt slot '{}': {}", key, e);
            None
        }
    }
}

/// Encode a value as JSON and write it to `key`.
pub fn write_json<T: Serialize + ?Sized>(
    store: &mut impl KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StoreError> {
    let raw = serde_json::to_string(value).map_err(|e| StoreError::Write {
        key: key.to_string(),
        reason: e.to_string(),
    })?;
    log::debug!("Writing {} bytes to '{}'", raw.len(), key);
    store.put(key, raw).map_err(|e| {
        log::warn!("{}", e);
        e
    })
}
