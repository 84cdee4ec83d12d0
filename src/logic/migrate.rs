//! One-shot move of pre-series player data into the default series.

use crate::logic::ids::now_iso;
use crate::models::Series;
use crate::store::{
    players_key, read_json, write_json, KeyValueStore, StoreError, LEGACY_PLAYERS_KEY, SERIES_KEY,
};

/// What [`migrate`] found and did.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MigrationOutcome {
    /// A non-empty series registry already exists; nothing was touched.
    AlreadyMigrated,
    /// Legacy players were moved into the default series.
    MigratedLegacy { players: usize },
    /// Nothing stored yet; the default series was created.
    FreshInstall,
}

/// Bring the store up to the series layout. Safe to run on every startup.
///
/// 1. A non-empty `pokerSeries` means there is nothing to do.
/// 2. A non-empty legacy `pokerPlayers` array is copied verbatim to
///    `pokerPlayers_default`, the legacy key is removed, and `[default]` is
///    written as the registry.
/// 3. Otherwise `[default]` is written as the registry on its own.
pub fn migrate(store: &mut impl KeyValueStore) -> Result<MigrationOutcome, StoreError> {
    let existing: Option<Vec<Series>> = read_json(store, SERIES_KEY);
    if existing.is_some_and(|series| !series.is_empty()) {
        return Ok(MigrationOutcome::AlreadyMigrated);
    }

    let default_series = Series::default_series(now_iso());

    if let Some((raw, count)) = legacy_players(store) {
        store.put(&players_key(&default_series.id), raw)?;
        store.remove(LEGACY_PLAYERS_KEY)?;
        write_json(store, SERIES_KEY, &[&default_series])?;
        log::info!("Migrated {} legacy player(s) into '{}'", count, default_series.name);
        return Ok(MigrationOutcome::MigratedLegacy { players: count });
    }

    write_json(store, SERIES_KEY, &[&default_series])?;
    log::info!("No series found, created '{}'", default_series.name);
    Ok(MigrationOutcome::FreshInstall)
}

/// Raw legacy payload and its length, when it holds a non-empty JSON array.
fn legacy_players(store: &impl KeyValueStore) -> Option<(String, usize)> {
    let raw = store.get(LEGACY_PLAYERS_KEY)?;
    let players: Vec<serde_json::Value> = match serde_json::from_str(&raw) {
        Ok(players) => players,
        Err(e) => {
            log::warn!("Ignoring corrupt legacy slot '{}': {}", LEGACY_PLAYERS_KEY, e);
            return None;
        }
    };
    (!players.is_empty()).then(|| (raw, players.len()))
}
