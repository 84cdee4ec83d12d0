//! Series registry: ordered series list plus the current selection.

use crate::logic::ids::{now_iso, IdClock};
use crate::models::{Series, SeriesId, SeriesInput, TrackerError};
use crate::store::{read_json, write_json, KeyValueStore, SERIES_KEY};

#[derive(Clone, Debug, Default)]
pub struct SeriesRegistry {
    series: Vec<Series>,
    current: Option<SeriesId>,
}

impl SeriesRegistry {
    /// Load the registry from `pokerSeries` and select its first series.
    /// An empty or corrupt slot yields the default series, in memory only.
    pub fn hydrate(store: &impl KeyValueStore) -> Self {
        let mut series: Vec<Series> = read_json(store, SERIES_KEY).unwrap_or_default();
        if series.is_empty() {
            series.push(Series::default_series(now_iso()));
        }
        let current = series.first().map(|s| s.id.clone());
        Self { series, current }
    }

    /// All series in insertion order.
    pub fn list(&self) -> &[Series] {
        &self.series
    }

    pub fn get(&self, id: &str) -> Option<&Series> {
        self.series.iter().find(|s| s.id == id)
    }

    pub fn current(&self) -> Option<&Series> {
        self.current.as_deref().and_then(|id| self.get(id))
    }

    /// Make `id` current. Unknown ids leave the selection alone and return false.
    pub fn select(&mut self, id: &str) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        self.current = Some(id.to_string());
        true
    }

    /// Append a new series and make it current.
    ///
    /// On `Err(Storage)` the series is still registered and selected.
    pub fn create(
        &mut self,
        input: &SeriesInput,
        ids: &mut IdClock,
        store: &mut impl KeyValueStore,
    ) -> Result<Series, TrackerError> {
        let name = input
            .trimmed_name()
            .ok_or(TrackerError::InvalidInput("series name is empty"))?;
        let series = Series {
            id: ids.next_id(),
            name: name.to_string(),
            created_at: now_iso(),
            has_bounty: input.has_bounty,
            image: input.trimmed_image(),
        };
        log::info!("Created series '{}' ({})", series.name, series.id);
        self.series.push(series.clone());
        self.current = Some(series.id.clone());
        self.persist(store)?;
        Ok(series)
    }

    /// Replace name, bounty flag, and image of series `id`. Id and creation time are kept.
    pub fn update(
        &mut self,
        id: &str,
        input: &SeriesInput,
        store: &mut impl KeyValueStore,
    ) -> Result<Series, TrackerError> {
        let name = input
            .trimmed_name()
            .ok_or(TrackerError::InvalidInput("series name is empty"))?;
        let series = self
            .series
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| TrackerError::SeriesNotFound(id.to_string()))?;
        series.name = name.to_string();
        series.has_bounty = input.has_bounty;
        series.image = input.trimmed_image();
        let updated = series.clone();
        self.persist(store)?;
        Ok(updated)
    }

    /// Rewrite the whole `pokerSeries` array.
    pub fn persist(&self, store: &mut impl KeyValueStore) -> Result<(), TrackerError> {
        write_json(store, SERIES_KEY, &self.series)?;
        Ok(())
    }
}
