//! Facade the view talks to: one store, the series registry, and the
//! player book of the current series.

use crate::logic::{self, migrate, IdClock, MigrationOutcome, PlayerBook, SeriesRegistry};
use crate::models::{
    Player, Series, SeriesInput, SeriesSummary, Standing, StatSubmission, TrackerError,
};
use crate::store::KeyValueStore;

/// Poker series tracker over a key/value store.
///
/// Every mutation computes the new state, then writes it through to the
/// store. A write failure is returned as [`TrackerError::Storage`] with the
/// in-memory state already advanced.
#[derive(Debug)]
pub struct PokerTracker<S: KeyValueStore> {
    store: S,
    ids: IdClock,
    registry: SeriesRegistry,
    book: Option<PlayerBook>,
}

impl<S: KeyValueStore> PokerTracker<S> {
    /// Wrap `store`. Nothing is read until [`init`](Self::init).
    pub fn new(store: S) -> Self {
        Self {
            store,
            ids: IdClock::new(),
            registry: SeriesRegistry::default(),
            book: None,
        }
    }

    /// Migrate legacy data, hydrate the registry, select the first series and
    /// load its players. The registry is usable even when this returns an error.
    pub fn init(&mut self) -> Result<MigrationOutcome, TrackerError> {
        let migrated = migrate(&mut self.store);
        self.registry = SeriesRegistry::hydrate(&self.store);
        self.book = None;
        self.sync_book();
        migrated.map_err(TrackerError::from)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn list_series(&self) -> &[Series] {
        self.registry.list()
    }

    pub fn current_series(&self) -> Option<&Series> {
        self.registry.current()
    }

    /// Switch to series `id` and load its players. Unknown ids are ignored.
    pub fn select_series(&mut self, id: &str) -> bool {
        let known = self.registry.select(id);
        self.sync_book();
        known
    }

    /// Create a series and make it current.
    pub fn create_series(&mut self, input: &SeriesInput) -> Result<Series, TrackerError> {
        let result = self.registry.create(input, &mut self.ids, &mut self.store);
        self.sync_book();
        result
    }

    pub fn update_series(&mut self, id: &str, input: &SeriesInput) -> Result<Series, TrackerError> {
        self.registry.update(id, input, &mut self.store)
    }

    /// Players of the current series as the view should see them.
    pub fn list_players(&self) -> Vec<Player> {
        let has_bounty = self.has_bounty();
        self.book
            .iter()
            .flat_map(|b| b.players())
            .map(|p| p.visible(has_bounty))
            .collect()
    }

    pub fn player(&self, id: &str) -> Option<Player> {
        let has_bounty = self.has_bounty();
        self.book.as_ref()?.get(id).map(|p| p.visible(has_bounty))
    }

    /// Add a stat submission to the current series. See [`PlayerBook::submit`].
    pub fn submit_player(
        &mut self,
        submission: &StatSubmission,
        editing_id: Option<&str>,
    ) -> Result<Player, TrackerError> {
        let has_bounty = self.has_bounty();
        let book = self.book.as_mut().ok_or(TrackerError::NoSeriesSelected)?;
        let player = book.submit(submission, editing_id, has_bounty, &mut self.ids, &mut self.store)?;
        Ok(player.visible(has_bounty))
    }

    /// Delete a player from the current series. Returns whether one was removed.
    pub fn delete_player(&mut self, id: &str) -> Result<bool, TrackerError> {
        let book = self.book.as_mut().ok_or(TrackerError::NoSeriesSelected)?;
        Ok(book.delete(id, &mut self.store)?.is_some())
    }

    pub fn ranked_players(&self) -> Vec<Player> {
        let has_bounty = self.has_bounty();
        self.book
            .as_ref()
            .map(PlayerBook::ranked)
            .unwrap_or_default()
            .iter()
            .map(|p| p.visible(has_bounty))
            .collect()
    }

    /// Ranked players with positions, for the leaderboard.
    pub fn standings(&self) -> Vec<Standing> {
        logic::standings(&self.list_players())
    }

    pub fn summary(&self) -> SeriesSummary {
        let players = self.book.as_ref().map(PlayerBook::players).unwrap_or_default();
        logic::summarize(players, self.has_bounty())
    }

    fn has_bounty(&self) -> bool {
        self.registry.current().is_some_and(|s| s.has_bounty)
    }

    /// Load the current series' players if the book belongs to another series.
    fn sync_book(&mut self) {
        let Some(current) = self.registry.current() else {
            self.book = None;
            return;
        };
        if self.book.as_ref().is_some_and(|b| b.series_id() == current.id) {
            return;
        }
        self.book = Some(PlayerBook::load(current.id.clone(), &self.store));
    }
}
