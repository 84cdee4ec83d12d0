//! Poker series tracker: series and player standings persisted in a local
//! key/value store, with a one-shot migration of pre-series data.

pub mod logic;
pub mod models;
pub mod store;
mod tracker;

pub use logic::{migrate, IdClock, MigrationOutcome, PlayerBook, SeriesRegistry};
pub use models::{
    Player, PlayerId, Series, SeriesId, SeriesInput, SeriesSummary, Standing, StatSubmission,
    TrackerError, DEFAULT_SERIES_ID, DEFAULT_SERIES_NAME,
};
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};
pub use tracker::PokerTracker;
