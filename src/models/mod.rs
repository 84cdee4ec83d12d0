//! Data structures for poker series: series, players, and leaderboard views.

mod error;
mod player;
mod series;

pub use error::TrackerError;
pub use player::{Player, PlayerId, SeriesSummary, Standing, StatSubmission};
pub use series::{Series, SeriesId, SeriesInput, DEFAULT_SERIES_ID, DEFAULT_SERIES_NAME};
