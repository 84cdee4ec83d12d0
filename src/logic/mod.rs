//! Tracker business logic: migration, series registry, player book, stats.

pub mod ids;
pub mod migrate;
pub mod players;
pub mod series;
pub mod stats;

pub use ids::{now_iso, IdClock};
pub use migrate::{migrate, MigrationOutcome};
pub use players::PlayerBook;
pub use series::SeriesRegistry;
pub use stats::{ppg, rank_order, ranked, round_cents, standings, summarize};
