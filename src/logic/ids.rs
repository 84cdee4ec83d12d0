//! Wall-clock ids and timestamps.

use chrono::{SecondsFormat, Utc};

/// Hands out millisecond-stamp ids that never repeat, even when several are
/// requested within the same millisecond.
#[derive(Clone, Debug, Default)]
pub struct IdClock {
    last: i64,
}

impl IdClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current millisecond stamp, bumped past the previous one if needed.
    pub fn next_id(&mut self) -> String {
        let stamp = Utc::now().timestamp_millis().max(self.last + 1);
        self.last = stamp;
        stamp.to_string()
    }
}

/// Current time as ISO-8601 UTC with millisecond precision, e.g. `2024-03-01T18:30:00.000Z`.
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
