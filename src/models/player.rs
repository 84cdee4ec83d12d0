//! Player, stat submissions, and leaderboard views.

use serde::{Deserialize, Serialize};

/// Identifier of a player, unique within its series only.
pub type PlayerId = String;

/// A player as persisted under `pokerPlayers_<seriesId>`.
///
/// `ppg` is derived from `points` and `games`; it is stored for compatibility
/// but recomputed whenever a player is loaded or mutated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub points: f64,
    pub games: u32,
    #[serde(default)]
    pub ppg: f64,
    /// Only meaningful inside a bounty series; kept otherwise so toggling the flag brings it back.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounty: Option<f64>,
}

impl Player {
    /// Case-insensitive name comparison used for merge-by-name.
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// Copy of this player as the view should see it for a series with or without bounty.
    pub fn visible(&self, has_bounty: bool) -> Player {
        Player {
            bounty: has_bounty.then(|| self.bounty.unwrap_or(0.0)),
            ..self.clone()
        }
    }
}

/// One submission from the player form: a name plus deltas to add.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StatSubmission {
    pub name: String,
    pub points: f64,
    pub games: i64,
    pub bounty: f64,
}

impl StatSubmission {
    pub fn new(name: impl Into<String>, points: f64, games: i64) -> Self {
        Self {
            name: name.into(),
            points,
            games,
            bounty: 0.0,
        }
    }

    pub fn with_bounty(mut self, bounty: f64) -> Self {
        self.bounty = bounty;
        self
    }

    /// Build a submission from raw form text. Unparseable numbers become 0.
    pub fn parse(name: impl Into<String>, points: &str, games: &str, bounty: &str) -> Self {
        Self {
            name: name.into(),
            points: parse_real(points),
            games: parse_integer(games),
            bounty: parse_real(bounty),
        }
    }
}

/// Leading decimal prefix of `raw` (`"12.5pts"` gives 12.5); non-finite or
/// missing numbers give 0.
fn parse_real(raw: &str) -> f64 {
    let raw = raw.trim();
    match raw[..real_prefix_len(raw)].parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Byte length of the longest `[sign] digits [. digits] [e [sign] digits]` prefix.
fn real_prefix_len(raw: &str) -> usize {
    let bytes = raw.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'-' | b'+')));
    let int_end = digits_from(end);
    let mut has_digits = int_end > end;
    end = int_end;
    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        has_digits |= frac_end > end + 1;
        end = frac_end;
    }
    if !has_digits {
        return 0;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'-' | b'+')));
        let exp_end = digits_from(end + 1 + sign);
        if exp_end > end + 1 + sign {
            end = exp_end;
        }
    }
    end
}

/// Leading integer prefix of `raw` (`"2.7"` and `"2 games"` both give 2).
fn parse_integer(raw: &str) -> i64 {
    let raw = raw.trim();
    let sign_len = usize::from(raw.starts_with(['-', '+']));
    let digits = raw[sign_len..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(raw.len(), |end| sign_len + end);
    raw[..digits].parse().unwrap_or(0)
}

/// A ranked leaderboard row.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Standing {
    /// 1-based position in the ranked order.
    pub rank: usize,
    pub player: Player,
}

/// Aggregate figures for one series.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesSummary {
    pub total_players: usize,
    pub total_games: u64,
    pub total_points: f64,
    /// Only present for bounty series.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_bounty: Option<f64>,
}
