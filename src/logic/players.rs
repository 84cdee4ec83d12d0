//! Player book: the players of one series and their cumulative stats.

use crate::logic::ids::IdClock;
use crate::logic::stats::{self, ppg};
use crate::models::{Player, SeriesId, StatSubmission, TrackerError};
use crate::store::{players_key, read_json, write_json, KeyValueStore};

#[derive(Clone, Debug)]
pub struct PlayerBook {
    series_id: SeriesId,
    players: Vec<Player>,
}

impl PlayerBook {
    /// Load `pokerPlayers_<seriesId>`. Missing or corrupt slots give an empty
    /// book, and rows that do not decode as players are skipped; stored ppg
    /// values are discarded and recomputed.
    pub fn load(series_id: impl Into<SeriesId>, store: &impl KeyValueStore) -> Self {
        let series_id = series_id.into();
        let rows: Vec<serde_json::Value> =
            read_json(store, &players_key(&series_id)).unwrap_or_default();
        let players = rows
            .into_iter()
            .filter_map(|row| match serde_json::from_value::<Player>(row) {
                Ok(mut p) => {
                    p.ppg = ppg(p.points, p.games);
                    Some(p)
                }
                Err(e) => {
                    log::warn!("Skipping unreadable player in series {}: {}", series_id, e);
                    None
                }
            })
            .collect();
        Self { series_id, players }
    }

    pub fn series_id(&self) -> &str {
        &self.series_id
    }

    /// Players in stored order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn get(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Add a stat submission.
    ///
    /// The target is the player `editing_id` (renamed to the submitted name),
    /// else the player whose name matches case-insensitively, else a new
    /// player. Deltas are added to the target's totals and ppg recomputed.
    /// On `Err(Storage)` the change is kept in memory.
    pub fn submit(
        &mut self,
        submission: &StatSubmission,
        editing_id: Option<&str>,
        has_bounty: bool,
        ids: &mut IdClock,
        store: &mut impl KeyValueStore,
    ) -> Result<Player, TrackerError> {
        if submission.name.trim().is_empty() {
            return Err(TrackerError::InvalidInput("player name is empty"));
        }

        let by_id = editing_id.and_then(|id| self.players.iter().position(|p| p.id == id));
        let target = by_id.or_else(|| self.players.iter().position(|p| p.has_name(&submission.name)));

        let player = match target {
            Some(idx) => {
                let p = &mut self.players[idx];
                p.name = submission.name.clone();
                accumulate(p, submission);
                p.clone()
            }
            None => {
                let p = new_player(ids.next_id(), submission, has_bounty);
                log::info!("Added player '{}' to series {}", p.name, self.series_id);
                self.players.push(p.clone());
                p
            }
        };
        self.persist(store)?;
        Ok(player)
    }

    /// Remove player `id`. Returns the removed player; unknown ids are a no-op.
    pub fn delete(
        &mut self,
        id: &str,
        store: &mut impl KeyValueStore,
    ) -> Result<Option<Player>, TrackerError> {
        let Some(idx) = self.players.iter().position(|p| p.id == id) else {
            return Ok(None);
        };
        let removed = self.players.remove(idx);
        log::info!("Deleted player '{}' from series {}", removed.name, self.series_id);
        self.persist(store)?;
        Ok(Some(removed))
    }

    /// Players in leaderboard order.
    pub fn ranked(&self) -> Vec<Player> {
        stats::ranked(&self.players)
    }

    /// Rewrite `pokerPlayers_<seriesId>`.
    pub fn persist(&self, store: &mut impl KeyValueStore) -> Result<(), TrackerError> {
        write_json(store, &players_key(&self.series_id), &self.players)?;
        Ok(())
    }
}

fn clamp_games(games: i64) -> u32 {
    games.clamp(0, i64::from(u32::MAX)) as u32
}

fn clamp_amount(amount: f64) -> f64 {
    amount.max(0.0)
}

fn accumulate(player: &mut Player, submission: &StatSubmission) {
    player.points = clamp_amount(player.points + submission.points);
    player.games = clamp_games(i64::from(player.games).saturating_add(submission.games));
    player.ppg = ppg(player.points, player.games);
    player.bounty = Some(clamp_amount(player.bounty.unwrap_or(0.0) + submission.bounty));
}

/// A fresh player. Outside bounty series a zero bounty is left absent, but a
/// non-zero one is kept so that enabling the flag later shows it.
fn new_player(id: String, submission: &StatSubmission, has_bounty: bool) -> Player {
    let points = clamp_amount(submission.points);
    let games = clamp_games(submission.games);
    let bounty = (has_bounty || submission.bounty != 0.0).then(|| clamp_amount(submission.bounty));
    Player {
        id,
        name: submission.name.clone(),
        points,
        games,
        ppg: ppg(points, games),
        bounty,
    }
}
