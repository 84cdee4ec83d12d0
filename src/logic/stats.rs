//! Points-per-game and leaderboard ordering.

use crate::models::{Player, SeriesSummary, Standing};
use std::cmp::Ordering;

/// Round to two decimals, halves away from zero.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Points per game rounded to two decimals; 0 when no games were played.
pub fn ppg(points: f64, games: u32) -> f64 {
    if games == 0 {
        return 0.0;
    }
    round_cents(points / f64::from(games))
}

/// Leaderboard order: points descending, then ppg descending.
pub fn rank_order(a: &Player, b: &Player) -> Ordering {
    b.points
        .partial_cmp(&a.points)
        .unwrap_or(Ordering::Equal)
        .then_with(|| b.ppg.partial_cmp(&a.ppg).unwrap_or(Ordering::Equal))
}

/// Players sorted by [`rank_order`]. The sort is stable, so ties keep their input order.
pub fn ranked(players: &[Player]) -> Vec<Player> {
    let mut sorted = players.to_vec();
    sorted.sort_by(rank_order);
    sorted
}

/// Ranked players with their 1-based positions.
pub fn standings(players: &[Player]) -> Vec<Standing> {
    ranked(players)
        .into_iter()
        .enumerate()
        .map(|(i, player)| Standing { rank: i + 1, player })
        .collect()
}

/// Totals over a series' players. Bounty is only totalled for bounty series.
pub fn summarize(players: &[Player], has_bounty: bool) -> SeriesSummary {
    SeriesSummary {
        total_players: players.len(),
        total_games: players.iter().map(|p| u64::from(p.games)).sum(),
        total_points: round_cents(players.iter().map(|p| p.points).sum()),
        total_bounty: has_bounty
            .then(|| round_cents(players.iter().map(|p| p.bounty.unwrap_or(0.0)).sum())),
    }
}
