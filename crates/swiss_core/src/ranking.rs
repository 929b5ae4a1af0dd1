//! Standings ranking with opponents'-wins (OMW) tie-breaks
//!
//! Raw standings arrive sorted by wins. Players on the same number of wins are
//! ordered by OMW: the total wins of every opponent a player has faced,
//! divided by the number of matches that player has played.
//!
//! The reordering is done by a pass of local adjacent swaps, repeated until a
//! pass leaves the order unchanged.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::types::{Match, PlayerId, StandingRow};

/// Compute the OMW score of every player in `standings`.
///
/// Players that have not played yet score 0. Opponents missing from
/// `standings` contribute no wins.
pub fn opponent_wins(standings: &[StandingRow], matches: &[Match]) -> HashMap<PlayerId, f64> {
    let wins: HashMap<PlayerId, u32> = standings.iter().map(|row| (row.id, row.wins)).collect();

    let mut opponent_totals: HashMap<PlayerId, u32> = HashMap::new();
    for m in matches {
        for (player, opponent) in [(m.player1, m.player2), (m.player2, m.player1)] {
            *opponent_totals.entry(player).or_insert(0) += wins.get(&opponent).copied().unwrap_or(0);
        }
    }

    standings
        .iter()
        .map(|row| {
            let omw = if row.matches_played == 0 {
                0.0
            } else {
                let total = opponent_totals.get(&row.id).copied().unwrap_or(0);
                total as f64 / row.matches_played as f64
            };
            (row.id, omw)
        })
        .collect()
}

/// Reorders standings by OMW within groups of equal wins
#[derive(Debug, Clone, Default)]
pub struct RankingEngine {
    omw: HashMap<PlayerId, f64>,
}

impl RankingEngine {
    /// Build an engine from the raw standings and the full match history
    pub fn new(standings: &[StandingRow], matches: &[Match]) -> Self {
        Self {
            omw: opponent_wins(standings, matches),
        }
    }

    /// Build an engine from precomputed OMW scores
    pub fn from_scores(omw: HashMap<PlayerId, f64>) -> Self {
        Self { omw }
    }

    /// OMW score of a player (0 for unknown players)
    pub fn omw(&self, player: PlayerId) -> f64 {
        self.omw.get(&player).copied().unwrap_or(0.0)
    }

    /// Run a single left-to-right pass of adjacent swaps.
    ///
    /// A player moves up one place when the next player has the same number
    /// of wins and a strictly higher OMW. A swapped pair is not compared again
    /// in the same pass, so each player moves at most one place per pass.
    pub fn apply_pass(&self, standings: &[StandingRow]) -> Vec<StandingRow> {
        let mut ranked = standings.to_vec();

        let mut i = 0;
        while i + 1 < ranked.len() {
            if self.outranks(&ranked[i + 1], &ranked[i]) {
                trace!(up = %ranked[i + 1].id, down = %ranked[i].id, "OMW swap");
                ranked.swap(i, i + 1);
                i += 2;
            } else {
                i += 1;
            }
        }

        ranked
    }

    /// Apply passes until the order stops changing and return the stable order
    pub fn rank(&self, standings: Vec<StandingRow>) -> Vec<StandingRow> {
        let mut before = standings;
        let mut after = self.apply_pass(&before);
        let mut passes = 1;

        while after != before {
            before = after;
            after = self.apply_pass(&before);
            passes += 1;
        }

        debug!(players = after.len(), passes, "standings stabilized");
        after
    }

    /// Whether `next` should be placed ahead of `current`
    fn outranks(&self, next: &StandingRow, current: &StandingRow) -> bool {
        next.wins == current.wins && self.omw(next.id) > self.omw(current.id)
    }
}

/// Rank raw standings against the given match history
pub fn rank_standings(standings: Vec<StandingRow>, matches: &[Match]) -> Vec<StandingRow> {
    RankingEngine::new(&standings, matches).rank(standings)
}

#[cfg(test)]
#[path = "ranking_tests.rs"]
mod ranking_tests;
