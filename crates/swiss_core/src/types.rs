//! Core tournament types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique player identifier, assigned by the store on registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub i64);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Record of a single played match.
///
/// `player1` holds the reported winner position and `player2` the reported
/// loser position. `winner` is `None` for a tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub player1: PlayerId,
    pub player2: PlayerId,
    pub winner: Option<PlayerId>,
}

impl Match {
    /// A decisive match won by `winner` against `loser`
    pub fn decisive(winner: PlayerId, loser: PlayerId) -> Self {
        Self {
            player1: winner,
            player2: loser,
            winner: Some(winner),
        }
    }

    /// A tied match between two players
    pub fn tie(player1: PlayerId, player2: PlayerId) -> Self {
        Self {
            player1,
            player2,
            winner: None,
        }
    }

    pub fn is_tie(&self) -> bool {
        self.winner.is_none()
    }

    /// Whether this match was played between `a` and `b`, in either order
    pub fn involves_pair(&self, a: PlayerId, b: PlayerId) -> bool {
        (self.player1 == a && self.player2 == b) || (self.player1 == b && self.player2 == a)
    }
}

/// One row of the standings table. Derived from match records, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingRow {
    pub id: PlayerId,
    pub name: String,
    /// Number of matches this player has won (ties count as 0)
    pub wins: u32,
    /// Number of matches this player has played, ties included
    pub matches_played: u32,
}

/// A matchup for the next round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
    pub id1: PlayerId,
    pub name1: String,
    pub id2: PlayerId,
    pub name2: String,
}

impl Pairing {
    pub fn new(first: &StandingRow, second: &StandingRow) -> Self {
        Self {
            id1: first.id,
            name1: first.name.clone(),
            id2: second.id,
            name2: second.name.clone(),
        }
    }
}
