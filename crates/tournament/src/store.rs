//! Store interface
//!
//! Everything the tournament needs from its persistence layer. Each call is a
//! blocking round trip; failures are returned to the caller unchanged.

use swiss_core::{Match, PlayerId, StandingRow};

use crate::error::Result;

/// Request/response access to player and match records
pub trait Store {
    /// Delete all match records
    fn reset_matches(&self) -> Result<()>;

    /// Delete all player records
    fn reset_players(&self) -> Result<()>;

    /// Number of registered players
    fn count_players(&self) -> Result<u64>;

    /// Register a player and return the id the store assigned
    fn register_player(&self, name: &str) -> Result<PlayerId>;

    /// One row per registered player, sorted by wins descending
    fn raw_standings(&self) -> Result<Vec<StandingRow>>;

    /// Every match played between `a` and `b`, in either order
    fn matches_between(&self, a: PlayerId, b: PlayerId) -> Result<Vec<Match>>;

    /// Record a match. `winner` is `None` for a tie.
    fn insert_match(&self, player1: PlayerId, player2: PlayerId, winner: Option<PlayerId>) -> Result<()>;

    /// The complete match history
    fn all_matches(&self) -> Result<Vec<Match>>;
}
