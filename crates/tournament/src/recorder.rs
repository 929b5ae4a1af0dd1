//! Match recording with duplicate suppression

use serde::{Deserialize, Serialize};
use swiss_core::PlayerId;
use tracing::{debug, info};

use crate::error::{Result, TournamentError};
use crate::store::Store;

/// What happened to a reported match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportOutcome {
    /// A new match record was written
    Recorded,
    /// The two players had already met; nothing was written
    Duplicate,
}

/// Record the outcome of a single match.
///
/// If `winner` and `loser` have already played each other, in either order,
/// the report is ignored and [`ReportOutcome::Duplicate`] is returned. A tie is
/// stored without a winner; the player order is kept either way.
///
/// Whether both ids belong to registered players is checked by the store.
pub fn report_match<S: Store + ?Sized>(
    store: &S,
    winner: PlayerId,
    loser: PlayerId,
    tie: bool,
) -> Result<ReportOutcome> {
    if winner == loser {
        return Err(TournamentError::InvalidInput(format!(
            "player {} cannot play against themselves",
            winner
        )));
    }

    if !store.matches_between(winner, loser)?.is_empty() {
        debug!(%winner, %loser, "players already met, ignoring report");
        return Ok(ReportOutcome::Duplicate);
    }

    let recorded_winner = if tie { None } else { Some(winner) };
    store.insert_match(winner, loser, recorded_winner)?;

    if tie {
        info!(player1 = %winner, player2 = %loser, "recorded tie");
    } else {
        info!(%winner, %loser, "recorded match");
    }
    Ok(ReportOutcome::Recorded)
}

#[cfg(test)]
#[path = "recorder_tests.rs"]
mod recorder_tests;
