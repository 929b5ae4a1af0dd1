//! Pairing generation for the next round

use tracing::debug;

use crate::error::{Error, Result};
use crate::types::{Pairing, StandingRow};

/// Pair players by adjacent rank: 1st with 2nd, 3rd with 4th, and so on.
///
/// `ranking` must already be in final rank order and contain an even number
/// of players. Every player appears in exactly one pairing.
pub fn swiss_pairings(ranking: &[StandingRow]) -> Result<Vec<Pairing>> {
    if ranking.len() % 2 != 0 {
        return Err(Error::InvalidInput(format!(
            "cannot pair an odd number of players ({})",
            ranking.len()
        )));
    }

    let pairings: Vec<Pairing> = ranking
        .chunks_exact(2)
        .map(|pair| Pairing::new(&pair[0], &pair[1]))
        .collect();

    debug!(pairings = pairings.len(), "generated pairings");
    Ok(pairings)
}

#[cfg(test)]
#[path = "pairing_tests.rs"]
mod pairing_tests;
