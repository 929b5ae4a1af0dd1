//! Tournament facade over a store

use swiss_core::{Pairing, PlayerId, RankingEngine, StandingRow};
use tracing::{debug, info};

use crate::error::Result;
use crate::recorder::{self, ReportOutcome};
use crate::store::Store;

/// A Swiss-system tournament backed by a [`Store`]
#[derive(Debug, Clone)]
pub struct Tournament<S> {
    store: S,
}

impl<S: Store> Tournament<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Remove all match records
    pub fn reset_matches(&self) -> Result<()> {
        self.store.reset_matches()?;
        info!("matches reset");
        Ok(())
    }

    /// Remove all player records
    pub fn reset_players(&self) -> Result<()> {
        self.store.reset_players()?;
        info!("players reset");
        Ok(())
    }

    /// Number of registered players
    pub fn count_players(&self) -> Result<u64> {
        self.store.count_players()
    }

    /// Register a player. Names need not be unique.
    pub fn register_player(&self, name: &str) -> Result<PlayerId> {
        let id = self.store.register_player(name)?;
        info!(%id, name, "registered player");
        Ok(id)
    }

    /// Record a match result. See [`recorder::report_match`].
    pub fn report_match(&self, winner: PlayerId, loser: PlayerId, tie: bool) -> Result<ReportOutcome> {
        recorder::report_match(&self.store, winner, loser, tie)
    }

    /// Current standings: ordered by wins, ties broken by OMW.
    ///
    /// The first row is the player in first place, or one of the players tied
    /// for first place.
    pub fn player_standings(&self) -> Result<Vec<StandingRow>> {
        let standings = self.store.raw_standings()?;
        let matches = self.store.all_matches()?;
        debug!(players = standings.len(), matches = matches.len(), "ranking standings");

        let engine = RankingEngine::new(&standings, &matches);
        Ok(engine.rank(standings))
    }

    /// Pairings for the next round, by adjacent rank in the current standings
    pub fn swiss_pairings(&self) -> Result<Vec<Pairing>> {
        let standings = self.player_standings()?;
        Ok(swiss_core::swiss_pairings(&standings)?)
    }
}
