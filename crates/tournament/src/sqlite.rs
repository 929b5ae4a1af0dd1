//! SQLite-backed store
//!
//! Every operation opens its own connection, runs its statements and drops
//! the connection before returning. No connection outlives a call.

use rusqlite::{params, Connection, Row};
use std::path::PathBuf;
use swiss_core::{Match, PlayerId, StandingRow};
use tracing::debug;

use crate::config::TournamentConfig;
use crate::error::Result;
use crate::store::Store;

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS players (
        id   INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT    NOT NULL
    );

    CREATE TABLE IF NOT EXISTS matches (
        p1     INTEGER NOT NULL REFERENCES players (id) ON DELETE CASCADE,
        p2     INTEGER NOT NULL REFERENCES players (id) ON DELETE CASCADE,
        winner INTEGER          REFERENCES players (id) ON DELETE CASCADE,
        CHECK (p1 <> p2),
        CHECK (winner IS NULL OR winner = p1 OR winner = p2)
    );

    CREATE VIEW IF NOT EXISTS standings AS
    SELECT p.id,
           p.name,
           (SELECT COUNT(*) FROM matches m WHERE m.winner = p.id)         AS wins,
           (SELECT COUNT(*) FROM matches m WHERE m.p1 = p.id OR m.p2 = p.id) AS played
    FROM players p;
";

/// Store holding players and matches in a SQLite database file
#[derive(Debug, Clone)]
pub struct SqliteStore {
    path: PathBuf,
}

impl SqliteStore {
    /// Open the database at `path`, creating the schema if it is missing
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let store = Self { path: path.into() };
        let conn = store.connect()?;
        conn.execute_batch(SCHEMA)?;
        debug!(path = %store.path.display(), "schema ready");
        Ok(store)
    }

    /// Open the database named in the configuration
    pub fn from_config(config: &TournamentConfig) -> Result<Self> {
        Self::open(config.database.clone())
    }

    fn connect(&self) -> Result<Connection> {
        let conn = Connection::open(&self.path)?;
        conn.pragma_update(None, "foreign_keys", true)?;
        Ok(conn)
    }
}

fn match_from_row(row: &Row<'_>) -> rusqlite::Result<Match> {
    Ok(Match {
        player1: PlayerId(row.get(0)?),
        player2: PlayerId(row.get(1)?),
        winner: row.get::<_, Option<i64>>(2)?.map(PlayerId),
    })
}

impl Store for SqliteStore {
    fn reset_matches(&self) -> Result<()> {
        let removed = self.connect()?.execute("DELETE FROM matches", [])?;
        debug!(removed, "deleted matches");
        Ok(())
    }

    fn reset_players(&self) -> Result<()> {
        let removed = self.connect()?.execute("DELETE FROM players", [])?;
        debug!(removed, "deleted players");
        Ok(())
    }

    fn count_players(&self) -> Result<u64> {
        let count: i64 = self
            .connect()?
            .query_row("SELECT COUNT(*) FROM players", [], |row| row.get(0))?;
        Ok(count as u64)
    }

    fn register_player(&self, name: &str) -> Result<PlayerId> {
        let conn = self.connect()?;
        conn.execute("INSERT INTO players (name) VALUES (?1)", params![name])?;
        Ok(PlayerId(conn.last_insert_rowid()))
    }

    fn raw_standings(&self) -> Result<Vec<StandingRow>> {
        let conn = self.connect()?;
        let mut stmt =
            conn.prepare("SELECT id, name, wins, played FROM standings ORDER BY wins DESC, id ASC")?;
        let rows = stmt
            .query_map([], |row| {
                Ok(StandingRow {
                    id: PlayerId(row.get(0)?),
                    name: row.get(1)?,
                    wins: row.get(2)?,
                    matches_played: row.get(3)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        debug!(players = rows.len(), "fetched raw standings");
        Ok(rows)
    }

    fn matches_between(&self, a: PlayerId, b: PlayerId) -> Result<Vec<Match>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            "SELECT p1, p2, winner FROM matches
             WHERE (p1 = ?1 AND p2 = ?2) OR (p1 = ?2 AND p2 = ?1)",
        )?;
        let matches = stmt
            .query_map(params![a.0, b.0], match_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(matches)
    }

    fn insert_match(&self, player1: PlayerId, player2: PlayerId, winner: Option<PlayerId>) -> Result<()> {
        self.connect()?.execute(
            "INSERT INTO matches (p1, p2, winner) VALUES (?1, ?2, ?3)",
            params![player1.0, player2.0, winner.map(|w| w.0)],
        )?;
        Ok(())
    }

    fn all_matches(&self) -> Result<Vec<Match>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare("SELECT p1, p2, winner FROM matches ORDER BY rowid")?;
        let matches = stmt
            .query_map([], match_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        debug!(matches = matches.len(), "fetched match history");
        Ok(matches)
    }
}

#[cfg(test)]
#[path = "sqlite_tests.rs"]
mod sqlite_tests;
