//! Swiss-system tournament tracker
//!
//! This crate provides:
//! - A store interface for players and match records, with a SQLite store
//! - Match recording with duplicate suppression and ties
//! - Standings ranked by wins with OMW tie-breaks
//! - Adjacent-rank pairings for the next round
//!
//! # Usage
//!
//! ```bash
//! # Register players and report a result
//! cargo run -p tournament -- register "Ada Lovelace"
//! cargo run -p tournament -- report 1 2
//!
//! # Show standings and the next round
//! cargo run -p tournament -- standings
//! cargo run -p tournament -- pairings --json
//! ```

mod config;
mod error;
mod recorder;
mod report;
mod sqlite;
mod store;
mod tournament;

pub use config::*;
pub use error::*;
pub use recorder::*;
pub use report::*;
pub use sqlite::*;
pub use store::*;
pub use tournament::*;
