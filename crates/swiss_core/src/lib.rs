//! Swiss-system tournament core
//!
//! Store-independent logic for Swiss-system tournaments:
//! - Player, match and standings types
//! - Ranking with opponents'-wins (OMW) tie-breaks, iterated to a fixed point
//! - Adjacent-rank pairings for the next round
//!
//! Nothing in this crate performs I/O. Callers fetch raw standings and the
//! match history from wherever they are stored and hand them in.

mod error;
mod pairing;
mod ranking;
mod types;

pub use error::*;
pub use pairing::*;
pub use ranking::*;
pub use types::*;
