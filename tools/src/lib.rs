//! Batch tooling around `game-index`: extracting evaluation tables from
//! annotated PGN, analyzing them in bulk, and performance ratings over a
//! series of games.

pub mod performance;
pub mod pgn;
pub mod record;
