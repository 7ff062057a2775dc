//! Game Index (GI), Game Point Loss (GPL) and Average Centipawn Loss (ACPL)
//! of chess games whose moves have been annotated with engine evaluations.
//!
//! A game is analyzed in four stages:
//!
//! 1. [`EvaluationSequence::extract`] collects the evaluation after every
//!    annotated ply, in pawns from White's point of view.
//! 2. [`average_centipawn_loss`] averages the evaluation drops caused by
//!    each side.
//! 3. [`game_point_loss`] converts evaluations into expected scores using a
//!    [`WdlModel`] and accumulates the expected score each side gives away.
//! 4. [`IndexSystem`] reconciles the point loss with the declared result,
//!    adjusts it for the strength of the opponent, and normalizes it onto
//!    the reporting scale.
//!
//! # Example
//!
//! ```
//! use game_index::{Eval, GameRecord, GameResult, IndexSystem, RatingScalar, StockfishWdl};
//!
//! let game = GameRecord {
//!     plies: vec![
//!         Some(Eval::Centipawns(20)),
//!         Some(Eval::Centipawns(25)),
//!         None,
//!         Some(Eval::Centipawns(-180)),
//!     ],
//!     result: GameResult::BlackWins,
//!     white_rating: Some(RatingScalar(2650.0)),
//!     black_rating: Some(RatingScalar(2710.0)),
//! };
//!
//! let metrics = IndexSystem::new().analyze(&game, &StockfishWdl::default())?;
//! assert!(metrics.black.gi_normalized > metrics.white.gi_normalized);
//! # Ok::<_, game_index::Error>(())
//! ```

mod acpl;
mod error;
mod eval;
mod gpl;
mod index_system;
mod metrics;
mod rating;
mod result;
mod score;
mod side;
mod wdl;

pub use acpl::average_centipawn_loss;
pub use error::Error;
pub use eval::{AnnotatedGame, Eval, EvaluationSequence, GameRecord, InvalidEval, MATE_SCORE};
pub use gpl::{game_point_loss, PointLoss};
pub use index_system::{IndexSystem, IndexSystemBuilder};
pub use metrics::{GameMetrics, PlayerMetrics};
pub use rating::{RatingDifference, RatingScalar};
pub use result::{GameResult, Outcome, ResultPoints};
pub use score::Score;
pub use side::{BySide, Side};
pub use wdl::{StockfishWdl, Wdl, WdlModel};
