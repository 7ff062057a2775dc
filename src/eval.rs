//! Engine evaluations and the per-ply evaluation sequence of a game.

use std::{fmt, num::ParseFloatError, num::ParseIntError, str::FromStr};

use thiserror::Error;

use crate::{GameResult, RatingScalar, Side};

/// Centipawn score used as the surrogate for a forced mate.
pub const MATE_SCORE: i32 = 10_000;

/// An engine evaluation from White's point of view.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Eval {
    Centipawns(i32),
    /// Mate in the given number of moves. Positive if White mates.
    Mate(i32),
}

impl Eval {
    /// Evaluation in pawns. A mate in `n` maps to `±(MATE_SCORE - n) / 100`,
    /// so that shorter mates are worth more. `Mate(0)` carries no sign and
    /// has no value on its own, see [`Eval::to_pawns_after`].
    pub fn to_pawns(self) -> Option<f64> {
        match self {
            Eval::Centipawns(cp) => Some(f64::from(cp) / 100.0),
            Eval::Mate(0) => None,
            Eval::Mate(moves) if moves > 0 => {
                Some(f64::from(MATE_SCORE - moves.min(MATE_SCORE)) / 100.0)
            }
            Eval::Mate(moves) => Some(f64::from(-MATE_SCORE - moves.max(-MATE_SCORE)) / 100.0),
        }
    }

    /// Evaluation in pawns of the position after `mover` played. `Mate(0)`
    /// means the side to move is mated, which is worth the full
    /// [`MATE_SCORE`] to `mover`.
    pub fn to_pawns_after(self, mover: Side) -> f64 {
        match (self.to_pawns(), mover) {
            (Some(pawns), _) => pawns,
            (None, Side::White) => f64::from(MATE_SCORE) / 100.0,
            (None, Side::Black) => -f64::from(MATE_SCORE) / 100.0,
        }
    }

    /// Parses an `[%eval ...]` annotation. Unlike [`FromStr`], pawn scores
    /// are truncated toward zero, as engine annotations are read by common
    /// PGN tooling.
    pub fn from_annotation(s: &str) -> Result<Eval, InvalidEval> {
        parse_eval(s, f64::trunc)
    }
}

fn parse_eval(s: &str, to_centipawns: fn(f64) -> f64) -> Result<Eval, InvalidEval> {
    if let Some(moves) = s.strip_prefix('#') {
        return Ok(Eval::Mate(moves.parse()?));
    }
    let pawns: f64 = s.parse()?;
    let centipawns = to_centipawns(pawns * 100.0);
    if !centipawns.is_finite() || centipawns.abs() > f64::from(i32::MAX) {
        return Err(InvalidEval::OutOfRange);
    }
    Ok(Eval::Centipawns(centipawns as i32))
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidEval {
    #[error("invalid mate distance: {0}")]
    Mate(#[from] ParseIntError),
    #[error("invalid pawn score: {0}")]
    Pawns(#[from] ParseFloatError),
    #[error("pawn score out of range")]
    OutOfRange,
}

impl FromStr for Eval {
    type Err = InvalidEval;

    /// Parses `#3` or `#-2` as mates, anything else as a score in pawns,
    /// rounded to the nearest centipawn so that [`Display`](fmt::Display)
    /// output reads back unchanged.
    fn from_str(s: &str) -> Result<Eval, InvalidEval> {
        parse_eval(s, f64::round)
    }
}

impl fmt::Display for Eval {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Eval::Centipawns(cp) => write!(f, "{:.2}", f64::from(cp) / 100.0),
            Eval::Mate(moves) => write!(f, "#{moves}"),
        }
    }
}

/// A game whose main line has been annotated by an engine.
pub trait AnnotatedGame {
    /// One entry per ply of the main line, in order. `None` for plies
    /// without an annotation.
    fn evaluations(&self) -> impl Iterator<Item = Option<Eval>> + '_;

    fn result(&self) -> GameResult;

    fn rating(&self, side: Side) -> Option<RatingScalar>;
}

/// A plain annotated game.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameRecord {
    pub plies: Vec<Option<Eval>>,
    pub result: GameResult,
    pub white_rating: Option<RatingScalar>,
    pub black_rating: Option<RatingScalar>,
}

impl AnnotatedGame for GameRecord {
    fn evaluations(&self) -> impl Iterator<Item = Option<Eval>> + '_ {
        self.plies.iter().copied()
    }

    fn result(&self) -> GameResult {
        self.result
    }

    fn rating(&self, side: Side) -> Option<RatingScalar> {
        match side {
            Side::White => self.white_rating,
            Side::Black => self.black_rating,
        }
    }
}

/// Evaluations in pawns from White's point of view, one per annotated ply.
///
/// Index `0` is a synthetic pre-game entry equal to the first real
/// evaluation (or `0.0` if there is none), so the sequence is never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationSequence(Vec<f64>);

impl EvaluationSequence {
    /// Collects the annotated plies of `game`. Plies without an annotation
    /// are skipped, not replaced by a placeholder.
    pub fn extract<G: AnnotatedGame + ?Sized>(game: &G) -> EvaluationSequence {
        EvaluationSequence::from_evals(game.evaluations())
    }

    pub fn from_evals<I>(evals: I) -> EvaluationSequence
    where
        I: IntoIterator<Item = Option<Eval>>,
    {
        let mut pawns = vec![0.0];
        for (i, eval) in evals.into_iter().enumerate() {
            let ply = i + 1;
            match eval {
                Some(eval) => pawns.push(eval.to_pawns_after(Side::of_ply(ply))),
                None => log::debug!("skipping ply {ply} without evaluation"),
            }
        }
        EvaluationSequence::from_pawns(pawns)
    }

    /// Wraps pre-extracted values, where `pawns[0]` is the pre-game slot.
    /// The pre-game slot is overwritten with the first real evaluation.
    /// An empty vector is treated like `[0.0]`.
    pub fn from_pawns(mut pawns: Vec<f64>) -> EvaluationSequence {
        if pawns.is_empty() {
            pawns.push(0.0);
        }
        if pawns.len() > 1 {
            pawns[0] = pawns[1];
        }
        EvaluationSequence(pawns)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Number of entries, including the pre-game slot.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` if no ply was annotated.
    pub fn is_empty(&self) -> bool {
        self.0.len() <= 1
    }

    /// Pairs of consecutive values `(before, after)` for every ply, starting
    /// at index `1`.
    pub fn moves(&self) -> impl Iterator<Item = (usize, f64, f64)> + '_ {
        self.0
            .windows(2)
            .enumerate()
            .map(|(i, pair)| (i + 1, pair[0], pair[1]))
    }
}
