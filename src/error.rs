use thiserror::Error;

use crate::Wdl;

/// Failure that prevents a game from being analyzed.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// The probability model produced fractions outside `0.0..=1.0`, or
    /// fractions that do not sum to one.
    #[error("invalid win/draw/loss probabilities at ply {ply}: {wdl:?}")]
    InvalidProbabilities { ply: usize, wdl: Wdl },
}
