//! Performance ratings over a series of games.
//!
//! The tournament performance rating is undefined for zero and perfect
//! scores. For those, the estimated performance rating assumes the most
//! favourable expected score under which the observed result is still no
//! more likely than a given threshold.

use game_index::RatingScalar;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum InvalidSeries {
    #[error("at least one game is required")]
    NoGames,
    #[error("score {score} is not between 0 and {games}")]
    Score { score: f64, games: u32 },
    #[error("threshold {0} is not strictly between 0 and 1")]
    Threshold(f64),
}

/// Results of a player against opponents with the given average rating.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Series {
    score: f64,
    games: u32,
    average_opponent: RatingScalar,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PerformanceRating {
    Tournament(RatingScalar),
    Estimated(RatingScalar),
}

impl PerformanceRating {
    pub fn rating(self) -> RatingScalar {
        match self {
            PerformanceRating::Tournament(rating) | PerformanceRating::Estimated(rating) => rating,
        }
    }
}

/// Rating at which the expected score against `average_opponent` is
/// `expected`.
fn rating_for_expected_score(expected: f64, average_opponent: RatingScalar) -> RatingScalar {
    RatingScalar(f64::from(average_opponent) - 400.0 * ((1.0 - expected) / expected).log10())
}

impl Series {
    pub fn new(
        score: f64,
        games: u32,
        average_opponent: RatingScalar,
    ) -> Result<Series, InvalidSeries> {
        if games == 0 {
            return Err(InvalidSeries::NoGames);
        }
        if !(0.0..=f64::from(games)).contains(&score) {
            return Err(InvalidSeries::Score { score, games });
        }
        Ok(Series {
            score,
            games,
            average_opponent,
        })
    }

    pub fn is_perfect(&self) -> bool {
        self.score == f64::from(self.games)
    }

    pub fn is_zero(&self) -> bool {
        self.score == 0.0
    }

    /// `None` for zero and perfect scores.
    pub fn tournament_performance_rating(&self) -> Option<RatingScalar> {
        if self.is_zero() || self.is_perfect() {
            return None;
        }
        Some(rating_for_expected_score(
            self.score / f64::from(self.games),
            self.average_opponent,
        ))
    }

    /// `None` unless the score is zero or perfect.
    pub fn estimated_performance_rating(
        &self,
        threshold: f64,
    ) -> Result<Option<RatingScalar>, InvalidSeries> {
        if !(threshold > 0.0 && threshold < 1.0) {
            return Err(InvalidSeries::Threshold(threshold));
        }
        // P(n of n) = p^n and P(0 of n) = (1 - p)^n are monotonic, so the
        // boundary of the constraint is the optimum.
        let bound = threshold.powf(1.0 / f64::from(self.games));
        let expected = if self.is_perfect() {
            bound
        } else if self.is_zero() {
            1.0 - bound
        } else {
            return Ok(None);
        };
        Ok(Some(rating_for_expected_score(
            expected,
            self.average_opponent,
        )))
    }

    pub fn performance_rating(&self, threshold: f64) -> Result<PerformanceRating, InvalidSeries> {
        match self.tournament_performance_rating() {
            Some(rating) => Ok(PerformanceRating::Tournament(rating)),
            None => self
                .estimated_performance_rating(threshold)?
                .map(PerformanceRating::Estimated)
                .ok_or(InvalidSeries::Score {
                    score: self.score,
                    games: self.games,
                }),
        }
    }
}
