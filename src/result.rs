use std::{convert::Infallible, fmt, str::FromStr};

use crate::{Score, Side};

/// Declared result of a game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameResult {
    /// Ongoing, adjourned or otherwise undecided.
    #[default]
    Unknown,
    WhiteWins,
    BlackWins,
    Draw,
}

impl FromStr for GameResult {
    type Err = Infallible;

    /// Parses a PGN result token. Anything unrecognized is
    /// [`GameResult::Unknown`].
    fn from_str(s: &str) -> Result<GameResult, Infallible> {
        Ok(match s.trim() {
            "1-0" => GameResult::WhiteWins,
            "0-1" => GameResult::BlackWins,
            "1/2-1/2" => GameResult::Draw,
            "*" => GameResult::Unknown,
            other => {
                log::debug!("unrecognized game result {other:?}");
                GameResult::Unknown
            }
        })
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            GameResult::WhiteWins => "1-0",
            GameResult::BlackWins => "0-1",
            GameResult::Draw => "1/2-1/2",
            GameResult::Unknown => "*",
        })
    }
}

impl GameResult {
    pub fn outcome(self, side: Side) -> Option<Outcome> {
        Some(match (self, side) {
            (GameResult::WhiteWins, Side::White) | (GameResult::BlackWins, Side::Black) => {
                Outcome::Win
            }
            (GameResult::WhiteWins, Side::Black) | (GameResult::BlackWins, Side::White) => {
                Outcome::Loss
            }
            (GameResult::Draw, _) => Outcome::Draw,
            (GameResult::Unknown, _) => return None,
        })
    }

    pub fn white_score(self) -> Option<Score> {
        self.outcome(Side::White).map(Outcome::score)
    }
}

/// A decided game from the point of view of one side.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Outcome {
    Win,
    Draw,
    Loss,
}

impl Outcome {
    pub fn score(self) -> Score {
        match self {
            Outcome::Win => Score::WIN,
            Outcome::Draw => Score::DRAW,
            Outcome::Loss => Score::LOSS,
        }
    }
}

/// Points awarded for each outcome. Only the ratios to `win` matter.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResultPoints {
    pub win: f64,
    pub draw: f64,
    pub loss: f64,
}

impl Default for ResultPoints {
    fn default() -> ResultPoints {
        ResultPoints::FIDE
    }
}

impl ResultPoints {
    pub const FIDE: ResultPoints = ResultPoints {
        win: 1.0,
        draw: 0.5,
        loss: 0.0,
    };

    /// Classical games of Norway Chess.
    pub const NORWAY_CHESS: ResultPoints = ResultPoints {
        win: 3.0,
        draw: 1.25,
        loss: 0.0,
    };

    /// Value of `outcome` on a scale where a win is worth `1.0`.
    pub fn normalized(&self, outcome: Outcome) -> f64 {
        let points = match outcome {
            Outcome::Win => self.win,
            Outcome::Draw => self.draw,
            Outcome::Loss => self.loss,
        };
        points / self.win
    }
}
