//! Conversion of centipawn evaluations into win/draw/loss probabilities.

use crate::{BySide, Error, Score, Side};

/// Tolerance for the sum of the three fractions of a [`Wdl`].
const PROBABILITY_TOLERANCE: f64 = 1e-3;

/// Win, draw and loss probabilities implied by an evaluation.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Wdl {
    pub win: f64,
    pub draw: f64,
    pub loss: f64,
}

impl Wdl {
    /// Builds probabilities from per-mille counts, as reported by UCI engines.
    pub fn from_permille(wins: i32, draws: i32, losses: i32) -> Wdl {
        Wdl {
            win: f64::from(wins) / 1000.0,
            draw: f64::from(draws) / 1000.0,
            loss: f64::from(losses) / 1000.0,
        }
    }

    /// Expected scores of both sides, where `win` counts for `turn` and
    /// `loss` counts for the other side. Draws are worth half a point.
    pub fn expected_scores(self, turn: Side) -> BySide<Score> {
        let favoured = Score(self.win + 0.5 * self.draw);
        let other = Score(self.loss + 0.5 * self.draw);
        match turn {
            Side::White => BySide::new(favoured, other),
            Side::Black => BySide::new(other, favoured),
        }
    }

    pub fn is_valid(self) -> bool {
        [self.win, self.draw, self.loss]
            .into_iter()
            .all(|p| p.is_finite() && (0.0..=1.0).contains(&p))
            && (self.win + self.draw + self.loss - 1.0).abs() <= PROBABILITY_TOLERANCE
    }

    /// Rejects probabilities that are out of range or do not sum to one.
    /// They are never clamped.
    pub(crate) fn validate(self, ply: usize) -> Result<Wdl, Error> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(Error::InvalidProbabilities { ply, wdl: self })
        }
    }
}

/// A calibrated mapping from a centipawn score (White's point of view) to
/// win/draw/loss probabilities.
pub trait WdlModel {
    fn wdl(&self, centipawns: i32) -> Wdl;
}

impl<F> WdlModel for F
where
    F: Fn(i32) -> Wdl,
{
    fn wdl(&self, centipawns: i32) -> Wdl {
        self(centipawns)
    }
}

/// Win rate model of Stockfish 16.1, parameterized by game ply.
///
/// The winning chance of a score `x` is the logistic `1 / (1 + exp((a - x) / b))`,
/// where `a` and `b` are cubic polynomials fitted against the amount of play
/// left in the game.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct StockfishWdl {
    ply: u32,
}

impl Default for StockfishWdl {
    fn default() -> StockfishWdl {
        StockfishWdl { ply: 30 }
    }
}

impl StockfishWdl {
    const NORMALIZE_TO_PAWN_VALUE: f64 = 356.0;
    const AS: [f64; 4] = [-1.062_497_02, 7.420_169_37, 0.894_256_29, 348.603_561_74];
    const BS: [f64; 4] = [-5.331_221_90, 39.578_315_33, -90.844_737_71, 123.406_207_48];

    pub fn new(ply: u32) -> StockfishWdl {
        StockfishWdl { ply }
    }

    pub fn ply(&self) -> u32 {
        self.ply
    }

    fn wins(&self, centipawns: i32) -> i32 {
        let m = (f64::from(self.ply) / 2.0 + 1.0).clamp(8.0, 120.0) / 32.0;
        let [a0, a1, a2, a3] = StockfishWdl::AS;
        let [b0, b1, b2, b3] = StockfishWdl::BS;
        let a = ((a0 * m + a1) * m + a2) * m + a3;
        let b = ((b0 * m + b1) * m + b2) * m + b3;
        let x = (f64::from(centipawns) * StockfishWdl::NORMALIZE_TO_PAWN_VALUE / 100.0)
            .clamp(-4000.0, 4000.0);
        (0.5 + 1000.0 / (1.0 + ((a - x) / b).exp())) as i32
    }
}

impl WdlModel for StockfishWdl {
    fn wdl(&self, centipawns: i32) -> Wdl {
        let wins = self.wins(centipawns);
        let losses = self.wins(centipawns.saturating_neg());
        Wdl::from_permille(wins, 1000 - wins - losses, losses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stockfish_equal_position() {
        let wdl = StockfishWdl::default().wdl(0);
        assert_eq!(wdl, Wdl::from_permille(18, 964, 18));
    }

    #[test]
    fn test_stockfish_monotonic() {
        let model = StockfishWdl::default();
        let mut last = model.wdl(-1000);
        for cp in (-900..=1000).step_by(100) {
            let wdl = model.wdl(cp);
            assert!(wdl.win >= last.win);
            assert!(wdl.loss <= last.loss);
            assert!(wdl.is_valid());
            last = wdl;
        }
    }

    #[test]
    fn test_stockfish_mate_scores_saturate() {
        let model = StockfishWdl::default();
        assert_eq!(model.wdl(9997), Wdl::from_permille(1000, 0, 0));
        assert_eq!(model.wdl(-9997), Wdl::from_permille(0, 0, 1000));
        assert!(model.wdl(i32::MIN).is_valid());
    }

    #[test]
    fn test_expected_scores_sum_to_one() {
        let model = StockfishWdl::new(60);
        for cp in [-2500, -340, -17, 0, 5, 88, 410, 3000] {
            let wdl = model.wdl(cp);
            for turn in [Side::White, Side::Black] {
                let scores = wdl.expected_scores(turn);
                assert!((scores.white.value() + scores.black.value() - 1.0).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_expected_scores_by_turn() {
        let wdl = Wdl {
            win: 0.5,
            draw: 0.2,
            loss: 0.3,
        };
        let scores = wdl.expected_scores(Side::White);
        assert!((scores.white.value() - 0.6).abs() < 1e-12);
        assert!((scores.black.value() - 0.4).abs() < 1e-12);
        let scores = wdl.expected_scores(Side::Black);
        assert!((scores.white.value() - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_validate() {
        let wdl = Wdl {
            win: 1.2,
            draw: 0.0,
            loss: -0.2,
        };
        assert!(matches!(
            wdl.validate(7),
            Err(Error::InvalidProbabilities { ply: 7, .. })
        ));
        let wdl = Wdl {
            win: 0.3,
            draw: 0.3,
            loss: 0.3,
        };
        assert!(wdl.validate(0).is_err());
        assert!(Wdl::from_permille(333, 334, 333).validate(0).is_ok());
    }

    #[test]
    fn test_closure_model() {
        let model = |cp: i32| {
            if cp > 0 {
                Wdl::from_permille(1000, 0, 0)
            } else {
                Wdl::from_permille(0, 1000, 0)
            }
        };
        assert_eq!(model.wdl(1).win, 1.0);
        assert_eq!(model.wdl(0).draw, 1.0);
    }
}
