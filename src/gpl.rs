//! Game point loss: the expected score each side gives away with its own
//! moves.

use crate::{BySide, Error, EvaluationSequence, Score, Side, WdlModel};

/// Result of folding a game's evaluations into point losses.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointLoss {
    /// Accumulated expected-score loss. Negative totals are net gains.
    pub gpl: BySide<f64>,
    /// Number of moves counted for each side.
    pub moves: BySide<u32>,
    /// Expected scores after the last ply, standing in for the result of
    /// unfinished games.
    pub final_expectation: BySide<Score>,
}

#[derive(Debug, Copy, Clone)]
struct Accumulator {
    gpl: BySide<f64>,
    moves: BySide<u32>,
    last: BySide<Score>,
}

impl Accumulator {
    fn new() -> Accumulator {
        Accumulator {
            gpl: BySide::new(0.0, 0.0),
            moves: BySide::new(0, 0),
            last: BySide::new(Score::DRAW, Score::DRAW),
        }
    }

    fn step<M: WdlModel + ?Sized>(
        mut self,
        model: &M,
        ply: usize,
        before: f64,
        after: f64,
    ) -> Result<Accumulator, Error> {
        let mover = Side::of_ply(ply);
        let turn = mover.other();

        let before = model.wdl(centipawns(before)).validate(ply)?.expected_scores(turn);
        let after = model.wdl(centipawns(after)).validate(ply)?.expected_scores(turn);

        let loss = match mover {
            Side::White => after.white - before.white,
            Side::Black => before.black - after.black,
        };
        log::trace!("ply {ply}: {mover:?} loses {:.4}", loss.value());

        *self.gpl.get_mut(mover) += loss.value();
        *self.moves.get_mut(mover) += 1;
        self.last = after;
        Ok(self)
    }
}

/// Truncates toward zero, matching how engines report whole centipawns.
fn centipawns(pawns: f64) -> i32 {
    (100.0 * pawns) as i32
}

/// Folds `evals` into raw game point loss for both sides.
///
/// Each ply compares the expected scores before and after the move,
/// crediting the model's `win` probability to the side to move after the
/// ply. Ply `0` is compared against ply `1` and is counted for Black, which
/// is why one Black move is deducted from the final count.
pub fn game_point_loss<M: WdlModel + ?Sized>(
    evals: &EvaluationSequence,
    model: &M,
) -> Result<PointLoss, Error> {
    let pawns = evals.as_slice();

    let acc = pawns
        .iter()
        .enumerate()
        .try_fold(Accumulator::new(), |acc, (ply, &after)| {
            let before = match ply {
                0 => pawns.get(1).copied().unwrap_or(after),
                _ => pawns[ply - 1],
            };
            acc.step(model, ply, before, after)
        })?;

    Ok(PointLoss {
        gpl: acc.gpl,
        moves: BySide::new(acc.moves.white, acc.moves.black.saturating_sub(1)),
        final_expectation: acc.last,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{StockfishWdl, Wdl};

    fn linear(cp: i32) -> Wdl {
        let win = (0.5 + f64::from(cp) / 2000.0).clamp(0.0, 1.0);
        Wdl {
            win,
            draw: 0.0,
            loss: 1.0 - win,
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_no_swings() {
        let evals = EvaluationSequence::from_pawns(vec![0.0, 0.0, 0.0]);
        let loss = game_point_loss(&evals, &StockfishWdl::default()).unwrap();
        assert_eq!(loss.gpl, BySide::new(0.0, 0.0));
        assert_eq!(loss.moves, BySide::new(1, 1));
        assert_close(loss.final_expectation.white.value(), 0.5);
        assert_close(loss.final_expectation.black.value(), 0.5);
    }

    #[test]
    fn test_white_mistake() {
        let evals = EvaluationSequence::from_pawns(vec![0.0, 0.0, 0.0, -2.0]);
        let loss = game_point_loss(&evals, &linear).unwrap();
        assert_close(loss.gpl.white, 0.1);
        assert_close(loss.gpl.black, 0.0);
        assert_eq!(loss.moves, BySide::new(2, 1));
        assert_close(loss.final_expectation.white.value(), 0.6);
        assert_close(loss.final_expectation.black.value(), 0.4);
    }

    #[test]
    fn test_black_gain() {
        let evals = EvaluationSequence::from_pawns(vec![0.0, 1.0, 0.0]);
        let loss = game_point_loss(&evals, &linear).unwrap();
        assert_close(loss.gpl.white, 0.0);
        assert_close(loss.gpl.black, -0.05);
        assert_eq!(loss.moves, BySide::new(1, 1));
    }

    #[test]
    fn test_truncates_centipawns() {
        assert_eq!(centipawns(0.29), 28);
        assert_eq!(centipawns(-0.29), -28);
    }

    #[test]
    fn test_without_evaluations() {
        let evals = EvaluationSequence::from_pawns(vec![0.0]);
        let loss = game_point_loss(&evals, &linear).unwrap();
        assert_eq!(loss.gpl, BySide::new(0.0, 0.0));
        assert_eq!(loss.moves, BySide::new(0, 0));
        assert_eq!(loss.final_expectation, BySide::new(Score(0.5), Score(0.5)));
    }

    #[test]
    fn test_deterministic() {
        let evals = EvaluationSequence::from_pawns(vec![0.0, 0.3, 0.2, 1.4, -0.7, -0.6, 99.98]);
        let model = StockfishWdl::default();
        let first = game_point_loss(&evals, &model).unwrap();
        let second = game_point_loss(&evals, &model).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.moves, BySide::new(3, 3));
    }

    #[test]
    fn test_invalid_model_reports_ply() {
        let model = |cp: i32| {
            if cp < 0 {
                Wdl {
                    win: 1.5,
                    draw: 0.0,
                    loss: -0.5,
                }
            } else {
                linear(cp)
            }
        };
        let evals = EvaluationSequence::from_pawns(vec![0.0, 0.2, 0.1, -0.4]);
        let err = game_point_loss(&evals, &model).unwrap_err();
        assert!(matches!(err, Error::InvalidProbabilities { ply: 3, .. }));
    }
}
