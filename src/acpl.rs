use crate::{BySide, EvaluationSequence, Side};

/// Average centipawn loss of both sides.
///
/// The loss of a move is the drop of the evaluation from the mover's point
/// of view, so improvements count as negative losses. A side without moves
/// has an ACPL of exactly `0.0`.
pub fn average_centipawn_loss(evals: &EvaluationSequence) -> BySide<f64> {
    let mut total = BySide::new(0.0, 0.0);
    let mut moves = BySide::new(0u32, 0u32);

    for (ply, before, after) in evals.moves() {
        let delta = 100.0 * (after - before);
        let side = Side::of_ply(ply);
        *total.get_mut(side) += match side {
            Side::White => -delta,
            Side::Black => delta,
        };
        *moves.get_mut(side) += 1;
    }

    total.map(|side, total| match *moves.get(side) {
        0 => 0.0,
        n => total / f64::from(n),
    })
}
