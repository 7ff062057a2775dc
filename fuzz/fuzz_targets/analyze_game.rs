#![no_main]

use arbitrary::{Arbitrary, Unstructured};
use game_index::{
    Eval, GameRecord, GameResult, IndexSystem, PlayerMetrics, RatingScalar, StockfishWdl,
};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary)]
enum ArbitraryEval {
    Centipawns(i32),
    Mate(i32),
    Missing,
}

impl From<ArbitraryEval> for Option<Eval> {
    fn from(eval: ArbitraryEval) -> Option<Eval> {
        match eval {
            ArbitraryEval::Centipawns(cp) => Some(Eval::Centipawns(cp)),
            ArbitraryEval::Mate(moves) => Some(Eval::Mate(moves)),
            ArbitraryEval::Missing => None,
        }
    }
}

#[derive(Arbitrary)]
struct Game {
    plies: Vec<ArbitraryEval>,
    result: u8,
    white_rating: Option<f64>,
    black_rating: Option<f64>,
    wdl_ply: u8,
}

fn clamp_rating(rating: Option<f64>) -> Option<RatingScalar> {
    rating
        .filter(|rating| !rating.is_nan())
        .map(|rating| RatingScalar(rating.clamp(0.0, 4000.0)))
}

fn assert_metrics(metrics: &PlayerMetrics) {
    assert!(metrics.acpl.is_finite());
    assert!(metrics.gpl_raw.is_finite());
    assert!(metrics.gi_raw.is_finite());
    assert!(metrics.gi_adjusted.is_finite());
    assert!(metrics.gi_normalized.is_finite());
}

fuzz_target!(|data: &[u8]| {
    let mut u = Unstructured::new(data);
    let Ok(game) = Game::arbitrary(&mut u) else {
        return;
    };

    let record = GameRecord {
        plies: game.plies.into_iter().map(Option::from).collect(),
        result: match game.result % 4 {
            0 => GameResult::WhiteWins,
            1 => GameResult::BlackWins,
            2 => GameResult::Draw,
            _ => GameResult::Unknown,
        },
        white_rating: clamp_rating(game.white_rating),
        black_rating: clamp_rating(game.black_rating),
    };

    let model = StockfishWdl::new(u32::from(game.wdl_ply));
    let metrics = IndexSystem::new()
        .analyze(&record, &model)
        .expect("stockfish model yields valid probabilities");
    assert_metrics(&metrics.white);
    assert_metrics(&metrics.black);
});
