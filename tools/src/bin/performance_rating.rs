use std::error::Error as StdError;

use clap::Parser;
use game_index::RatingScalar;
use game_index_tools::performance::{PerformanceRating, Series};

/// Performance rating of a player over a series of games. Falls back to an
/// estimated performance rating for zero and perfect scores.
#[derive(Parser, Debug)]
struct Opt {
    /// Points scored.
    #[arg(long)]
    score: f64,
    /// Number of games played.
    #[arg(long)]
    games: u32,
    /// Average rating of the opponents.
    #[arg(long)]
    opponents: f64,
    /// Largest accepted probability of the observed extreme result.
    #[arg(long, default_value_t = 0.5)]
    threshold: f64,
}

fn main() -> Result<(), Box<dyn StdError>> {
    env_logger::init();

    let opt = Opt::parse();
    let series = Series::new(opt.score, opt.games, RatingScalar(opt.opponents))?;

    let performance = series.performance_rating(opt.threshold)?;
    let label = match performance {
        PerformanceRating::Tournament(_) => "TPR",
        PerformanceRating::Estimated(_) => "EPR",
    };
    println!("{label}: {:.0}", f64::from(performance.rating()));
    Ok(())
}
