use std::{
    collections::BTreeMap,
    error::Error as StdError,
    fs::File,
    io,
    io::{BufReader, BufWriter, Read, Write as _},
    path::PathBuf,
};

use clap::{Parser, ValueEnum};
use game_index::{IndexSystem, ResultPoints, StockfishWdl};
use game_index_tools::record::{GameReport, RawGame};
use rayon::prelude::*;

#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[derive(Debug, Copy, Clone, ValueEnum)]
enum Format {
    Csv,
    Json,
}

/// Computes GI, GPL and ACPL for every game of an evaluation table, as
/// written by `pgn_to_evaluations`.
#[derive(Parser, Debug)]
struct Opt {
    /// Evaluation table. Reads stdin if omitted.
    input: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = Format::Csv)]
    format: Format,
    /// Game ply the win rate model is calibrated for.
    #[arg(long, default_value_t = 30)]
    wdl_ply: u32,
    /// Opponent rating against which a win is worth exactly one point.
    #[arg(long, default_value_t = 2800.0)]
    reference_rating: f64,
    /// Score wins, draws and losses 3, 1.25 and 0.
    #[arg(long)]
    norway_chess: bool,
    /// Decimal places of reported values.
    #[arg(long, default_value_t = 4)]
    precision: u32,
    /// Report players by surname only.
    #[arg(long)]
    last_names: bool,
}

fn main() -> Result<(), Box<dyn StdError>> {
    env_logger::init();

    let opt = Opt::parse();

    let system = IndexSystem::builder()
        .reference_rating(opt.reference_rating)
        .result_points(if opt.norway_chess {
            ResultPoints::NORWAY_CHESS
        } else {
            ResultPoints::FIDE
        })
        .precision(opt.precision)
        .build();
    let model = StockfishWdl::new(opt.wdl_ply);

    let input: Box<dyn Read> = match opt.input {
        Some(ref path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(io::stdin().lock()),
    };
    let mut reader = csv::Reader::from_reader(input);
    let games: Vec<RawGame> = reader.deserialize().collect::<Result<_, _>>()?;
    log::info!("read {} games", games.len());

    let reports: Vec<GameReport> = games
        .par_iter()
        .enumerate()
        .filter_map(|(i, game)| {
            let key = i as u64 + 1;
            match system.analyze(&game.to_record(), &model) {
                Ok(metrics) => {
                    let report = GameReport::new(key, game, &metrics);
                    Some(if opt.last_names {
                        report.with_last_names()
                    } else {
                        report
                    })
                }
                Err(err) => {
                    log::warn!("skipping game {key} ({} - {}): {err}", game.white, game.black);
                    None
                }
            }
        })
        .collect();

    let mut stdout = BufWriter::new(io::stdout().lock());

    match opt.format {
        Format::Csv => {
            let mut writer = csv::Writer::from_writer(&mut stdout);
            for report in &reports {
                writer.serialize(report)?;
            }
            writer.flush()?;
        }
        Format::Json => {
            let by_key: BTreeMap<u64, &GameReport> =
                reports.iter().map(|report| (report.key, report)).collect();
            serde_json::to_writer_pretty(&mut stdout, &by_key)?;
            writeln!(stdout)?;
        }
    }

    stdout.flush()?;
    log::info!("analyzed {} of {} games", reports.len(), games.len());
    Ok(())
}
