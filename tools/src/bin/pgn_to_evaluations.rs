use std::{
    error::Error as StdError,
    io,
    io::BufWriter,
};

use game_index_tools::pgn::EvalCollector;
use pgn_reader::BufferedReader;

fn main() -> Result<(), Box<dyn StdError>> {
    env_logger::init();

    let mut reader = BufferedReader::new(io::stdin().lock());
    let mut writer = csv::Writer::from_writer(BufWriter::new(io::stdout().lock()));

    let mut collector = EvalCollector::new();
    let mut games: u64 = 0;

    while let Some(game) = reader.read_game(&mut collector)? {
        writer.serialize(game)?;
        games += 1;
    }

    writer.flush()?;
    log::info!("extracted {games} games");
    Ok(())
}
