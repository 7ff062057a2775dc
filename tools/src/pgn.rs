//! Extraction of headers and `[%eval ...]` annotations from PGN games.
//! Only the main line is followed and moves are counted, never played.

use std::{io, mem, str};

use chrono::NaiveDate;
use game_index::Eval;
use pgn_reader::{BufferedReader, RawComment, RawHeader, SanPlus, Skip, Visitor};

use crate::record::{Evals, RawGame};

fn parse_elo(v: &str) -> Option<f64> {
    v.parse().ok().filter(|elo: &f64| elo.is_finite())
}

/// Finds the evaluation in a comment such as `[%eval 0.17] [%clk 0:03:00]`.
/// A trailing `,depth` is ignored.
fn comment_eval(comment: &str) -> Option<Eval> {
    let (_, rest) = comment.split_once("[%eval")?;
    let (value, _) = rest.split_once(']')?;
    let value = value.trim();
    let value = value.split_once(',').map_or(value, |(value, _)| value);
    Eval::from_annotation(value)
        .map_err(|err| log::debug!("ignoring evaluation {value:?}: {err}"))
        .ok()
}

/// Collects one [`RawGame`] per PGN game.
#[derive(Debug, Default)]
pub struct EvalCollector {
    game: RawGame,
    plies: Vec<Option<Eval>>,
}

impl EvalCollector {
    pub fn new() -> EvalCollector {
        EvalCollector::default()
    }
}

impl Visitor for EvalCollector {
    type Result = RawGame;

    fn begin_game(&mut self) {
        *self = EvalCollector::default();
    }

    fn header(&mut self, key: &[u8], value: RawHeader<'_>) {
        let value = match value.decode_utf8() {
            Ok(value) => value,
            Err(err) => {
                log::debug!("ignoring header {:?}: {err}", String::from_utf8_lossy(key));
                return;
            }
        };
        let game = &mut self.game;
        match key {
            b"White" => game.white = value.into_owned(),
            b"Black" => game.black = value.into_owned(),
            b"WhiteElo" => game.white_elo = parse_elo(&value),
            b"BlackElo" => game.black_elo = parse_elo(&value),
            b"Result" => game.result = value.parse().unwrap_or_default(),
            b"Event" => game.event = Some(value.into_owned()).filter(|v| !v.is_empty() && v != "?"),
            b"Date" => game.date = NaiveDate::parse_from_str(&value, "%Y.%m.%d").ok(),
            _ => {}
        }
    }

    fn san(&mut self, _san_plus: SanPlus) {
        self.plies.push(None);
    }

    fn comment(&mut self, comment: RawComment<'_>) {
        let Ok(comment) = str::from_utf8(comment.as_bytes()) else {
            return;
        };
        if let (Some(eval), Some(last)) = (comment_eval(comment), self.plies.last_mut()) {
            *last = Some(eval);
        }
    }

    fn begin_variation(&mut self) -> Skip {
        Skip(true) // stay in the mainline
    }

    fn end_game(&mut self) -> RawGame {
        let collector = mem::take(self);
        RawGame {
            evals: Evals(collector.plies),
            ..collector.game
        }
    }
}

/// Reads every game from `pgn`.
pub fn read_games<R: io::Read>(pgn: R) -> io::Result<Vec<RawGame>> {
    let mut reader = BufferedReader::new(pgn);
    let mut collector = EvalCollector::new();
    let mut games = Vec::new();
    while let Some(game) = reader.read_game(&mut collector)? {
        games.push(game);
    }
    Ok(games)
}
