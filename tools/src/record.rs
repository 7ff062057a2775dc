use std::{convert::Infallible, fmt, str::FromStr};

use chrono::NaiveDate;
use game_index::{Eval, GameMetrics, GameRecord, GameResult, RatingScalar, Score};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};

/// Space separated evaluations of the main line, `-` for plies without one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Evals(pub Vec<Option<Eval>>);

impl FromStr for Evals {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Evals, Infallible> {
        Ok(Evals(
            s.split_whitespace()
                .enumerate()
                .map(|(i, token)| match token {
                    "-" => None,
                    token => token
                        .parse()
                        .map_err(|err| log::debug!("ply {}: {token:?}: {err}", i + 1))
                        .ok(),
                })
                .collect(),
        ))
    }
}

impl fmt::Display for Evals {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, eval) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match eval {
                Some(eval) => write!(f, "{eval}")?,
                None => f.write_str("-")?,
            }
        }
        Ok(())
    }
}

/// One row of an evaluation table.
#[serde_as]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct RawGame {
    pub white: String,
    pub black: String,
    pub white_elo: Option<f64>,
    pub black_elo: Option<f64>,
    #[serde_as(as = "DisplayFromStr")]
    pub result: GameResult,
    pub event: Option<String>,
    pub date: Option<NaiveDate>,
    #[serde_as(as = "DisplayFromStr")]
    pub evals: Evals,
}

impl RawGame {
    pub fn to_record(&self) -> GameRecord {
        GameRecord {
            plies: self.evals.0.clone(),
            result: self.result,
            white_rating: self.white_elo.map(RatingScalar),
            black_rating: self.black_elo.map(RatingScalar),
        }
    }
}

/// Surname of a player: the part before the comma in `Carlsen, Magnus`,
/// otherwise the last word.
pub fn last_name(name: &str) -> &str {
    match name.split_once(',') {
        Some((last, _)) => last.trim(),
        None => name.split_whitespace().last().unwrap_or_default(),
    }
}

/// Declared points of a side, `...` if the game is undecided.
fn result_cell(score: Option<Score>) -> String {
    match score {
        Some(score) => score.value().to_string(),
        None => "...".to_owned(),
    }
}

/// Metrics of one game together with its metadata.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct GameReport {
    pub key: u64,
    pub white: String,
    pub black: String,
    pub event: Option<String>,
    pub date: Option<NaiveDate>,
    pub white_elo: Option<f64>,
    pub black_elo: Option<f64>,
    pub white_result: String,
    pub black_result: String,
    pub white_gi: f64,
    pub black_gi: f64,
    pub white_gpl: f64,
    pub black_gpl: f64,
    pub white_acpl: f64,
    pub black_acpl: f64,
    pub white_gi_raw: f64,
    pub black_gi_raw: f64,
    pub white_gi_adjusted: f64,
    pub black_gi_adjusted: f64,
    pub white_move_number: u32,
    pub black_move_number: u32,
}

impl GameReport {
    pub fn new(key: u64, game: &RawGame, metrics: &GameMetrics) -> GameReport {
        let white_score = game.result.white_score();
        GameReport {
            key,
            white: game.white.clone(),
            black: game.black.clone(),
            event: game.event.clone(),
            date: game.date,
            white_elo: game.white_elo,
            black_elo: game.black_elo,
            white_result: result_cell(white_score),
            black_result: result_cell(white_score.map(Score::opposite)),
            white_gi: metrics.white.gi_normalized,
            black_gi: metrics.black.gi_normalized,
            white_gpl: metrics.white.gpl_raw,
            black_gpl: metrics.black.gpl_raw,
            white_acpl: metrics.white.acpl,
            black_acpl: metrics.black.acpl,
            white_gi_raw: metrics.white.gi_raw,
            black_gi_raw: metrics.black.gi_raw,
            white_gi_adjusted: metrics.white.gi_adjusted,
            black_gi_adjusted: metrics.black.gi_adjusted,
            white_move_number: metrics.white.move_number,
            black_move_number: metrics.black.move_number,
        }
    }

    /// Reduces both player names to their surnames.
    pub fn with_last_names(mut self) -> GameReport {
        self.white = last_name(&self.white).to_owned();
        self.black = last_name(&self.black).to_owned();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_index::{IndexSystem, StockfishWdl};

    const TABLE: &str = "\
white,black,white_elo,black_elo,result,event,date,evals
Carlsen,Nakamura,2830,2790,1-0,Norway Chess,2024-05-28,0.18 0.25 - 0.31 #5
Firouzja,Caruana,,2795,*,,,0.2 0.1
";

    #[test]
    fn test_parse_evals() {
        let evals: Evals = "0.18 - #-2 junk 1.5".parse().unwrap();
        assert_eq!(
            evals,
            Evals(vec![
                Some(Eval::Centipawns(18)),
                None,
                Some(Eval::Mate(-2)),
                None,
                Some(Eval::Centipawns(150)),
            ])
        );
        assert_eq!(evals.to_string(), "0.18 - #-2 - 1.50");
    }

    #[test]
    fn test_read_table() {
        let mut reader = csv::Reader::from_reader(TABLE.as_bytes());
        let games: Vec<RawGame> = reader.deserialize().collect::<Result<_, _>>().unwrap();
        assert_eq!(games.len(), 2);

        assert_eq!(games[0].result, GameResult::WhiteWins);
        assert_eq!(games[0].date, NaiveDate::from_ymd_opt(2024, 5, 28));
        assert_eq!(games[0].event.as_deref(), Some("Norway Chess"));
        assert_eq!(games[0].evals.0.len(), 5);

        assert_eq!(games[1].white_elo, None);
        assert_eq!(games[1].black_elo, Some(2795.0));
        assert_eq!(games[1].result, GameResult::Unknown);
        assert_eq!(games[1].event, None);
        assert_eq!(games[1].date, None);
        assert_eq!(games[1].to_record().white_rating, None);
    }

    #[test]
    fn test_write_roundtrip() {
        let game = RawGame {
            white: "Ding".to_owned(),
            black: "Gukesh".to_owned(),
            white_elo: Some(2728.0),
            black_elo: None,
            result: GameResult::Draw,
            event: None,
            date: None,
            evals: Evals(vec![Some(Eval::Centipawns(12)), None]),
        };
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.serialize(&game).unwrap();
        let written = writer.into_inner().unwrap();

        let mut reader = csv::Reader::from_reader(&written[..]);
        let read: RawGame = reader.deserialize().next().unwrap().unwrap();
        assert_eq!(read, game);
    }

    #[test]
    fn test_report() {
        let game = RawGame {
            white: "Gukesh".to_owned(),
            black: "Ding".to_owned(),
            result: GameResult::BlackWins,
            evals: Evals(vec![Some(Eval::Centipawns(20)), Some(Eval::Centipawns(-60))]),
            ..RawGame::default()
        };
        let metrics = IndexSystem::new()
            .analyze(&game.to_record(), &StockfishWdl::default())
            .unwrap();
        let report = GameReport::new(7, &game, &metrics);
        assert_eq!(report.key, 7);
        assert_eq!(report.white_result, "0");
        assert_eq!(report.black_result, "1");
        assert_eq!(report.black_gi, metrics.black.gi_normalized);
        assert_eq!(report.white_move_number, 1);
    }

    #[test]
    fn test_last_names() {
        assert_eq!(last_name("Carlsen, Magnus"), "Carlsen");
        assert_eq!(last_name("Magnus Carlsen"), "Carlsen");
        assert_eq!(last_name("Nepomniachtchi"), "Nepomniachtchi");
        assert_eq!(last_name(" "), "");

        let game = RawGame {
            white: "Carlsen, Magnus".to_owned(),
            black: "Hikaru Nakamura".to_owned(),
            evals: Evals(vec![Some(Eval::Centipawns(20))]),
            ..RawGame::default()
        };
        let metrics = IndexSystem::new()
            .analyze(&game.to_record(), &StockfishWdl::default())
            .unwrap();
        let report = GameReport::new(1, &game, &metrics).with_last_names();
        assert_eq!(report.white, "Carlsen");
        assert_eq!(report.black, "Nakamura");
    }

    #[test]
    fn test_undecided_result_cells() {
        assert_eq!(result_cell(None), "...");
        assert_eq!(result_cell(Some(Score::DRAW)), "0.5");
    }
}
