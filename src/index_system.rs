use crate::{
    acpl::average_centipawn_loss,
    gpl::{game_point_loss, PointLoss},
    AnnotatedGame, BySide, Error, EvaluationSequence, GameMetrics, GameResult, PlayerMetrics,
    RatingScalar, ResultPoints, WdlModel,
};

#[derive(Debug, Clone)]
pub struct IndexSystemBuilder {
    reference_rating: f64,

    normalization_scale: f64,
    normalization_offset: f64,

    result_points: ResultPoints,

    precision: u32,
}

impl Default for IndexSystemBuilder {
    fn default() -> IndexSystemBuilder {
        IndexSystemBuilder::new()
    }
}

impl IndexSystemBuilder {
    pub fn new() -> IndexSystemBuilder {
        IndexSystemBuilder {
            reference_rating: 2800.0,

            normalization_scale: 157.57,
            normalization_offset: 18.55,

            result_points: ResultPoints::FIDE,

            precision: 4,
        }
    }

    /// Rating of the opponent that a win of exactly one point is measured
    /// against.
    pub fn reference_rating(&mut self, reference_rating: f64) -> &mut Self {
        assert!(reference_rating.is_finite());
        self.reference_rating = reference_rating;
        self
    }

    pub fn normalization(&mut self, scale: f64, offset: f64) -> &mut Self {
        assert!(scale.is_finite() && offset.is_finite());
        self.normalization_scale = scale;
        self.normalization_offset = offset;
        self
    }

    pub fn result_points(&mut self, result_points: ResultPoints) -> &mut Self {
        assert!(result_points.win > 0.0);
        assert!(result_points.draw.is_finite() && result_points.loss.is_finite());
        self.result_points = result_points;
        self
    }

    /// Decimal places of reported metrics.
    pub fn precision(&mut self, precision: u32) -> &mut Self {
        assert!(precision <= 15);
        self.precision = precision;
        self
    }

    pub fn build(&self) -> IndexSystem {
        IndexSystem {
            reference_rating: RatingScalar(self.reference_rating),

            normalization_scale: self.normalization_scale,
            normalization_offset: self.normalization_offset,

            result_points: self.result_points,

            precision: self.precision,
        }
    }
}

/// Parameters for turning game point loss into a game index.
#[derive(Debug, Clone)]
pub struct IndexSystem {
    reference_rating: RatingScalar,

    normalization_scale: f64,
    normalization_offset: f64,

    result_points: ResultPoints,

    precision: u32,
}

impl Default for IndexSystem {
    fn default() -> IndexSystem {
        IndexSystem::new()
    }
}

impl IndexSystem {
    pub fn builder() -> IndexSystemBuilder {
        IndexSystemBuilder::default()
    }

    pub fn new() -> IndexSystem {
        IndexSystem::builder().build()
    }

    pub fn reference_rating(&self) -> RatingScalar {
        self.reference_rating
    }

    pub fn normalization_scale(&self) -> f64 {
        self.normalization_scale
    }

    pub fn normalization_offset(&self) -> f64 {
        self.normalization_offset
    }

    pub fn result_points(&self) -> ResultPoints {
        self.result_points
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Game index of both sides before any correction: the points each
    /// side scored minus its game point loss. Undecided games use the
    /// expected scores after the last ply instead of the result.
    pub fn raw_game_index(&self, result: GameResult, point_loss: &PointLoss) -> BySide<f64> {
        point_loss.gpl.map(|side, gpl| {
            let points = match result.outcome(side) {
                Some(outcome) => self.result_points.normalized(outcome),
                None => point_loss.final_expectation.get(side).value(),
            };
            points - gpl
        })
    }

    /// Shrinks a game index earned against an opponent weaker than the
    /// reference rating, and inflates one earned against a stronger
    /// opponent, in proportion to its magnitude.
    pub fn adjusted_game_index(&self, raw: f64, opponent: RatingScalar) -> f64 {
        let expected = opponent.expected_score_against(self.reference_rating).value();
        raw - (1.0 - 2.0 * expected) * raw.abs()
    }

    /// Maps an adjusted game index onto the reporting scale.
    pub fn normalized_game_index(&self, adjusted: f64) -> f64 {
        self.normalization_scale * adjusted + self.normalization_offset
    }

    /// Runs the full pipeline on one game. Reported values are rounded to
    /// [`IndexSystem::precision`] places.
    pub fn analyze<G, M>(&self, game: &G, model: &M) -> Result<GameMetrics, Error>
    where
        G: AnnotatedGame + ?Sized,
        M: WdlModel + ?Sized,
    {
        let evals = EvaluationSequence::extract(game);
        let acpl = average_centipawn_loss(&evals);
        let point_loss = game_point_loss(&evals, model)?;
        let raw = self.raw_game_index(game.result(), &point_loss);

        Ok(raw.map(|side, gi_raw| {
            let opponent = game
                .rating(side.other())
                .unwrap_or(self.reference_rating);
            let gi_adjusted = self.adjusted_game_index(gi_raw, opponent);
            PlayerMetrics {
                acpl: *acpl.get(side),
                gpl_raw: *point_loss.gpl.get(side),
                gi_raw,
                gi_adjusted,
                gi_normalized: self.normalized_game_index(gi_adjusted),
                move_number: *point_loss.moves.get(side),
            }
            .rounded(self.precision)
        }))
    }
}
