use std::ops::Sub;

use crate::Score;

/// Number representing playing strength on the Elo scale, such that the
/// difference between two ratings can be used to predict an expected score.
/// Higher is better.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RatingScalar(pub f64);

impl From<RatingScalar> for f64 {
    #[inline]
    fn from(RatingScalar(rating): RatingScalar) -> f64 {
        rating
    }
}

impl From<f64> for RatingScalar {
    #[inline]
    fn from(rating: f64) -> RatingScalar {
        RatingScalar(rating)
    }
}

impl RatingScalar {
    /// Expected score of a player rated `self` against a player rated
    /// `opponent`, using the logistic Elo curve with a 400 point scale.
    #[inline]
    pub fn expected_score_against(self, opponent: RatingScalar) -> Score {
        (self - opponent).expected_score()
    }
}

impl Sub<RatingScalar> for RatingScalar {
    type Output = RatingDifference;

    #[inline]
    fn sub(self, rhs: RatingScalar) -> RatingDifference {
        RatingDifference(self.0 - rhs.0)
    }
}

/// A difference between two ratings.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default)]
pub struct RatingDifference(pub f64);

impl From<RatingDifference> for f64 {
    #[inline]
    fn from(RatingDifference(difference): RatingDifference) -> f64 {
        difference
    }
}

impl From<f64> for RatingDifference {
    #[inline]
    fn from(difference: f64) -> RatingDifference {
        RatingDifference(difference)
    }
}

impl RatingDifference {
    /// Expected score of the side that is `self` points stronger.
    #[inline]
    pub fn expected_score(self) -> Score {
        Score(1.0 / (1.0 + 10f64.powf(-self.0 / 400.0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_ratings() {
        let rating = RatingScalar(2800.0);
        assert_eq!(rating.expected_score_against(rating), Score::DRAW);
    }

    #[test]
    fn test_expected_score_is_symmetric() {
        let strong = RatingScalar(2800.0);
        let weak = RatingScalar(2400.0);
        let expected = strong.expected_score_against(weak);
        assert!((expected.value() - 10.0 / 11.0).abs() < 1e-12);
        assert!(
            (weak.expected_score_against(strong).value() - expected.opposite().value()).abs()
                < 1e-12
        );
    }

    #[test]
    fn test_difference() {
        assert_eq!(
            RatingScalar(2750.0) - RatingScalar(2800.0),
            RatingDifference(-50.0)
        );
        assert!((RatingDifference(-400.0).expected_score().value() - 1.0 / 11.0).abs() < 1e-12);
    }
}
