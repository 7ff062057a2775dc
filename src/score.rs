use std::ops;

/// An expected score or game result in the range `0.0..=1.0`, where `0.0` is
/// a loss and `1.0` is a win.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Score(pub f64);

impl From<Score> for f64 {
    #[inline]
    fn from(Score(score): Score) -> f64 {
        score
    }
}

impl From<f64> for Score {
    #[inline]
    fn from(score: f64) -> Score {
        Score(score)
    }
}

impl Score {
    pub const LOSS: Score = Score(0.0);
    pub const DRAW: Score = Score(0.5);
    pub const WIN: Score = Score(1.0);

    /// The score of the other side.
    #[must_use]
    #[inline]
    pub fn opposite(self) -> Score {
        Score(1.0 - self.0)
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl ops::Add<Score> for Score {
    type Output = Score;

    #[inline]
    fn add(self, rhs: Score) -> Score {
        Score(self.0 + rhs.0)
    }
}

impl ops::Sub<Score> for Score {
    type Output = Score;

    #[inline]
    fn sub(self, rhs: Score) -> Score {
        Score(self.0 - rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite() {
        assert_eq!(Score::WIN.opposite(), Score::LOSS);
        assert_eq!(Score::DRAW.opposite(), Score::DRAW);
        assert_eq!(Score(0.25).opposite(), Score(0.75));
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(Score(0.75) - Score(0.5), Score(0.25));
        assert_eq!(f64::from(Score(0.25) + Score(0.5)), 0.75);
    }
}
