/// One of the two players of a game.
#[derive(Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    White,
    Black,
}

impl Side {
    #[must_use]
    pub fn other(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// The side whose move completed ply `index` of an
    /// [`EvaluationSequence`](crate::EvaluationSequence). Index `1` is
    /// White's first move. Index `0` is the synthetic pre-game entry and
    /// reports [`Side::Black`].
    pub fn of_ply(index: usize) -> Side {
        if index % 2 == 1 {
            Side::White
        } else {
            Side::Black
        }
    }
}

/// A pair of values, one for each side.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BySide<T> {
    pub white: T,
    pub black: T,
}

impl<T> BySide<T> {
    pub fn new(white: T, black: T) -> BySide<T> {
        BySide { white, black }
    }

    pub fn get(&self, side: Side) -> &T {
        match side {
            Side::White => &self.white,
            Side::Black => &self.black,
        }
    }

    pub fn get_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::White => &mut self.white,
            Side::Black => &mut self.black,
        }
    }

    pub fn map<U, F>(self, mut f: F) -> BySide<U>
    where
        F: FnMut(Side, T) -> U,
    {
        BySide {
            white: f(Side::White, self.white),
            black: f(Side::Black, self.black),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ply_parity() {
        assert_eq!(Side::of_ply(1), Side::White);
        assert_eq!(Side::of_ply(2), Side::Black);
        assert_eq!(Side::of_ply(3), Side::White);
        assert_eq!(Side::of_ply(0), Side::Black);
    }

    #[test]
    fn test_by_side() {
        let mut pair = BySide::new(1, 2);
        *pair.get_mut(Side::Black) += 10;
        assert_eq!(*pair.get(Side::Black), 12);
        assert_eq!(*pair.get(Side::White.other().other()), 1);
        assert_eq!(pair.map(|_, v| v * 2), BySide::new(2, 24));
    }
}
