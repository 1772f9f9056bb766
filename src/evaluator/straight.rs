use crate::cards::Rank;

/// Whether five ranks form a straight, and the straight's high rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightShape {
    pub is_straight: bool,
    pub top: Option<Rank>,
}

impl StraightShape {
    /// Detect a straight in five ranks (any order).
    ///
    /// A straight is five consecutive strengths, or the wheel A-2-3-4-5
    /// where the ace plays low and the Five is the top rank. No other
    /// wraparound exists: J-Q-K-A-2 is not a straight.
    pub fn detect(ranks: &[Rank; 5]) -> Self {
        let mut sorted = *ranks;
        sorted.sort_by(|a, b| b.cmp(a));

        let consecutive = (0..4).all(|i| sorted[i].strength() == sorted[i + 1].strength() + 1);
        if consecutive {
            return StraightShape { is_straight: true, top: Some(sorted[0]) };
        }

        if sorted == [Rank::Ace, Rank::Five, Rank::Four, Rank::Three, Rank::Two] {
            return StraightShape { is_straight: true, top: Some(Rank::Five) };
        }

        StraightShape { is_straight: false, top: None }
    }
}
