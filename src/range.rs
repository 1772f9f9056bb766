use crate::cards::{parse_cards, parse_packed_cards, Card, CardParseError, Rank, Suit};
use rand::Rng;
use std::fmt;
use std::str::FromStr;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RangeError {
    #[error("invalid hand description: '{0}'")]
    InvalidDescriptor(String),
    #[error("duplicate hole cards: {0}")]
    DuplicateHoleCards(String),
    #[error("expected exactly two hole cards, got {0}")]
    HoleCount(usize),
    #[error("no playable combinations left in range '{0}'")]
    NoCombinations(String),
    #[error(transparent)]
    CardParse(#[from] CardParseError),
}

/// A player's two private hole cards.
///
/// Equality is set-based: `AsKd` and `KdAs` are the same starting hand.
/// The cards are stored in normalized (descending) order so the derived
/// `Eq`/`Hash` agree with that.
///
/// ```
/// use holdem_odds::range::StartingHand;
///
/// let a: StartingHand = "AsKd".parse().unwrap();
/// let b: StartingHand = "Kd As".parse().unwrap();
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StartingHand {
    cards: [Card; 2],
}

impl StartingHand {
    pub fn try_new(a: Card, b: Card) -> Result<Self, RangeError> {
        if a == b {
            return Err(RangeError::DuplicateHoleCards(a.to_string()));
        }
        let cards = if a > b { [a, b] } else { [b, a] };
        Ok(Self { cards })
    }

    pub fn from_slice(slice: &[Card]) -> Result<Self, RangeError> {
        if slice.len() != 2 {
            return Err(RangeError::HoleCount(slice.len()));
        }
        Self::try_new(slice[0], slice[1])
    }

    pub fn cards(&self) -> [Card; 2] {
        self.cards
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards[0] == card || self.cards[1] == card
    }
}

impl fmt::Display for StartingHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.cards[0], self.cards[1])
    }
}

impl FromStr for StartingHand {
    type Err = RangeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let cards = if t.contains(|c: char| c.is_whitespace() || c == ',') {
            parse_cards(t)?
        } else {
            parse_packed_cards(t)?
        };
        Self::from_slice(&cards)
    }
}

/// The set of concrete starting hands a shorthand expands to.
///
/// A fully specified hand ("AsAd") is a one-member range; "TT", "AKs" and
/// "AKo" expand to 6, 4 and 12 members. One member is chosen uniformly at
/// random each simulation iteration.
///
/// ```
/// use holdem_odds::range::HandRange;
///
/// assert_eq!(HandRange::parse("TT", &[]).unwrap().len(), 6);
/// assert_eq!(HandRange::parse("AKs", &[]).unwrap().len(), 4);
/// assert_eq!(HandRange::parse("AKo", &[]).unwrap().len(), 12);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandRange {
    descriptor: String,
    hands: Vec<StartingHand>,
}

impl HandRange {
    /// Build a range from already-enumerated hands. Empty ranges are rejected.
    pub fn try_new(descriptor: impl Into<String>, hands: Vec<StartingHand>) -> Result<Self, RangeError> {
        let descriptor = descriptor.into();
        if hands.is_empty() {
            return Err(RangeError::NoCombinations(descriptor));
        }
        Ok(Self { descriptor, hands })
    }

    /// Expand a shorthand description into a range.
    ///
    /// Supported forms: an exact hand ("AsAd"), a pocket pair ("TT"), a
    /// suited combo ("AKs"), or an offsuit combo ("AKo"). Generated
    /// combinations containing any of `unavailable` (board or dead cards)
    /// are left out; an exact hand is never filtered here, since a clash
    /// there is a configuration error the simulation reports at setup.
    pub fn parse(descriptor: &str, unavailable: &[Card]) -> Result<Self, RangeError> {
        let t = descriptor.trim();
        let chars: Vec<char> = t.chars().collect();
        let hands = match chars.len() {
            4 => {
                let cards = parse_packed_cards(t)?;
                vec![StartingHand::from_slice(&cards)?]
            }
            2 => {
                if chars[0].to_ascii_uppercase() != chars[1].to_ascii_uppercase() {
                    return Err(RangeError::InvalidDescriptor(descriptor.to_string()));
                }
                let rank = Rank::try_from(chars[0]).map_err(CardParseError::from)?;
                pair_hands(rank, unavailable)
            }
            3 => {
                let r1 = Rank::try_from(chars[0]).map_err(CardParseError::from)?;
                let r2 = Rank::try_from(chars[1]).map_err(CardParseError::from)?;
                if r1 == r2 {
                    // "AAs"/"AAo" has no meaning; pairs are written "AA".
                    return Err(RangeError::InvalidDescriptor(descriptor.to_string()));
                }
                match chars[2].to_ascii_lowercase() {
                    's' => suited_hands(r1, r2, unavailable),
                    'o' => offsuit_hands(r1, r2, unavailable),
                    _ => return Err(RangeError::InvalidDescriptor(descriptor.to_string())),
                }
            }
            _ => return Err(RangeError::InvalidDescriptor(descriptor.to_string())),
        };
        Self::try_new(t, hands)
    }

    /// Parse a comma-separated list of shorthands into one range per player.
    pub fn parse_list(input: &str, unavailable: &[Card]) -> Result<Vec<Self>, RangeError> {
        input
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|desc| Self::parse(desc, unavailable))
            .collect()
    }

    pub fn descriptor(&self) -> &str {
        &self.descriptor
    }

    pub fn hands(&self) -> &[StartingHand] {
        &self.hands
    }

    pub fn len(&self) -> usize {
        self.hands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hands.is_empty()
    }

    /// A range with exactly one member pins the player's hole cards.
    pub fn as_singleton(&self) -> Option<StartingHand> {
        match self.hands.as_slice() {
            [hand] => Some(*hand),
            _ => None,
        }
    }

    /// Choose one member uniformly at random.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> StartingHand {
        // Non-emptiness is a construction invariant.
        self.hands[rng.random_range(0..self.hands.len())]
    }
}

impl fmt::Display for HandRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.descriptor)
    }
}

fn pair_hands(rank: Rank, unavailable: &[Card]) -> Vec<StartingHand> {
    let live: Vec<Card> = Suit::ALL
        .iter()
        .map(|&s| Card::new(rank, s))
        .filter(|c| !unavailable.contains(c))
        .collect();
    let mut hands = Vec::new();
    for i in 0..live.len() {
        for j in (i + 1)..live.len() {
            // Distinct suits of one rank can never collide.
            if let Ok(hand) = StartingHand::try_new(live[i], live[j]) {
                hands.push(hand);
            }
        }
    }
    hands
}

fn suited_hands(r1: Rank, r2: Rank, unavailable: &[Card]) -> Vec<StartingHand> {
    let mut hands = Vec::new();
    for &s in Suit::ALL.iter() {
        let a = Card::new(r1, s);
        let b = Card::new(r2, s);
        if unavailable.contains(&a) || unavailable.contains(&b) {
            continue;
        }
        if let Ok(hand) = StartingHand::try_new(a, b) {
            hands.push(hand);
        }
    }
    hands
}

fn offsuit_hands(r1: Rank, r2: Rank, unavailable: &[Card]) -> Vec<StartingHand> {
    let mut hands = Vec::new();
    for &s1 in Suit::ALL.iter() {
        let a = Card::new(r1, s1);
        if unavailable.contains(&a) {
            continue;
        }
        for &s2 in Suit::ALL.iter() {
            if s1 == s2 {
                continue;
            }
            let b = Card::new(r2, s2);
            if unavailable.contains(&b) {
                continue;
            }
            if let Ok(hand) = StartingHand::try_new(a, b) {
                hands.push(hand);
            }
        }
    }
    hands
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn starting_hand_equality_ignores_order() {
        let a: StartingHand = "AsKd".parse().unwrap();
        let b: StartingHand = "KdAs".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn starting_hand_rejects_duplicates_and_wrong_counts() {
        assert!(matches!(
            "AsAs".parse::<StartingHand>(),
            Err(RangeError::DuplicateHoleCards(_))
        ));
        assert!(matches!("As".parse::<StartingHand>(), Err(RangeError::HoleCount(1))));
        assert!(matches!(
            "As Kd Qh".parse::<StartingHand>(),
            Err(RangeError::HoleCount(3))
        ));
    }

    #[test]
    fn exact_hand_is_a_singleton_range() {
        let range = HandRange::parse("AhKd", &[]).unwrap();
        assert_eq!(range.len(), 1);
        let hand = range.as_singleton().unwrap();
        assert_eq!(hand, "AhKd".parse().unwrap());
    }

    #[test]
    fn pair_range_has_six_combos() {
        let range = HandRange::parse("TT", &[]).unwrap();
        assert_eq!(range.len(), 6);
        assert!(range.as_singleton().is_none());
        let unique: std::collections::HashSet<_> = range.hands().iter().copied().collect();
        assert_eq!(unique.len(), 6);
    }

    #[test]
    fn suited_and_offsuit_combo_counts() {
        assert_eq!(HandRange::parse("AKs", &[]).unwrap().len(), 4);
        assert_eq!(HandRange::parse("AKo", &[]).unwrap().len(), 12);
        assert_eq!(HandRange::parse("qjo", &[]).unwrap().len(), 12);
    }

    #[test]
    fn dead_cards_shrink_generated_ranges() {
        let dead = parse_cards("Th").unwrap();
        // One of the four tens gone: C(3,2) = 3 pairs left.
        assert_eq!(HandRange::parse("TT", &dead).unwrap().len(), 3);
        let dead = parse_cards("Ah").unwrap();
        assert_eq!(HandRange::parse("AKs", &dead).unwrap().len(), 3);
        // Ah removed: 3 live aces, each with 3 off-suit kings.
        assert_eq!(HandRange::parse("AKo", &dead).unwrap().len(), 9);
    }

    #[test]
    fn fully_dead_range_errors() {
        let dead = parse_cards("As Ah Ad Ac").unwrap();
        assert!(matches!(
            HandRange::parse("AA", &dead),
            Err(RangeError::NoCombinations(_))
        ));
    }

    #[test]
    fn malformed_descriptors_are_rejected() {
        for bad in ["", "A", "AK", "AKx", "AAs", "AAo", "AsKdQh", "ZZ"] {
            assert!(HandRange::parse(bad, &[]).is_err(), "accepted '{bad}'");
        }
    }

    #[test]
    fn parse_list_splits_on_commas() {
        let ranges = HandRange::parse_list("AsAd, KK ,QJs", &[]).unwrap();
        assert_eq!(ranges.len(), 3);
        assert_eq!(ranges[0].len(), 1);
        assert_eq!(ranges[1].len(), 6);
        assert_eq!(ranges[2].len(), 4);
    }

    #[test]
    fn sampling_stays_inside_the_range() {
        let range = HandRange::parse("77", &[]).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..100 {
            let hand = range.sample(&mut rng);
            assert!(range.hands().contains(&hand));
        }
    }
}
