pub(crate) mod analysis;
pub(crate) mod combinations;
pub(crate) mod groups;
pub(crate) mod straight;

use crate::cards::{Card, Rank};
use analysis::HandAnalysis;
use combinations::FiveCardCombinations;
use core::cmp::Ordering;
use std::fmt;

/// Poker hand category from weakest to strongest.
///
/// A closed, totally ordered set: any hand of a stronger category beats
/// any hand of a weaker one regardless of kickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::HighCard,
        Category::Pair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::Pair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Compact, comparable hand strength. Higher is better.
/// Encodes the category and the ranked tie-breakers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[non_exhaustive]
pub struct HandValue(u64);

impl HandValue {
    /// Return the packed comparable value.
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Pack a category and five rank tie-breakers into a comparable value.
    /// Uses 6 bits per rank to be generous (supports up to 63).
    pub fn from_parts(category: Category, ranks_desc: &[Rank; 5]) -> Self {
        // Layout (most significant -> least):
        // [ category (8 bits) | r0 (6) | r1 (6) | r2 (6) | r3 (6) | r4 (6) | 10 zero bits ]
        // r0 is the primary tie-breaker and must be more significant than r1..r4.
        const CAT_SHIFT: u32 = 48;
        const RANK_STRIDE: u32 = 6;
        let mut v: u64 = (category as u64) << CAT_SHIFT;
        for (i, r) in ranks_desc.iter().enumerate() {
            let offset = CAT_SHIFT - RANK_STRIDE * (i as u32 + 1);
            v |= (*r as u64) << offset;
        }
        HandValue(v)
    }
}

/// A classified five-card hand. `value` drives the total order.
#[derive(Debug, Clone, Copy)]
pub struct FiveCardHand {
    category: Category,
    cards: [Card; 5],
    value: HandValue,
}

impl FiveCardHand {
    pub const fn category(&self) -> Category {
        self.category
    }

    /// The five cards, sorted by rank descending.
    pub const fn cards(&self) -> [Card; 5] {
        self.cards
    }

    pub const fn value(&self) -> HandValue {
        self.value
    }
}

impl Ord for FiveCardHand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl PartialOrd for FiveCardHand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FiveCardHand {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for FiveCardHand {}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("expected exactly five cards, got {0}")]
    InvalidHandSize(usize),
    #[error("need at least five cards to pick a best hand, got {0}")]
    InsufficientCards(usize),
}

/// Classify exactly five cards.
///
/// ```
/// use holdem_odds::cards::parse_cards;
/// use holdem_odds::evaluator::{classify, Category};
///
/// let cards = parse_cards("2h 3s 4d 5h Ac").unwrap();
/// let hand = classify(&cards).unwrap();
/// assert_eq!(hand.category(), Category::Straight);
/// ```
pub fn classify(cards: &[Card]) -> Result<FiveCardHand, EvalError> {
    let five: [Card; 5] =
        cards.try_into().map_err(|_| EvalError::InvalidHandSize(cards.len()))?;
    Ok(classify_five(&five))
}

/// Classify a fixed-size five-card hand; the card count is right by type.
pub fn classify_five(cards: &[Card; 5]) -> FiveCardHand {
    let analysis = HandAnalysis::new(cards);
    let (category, tiebreak) = categorize(&analysis);
    FiveCardHand {
        category,
        cards: analysis.sorted_cards,
        value: HandValue::from_parts(category, &tiebreak),
    }
}

/// Decide the category and its tie-break sequence, strongest first.
///
/// The tie-break sequence is the hand's distinct ranks ordered by (bucket
/// count desc, rank desc) — except for straights, where only the straight's
/// top rank matters and the wheel tops at Five, making it the weakest
/// straight and making any two wheels equal.
fn categorize(a: &HandAnalysis) -> (Category, [Rank; 5]) {
    if a.straight.is_straight {
        let mut tiebreak = [Rank::Two; 5];
        // Detection guarantees a top rank on any straight.
        tiebreak[0] = a.straight.top.unwrap_or(Rank::Five);
        let category = if a.is_flush { Category::StraightFlush } else { Category::Straight };
        return (category, tiebreak);
    }

    let tiebreak = a.buckets.tiebreak();
    let category = if a.buckets.quad().is_some() {
        Category::FourOfAKind
    } else if a.buckets.is_full_house() {
        Category::FullHouse
    } else if a.is_flush {
        Category::Flush
    } else if a.buckets.trips().is_some() {
        Category::ThreeOfAKind
    } else if a.buckets.is_two_pair() {
        Category::TwoPair
    } else if !a.buckets.pairs().is_empty() {
        Category::Pair
    } else {
        Category::HighCard
    };
    (category, tiebreak)
}

/// Find the strongest five-card hand among `cards` (5 to 7 of them).
///
/// Enumerates every C(n,5) subset and keeps the maximum; with ties the
/// first maximal subset in enumeration order is returned, which is
/// indistinguishable downstream.
///
/// ```
/// use holdem_odds::cards::parse_cards;
/// use holdem_odds::evaluator::{best_hand, Category};
///
/// let seven = parse_cards("As Ah Kc Qd Jh Th 9s").unwrap();
/// let best = best_hand(&seven).unwrap();
/// assert_eq!(best.category(), Category::Straight);
/// ```
pub fn best_hand(cards: &[Card]) -> Result<FiveCardHand, EvalError> {
    if cards.len() < 5 {
        return Err(EvalError::InsufficientCards(cards.len()));
    }
    // The first combination is always [0,1,2,3,4]; seed with it and scan the rest.
    let mut best = classify_five(&[cards[0], cards[1], cards[2], cards[3], cards[4]]);
    for idx in FiveCardCombinations::new(cards.len()).skip(1) {
        let five = [cards[idx[0]], cards[idx[1]], cards[idx[2]], cards[idx[3]], cards[idx[4]]];
        let hand = classify_five(&five);
        if hand > best {
            best = hand;
        }
    }
    Ok(best)
}
