//! Core card-related types: Card, Rank, Suit, Direction

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
    SmallJoker,
    BigJoker,
}

impl Rank {
    /// The 13 standard ranks, low to high.
    pub const STANDARD: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    pub const JOKERS: [Rank; 2] = [Rank::SmallJoker, Rank::BigJoker];

    pub const fn is_joker(self) -> bool {
        matches!(self, Rank::SmallJoker | Rank::BigJoker)
    }

    /// Natural rank value: Two=2 .. Ace=14, SmallJoker=15, BigJoker=16.
    pub const fn natural_value(self) -> i32 {
        match self {
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten => 10,
            Rank::Jack => 11,
            Rank::Queen => 12,
            Rank::King => 13,
            Rank::Ace => 14,
            Rank::SmallJoker => 15,
            Rank::BigJoker => 16,
        }
    }
}

/// Contract direction: which end of the rank order dominates.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    /// Ace, King, Queen, ... Two
    Ascending,
    /// Ace, Two, Three, ... King
    Descending,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Ascending, Direction::Descending];

    /// Reference run order for this direction, strongest first.
    pub fn rank_order(self) -> [Rank; 13] {
        use Rank::*;
        match self {
            Direction::Ascending => [
                Ace, King, Queen, Jack, Ten, Nine, Eight, Seven, Six, Five, Four, Three, Two,
            ],
            Direction::Descending => [
                Ace, Two, Three, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King,
            ],
        }
    }
}

/// A playing card. Jokers carry no suit until a trump suit is stamped onto
/// them; standard cards always carry one.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Option<Suit>,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit: Some(suit),
        }
    }

    pub const fn joker(rank: Rank) -> Self {
        Self { rank, suit: None }
    }

    pub const fn is_joker(&self) -> bool {
        self.rank.is_joker()
    }

    /// Identity used for hand lookups: rank and suit must agree, except that
    /// jokers match by rank alone.
    pub fn matches(&self, other: &Card) -> bool {
        if self.rank != other.rank {
            return false;
        }
        self.is_joker() || self.suit == other.suit
    }

    /// Assign (or clear) the suit a joker plays as. No effect on standard cards.
    pub fn stamp_joker_suit(&mut self, suit: Option<Suit>) {
        if self.is_joker() {
            self.suit = suit;
        }
    }

    pub fn is_suit(&self, suit: Suit) -> bool {
        self.suit == Some(suit)
    }
}

// Note: Ord on Card is only for stable sorting: suit order C<D<H<S<none, then rank.
// Do not use for trick resolution or any comparison involving trump/lead.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        let suit_key = |c: &Card| c.suit.map(|s| s as u8).unwrap_or(u8::MAX);
        match suit_key(self).cmp(&suit_key(other)) {
            Ordering::Equal => self.rank.cmp(&other.rank),
            ord => ord,
        }
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
